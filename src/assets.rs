//! Everything loaded from the `assets/` folder before the first frame.

use mq::{
    file::{self, load_file},
    texture::{load_texture, Texture2D},
};
use once_cell::sync::OnceCell;

use crate::{config::Config, ZResult};

const CONFIG_PATH: &str = "config.ron";

static INSTANCE: OnceCell<Assets> = OnceCell::new();

pub async fn load() -> ZResult {
    assert!(INSTANCE.get().is_none());
    let assets = Assets::load().await?;
    INSTANCE.set(assets).expect("Can't set assets instance");
    Ok(())
}

pub fn get() -> &'static Assets {
    INSTANCE.get().expect("Assets weren't loaded")
}

/// Read a file to a string.
async fn read_file(path: &str) -> ZResult<String> {
    let data = load_file(path).await?;
    Ok(String::from_utf8_lossy(&data[..]).to_string())
}

#[derive(Debug)]
pub struct Assets {
    pub config: Config,
    pub effect_texture: Option<Texture2D>,
}

impl Assets {
    async fn load() -> ZResult<Self> {
        file::set_pc_assets_folder("assets");
        let config = Config::from_ron_str(&read_file(CONFIG_PATH).await?, CONFIG_PATH)?;
        log::debug!("Assets: config = {:?}", config);
        let effect_texture = match config.effect.texture {
            Some(ref path) => Some(load_texture(path).await?),
            None => None,
        };
        Ok(Self {
            config,
            effect_texture,
        })
    }
}
