use mq::{math::Vec2, time, window};
use zscene::Sprite;

use crate::{
    demo::Demo,
    input::MqInput,
    tick::{Tick, TickComponent},
};

mod actor;
mod assets;
mod body;
mod command;
mod config;
mod demo;
mod effect;
mod error;
mod input;
mod player;
mod tick;

type ZResult<T = ()> = Result<T, error::ZError>;

fn effect_sprite() -> ZResult<Sprite> {
    let assets = assets::get();
    let size = assets.config.effect.size;
    let sprite = match assets.effect_texture {
        Some(texture) => Sprite::from_texture(texture, size)?,
        None => Sprite::from_rect(Vec2::new(size, size))?,
    };
    Ok(sprite)
}

async fn run() -> ZResult {
    assets::load().await?;
    let config = &assets::get().config;
    let mut tick = Tick::first(time::get_time());
    let mut demo = Demo::new(config, effect_sprite()?, tick.time)?;
    let input = MqInput;
    log::info!("Z: move, X: announce, C: remove, arrows: walk");
    loop {
        demo.on_tick(&tick, &input)?;
        demo.draw();
        window::next_frame().await;
        tick = tick.next(time::get_time());
    }
}

fn window_conf() -> window::Conf {
    window::Conf {
        window_title: "Command & Flyweight".to_owned(),
        high_dpi: true,
        ..Default::default()
    }
}

#[mq::main(window_conf)]
#[macroquad(crate_rename = "mq")]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
