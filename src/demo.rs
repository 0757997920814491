use log::info;
use mq::{
    camera::{set_camera, Camera2D},
    color::Color,
    math::{Rect, Vec2},
    window,
};
use zscene::{Layer, Scene, Sprite};

use crate::{
    actor::Actors,
    config::Config,
    effect::{EffectSystem, SpawnPolicy},
    input::Input,
    player::Player,
    tick::{Tick, TickComponent},
    ZResult,
};

#[derive(Debug, Clone, Default)]
pub struct Layers {
    pub effects: Layer,
    pub actors: Layer,
}

impl Layers {
    fn sorted(self) -> Vec<Layer> {
        vec![self.effects, self.actors]
    }
}

/// Both pattern demos on one scene.
#[derive(Debug)]
pub struct Demo {
    scene: Scene,
    actors: Actors,
    player: Player,
    effects: EffectSystem,
    view_height: f32,
    background: Color,
}

impl Demo {
    pub fn new(config: &Config, effect_sprite: Sprite, start_time: f64) -> ZResult<Self> {
        let mut layers = Layers::default();
        let player = Player::new(&config.player, &config.physics, &mut layers.actors)?;
        let mut actors = Actors::new();
        actors.add(player.actor());
        let anchor = actors.find(&config.effect.anchor)?;
        let policy = SpawnPolicy {
            capacity: config.effect.capacity,
            interval_secs: config.effect.spawn_interval_secs,
            spacing: config.effect.spacing,
        };
        let effects = EffectSystem::new(
            policy,
            effect_sprite,
            anchor.sprite(),
            &layers.effects,
            start_time,
        );
        info!("Demo: effect attached to '{}'", anchor.name());
        let [r, g, b] = config.background;
        Ok(Self {
            scene: Scene::new(layers.sorted()),
            actors,
            player,
            effects,
            view_height: config.view_height,
            background: Color::new(r, g, b, 1.0),
        })
    }

    pub fn actors(&self) -> &Actors {
        &self.actors
    }

    pub fn effects(&self) -> &EffectSystem {
        &self.effects
    }

    pub fn draw(&self) {
        window::clear_background(self.background);
        set_camera(&make_camera(self.view_height));
        self.scene.draw();
    }
}

impl TickComponent for Demo {
    /// The player goes first so the effect sees the anchor's new position.
    fn on_tick(&mut self, tick: &Tick, input: &dyn Input) -> ZResult {
        self.player.on_tick(tick, input)?;
        self.effects.on_tick(tick, input)?;
        Ok(())
    }
}

/// Origin in the middle of the window, y-down.
fn make_camera(view_height: f32) -> Camera2D {
    let aspect_ratio = window::screen_width() / window::screen_height();
    let size = Vec2::new(view_height * aspect_ratio, view_height);
    let display_rect = Rect::new(-size.x / 2.0, -size.y / 2.0, size.x, size.y);
    Camera2D::from_display_rect(display_rect)
}
