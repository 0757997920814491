use log::info;
use mq::{color::Color, math::Vec2};
use zscene::{Layer, Sprite};

use crate::{
    actor::Actor,
    body::Body,
    command::{self, Capabilities},
    config::{PhysicsConfig, PlayerConfig},
    input::Input,
    tick::{Tick, TickComponent},
    ZResult,
};

/// The player's own take on the generic commandable behaviors.
#[derive(Debug)]
pub struct PlayerActions {
    body: Body,
    impulse: f32,
}

impl PlayerActions {
    pub fn new(body: Body, impulse: f32) -> Self {
        Self { body, impulse }
    }
}

impl Capabilities for PlayerActions {
    /// An upward push.
    fn move_actor(&mut self) {
        info!("I, the player, am moving!");
        self.body.apply_impulse(Vec2::new(0.0, -self.impulse));
    }

    fn announce(&mut self) {
        info!("I, the player, am announcing myself! Hyah!");
    }
}

#[derive(Debug)]
pub struct Player {
    actor: Actor,
    body: Body,
    actions: PlayerActions,
    move_speed: f32,
    physics: PhysicsConfig,
}

impl Player {
    pub fn new(
        config: &PlayerConfig,
        physics: &PhysicsConfig,
        layer: &mut Layer,
    ) -> ZResult<Self> {
        let mut sprite = Sprite::from_rect(Vec2::new(config.size, config.size))?;
        sprite.set_color(Color::new(0.9, 0.9, 0.9, 1.0));
        let pos = Vec2::new(config.start_x, physics.floor_y);
        sprite.set_pos(pos);
        layer.add(&sprite)?;
        let body = Body::new(pos, config.mass);
        let actions = PlayerActions::new(body.clone(), config.impulse);
        Ok(Self {
            actor: Actor::new(&config.name, sprite),
            body,
            actions,
            move_speed: config.move_speed,
            physics: physics.clone(),
        })
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }
}

impl TickComponent for Player {
    fn on_tick(&mut self, tick: &Tick, input: &dyn Input) -> ZResult {
        if !self.actor.is_active() {
            return Ok(());
        }
        if let Some(command) = command::poll_command(input) {
            info!("Player: command = {:?}", command);
            command.execute(&self.actor, &mut self.actions);
            if !self.actor.is_active() {
                return Ok(());
            }
        }
        let dx = input.horizontal_axis() * self.move_speed * tick.dtime;
        self.body.translate_x(dx);
        let PhysicsConfig { gravity, floor_y } = self.physics;
        self.body.step(tick.dtime, gravity, floor_y);
        self.actor.sprite().set_pos(self.body.pos());
        Ok(())
    }
}
