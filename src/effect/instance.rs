use std::f32::consts::PI;

use mq::math::Vec2;
use zscene::Sprite;

use super::SharedEffectState;

/// Local position of the `index`-th instance (1-based).
///
/// `θ = (i·π) mod 2`, which lays the instances out as a fan rather than
/// a true spiral.
pub fn spawn_position(index: usize, spacing: f32) -> Vec2 {
    let theta = (index as f32 * PI) % 2.0;
    Vec2::new(theta.cos(), theta.sin()) * index as f32 * spacing
}

/// Only the per-instance part: where it sits and what draws it.
#[derive(Debug)]
pub struct EffectInstance {
    index: usize,
    local_pos: Vec2,
    sprite: Sprite,
}

impl EffectInstance {
    pub fn new(index: usize, local_pos: Vec2, sprite: Sprite) -> Self {
        Self {
            index,
            local_pos,
            sprite,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn local_pos(&self) -> Vec2 {
        self.local_pos
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Copies the shared look into this instance's sprite.
    ///
    /// `local_pos` is relative to the anchor, not a world position.
    pub fn apply(&mut self, shared: &SharedEffectState, anchor: &Sprite) {
        self.sprite.set_color(shared.color);
        self.sprite.set_scale(shared.scale);
        self.sprite.set_pos(anchor.pos() + self.local_pos);
        self.sprite.set_visible(anchor.is_visible());
    }
}
