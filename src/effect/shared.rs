use std::f32::consts::PI;

use mq::color::Color;

/// Ticks in one full cycle of the effect.
pub const PERIOD: u64 = 360;

/// The part of the effect every instance has in common.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharedEffectState {
    pub color: Color,
    /// In `[0.5, 1.0]`.
    pub scale: f32,
    /// Degrees, in `[0, 360)`.
    pub phase: f32,
}

impl SharedEffectState {
    /// Depends on nothing but `tick`.
    pub fn at(tick: u64) -> Self {
        let phase = (tick % PERIOD) as f32;
        let wave = (phase * PI / 180.0).sin();
        let half = wave * 0.5;
        Self {
            color: Color::new(0.5 + half, 0.5 - half, 0.5 * half.abs(), 1.0),
            scale: 0.75 + wave * 0.25,
            phase,
        }
    }
}

impl Default for SharedEffectState {
    fn default() -> Self {
        Self::at(0)
    }
}
