use mq::input::{self, KeyCode};

/// What the tick components may ask about the player's input this frame.
pub trait Input {
    /// True only on the frame the key went down.
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// `-1.0` for left, `1.0` for right, `0.0` for none or both.
    fn horizontal_axis(&self) -> f32;
}

/// Polls macroquad's keyboard state.
#[derive(Debug, Default)]
pub struct MqInput;

impl Input for MqInput {
    fn is_key_pressed(&self, key: KeyCode) -> bool {
        input::is_key_pressed(key)
    }

    fn horizontal_axis(&self) -> f32 {
        let left = input::is_key_down(KeyCode::Left) || input::is_key_down(KeyCode::A);
        let right = input::is_key_down(KeyCode::Right) || input::is_key_down(KeyCode::D);
        match (left, right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
