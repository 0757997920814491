use std::fmt::Debug;

use crate::{input::Input, ZResult};

/// One invocation of the host's per-frame callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Frames since start, the first tick is frame `1`.
    pub frame: u64,
    /// Seconds since start.
    pub time: f64,
    /// Seconds since the previous tick.
    pub dtime: f32,
}

impl Tick {
    pub fn first(time: f64) -> Self {
        Self {
            frame: 1,
            time,
            dtime: 0.0,
        }
    }

    pub fn next(&self, time: f64) -> Self {
        Self {
            frame: self.frame + 1,
            time,
            dtime: (time - self.time) as f32,
        }
    }
}

/// Anything the host drives once per frame.
pub trait TickComponent: Debug {
    fn on_tick(&mut self, tick: &Tick, input: &dyn Input) -> ZResult;
}
