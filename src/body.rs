use std::{cell::RefCell, rc::Rc};

use mq::math::Vec2;

#[derive(Debug)]
struct BodyData {
    pos: Vec2,
    velocity: Vec2,
    mass: f32,
}

/// A point mass. Clones are handles to the same body.
///
/// The world is y-down, so "up" is `-y` and gravity is positive.
#[derive(Debug, Clone)]
pub struct Body {
    data: Rc<RefCell<BodyData>>,
}

impl Body {
    /// `mass` must be positive, configs with other values are rejected on load.
    pub fn new(pos: Vec2, mass: f32) -> Self {
        assert!(mass > 0.0, "a body must have a positive mass");
        let data = BodyData {
            pos,
            velocity: Vec2::new(0.0, 0.0),
            mass,
        };
        Self {
            data: Rc::new(RefCell::new(data)),
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.data.borrow().pos
    }

    #[cfg(test)]
    pub fn velocity(&self) -> Vec2 {
        self.data.borrow().velocity
    }

    /// Instant change of momentum.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        let mut data = self.data.borrow_mut();
        data.velocity = data.velocity + impulse / data.mass;
    }

    pub fn translate_x(&mut self, dx: f32) {
        self.data.borrow_mut().pos.x += dx;
    }

    /// Semi-implicit Euler step. The body rests on `floor_y`.
    pub fn step(&mut self, dtime: f32, gravity: f32, floor_y: f32) {
        let mut data = self.data.borrow_mut();
        data.velocity.y += gravity * dtime;
        data.pos = data.pos + data.velocity * dtime;
        if data.pos.y >= floor_y {
            data.pos.y = floor_y;
            if data.velocity.y > 0.0 {
                data.velocity.y = 0.0;
            }
        }
    }
}
