use std::{cell::RefCell, fmt, rc::Rc};

pub use crate::sprite::Sprite;

mod sprite;

pub type Result<T = ()> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NoDimensions,
    SpriteAlreadyShown,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NoDimensions => write!(f, "The drawable has no dimensions"),
            Error::SpriteAlreadyShown => write!(f, "The sprite is already on this layer"),
        }
    }
}

impl std::error::Error for Error {}

#[derive(Debug)]
struct LayerData {
    sprites: Vec<Sprite>,
}

/// A shared, ordered list of sprites. Clones refer to the same layer.
#[derive(Debug, Clone)]
pub struct Layer {
    data: Rc<RefCell<LayerData>>,
}

impl Layer {
    pub fn new() -> Self {
        let data = LayerData {
            sprites: Vec::new(),
        };
        Self {
            data: Rc::new(RefCell::new(data)),
        }
    }

    pub fn add(&mut self, sprite: &Sprite) -> Result {
        if self.has_sprite(sprite) {
            return Err(Error::SpriteAlreadyShown);
        }
        self.data.borrow_mut().sprites.push(sprite.clone());
        Ok(())
    }

    pub fn has_sprite(&self, sprite: &Sprite) -> bool {
        let data = self.data.borrow();
        data.sprites.iter().any(|other| other.is_same(sprite))
    }

    pub fn len(&self) -> usize {
        self.data.borrow().sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn draw(&self) {
        for sprite in &self.data.borrow().sprites {
            if sprite.is_visible() {
                sprite.draw();
            }
        }
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Scene {
    layers: Vec<Layer>,
}

impl Scene {
    /// Layers are drawn in the given order, back to front.
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    pub fn draw(&self) {
        for layer in &self.layers {
            layer.draw();
        }
    }
}
