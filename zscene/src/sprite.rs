use std::{cell::RefCell, rc::Rc};

use mq::{
    color::Color,
    math::Vec2,
    shapes,
    texture::{self, DrawTextureParams, Texture2D},
};

use crate::{Error, Result};

#[derive(Clone, Debug)]
enum Drawable {
    Texture(Texture2D),
    Rect,
}

#[derive(Debug)]
struct SpriteData {
    drawable: Drawable,
    /// Size in world units at scale `1.0`.
    size: Vec2,
    /// Center of the sprite.
    pos: Vec2,
    scale: f32,
    color: Color,
    is_visible: bool,
}

/// A shared handle to one drawable thing in the scene.
///
/// Cloning a `Sprite` gives another handle to the same data,
/// use [`Sprite::deep_clone`] to get an independent copy.
#[derive(Debug, Clone)]
pub struct Sprite {
    data: Rc<RefCell<SpriteData>>,
}

impl Sprite {
    fn from_drawable(drawable: Drawable, size: Vec2) -> Result<Self> {
        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(Error::NoDimensions);
        }
        let data = SpriteData {
            drawable,
            size,
            pos: Vec2::new(0.0, 0.0),
            scale: 1.0,
            color: Color::new(1.0, 1.0, 1.0, 1.0),
            is_visible: true,
        };
        Ok(Self {
            data: Rc::new(RefCell::new(data)),
        })
    }

    /// A plain colored rectangle. Needs no GPU resources.
    pub fn from_rect(size: Vec2) -> Result<Self> {
        Self::from_drawable(Drawable::Rect, size)
    }

    /// Keeps the texture's aspect ratio, `height` is in world units.
    pub fn from_texture(texture: Texture2D, height: f32) -> Result<Self> {
        if texture.height() <= 0.0 {
            return Err(Error::NoDimensions);
        }
        let width = height * texture.width() / texture.height();
        Self::from_drawable(Drawable::Texture(texture), Vec2::new(width, height))
    }

    pub fn deep_clone(&self) -> Self {
        let data = self.data.borrow();
        let cloned_data = SpriteData {
            drawable: data.drawable.clone(),
            size: data.size,
            pos: data.pos,
            scale: data.scale,
            color: data.color,
            is_visible: data.is_visible,
        };
        Sprite {
            data: Rc::new(RefCell::new(cloned_data)),
        }
    }

    pub fn draw(&self) {
        let data = self.data.borrow();
        let size = data.size * data.scale;
        let top_left = data.pos - size * 0.5;
        match data.drawable {
            Drawable::Texture(texture) => {
                texture::draw_texture_ex(
                    texture,
                    top_left.x,
                    top_left.y,
                    data.color,
                    DrawTextureParams {
                        dest_size: Some(size),
                        ..Default::default()
                    },
                );
            }
            Drawable::Rect => {
                shapes::draw_rectangle(top_left.x, top_left.y, size.x, size.y, data.color);
            }
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.data.borrow().pos
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.data.borrow_mut().pos = pos;
    }

    pub fn color(&self) -> Color {
        self.data.borrow().color
    }

    pub fn set_color(&mut self, color: Color) {
        self.data.borrow_mut().color = color;
    }

    pub fn scale(&self) -> f32 {
        self.data.borrow().scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.data.borrow_mut().scale = scale;
    }

    /// Current size in world units, with the scale applied.
    pub fn size(&self) -> Vec2 {
        let data = self.data.borrow();
        data.size * data.scale
    }

    pub fn is_visible(&self) -> bool {
        self.data.borrow().is_visible
    }

    pub fn set_visible(&mut self, is_visible: bool) {
        self.data.borrow_mut().is_visible = is_visible;
    }

    pub fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
mod tests {
    use mq::{color::Color, math::Vec2};

    use super::Sprite;
    use crate::Error;

    #[test]
    fn empty_rect_has_no_dimensions() {
        let result = Sprite::from_rect(Vec2::new(0.0, 1.0));
        assert!(matches!(result, Err(Error::NoDimensions)));
    }

    #[test]
    fn clones_share_state() {
        let mut sprite = Sprite::from_rect(Vec2::new(1.0, 2.0)).unwrap();
        let other = sprite.clone();
        sprite.set_pos(Vec2::new(3.0, 4.0));
        sprite.set_scale(0.5);
        assert!(other.is_same(&sprite));
        assert_eq!(other.pos(), Vec2::new(3.0, 4.0));
        assert_eq!(other.size(), Vec2::new(0.5, 1.0));
    }

    #[test]
    fn deep_clone_is_independent() {
        let mut template = Sprite::from_rect(Vec2::new(1.0, 1.0)).unwrap();
        template.set_visible(false);
        let mut copy = template.deep_clone();
        assert!(!copy.is_same(&template));
        assert!(!copy.is_visible());
        copy.set_visible(true);
        copy.set_color(Color::new(1.0, 0.0, 0.0, 1.0));
        assert!(!template.is_visible());
        assert_eq!(template.color(), Color::new(1.0, 1.0, 1.0, 1.0));
    }
}
