use std::{cell::RefCell, collections::HashMap, rc::Rc};

use log::info;
use zscene::Sprite;

use crate::{error::ZError, ZResult};

#[derive(Debug)]
struct ActorData {
    name: String,
    sprite: Sprite,
    is_active: bool,
}

/// A named thing living in the scene. Clones are handles to the same actor.
#[derive(Debug, Clone)]
pub struct Actor {
    data: Rc<RefCell<ActorData>>,
}

impl Actor {
    pub fn new(name: &str, sprite: Sprite) -> Self {
        let data = ActorData {
            name: name.into(),
            sprite,
            is_active: true,
        };
        Self {
            data: Rc::new(RefCell::new(data)),
        }
    }

    pub fn name(&self) -> String {
        self.data.borrow().name.clone()
    }

    pub fn sprite(&self) -> Sprite {
        self.data.borrow().sprite.clone()
    }

    pub fn is_active(&self) -> bool {
        self.data.borrow().is_active
    }

    /// Inactive actors are hidden and ignore their ticks.
    pub fn set_active(&self, is_active: bool) {
        let mut data = self.data.borrow_mut();
        if data.is_active != is_active {
            info!("Actor '{}': active = {}", data.name, is_active);
        }
        data.is_active = is_active;
        data.sprite.set_visible(is_active);
    }

    #[cfg(test)]
    pub fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

/// Name lookup for the actors of a scene.
#[derive(Debug, Default)]
pub struct Actors {
    by_name: HashMap<String, Actor>,
}

impl Actors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names are unique, a second actor with the same name replaces the first.
    pub fn add(&mut self, actor: &Actor) {
        self.by_name.insert(actor.name(), actor.clone());
    }

    pub fn find(&self, name: &str) -> ZResult<Actor> {
        self.by_name
            .get(name)
            .cloned()
            .ok_or_else(|| ZError::actor_not_found(name))
    }
}
