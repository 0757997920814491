//! Input keys turned into commands, and commands run against their receivers.
//!
//! A command knows which kind of receiver it needs: an [`ActorCommand`]
//! works on the actor handle itself while an [`ActionCommand`] only talks
//! to the actor's [`Capabilities`].

use log::{debug, info};
use mq::input::KeyCode;

use crate::{actor::Actor, input::Input};

/// Generic behaviors every commandable actor implements in its own terms.
pub trait Capabilities {
    fn move_actor(&mut self);
    fn announce(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorCommand {
    Remove,
}

impl ActorCommand {
    pub fn execute(self, actor: &Actor) {
        match self {
            ActorCommand::Remove => {
                info!("{} is being removed!", actor.name());
                actor.set_active(false);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCommand {
    Move,
    Announce,
}

impl ActionCommand {
    pub fn execute(self, capabilities: &mut dyn Capabilities) {
        match self {
            ActionCommand::Move => capabilities.move_actor(),
            ActionCommand::Announce => capabilities.announce(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Does nothing but say so.
    Null,
    Actor(ActorCommand),
    Action(ActionCommand),
}

impl Command {
    pub fn execute(self, actor: &Actor, capabilities: &mut dyn Capabilities) {
        debug!("Command::execute: {:?}", self);
        match self {
            Command::Null => debug!("Null command executed for '{}'", actor.name()),
            Command::Actor(command) => command.execute(actor),
            Command::Action(command) => command.execute(capabilities),
        }
    }
}

/// Checked in this order, the first pressed key wins.
const BINDINGS: &[(KeyCode, Command)] = &[
    (KeyCode::Z, Command::Action(ActionCommand::Move)),
    (KeyCode::X, Command::Action(ActionCommand::Announce)),
    (KeyCode::C, Command::Actor(ActorCommand::Remove)),
];

pub fn command_for_key(key: KeyCode) -> Option<Command> {
    BINDINGS
        .iter()
        .find(|&&(bound_key, _)| bound_key == key)
        .map(|&(_, command)| command)
}

/// At most one command per tick.
pub fn poll_command(input: &dyn Input) -> Option<Command> {
    BINDINGS
        .iter()
        .find(|&&(key, _)| input.is_key_pressed(key))
        .map(|&(_, command)| command)
}

#[cfg(test)]
mod tests {
    use mq::{input::KeyCode, math::Vec2};
    use pretty_assertions::assert_eq;
    use zscene::Sprite;

    use super::{
        command_for_key, poll_command, ActionCommand, ActorCommand, Capabilities, Command,
    };
    use crate::{actor::Actor, input::fake::FakeInput};

    #[derive(Debug, Default)]
    struct Counter {
        moves: usize,
        announcements: usize,
    }

    impl Capabilities for Counter {
        fn move_actor(&mut self) {
            self.moves += 1;
        }

        fn announce(&mut self) {
            self.announcements += 1;
        }
    }

    fn actor() -> Actor {
        let mut sprite = Sprite::from_rect(Vec2::new(1.0, 1.0)).unwrap();
        sprite.set_pos(Vec2::new(2.0, 3.0));
        Actor::new("Player", sprite)
    }

    #[test]
    fn bound_keys() {
        assert_eq!(
            command_for_key(KeyCode::Z),
            Some(Command::Action(ActionCommand::Move))
        );
        assert_eq!(
            command_for_key(KeyCode::X),
            Some(Command::Action(ActionCommand::Announce))
        );
        assert_eq!(
            command_for_key(KeyCode::C),
            Some(Command::Actor(ActorCommand::Remove))
        );
    }

    #[test]
    fn unbound_keys() {
        for &key in &[KeyCode::A, KeyCode::Space, KeyCode::Escape, KeyCode::Left] {
            assert_eq!(command_for_key(key), None);
        }
    }

    #[test]
    fn poll_without_keys_gives_nothing() {
        assert_eq!(poll_command(&FakeInput::default()), None);
        assert_eq!(poll_command(&FakeInput::pressing(&[KeyCode::Q])), None);
    }

    #[test]
    fn poll_picks_one_command_in_binding_order() {
        let input = FakeInput::pressing(&[KeyCode::C, KeyCode::X]);
        assert_eq!(
            poll_command(&input),
            Some(Command::Action(ActionCommand::Announce))
        );
    }

    #[test]
    fn move_calls_move_exactly_once() {
        let actor = actor();
        let mut counter = Counter::default();
        Command::Action(ActionCommand::Move).execute(&actor, &mut counter);
        assert_eq!(counter.moves, 1);
        assert_eq!(counter.announcements, 0);
    }

    #[test]
    fn announce_calls_announce_exactly_once() {
        let mut counter = Counter::default();
        ActionCommand::Announce.execute(&mut counter);
        assert_eq!(counter.moves, 0);
        assert_eq!(counter.announcements, 1);
    }

    #[test]
    fn remove_only_deactivates_the_actor() {
        let actor = actor();
        let mut counter = Counter::default();
        Command::Actor(ActorCommand::Remove).execute(&actor, &mut counter);
        assert!(!actor.is_active());
        assert_eq!(actor.name(), "Player");
        assert_eq!(actor.sprite().pos(), Vec2::new(2.0, 3.0));
        assert_eq!(counter.moves + counter.announcements, 0);
    }

    #[test]
    fn null_command_changes_nothing() {
        let actor = actor();
        let mut counter = Counter::default();
        Command::Null.execute(&actor, &mut counter);
        assert!(actor.is_active());
        assert_eq!(counter.moves + counter.announcements, 0);
    }
}
