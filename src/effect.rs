//! A decorative flyweight effect: one shared look, many cheap instances.

use log::{debug, trace};
use zscene::{Layer, Sprite};

use crate::{
    input::Input,
    tick::{Tick, TickComponent},
    ZResult,
};

pub use self::{
    instance::{spawn_position, EffectInstance},
    shared::SharedEffectState,
};

mod instance;
mod shared;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPolicy {
    pub capacity: usize,
    pub interval_secs: f64,
    pub spacing: f32,
}

#[derive(Debug)]
pub struct EffectSystem {
    shared: SharedEffectState,
    instances: Vec<EffectInstance>,
    policy: SpawnPolicy,
    /// Hidden, never drawn. New instances are deep clones of it.
    template: Sprite,
    /// Instances are positioned relative to this sprite.
    anchor: Sprite,
    layer: Layer,
    last_spawn_time: f64,
}

impl EffectSystem {
    pub fn new(
        policy: SpawnPolicy,
        template: Sprite,
        anchor: Sprite,
        layer: &Layer,
        start_time: f64,
    ) -> Self {
        let mut template = template;
        template.set_visible(false);
        Self {
            shared: SharedEffectState::default(),
            instances: Vec::with_capacity(policy.capacity),
            policy,
            template,
            anchor,
            layer: layer.clone(),
            last_spawn_time: start_time,
        }
    }

    pub fn shared(&self) -> &SharedEffectState {
        &self.shared
    }

    pub fn instances(&self) -> &[EffectInstance] {
        &self.instances
    }

    pub fn is_full(&self) -> bool {
        self.instances.len() >= self.policy.capacity
    }

    fn spawn(&mut self) -> ZResult {
        let index = self.instances.len() + 1;
        let local_pos = spawn_position(index, self.policy.spacing);
        let sprite = self.template.deep_clone();
        self.layer.add(&sprite)?;
        let mut instance = EffectInstance::new(index, local_pos, sprite);
        instance.apply(&self.shared, &self.anchor);
        debug!("EffectSystem: spawned #{} at {:?}", index, local_pos);
        self.instances.push(instance);
        Ok(())
    }
}

impl TickComponent for EffectSystem {
    fn on_tick(&mut self, tick: &Tick, _: &dyn Input) -> ZResult {
        self.shared = SharedEffectState::at(tick.frame);
        trace!("EffectSystem: frame={} shared={:?}", tick.frame, self.shared);
        for instance in &mut self.instances {
            instance.apply(&self.shared, &self.anchor);
        }
        if tick.time - self.last_spawn_time > self.policy.interval_secs && !self.is_full() {
            self.spawn()?;
            self.last_spawn_time = tick.time;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mq::math::Vec2;
    use pretty_assertions::assert_eq;
    use zscene::{Layer, Sprite};

    use super::{spawn_position, EffectSystem, SharedEffectState, SpawnPolicy};
    use crate::{
        input::fake::FakeInput,
        tick::{Tick, TickComponent},
    };

    fn policy(capacity: usize) -> SpawnPolicy {
        SpawnPolicy {
            capacity,
            interval_secs: 3.0,
            spacing: 0.5,
        }
    }

    fn system(capacity: usize, layer: &Layer) -> (EffectSystem, Sprite) {
        let template = Sprite::from_rect(Vec2::new(0.5, 0.5)).unwrap();
        let mut anchor = Sprite::from_rect(Vec2::new(1.0, 1.0)).unwrap();
        anchor.set_pos(Vec2::new(4.0, 6.0));
        let system = EffectSystem::new(policy(capacity), template, anchor.clone(), layer, 0.0);
        (system, anchor)
    }

    /// Runs `seconds` of ticks at 10 ticks per second.
    fn run(system: &mut EffectSystem, seconds: u64) -> Tick {
        let input = FakeInput::default();
        let mut tick = Tick::first(0.0);
        system.on_tick(&tick, &input).unwrap();
        for i in 1..=seconds * 10 {
            tick = tick.next(i as f64 / 10.0);
            system.on_tick(&tick, &input).unwrap();
        }
        tick
    }

    #[test]
    fn nothing_spawns_before_the_interval() {
        let layer = Layer::new();
        let (mut system, _) = system(20, &layer);
        run(&mut system, 3);
        assert!(system.instances().is_empty());
        assert!(layer.is_empty());
    }

    #[test]
    fn one_instance_per_interval() {
        let layer = Layer::new();
        let (mut system, _) = system(20, &layer);
        run(&mut system, 10);
        assert_eq!(system.instances().len(), 3);
        assert_eq!(layer.len(), 3);
        let indices: Vec<_> = system.instances().iter().map(|i| i.index()).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let layer = Layer::new();
        let (mut system, _) = system(4, &layer);
        run(&mut system, 200);
        assert_eq!(system.instances().len(), 4);
        assert!(system.is_full());
        assert_eq!(layer.len(), 4);
    }

    #[test]
    fn instances_are_placed_by_index() {
        let layer = Layer::new();
        let (mut system, anchor) = system(20, &layer);
        run(&mut system, 20);
        for instance in system.instances() {
            let expected = spawn_position(instance.index(), 0.5);
            assert_eq!(instance.local_pos(), expected);
            assert_eq!(instance.sprite().pos(), anchor.pos() + expected);
        }
    }

    #[test]
    fn all_instances_share_the_current_look() {
        let layer = Layer::new();
        let (mut system, _) = system(20, &layer);
        let tick = run(&mut system, 15);
        let expected = SharedEffectState::at(tick.frame);
        assert_eq!(*system.shared(), expected);
        for instance in system.instances() {
            assert_eq!(instance.sprite().color(), expected.color);
            assert_eq!(instance.sprite().scale(), expected.scale);
        }
    }

    #[test]
    fn instances_follow_the_anchor() {
        let layer = Layer::new();
        let (mut system, mut anchor) = system(20, &layer);
        let tick = run(&mut system, 4);
        anchor.set_pos(Vec2::new(0.0, 0.0));
        anchor.set_visible(false);
        system.on_tick(&tick.next(4.05), &FakeInput::default()).unwrap();
        let instance = &system.instances()[0];
        assert_eq!(instance.sprite().pos(), instance.local_pos());
        assert!(!instance.sprite().is_visible());
    }

    #[test]
    fn template_stays_hidden() {
        let layer = Layer::new();
        let (mut system, _) = system(20, &layer);
        run(&mut system, 4);
        assert!(!system.template.is_visible());
        assert!(!layer.has_sprite(&system.template));
        assert!(system.instances()[0].sprite().is_visible());
    }
}
