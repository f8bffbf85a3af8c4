//! In-memory collaborators for spell resolution tests.
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::effect::{Effect, EffectApplier, EffectTarget, TimingMode};
use crate::env::{ClockOracle, ConfigOracle, EffectTemplateOracle, ProjectileOracle};
use crate::projectile::{Projectile, ProjectileId};
use crate::state::{EntityId, GameTime, Scriptable};
use crate::stats::{CasterClass, CasterStats, StatId};

use super::SpellHeader;

pub(crate) fn header(required_level: u16, projectile: u16, range: u16) -> SpellHeader {
    SpellHeader::new(required_level, ProjectileId(projectile), range)
}

pub(crate) fn timed(opcode: u16, target: EffectTarget, duration: u32) -> Effect {
    Effect::new(opcode, target, TimingMode::InstantLimited).with_duration(duration)
}

pub(crate) fn permanent(opcode: u16, target: EffectTarget) -> Effect {
    Effect::new(opcode, target, TimingMode::InstantPermanent)
}

#[derive(Default)]
pub(crate) struct TestCaster {
    classes: HashMap<CasterClass, u32>,
    stats: HashMap<StatId, i32>,
}

impl TestCaster {
    pub(crate) fn with_class(mut self, class: CasterClass, level: u32) -> Self {
        self.classes.insert(class, level);
        self
    }

    pub(crate) fn with_stat(mut self, stat: StatId, value: i32) -> Self {
        self.stats.insert(stat, value);
        self
    }
}

impl CasterStats for TestCaster {
    fn class_level(&self, class: CasterClass) -> u32 {
        self.classes.get(&class).copied().unwrap_or(0)
    }

    fn stat(&self, stat: StatId) -> i32 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }
}

#[derive(Default)]
pub(crate) struct TestOracles {
    pub(crate) templates: HashMap<String, Effect>,
    pub(crate) projectiles: HashMap<ProjectileId, Projectile>,
    pub(crate) projectile_requests: AtomicUsize,
    pub(crate) game_time: u64,
    pub(crate) round_length: u32,
}

impl TestOracles {
    pub(crate) fn new(round_length: u32) -> Self {
        Self {
            round_length,
            ..Self::default()
        }
    }

    pub(crate) fn with_projectile(mut self, id: u16) -> Self {
        let id = ProjectileId(id);
        self.projectiles.insert(id, Projectile::new(id, "SPFIREBL", 20));
        self
    }

    pub(crate) fn with_template(mut self, name: &str, effect: Effect) -> Self {
        self.templates.insert(name.to_owned(), effect);
        self
    }

    pub(crate) fn requests(&self) -> usize {
        self.projectile_requests.load(Ordering::SeqCst)
    }
}

impl EffectTemplateOracle for TestOracles {
    fn template(&self, name: &str) -> Option<Effect> {
        self.templates.get(name).cloned()
    }
}

impl ProjectileOracle for TestOracles {
    fn projectile(&self, id: ProjectileId) -> Option<Projectile> {
        self.projectile_requests.fetch_add(1, Ordering::SeqCst);
        self.projectiles.get(&id).cloned()
    }
}

impl ClockOracle for TestOracles {
    fn game_time(&self) -> GameTime {
        GameTime(self.game_time)
    }
}

impl ConfigOracle for TestOracles {
    fn round_length(&self) -> u32 {
        self.round_length
    }
}

/// Records every direct application.
#[derive(Default)]
pub(crate) struct RecordingApplier {
    pub(crate) applied: Vec<(EntityId, Effect)>,
}

impl EffectApplier for RecordingApplier {
    fn apply_effect(&mut self, effect: &Effect, target: EntityId, _source: &Scriptable) {
        self.applied.push((target, effect.clone()));
    }
}
