//! In-memory actor sheets used as the stat accessor and effect sink.
use std::collections::HashMap;

use spell_core::{
    CasterClass, CasterStats, Effect, EffectApplier, EntityId, Scriptable, StatId,
};
use tracing::{trace, warn};

/// An effect applied directly to an actor, with its originator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedEffect {
    pub effect: Effect,
    pub source: EntityId,
}

/// Class levels, casting stats, and directly applied effects of one actor.
#[derive(Clone, Debug, Default)]
pub struct ActorSheet {
    classes: HashMap<CasterClass, u32>,
    stats: HashMap<StatId, i32>,
    applied: Vec<AppliedEffect>,
}

impl ActorSheet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_class(mut self, class: CasterClass, level: u32) -> Self {
        self.classes.insert(class, level);
        self
    }

    #[must_use]
    pub fn with_stat(mut self, stat: StatId, value: i32) -> Self {
        self.stats.insert(stat, value);
        self
    }

    pub fn applied(&self) -> &[AppliedEffect] {
        &self.applied
    }
}

impl CasterStats for ActorSheet {
    fn class_level(&self, class: CasterClass) -> u32 {
        self.classes.get(&class).copied().unwrap_or(0)
    }

    fn stat(&self, stat: StatId) -> i32 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }
}

/// All actors known to the runtime.
#[derive(Debug, Default)]
pub struct ActorRegistry {
    sheets: HashMap<EntityId, ActorSheet>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: EntityId, sheet: ActorSheet) {
        self.sheets.insert(id, sheet);
    }

    pub fn get(&self, id: EntityId) -> Option<&ActorSheet> {
        self.sheets.get(&id)
    }

    /// Stat accessor view for `id`, if the actor exists.
    pub fn stats(&self, id: EntityId) -> Option<&dyn CasterStats> {
        self.sheets.get(&id).map(|sheet| sheet as &dyn CasterStats)
    }
}

impl EffectApplier for ActorRegistry {
    fn apply_effect(&mut self, effect: &Effect, target: EntityId, source: &Scriptable) {
        let Some(sheet) = self.sheets.get_mut(&target) else {
            warn!(
                target: "runtime::actors",
                actor = %target,
                opcode = effect.opcode,
                "Dropping effect for unknown actor"
            );
            return;
        };

        trace!(
            target: "runtime::actors",
            actor = %target,
            source = %source.id,
            opcode = effect.opcode,
            "Applying effect"
        );
        sheet.applied.push(AppliedEffect {
            effect: effect.clone(),
            source: source.id,
        });
    }
}
