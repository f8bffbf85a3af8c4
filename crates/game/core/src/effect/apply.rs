use super::Effect;
use crate::state::{EntityId, Scriptable};

/// Applies effects straight to an actor, bypassing any projectile.
///
/// This is the one mutable collaborator of the spell resolver. The runtime
/// decides what "applying" means (queueing on the actor, running the opcode).
pub trait EffectApplier {
    fn apply_effect(&mut self, effect: &Effect, target: EntityId, source: &Scriptable);
}
