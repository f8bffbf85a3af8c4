//! Spell resolution entry points with operator-facing diagnostics.
//!
//! `spell-core` reports failures as values. [`CastingService`] forwards
//! every request to it and logs the outcome through `tracing`, so the
//! control flow stays in the `Result` and the log stays a side channel.
use spell_core::{
    CasterStats, EffectApplier, EffectBlock, EffectQueue, GameError, Position, Projectile,
    ProjectileId, Scriptable, Spell, SpellError,
};
use tracing::{debug, error};

use crate::OracleManager;
use crate::error::Result;

/// Resolves spells against the runtime's oracles.
#[derive(Clone)]
pub struct CastingService {
    oracles: OracleManager,
}

impl CastingService {
    pub fn new(oracles: OracleManager) -> Self {
        Self { oracles }
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Header index a caster of `level` uses.
    pub fn header_index(&self, spell: &Spell, level: i32) -> Result<usize> {
        spell
            .header_index_for_level(level)
            .map_err(|e| Self::report("header_index", e))
    }

    /// Queues the casting glow on `queue`.
    pub fn add_casting_glow(
        &self,
        spell: &Spell,
        queue: &mut EffectQueue,
        duration: u32,
    ) -> Result<()> {
        spell
            .add_casting_glow(queue, duration, &self.oracles.as_spell_env())
            .map_err(|e| Self::report("casting_glow", e))
    }

    /// Materializes an effect block; see [`Spell::effect_block`].
    pub fn effect_block(
        &self,
        spell: &Spell,
        caster: &Scriptable,
        target: Position,
        block: EffectBlock,
        projectile: ProjectileId,
        applier: &mut dyn EffectApplier,
    ) -> Result<EffectQueue> {
        Self::note_skipped_self_effects(spell, caster, block);
        let env = self.oracles.as_spell_env();
        let queue = spell
            .effect_block(caster, target, block, projectile, &env, applier)
            .map_err(|e| Self::report("effect_block", e))?;

        debug!(
            target: "runtime::casting",
            caster = %caster.id,
            ?block,
            effects = queue.len(),
            "Built effect block"
        );
        Ok(queue)
    }

    /// Builds the projectile for `header_index`; see [`Spell::projectile`].
    pub fn projectile(
        &self,
        spell: &Spell,
        caster: &Scriptable,
        header_index: usize,
        target: Position,
        applier: &mut dyn EffectApplier,
    ) -> Result<Projectile> {
        Self::note_skipped_self_effects(spell, caster, EffectBlock::Header(header_index));
        let env = self.oracles.as_spell_env();
        let projectile = spell
            .projectile(caster, header_index, target, &env, applier)
            .map_err(|e| Self::report("projectile", e))?;

        debug!(
            target: "runtime::casting",
            caster = %caster.id,
            header = header_index,
            projectile = projectile.id.0,
            payload = projectile.effects().map_or(0, EffectQueue::len),
            %target,
            "Launched spell projectile"
        );
        Ok(projectile)
    }

    /// Maximum casting distance; see [`Spell::casting_distance`].
    pub fn casting_distance(&self, spell: &Spell, actor: Option<&dyn CasterStats>) -> Result<u32> {
        spell
            .casting_distance(actor)
            .map_err(|e| Self::report("casting_distance", e))
    }

    fn note_skipped_self_effects(spell: &Spell, caster: &Scriptable, block: EffectBlock) {
        if caster.is_actor() {
            return;
        }
        let skipped = spell
            .block_features(block)
            .map(|features| features.iter().filter(|fx| fx.targets_self()).count())
            .unwrap_or(0);
        if skipped > 0 {
            debug!(
                target: "runtime::casting",
                caster = %caster.id,
                kind = %caster.kind,
                skipped,
                "Self-targeted effects skipped for non-actor caster"
            );
        }
    }

    fn report(operation: &'static str, error: SpellError) -> crate::RuntimeError {
        match &error {
            SpellError::HeaderNotFound {
                requested,
                available,
            } => error!(
                target: "runtime::casting",
                operation,
                requested,
                available,
                "Cannot retrieve spell header"
            ),
            other => error!(
                target: "runtime::casting",
                operation,
                code = other.error_code(),
                severity = other.severity().as_str(),
                error = %other,
                "Spell resolution failed"
            ),
        }
        error.into()
    }
}
