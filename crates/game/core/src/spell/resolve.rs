//! Effect materialization and projectile construction.

use crate::config::RulesConfig;
use crate::effect::{Effect, EffectApplier, EffectQueue, TimingMode};
use crate::env::SpellEnv;
use crate::projectile::{Projectile, ProjectileId};
use crate::state::{Position, Scriptable};

use super::{EffectBlock, Spell, SpellError};

impl Spell {
    /// Source effect list for `block`.
    ///
    /// Under simplified duration every header block draws from header 0.
    ///
    /// # Errors
    ///
    /// Returns `SpellError::HeaderNotFound` for an out-of-range header.
    pub fn block_features(&self, block: EffectBlock) -> Result<&[Effect], SpellError> {
        match block {
            EffectBlock::Casting => Ok(&self.casting_features),
            EffectBlock::Header(_) if self.has_simplified_duration() => {
                Ok(self.header(0)?.features())
            }
            EffectBlock::Header(index) => Ok(self.header(index)?.features()),
        }
    }

    /// Duration given to every duration-carrying effect of `block` under
    /// simplified duration: `(time_per_level * tier + time_constant)` rounds.
    pub fn simplified_duration(&self, block: EffectBlock, round_length: u32) -> u32 {
        let rounds = i64::from(self.time_per_level)
            .saturating_mul(block.tier())
            .saturating_add(i64::from(self.time_constant));
        let total = rounds.saturating_mul(i64::from(round_length));
        u32::try_from(total.max(0)).unwrap_or(u32::MAX)
    }

    /// Appends the casting glow to `queue`.
    ///
    /// The glow is a copy of the `CastingGlow` template that expires
    /// `duration` after the current game time.
    ///
    /// # Errors
    ///
    /// Returns an oracle error if the template, the clock, or the effect
    /// oracle is missing.
    pub fn add_casting_glow(
        &self,
        queue: &mut EffectQueue,
        duration: u32,
        env: &SpellEnv<'_>,
    ) -> Result<(), SpellError> {
        let mut fx = env.effect_template(RulesConfig::CASTING_GLOW)?;
        let expiry = env.game_time()? + u64::from(duration);

        fx.parameter1 = 0;
        fx.parameter2 = u32::from(self.casting_graphics);
        fx.timing = TimingMode::Absolute;
        fx.duration = u32::try_from(expiry.0).unwrap_or(u32::MAX);
        fx.inventory_slot = None;
        fx.projectile = None;

        queue.add_effect(&fx);
        Ok(())
    }

    /// Materializes the effects of `block` for `caster`.
    ///
    /// Effects targeting others are stamped with `projectile` and returned.
    /// Effects targeting the caster are stamped with `target` and applied at
    /// once through `applier` when the caster is an actor; other casters get
    /// nothing. Stored effects are never modified.
    ///
    /// # Errors
    ///
    /// - `SpellError::HeaderNotFound` for an out-of-range header block
    /// - `OracleError::ConfigNotAvailable` under simplified duration without
    ///   a config oracle
    pub fn effect_block(
        &self,
        caster: &Scriptable,
        target: Position,
        block: EffectBlock,
        projectile: ProjectileId,
        env: &SpellEnv<'_>,
        applier: &mut dyn EffectApplier,
    ) -> Result<EffectQueue, SpellError> {
        let features = self.block_features(block)?;
        let duration = if self.has_simplified_duration() {
            Some(self.simplified_duration(block, env.round_length()?))
        } else {
            None
        };

        let mut queue = EffectQueue::new();
        for template in features {
            let mut fx = template.clone();
            if let Some(duration) = duration {
                if EffectQueue::has_duration(&fx) {
                    fx.duration = duration;
                }
            }
            fx.inventory_slot = None;
            fx.source_flags = self.flags;

            if fx.targets_self() {
                fx.projectile = None;
                fx.position = Some(target);
                if caster.is_actor() {
                    applier.apply_effect(&fx, caster.id, caster);
                }
            } else {
                fx.projectile = Some(projectile);
                queue.add_effect(&fx);
            }
        }
        Ok(queue)
    }

    /// Builds the projectile for header `header_index`, loaded with that
    /// header's effects.
    ///
    /// The header is validated before any projectile is requested.
    ///
    /// # Errors
    ///
    /// - `SpellError::HeaderNotFound` for an out-of-range index
    /// - `OracleError::ProjectileNotFound` if the header's projectile is unknown
    pub fn projectile(
        &self,
        caster: &Scriptable,
        header_index: usize,
        target: Position,
        env: &SpellEnv<'_>,
        applier: &mut dyn EffectApplier,
    ) -> Result<Projectile, SpellError> {
        let header = self.header(header_index)?;
        let mut projectile = env.projectile(header.projectile)?;
        if header.feature_count() > 0 {
            let effects = self.effect_block(
                caster,
                target,
                EffectBlock::Header(header_index),
                header.projectile,
                env,
                applier,
            )?;
            projectile.set_effects(effects);
        }
        Ok(projectile)
    }
}
