//! Traits describing read-only engine services.
//!
//! Oracles expose named effect templates, projectile prototypes, the game
//! clock, and rule constants. The [`Env`] aggregate bundles them so spell
//! resolution can reach everything it needs without hard coupling to concrete
//! implementations.
mod clock;
mod config;
mod effects;
mod error;
mod projectiles;

pub use clock::ClockOracle;
pub use config::ConfigOracle;
pub use effects::EffectTemplateOracle;
pub use error::OracleError;
pub use projectiles::ProjectileOracle;

use crate::effect::Effect;
use crate::projectile::{Projectile, ProjectileId};
use crate::state::GameTime;

/// Aggregates read-only oracles required by spell resolution.
pub struct Env<'a, E, P, K, C>
where
    E: EffectTemplateOracle + ?Sized,
    P: ProjectileOracle + ?Sized,
    K: ClockOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    effects: Option<&'a E>,
    projectiles: Option<&'a P>,
    clock: Option<&'a K>,
    config: Option<&'a C>,
}

impl<E, P, K, C> Clone for Env<'_, E, P, K, C>
where
    E: EffectTemplateOracle + ?Sized,
    P: ProjectileOracle + ?Sized,
    K: ClockOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, P, K, C> Copy for Env<'_, E, P, K, C>
where
    E: EffectTemplateOracle + ?Sized,
    P: ProjectileOracle + ?Sized,
    K: ClockOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
}

pub type SpellEnv<'a> = Env<
    'a,
    dyn EffectTemplateOracle + 'a,
    dyn ProjectileOracle + 'a,
    dyn ClockOracle + 'a,
    dyn ConfigOracle + 'a,
>;

impl<'a, E, P, K, C> Env<'a, E, P, K, C>
where
    E: EffectTemplateOracle + ?Sized,
    P: ProjectileOracle + ?Sized,
    K: ClockOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    pub fn new(
        effects: Option<&'a E>,
        projectiles: Option<&'a P>,
        clock: Option<&'a K>,
        config: Option<&'a C>,
    ) -> Self {
        Self {
            effects,
            projectiles,
            clock,
            config,
        }
    }

    pub fn with_all(effects: &'a E, projectiles: &'a P, clock: &'a K, config: &'a C) -> Self {
        Self::new(Some(effects), Some(projectiles), Some(clock), Some(config))
    }

    pub fn empty() -> Self {
        Self {
            effects: None,
            projectiles: None,
            clock: None,
            config: None,
        }
    }

    /// Returns the EffectTemplateOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::EffectsNotAvailable` if no effect oracle was provided.
    pub fn effects(&self) -> Result<&'a E, OracleError> {
        self.effects.ok_or(OracleError::EffectsNotAvailable)
    }

    /// Returns the ProjectileOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ProjectilesNotAvailable` if no projectile oracle was provided.
    pub fn projectiles(&self) -> Result<&'a P, OracleError> {
        self.projectiles.ok_or(OracleError::ProjectilesNotAvailable)
    }

    /// Returns the ClockOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ClockNotAvailable` if no clock oracle was provided.
    pub fn clock(&self) -> Result<&'a K, OracleError> {
        self.clock.ok_or(OracleError::ClockNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Looks up a named effect template.
    pub fn effect_template(&self, name: &str) -> Result<Effect, OracleError> {
        self.effects()?
            .template(name)
            .ok_or_else(|| OracleError::EffectTemplateNotFound(name.to_owned()))
    }

    /// Instantiates a projectile prototype.
    pub fn projectile(&self, id: ProjectileId) -> Result<Projectile, OracleError> {
        self.projectiles()?
            .projectile(id)
            .ok_or(OracleError::ProjectileNotFound(id))
    }

    pub fn game_time(&self) -> Result<GameTime, OracleError> {
        Ok(self.clock()?.game_time())
    }

    pub fn round_length(&self) -> Result<u32, OracleError> {
        Ok(self.config()?.round_length())
    }
}

impl<'a, E, P, K, C> Env<'a, E, P, K, C>
where
    E: EffectTemplateOracle + 'a,
    P: ProjectileOracle + 'a,
    K: ClockOracle + 'a,
    C: ConfigOracle + 'a,
{
    /// Converts this environment into a trait-object based `SpellEnv`.
    pub fn into_spell_env(self) -> SpellEnv<'a> {
        let effects: Option<&'a dyn EffectTemplateOracle> = self.effects.map(|e| e as _);
        let projectiles: Option<&'a dyn ProjectileOracle> = self.projectiles.map(|p| p as _);
        let clock: Option<&'a dyn ClockOracle> = self.clock.map(|c| c as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|c| c as _);
        Env::new(effects, projectiles, clock, config)
    }
}
