//! Oracle access errors.
//!
//! Errors related to oracle availability and data access.

use crate::error::{ErrorSeverity, GameError};
use crate::projectile::ProjectileId;

/// Errors that occur when accessing oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// EffectTemplateOracle is not available in the environment.
    #[error("EffectTemplateOracle not available")]
    EffectsNotAvailable,

    /// ProjectileOracle is not available in the environment.
    #[error("ProjectileOracle not available")]
    ProjectilesNotAvailable,

    /// ClockOracle is not available in the environment.
    #[error("ClockOracle not available")]
    ClockNotAvailable,

    /// ConfigOracle is not available in the environment.
    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    /// Named effect template was not registered.
    #[error("effect template '{0}' not found")]
    EffectTemplateNotFound(String),

    /// Projectile prototype was not registered.
    #[error("{0} not found")]
    ProjectileNotFound(ProjectileId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing oracles are fatal - nothing can be resolved
            EffectsNotAvailable | ProjectilesNotAvailable | ClockNotAvailable
            | ConfigNotAvailable => ErrorSeverity::Fatal,

            // Dangling references in game data
            EffectTemplateNotFound(_) | ProjectileNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            EffectsNotAvailable => "ORACLE_EFFECTS_NOT_AVAILABLE",
            ProjectilesNotAvailable => "ORACLE_PROJECTILES_NOT_AVAILABLE",
            ClockNotAvailable => "ORACLE_CLOCK_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            EffectTemplateNotFound(_) => "ORACLE_EFFECT_TEMPLATE_NOT_FOUND",
            ProjectileNotFound(_) => "ORACLE_PROJECTILE_NOT_FOUND",
        }
    }
}
