//! Spell resolution errors.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised while resolving a spell for a caster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellError {
    /// Caster level below zero.
    #[error("invalid caster level {0}")]
    NegativeLevel(i32),

    /// Spell has no extended headers to select from.
    #[error("spell has no headers")]
    NoHeaders,

    /// Header index outside the spell's header list.
    #[error("cannot retrieve spell header {requested} (spell has {available})")]
    HeaderNotFound { requested: usize, available: usize },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for SpellError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NegativeLevel(_) | Self::HeaderNotFound { .. } => ErrorSeverity::Validation,
            Self::NoHeaders => ErrorSeverity::Internal,
            Self::Oracle(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeLevel(_) => "SPELL_NEGATIVE_LEVEL",
            Self::NoHeaders => "SPELL_NO_HEADERS",
            Self::HeaderNotFound { .. } => "SPELL_HEADER_NOT_FOUND",
            Self::Oracle(e) => e.error_code(),
        }
    }
}
