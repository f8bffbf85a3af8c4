//! Unified error type surfaced by the runtime.
//!
//! Wraps spell resolution failures and content loading failures so callers
//! can bubble them up with consistent context.
use spell_core::{ErrorSeverity, GameError, SpellError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Spell(#[from] SpellError),

    #[error("failed to load spell content")]
    Content(#[source] anyhow::Error),
}

impl RuntimeError {
    /// Severity of the underlying failure. Content errors are always fatal.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Spell(e) => e.severity(),
            Self::Content(_) => ErrorSeverity::Fatal,
        }
    }
}
