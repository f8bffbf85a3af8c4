//! Named effect templates.

use crate::effect::Effect;

/// Oracle resolving engine-wide effect templates by name.
///
/// Templates are populated once at startup and are read-only afterwards.
/// Callers receive an owned copy they are free to amend.
pub trait EffectTemplateOracle: Send + Sync {
    fn template(&self, name: &str) -> Option<Effect>;
}
