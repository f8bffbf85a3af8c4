//! Spell-effect resolution rules shared by the runtime and offline tools.
//!
//! `spell-core` turns a loaded [`Spell`] into game effects for a caster:
//! it selects the header matching the caster's level, materializes that
//! header's effects into an [`EffectQueue`], and loads them onto a
//! [`Projectile`]. Engine services (effect templates, projectile prototypes,
//! the clock, rule constants) are reached through the oracle traits in
//! [`env`]; nothing in this crate performs I/O or logging.
pub mod config;
pub mod effect;
pub mod env;
pub mod error;
pub mod projectile;
pub mod spell;
pub mod state;
pub mod stats;

pub use config::RulesConfig;
pub use effect::{Effect, EffectApplier, EffectQueue, EffectTarget, TimingMode};
pub use env::{
    ClockOracle, ConfigOracle, EffectTemplateOracle, Env, OracleError, ProjectileOracle, SpellEnv,
};
pub use error::{ErrorSeverity, GameError};
pub use projectile::{Projectile, ProjectileId};
pub use spell::{EffectBlock, Spell, SpellError, SpellFlags, SpellHeader, SpellType};
pub use state::{EntityId, GameTime, Position, Scriptable, ScriptableKind};
pub use stats::{CasterClass, CasterStats, StatId};
