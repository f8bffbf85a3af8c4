//! Runtime services for spell resolution.
//!
//! This crate wires `spell-core` to concrete collaborators:
//! - [`oracle`] provides in-memory oracles loaded from `spell-content`
//! - [`actors`] holds actor sheets (stat accessor and effect sink)
//! - [`casting`] exposes [`CastingService`], which logs every failure
//! - [`logging`] installs the tracing subscriber
pub mod actors;
pub mod casting;
pub mod logging;
pub mod oracle;

mod error;

pub use actors::{ActorRegistry, ActorSheet, AppliedEffect};
pub use casting::CastingService;
pub use error::{Result, RuntimeError};
pub use oracle::{
    ClockOracleImpl, ConfigOracleImpl, EffectTemplateOracleImpl, OracleManager,
    ProjectileOracleImpl,
};
