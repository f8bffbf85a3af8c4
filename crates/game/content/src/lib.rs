//! Data-driven content for the spell resolver.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Rule configuration (TOML)
//! - Named effect templates such as the casting glow (RON)
//! - Projectile prototypes (RON)
//!
//! Spell files themselves are produced by the engine's resource loader and are
//! not read here. Content is consumed by runtime oracles.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, EffectTemplateLoader, ProjectileLoader};
