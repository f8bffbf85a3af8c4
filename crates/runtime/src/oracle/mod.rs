//! Runtime wrappers around static spell content oracles.
//!
//! These implementations expose `spell-core` oracle traits and bundle them
//! into an [`OracleManager`] so the runtime can build [`spell_core::SpellEnv`]
//! views on demand. Template and prototype data is immutable once loaded;
//! only the clock moves.
mod clock;
mod config;
mod effects;
mod projectiles;

use std::sync::Arc;

use spell_content::ContentFactory;
use spell_core::{Env, SpellEnv};
use tracing::info;

use crate::error::{Result, RuntimeError};

pub use clock::ClockOracleImpl;
pub use config::ConfigOracleImpl;
pub use effects::EffectTemplateOracleImpl;
pub use projectiles::ProjectileOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) effects: Arc<EffectTemplateOracleImpl>,
    pub(crate) projectiles: Arc<ProjectileOracleImpl>,
    pub(crate) clock: Arc<ClockOracleImpl>,
    pub(crate) config: Arc<ConfigOracleImpl>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        effects: Arc<EffectTemplateOracleImpl>,
        projectiles: Arc<ProjectileOracleImpl>,
        clock: Arc<ClockOracleImpl>,
        config: Arc<ConfigOracleImpl>,
    ) -> Self {
        Self {
            effects,
            projectiles,
            clock,
            config,
        }
    }

    /// Loads templates, prototypes and rules from a content directory.
    pub fn from_content(factory: &ContentFactory) -> Result<Self> {
        let config = factory.load_config().map_err(RuntimeError::Content)?;
        let templates = factory
            .load_effect_templates()
            .map_err(RuntimeError::Content)?;
        let projectiles: ProjectileOracleImpl = factory
            .load_projectiles()
            .map_err(RuntimeError::Content)?
            .into_iter()
            .collect();

        info!(
            target: "runtime::oracle",
            data_dir = %factory.data_dir().display(),
            templates = templates.len(),
            round_length = config.round_length,
            "Loaded spell content"
        );

        Ok(Self::new(
            Arc::new(EffectTemplateOracleImpl::new(templates)),
            Arc::new(projectiles),
            Arc::new(ClockOracleImpl::default()),
            Arc::new(ConfigOracleImpl::new(config)),
        ))
    }

    /// Converts oracle manager into a SpellEnv for spell-core
    pub fn as_spell_env(&self) -> SpellEnv<'_> {
        Env::with_all(
            self.effects.as_ref(),
            self.projectiles.as_ref(),
            self.clock.as_ref(),
            self.config.as_ref(),
        )
        .into_spell_env()
    }

    /// Game clock, for the simulation loop to advance.
    pub fn clock(&self) -> &ClockOracleImpl {
        &self.clock
    }
}
