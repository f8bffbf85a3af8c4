//! Content factory for building oracle data from a data directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use spell_core::{Effect, Projectile, RulesConfig};

use crate::loaders::{ConfigLoader, EffectTemplateLoader, LoadResult, ProjectileLoader};

/// Content factory that loads all spell content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// ├── effects.ron
/// └── projectiles.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rule configuration from `rules.toml`.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        ConfigLoader::load(&self.data_dir.join("rules.toml"))
    }

    /// Load named effect templates from `effects.ron`.
    pub fn load_effect_templates(&self) -> LoadResult<HashMap<String, Effect>> {
        EffectTemplateLoader::load(&self.data_dir.join("effects.ron"))
    }

    /// Load projectile prototypes from `projectiles.ron`.
    pub fn load_projectiles(&self) -> LoadResult<Vec<Projectile>> {
        ProjectileLoader::load(&self.data_dir.join("projectiles.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
