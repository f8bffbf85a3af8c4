//! Projectile prototype loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spell_core::Projectile;

use crate::loaders::{LoadResult, read_file};

/// Projectile catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileCatalog {
    pub projectiles: Vec<Projectile>,
}

/// Loader for projectile prototypes from RON files.
pub struct ProjectileLoader;

impl ProjectileLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Projectile>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Projectile>> {
        let catalog: ProjectileCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse projectile catalog RON: {}", e))?;

        Ok(catalog.projectiles)
    }
}
