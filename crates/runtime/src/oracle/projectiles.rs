//! Minimal [`spell_core::ProjectileOracle`] backed by an in-memory map.
use std::collections::HashMap;

use spell_core::{Projectile, ProjectileId, ProjectileOracle};

/// ProjectileOracle implementation handing out clones of stored prototypes.
pub struct ProjectileOracleImpl {
    prototypes: HashMap<ProjectileId, Projectile>,
}

impl ProjectileOracleImpl {
    pub fn new() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }

    /// Add a prototype. Any payload it carries is dropped.
    pub fn add_prototype(&mut self, mut prototype: Projectile) {
        prototype.take_effects();
        self.prototypes.insert(prototype.id, prototype);
    }
}

impl Default for ProjectileOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Projectile> for ProjectileOracleImpl {
    fn from_iter<T: IntoIterator<Item = Projectile>>(iter: T) -> Self {
        let mut oracle = Self::new();
        for prototype in iter {
            oracle.add_prototype(prototype);
        }
        oracle
    }
}

impl ProjectileOracle for ProjectileOracleImpl {
    fn projectile(&self, id: ProjectileId) -> Option<Projectile> {
        self.prototypes.get(&id).cloned()
    }
}
