//! Projectile prototypes.

use crate::projectile::{Projectile, ProjectileId};

/// Oracle producing projectile instances from their animation id.
///
/// Every call returns a fresh instance owned by the caller.
pub trait ProjectileOracle: Send + Sync {
    fn projectile(&self, id: ProjectileId) -> Option<Projectile>;
}
