//! Projectiles that carry effect queues from caster to target.
use std::fmt;

use crate::effect::EffectQueue;

/// Projectile animation identifier, as stored in spell headers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileId(pub u16);

impl ProjectileId {
    /// Effects applied without any travel animation.
    pub const NONE: Self = Self(0);
}

impl fmt::Display for ProjectileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "projectile {}", self.0)
    }
}

/// A projectile instance handed out by the projectile oracle.
///
/// The animation and physics live elsewhere; the spell resolver only needs the
/// identity and the payload slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projectile {
    pub id: ProjectileId,
    /// Animation resource of the prototype.
    #[cfg_attr(feature = "serde", serde(default))]
    pub animation: String,
    pub speed: u16,
    #[cfg_attr(feature = "serde", serde(skip))]
    effects: Option<EffectQueue>,
}

impl Projectile {
    pub fn new(id: ProjectileId, animation: impl Into<String>, speed: u16) -> Self {
        Self {
            id,
            animation: animation.into(),
            speed,
            effects: None,
        }
    }

    /// Attaches the payload, replacing any previous one.
    pub fn set_effects(&mut self, effects: EffectQueue) {
        self.effects = Some(effects);
    }

    pub fn effects(&self) -> Option<&EffectQueue> {
        self.effects.as_ref()
    }

    pub fn take_effects(&mut self) -> Option<EffectQueue> {
        self.effects.take()
    }
}
