use crate::effect::Effect;
use crate::projectile::ProjectileId;

/// One casting tier of a spell.
///
/// Headers are immutable after load. Spell resolution clones features before
/// amending them, so the stored effects always stay as loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellHeader {
    /// Minimum caster level for this tier.
    pub required_level: u16,
    /// Animation id of the projectile carrying the features.
    pub projectile: ProjectileId,
    /// Maximum casting distance.
    pub range: u16,
    pub features: Vec<Effect>,
}

impl SpellHeader {
    pub fn new(required_level: u16, projectile: ProjectileId, range: u16) -> Self {
        Self {
            required_level,
            projectile,
            range,
            features: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_features(mut self, features: Vec<Effect>) -> Self {
        self.features = features;
        self
    }

    pub fn features(&self) -> &[Effect] {
        &self.features
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}
