//! Read access to the caster's class levels and stats.
//!
//! Only the handful of values that drive casting level are exposed.

/// Classes whose level counts toward a spell's casting level.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CasterClass {
    Mage,
    Sorcerer,
    Bard,
    Cleric,
    Druid,
    Paladin,
    Ranger,
}

impl CasterClass {
    /// Arcane classes, in lookup priority order.
    pub const ARCANE: [CasterClass; 3] = [Self::Mage, Self::Sorcerer, Self::Bard];
    /// Divine classes, in lookup priority order.
    pub const DIVINE: [CasterClass; 4] = [Self::Cleric, Self::Druid, Self::Paladin, Self::Ranger];
}

/// Stat identifiers read during casting-level computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatId {
    /// Generic character level.
    Level,
    /// Extra caster levels for arcane spells.
    CastingLevelBonusMage,
    /// Extra caster levels for divine spells.
    CastingLevelBonusCleric,
}

/// Actor/stat accessor.
pub trait CasterStats {
    /// Level in the given class, 0 if the actor has none.
    fn class_level(&self, class: CasterClass) -> u32;

    fn stat(&self, stat: StatId) -> i32;

    /// First non-zero class level among `classes`, else the generic level stat.
    fn first_class_level(&self, classes: &[CasterClass]) -> i32 {
        classes
            .iter()
            .map(|&class| self.class_level(class))
            .find(|&level| level != 0)
            .map(|level| i32::try_from(level).unwrap_or(i32::MAX))
            .unwrap_or_else(|| self.stat(StatId::Level))
    }
}
