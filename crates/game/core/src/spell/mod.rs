//! Spells and casting-tier selection.
//!
//! A [`Spell`] owns its per-level [`SpellHeader`]s plus the casting features
//! played while the spell is being cast. Resolution never mutates the spell:
//! every emitted effect is a copy amended for the caster at hand.
mod error;
mod flags;
mod header;
mod resolve;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::SpellError;
pub use flags::SpellFlags;
pub use header::SpellHeader;

use crate::effect::Effect;
use crate::stats::{CasterClass, CasterStats, StatId};

/// Spell school as stored in the spell file.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u16)]
pub enum SpellType {
    /// Special/item ability
    #[default]
    Item = 0,
    /// Arcane
    Wizard = 1,
    /// Divine
    Priest = 2,
    Psionic = 3,
    Innate = 4,
    /// Bard song
    Song = 5,
}

/// Which effect list a resolution draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectBlock {
    /// Effects played during the casting animation.
    Casting,
    /// Effects of the header at this index. Under simplified duration the
    /// index is the caster level and only scales durations.
    Header(usize),
}

impl EffectBlock {
    /// Tier used by the simplified-duration formula. The casting block
    /// counts as tier -1.
    fn tier(self) -> i64 {
        match self {
            Self::Casting => -1,
            Self::Header(index) => i64::try_from(index).unwrap_or(i64::MAX),
        }
    }
}

/// A loaded spell definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub spell_type: SpellType,
    pub flags: SpellFlags,
    /// Glow animation shown on the caster while casting.
    pub casting_graphics: u16,
    /// Rounds of duration per caster level (simplified duration only).
    pub time_per_level: u32,
    /// Flat rounds of duration (simplified duration only).
    pub time_constant: u32,
    pub headers: Vec<SpellHeader>,
    pub casting_features: Vec<Effect>,
}

impl Spell {
    pub fn new(spell_type: SpellType, flags: SpellFlags) -> Self {
        Self {
            spell_type,
            flags,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_headers(mut self, headers: Vec<SpellHeader>) -> Self {
        self.headers = headers;
        self
    }

    #[must_use]
    pub fn with_casting_features(mut self, features: Vec<Effect>) -> Self {
        self.casting_features = features;
        self
    }

    #[must_use]
    pub fn with_casting_graphics(mut self, casting_graphics: u16) -> Self {
        self.casting_graphics = casting_graphics;
        self
    }

    /// Enables simplified duration with the given per-level and flat rounds.
    #[must_use]
    pub fn with_simplified_duration(mut self, time_per_level: u32, time_constant: u32) -> Self {
        self.flags |= SpellFlags::SIMPLIFIED_DURATION;
        self.time_per_level = time_per_level;
        self.time_constant = time_constant;
        self
    }

    pub fn has_simplified_duration(&self) -> bool {
        self.flags.contains(SpellFlags::SIMPLIFIED_DURATION)
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// Checked header lookup.
    ///
    /// # Errors
    ///
    /// Returns `SpellError::HeaderNotFound` if `index` is out of range.
    pub fn header(&self, index: usize) -> Result<&SpellHeader, SpellError> {
        self.headers.get(index).ok_or(SpellError::HeaderNotFound {
            requested: index,
            available: self.headers.len(),
        })
    }

    /// Selects the header a caster of `level` uses.
    ///
    /// Returns the highest index whose successor requires more than `level`,
    /// or the last index when every threshold is met. Header 0 is always
    /// eligible regardless of its own threshold. Under simplified duration
    /// the level itself is the index; it is not clamped, so callers go
    /// through [`Spell::header`] before using it.
    ///
    /// # Errors
    ///
    /// - `SpellError::NegativeLevel` for `level < 0`
    /// - `SpellError::NoHeaders` if the spell has no headers (threshold mode)
    pub fn header_index_for_level(&self, level: i32) -> Result<usize, SpellError> {
        let level = u32::try_from(level).map_err(|_| SpellError::NegativeLevel(level))?;
        if self.has_simplified_duration() {
            return Ok(level as usize);
        }

        let last = self.headers.len().checked_sub(1).ok_or(SpellError::NoHeaders)?;
        Ok(self
            .headers
            .windows(2)
            .position(|pair| u32::from(pair[1].required_level) > level)
            .unwrap_or(last))
    }

    /// Effective caster level for this spell's school.
    ///
    /// Arcane spells use the first non-zero of mage, sorcerer, bard level
    /// (else the generic level) plus the arcane casting bonus. Divine spells
    /// do the same over cleric, druid, paladin, ranger with the divine bonus.
    /// Other schools have no caster level.
    pub fn casting_level<S>(&self, actor: &S) -> i32
    where
        S: CasterStats + ?Sized,
    {
        match self.spell_type {
            SpellType::Wizard => actor
                .first_class_level(&CasterClass::ARCANE)
                .saturating_add(actor.stat(StatId::CastingLevelBonusMage)),
            SpellType::Priest => actor
                .first_class_level(&CasterClass::DIVINE)
                .saturating_add(actor.stat(StatId::CastingLevelBonusCleric)),
            _ => 0,
        }
    }

    /// Maximum casting distance for `actor`, or for a level 1 caster when
    /// no actor is given.
    ///
    /// # Errors
    ///
    /// Returns `SpellError::HeaderNotFound` or `SpellError::NoHeaders` when
    /// no header matches the caster level.
    pub fn casting_distance(&self, actor: Option<&dyn CasterStats>) -> Result<u32, SpellError> {
        let level = actor.map_or(0, |actor| self.casting_level(actor)).max(1);
        let index = self.header_index_for_level(level)?;
        Ok(u32::from(self.header(index)?.range))
    }
}
