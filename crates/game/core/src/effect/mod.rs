//! Game effects carried by spells.
//!
//! An [`Effect`] is a single rule mutation (opcode plus parameters) with the
//! routing data the spell resolver fills in: who it targets, which projectile
//! carries it, and where it lands. Effects are plain values; every queue
//! owns its own copies.
mod apply;
mod queue;

pub use apply::EffectApplier;
pub use queue::EffectQueue;

use crate::projectile::ProjectileId;
use crate::spell::SpellFlags;
use crate::state::Position;

/// Who an effect is routed to when its carrier resolves.
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
#[repr(u8)]
pub enum EffectTarget {
    #[default]
    Unknown = 0,
    /// The caster itself; never travels with a projectile.
    SelfTarget = 1,
    /// Whoever the projectile hits.
    Preset = 2,
    Party = 3,
    Everyone = 4,
    EveryoneButParty = 5,
    OwnSide = 6,
    OtherSide = 7,
    EveryoneButSelf = 8,
    /// Original caster, resolved on impact.
    Original = 9,
}

/// How an effect's duration field is interpreted.
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
pub enum TimingMode {
    /// Lasts for `duration`, starting now.
    #[default]
    InstantLimited = 0,
    InstantPermanent = 1,
    InstantWhileEquipped = 2,
    /// Starts after a delay, then lasts for `duration`.
    DelayLimited = 3,
    /// Becomes permanent after `duration` elapses.
    DelayPermanent = 4,
    DelayWhileEquipped = 5,
    PermanentUnsaved = 8,
    InstantPermanentAfterBonuses = 9,
    /// `duration` is an absolute game-time expiry.
    Absolute = 0x1000,
}

impl TimingMode {
    /// Returns true if the duration field is meaningful for this mode.
    pub const fn has_duration(self) -> bool {
        matches!(
            self,
            Self::InstantLimited | Self::DelayLimited | Self::DelayPermanent
        )
    }
}

/// A single game-rule mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub opcode: u16,
    pub target: EffectTarget,
    pub timing: TimingMode,
    pub duration: u32,
    pub parameter1: i32,
    pub parameter2: u32,
    /// Resource reference (animation, sound, secondary spell).
    #[cfg_attr(feature = "serde", serde(default))]
    pub resource: String,
    /// Inventory slot of the originating item. `None` marks a spell effect.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory_slot: Option<u16>,
    /// Projectile carrying this effect, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub projectile: Option<ProjectileId>,
    /// Flags of the originating spell (hostility classification).
    #[cfg_attr(feature = "serde", serde(default))]
    pub source_flags: SpellFlags,
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Option<Position>,
}

impl Effect {
    pub fn new(opcode: u16, target: EffectTarget, timing: TimingMode) -> Self {
        Self {
            opcode,
            target,
            timing,
            duration: 0,
            parameter1: 0,
            parameter2: 0,
            resource: String::new(),
            inventory_slot: None,
            projectile: None,
            source_flags: SpellFlags::empty(),
            position: None,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_parameters(mut self, parameter1: i32, parameter2: u32) -> Self {
        self.parameter1 = parameter1;
        self.parameter2 = parameter2;
        self
    }

    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    #[must_use]
    pub fn with_inventory_slot(mut self, slot: u16) -> Self {
        self.inventory_slot = Some(slot);
        self
    }

    /// Returns true if the effect lands on its caster rather than traveling.
    pub const fn targets_self(&self) -> bool {
        matches!(self.target, EffectTarget::SelfTarget)
    }

    /// Returns true if the effect originates from an item rather than a spell.
    pub const fn is_item_effect(&self) -> bool {
        self.inventory_slot.is_some()
    }
}
