use super::{EntityId, Position};

/// Kind of scriptable object acting in the world.
///
/// Only [`ScriptableKind::Actor`] can receive effects directly; every other
/// kind is a passive area object (regions, doors, containers) that may still
/// cast spells through scripts.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ScriptableKind {
    /// Creature or character
    #[default]
    Actor,
    /// Proximity trap region
    Proximity,
    /// Info point / trigger region
    Trigger,
    /// Area transition region
    Travel,
    Door,
    Container,
    /// The area itself
    Area,
    /// Global game script
    Global,
}

/// The entity on whose behalf a spell is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scriptable {
    pub id: EntityId,
    pub kind: ScriptableKind,
    pub position: Position,
}

impl Scriptable {
    pub fn new(id: EntityId, kind: ScriptableKind, position: Position) -> Self {
        Self { id, kind, position }
    }

    /// Shorthand for an actor caster.
    pub fn actor(id: EntityId, position: Position) -> Self {
        Self::new(id, ScriptableKind::Actor, position)
    }

    /// Returns true if effects can be applied to this entity directly.
    pub const fn is_actor(&self) -> bool {
        matches!(self.kind, ScriptableKind::Actor)
    }
}
