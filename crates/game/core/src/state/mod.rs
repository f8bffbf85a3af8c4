//! Identity and placement of the entities that take part in spellcasting.
//!
//! The spell resolver never owns world state. It only needs to know who is
//! casting, what kind of scriptable object that is, and where the effects
//! should land.
mod common;
mod scriptable;

pub use common::{EntityId, GameTime, Position};
pub use scriptable::{Scriptable, ScriptableKind};
