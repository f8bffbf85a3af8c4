use bitflags::bitflags;

bitflags! {
    /// Spell flags as stored in the spell file.
    ///
    /// The whole set is stamped onto every effect a spell emits so that
    /// downstream code can classify the effect (hostile, spell-sourced).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SpellFlags: u32 {
        /// Header selection by direct level index, durations by formula.
        const SIMPLIFIED_DURATION = 0x0000_0040;
        /// Casting counts as an attack.
        const HOSTILE             = 0x0000_0400;
        const NO_LOS              = 0x0000_0800;
        const NOT_INDOORS         = 0x0000_2000;
        /// High level ability.
        const HLA                 = 0x0000_4000;
        /// Cast without interrupting the caster's script.
        const TRIGGER             = 0x0000_8000;
        const NOT_IN_COMBAT       = 0x0001_0000;
    }
}
