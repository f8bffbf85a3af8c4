/// Rule constants consulted while resolving spells.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Length of one combat round in game time units.
    /// Scales the per-level durations of simplified-duration spells.
    pub round_length: u32,
}

impl RulesConfig {
    // ===== well-known identifiers =====
    /// Named effect template used for the casting glow.
    pub const CASTING_GLOW: &'static str = "CastingGlow";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ROUND_LENGTH: u32 = 6;

    pub fn new() -> Self {
        Self {
            round_length: Self::DEFAULT_ROUND_LENGTH,
        }
    }

    pub fn with_round_length(round_length: u32) -> Self {
        Self { round_length }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
