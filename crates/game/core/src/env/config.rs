//! Configuration oracle for exposing rule constants to the resolver.

/// Provides access to runtime configuration values.
pub trait ConfigOracle: Send + Sync {
    /// Returns the length of one combat round in game time units.
    fn round_length(&self) -> u32;
}
