//! Config oracle implementation for runtime.

use spell_core::{ConfigOracle, RulesConfig};

/// Runtime implementation of ConfigOracle that wraps RulesConfig
pub struct ConfigOracleImpl {
    config: RulesConfig,
}

impl ConfigOracleImpl {
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }
}

impl ConfigOracle for ConfigOracleImpl {
    fn round_length(&self) -> u32 {
        self.config.round_length
    }
}
