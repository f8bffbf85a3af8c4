//! Named effect templates backed by an in-memory map.
use std::collections::HashMap;

use spell_core::{Effect, EffectTemplateOracle};

/// EffectTemplateOracle implementation with static templates.
pub struct EffectTemplateOracleImpl {
    templates: HashMap<String, Effect>,
}

impl EffectTemplateOracleImpl {
    pub fn new(templates: HashMap<String, Effect>) -> Self {
        Self { templates }
    }

    /// Add or replace a template.
    pub fn add_template(&mut self, name: impl Into<String>, effect: Effect) {
        self.templates.insert(name.into(), effect);
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for EffectTemplateOracleImpl {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl EffectTemplateOracle for EffectTemplateOracleImpl {
    fn template(&self, name: &str) -> Option<Effect> {
        self.templates.get(name).cloned()
    }
}
