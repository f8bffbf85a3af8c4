//! Named effect template loader.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spell_core::Effect;

use crate::loaders::{LoadResult, read_file};

/// Effect template catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectCatalog {
    pub templates: HashMap<String, Effect>,
}

/// Loader for named effect templates from RON files.
pub struct EffectTemplateLoader;

impl EffectTemplateLoader {
    /// Load effect templates keyed by name.
    pub fn load(path: &Path) -> LoadResult<HashMap<String, Effect>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<HashMap<String, Effect>> {
        let catalog: EffectCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse effect catalog RON: {}", e))?;

        Ok(catalog.templates)
    }
}
