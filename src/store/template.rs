//! # Template Selection Store
//!
//! Persists the selected template id as `{"templateId": "…"}`.

use crate::catalog::{template_by_id, TemplateDescriptor, DEFAULT_TEMPLATE_ID};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTemplate {
    template_id: String,
}

/// The active template selection, backed by one JSON file.
#[derive(Debug)]
pub struct TemplateStore {
    path: PathBuf,
    selected_id: String,
}

impl TemplateStore {
    /// Load the selection from `path`. Missing or unparseable files, and
    /// stored ids no longer in the catalog, fall back to the default
    /// template.
    pub fn load(path: &Path) -> Self {
        let selected_id = match Self::try_load(path) {
            Ok(Some(id)) if template_by_id(&id).is_some() => id,
            Ok(Some(id)) => {
                eprintln!("Warning: stored template id {id:?} is not in the catalog");
                DEFAULT_TEMPLATE_ID.to_string()
            }
            Ok(None) => DEFAULT_TEMPLATE_ID.to_string(),
            Err(e) => {
                eprintln!("Warning: discarding saved template selection: {e:#}");
                DEFAULT_TEMPLATE_ID.to_string()
            }
        };
        Self {
            path: path.to_path_buf(),
            selected_id,
        }
    }

    fn try_load(path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template file: {}", path.display()))?;
        let stored: StoredTemplate = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse template file: {}", path.display()))?;
        Ok(Some(stored.template_id))
    }

    /// Select a template by id and persist the choice. Ids not present in
    /// the catalog are ignored silently.
    pub fn select(&mut self, id: &str) -> Result<()> {
        if template_by_id(id).is_none() {
            return Ok(());
        }
        self.selected_id = id.to_string();
        self.save()
    }

    /// The selected template's id.
    pub fn selected_id(&self) -> &str {
        &self.selected_id
    }

    /// The selected template descriptor. The id is validated on load and on
    /// select, so this always resolves; a stale id falls back to the
    /// default descriptor.
    pub fn selected(&self) -> &'static TemplateDescriptor {
        template_by_id(&self.selected_id)
            .or_else(|| template_by_id(DEFAULT_TEMPLATE_ID))
            .unwrap_or(&crate::catalog::all_templates()[0])
    }

    fn save(&self) -> Result<()> {
        let stored = StoredTemplate {
            template_id: self.selected_id.clone(),
        };
        let contents = serde_json::to_string_pretty(&stored)
            .context("Failed to serialize template selection")?;
        super::write_json(&self.path, &contents)
    }
}
