//! # Theme Selection Store
//!
//! Persists the theme choice as a tagged union:
//!
//! ```json
//! {"isCustom": false, "themeId": "classic-blue"}
//! {"isCustom": true, "customTheme": {"colors": …, "background": …, "headerStyle": "solid"}}
//! ```
//!
//! Predefined and custom modes are mutually exclusive: activating one
//! clears the other.

use crate::catalog::{
    default_background, predefined_themes, theme_by_id, BackgroundOption, CustomTheme, Theme,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The persisted wire shape. Variant order matters for untagged
/// deserialization: the custom payload is tried first since it carries the
/// larger shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredTheme {
    Custom {
        #[serde(rename = "isCustom")]
        is_custom: bool,
        #[serde(rename = "customTheme")]
        custom_theme: CustomTheme,
    },
    Predefined {
        #[serde(rename = "isCustom")]
        is_custom: bool,
        #[serde(rename = "themeId")]
        theme_id: String,
    },
}

/// The in-memory selection.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeSelection {
    /// A predefined palette, by catalog id.
    Predefined(String),
    /// A user-authored override.
    Custom(CustomTheme),
}

impl Default for ThemeSelection {
    fn default() -> Self {
        ThemeSelection::Predefined("classic-blue".to_string())
    }
}

/// The active theme, backed by one JSON file.
#[derive(Debug)]
pub struct ThemeStore {
    path: PathBuf,
    selection: ThemeSelection,
}

impl ThemeStore {
    /// Load the selection from `path`. Missing or unparseable files fall
    /// back to the default predefined theme.
    pub fn load(path: &Path) -> Self {
        let selection = match Self::try_load(path) {
            Ok(Some(selection)) => selection,
            Ok(None) => ThemeSelection::default(),
            Err(e) => {
                eprintln!("Warning: discarding saved theme selection: {e:#}");
                ThemeSelection::default()
            }
        };
        Self {
            path: path.to_path_buf(),
            selection,
        }
    }

    fn try_load(path: &Path) -> Result<Option<ThemeSelection>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file: {}", path.display()))?;
        let stored: StoredTheme = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse theme file: {}", path.display()))?;
        let selection = match stored {
            StoredTheme::Custom { custom_theme, .. } => ThemeSelection::Custom(custom_theme),
            StoredTheme::Predefined { theme_id, .. } => {
                if theme_by_id(&theme_id).is_none() {
                    eprintln!("Warning: stored theme id {theme_id:?} is not in the catalog");
                    return Ok(None);
                }
                ThemeSelection::Predefined(theme_id)
            }
        };
        Ok(Some(selection))
    }

    /// Activate a predefined theme by id, clearing any custom theme. Ids
    /// not present in the catalog are ignored silently.
    pub fn apply_theme(&mut self, id: &str) -> Result<()> {
        if theme_by_id(id).is_none() {
            return Ok(());
        }
        self.selection = ThemeSelection::Predefined(id.to_string());
        self.save()
    }

    /// Activate a custom theme, replacing any predefined selection.
    pub fn apply_custom(&mut self, custom: CustomTheme) -> Result<()> {
        self.selection = ThemeSelection::Custom(custom);
        self.save()
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.selection, ThemeSelection::Custom(_))
    }

    pub fn selection(&self) -> &ThemeSelection {
        &self.selection
    }

    /// The effective theme: synthesized from the custom override when one
    /// is active, the selected predefined palette otherwise.
    pub fn current_theme(&self) -> Theme {
        match &self.selection {
            ThemeSelection::Custom(custom) => Theme::from_custom(custom),
            ThemeSelection::Predefined(id) => theme_by_id(id).unwrap_or_else(|| {
                // Validated on load and apply; a miss here means the
                // catalog shrank, so take the default palette.
                predefined_themes().remove(0)
            }),
        }
    }

    /// The effective page background: the custom choice when custom mode is
    /// active, clean white otherwise.
    pub fn current_background(&self) -> BackgroundOption {
        match &self.selection {
            ThemeSelection::Custom(custom) => custom.background.clone(),
            ThemeSelection::Predefined(_) => default_background(),
        }
    }

    fn save(&self) -> Result<()> {
        let stored = match &self.selection {
            ThemeSelection::Predefined(id) => StoredTheme::Predefined {
                is_custom: false,
                theme_id: id.clone(),
            },
            ThemeSelection::Custom(custom) => StoredTheme::Custom {
                is_custom: true,
                custom_theme: custom.clone(),
            },
        };
        let contents = serde_json::to_string_pretty(&stored)
            .context("Failed to serialize theme selection")?;
        super::write_json(&self.path, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HeaderStyle;
    use tempfile::TempDir;

    fn sample_custom() -> CustomTheme {
        CustomTheme {
            colors: theme_by_id("rose-elegant").expect("theme exists").colors,
            background: default_background(),
            header_style: HeaderStyle::Solid,
        }
    }

    #[test]
    fn test_defaults_to_classic_blue() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = ThemeStore::load(&temp_dir.path().join("theme.json"));
        assert!(!store.is_custom());
        assert_eq!(store.current_theme().id, "classic-blue");
        assert_eq!(store.current_background().id, "white");
    }

    #[test]
    fn test_apply_theme_round_trip() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("theme.json");

        {
            let mut store = ThemeStore::load(&path);
            store.apply_theme("purple-modern").expect("apply");
        }

        let reloaded = ThemeStore::load(&path);
        assert_eq!(reloaded.current_theme().colors.primary, "#8b5cf6");
    }

    #[test]
    fn test_apply_theme_clears_custom_mode() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("theme.json");

        let mut store = ThemeStore::load(&path);
        store.apply_custom(sample_custom()).expect("apply custom");
        assert!(store.is_custom());

        store.apply_theme("emerald-fresh").expect("apply theme");
        assert!(!store.is_custom());
        assert_eq!(store.current_theme().id, "emerald-fresh");
    }

    #[test]
    fn test_apply_custom_round_trip() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("theme.json");

        let custom = sample_custom();
        {
            let mut store = ThemeStore::load(&path);
            store.apply_custom(custom.clone()).expect("apply custom");
        }

        let reloaded = ThemeStore::load(&path);
        assert!(reloaded.is_custom());
        assert_eq!(
            reloaded.selection(),
            &ThemeSelection::Custom(custom.clone())
        );
        // Solid header style synthesizes a flat header band.
        let theme = reloaded.current_theme();
        assert_eq!(theme.gradients.header.start, custom.colors.primary);
        assert_eq!(theme.gradients.header.end, custom.colors.primary);
    }

    #[test]
    fn test_unknown_theme_id_is_a_no_op() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut store = ThemeStore::load(&temp_dir.path().join("theme.json"));
        store.apply_theme("vaporwave").expect("apply");
        assert_eq!(store.current_theme().id, "classic-blue");
    }

    #[test]
    fn test_wire_shape_predefined() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("theme.json");

        let mut store = ThemeStore::load(&path);
        store.apply_theme("dark-professional").expect("apply");

        let contents = fs::read_to_string(&path).expect("read");
        assert!(contents.contains("\"isCustom\": false"));
        assert!(contents.contains("\"themeId\": \"dark-professional\""));
    }

    #[test]
    fn test_wire_shape_custom() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("theme.json");

        let mut store = ThemeStore::load(&path);
        store.apply_custom(sample_custom()).expect("apply");

        let contents = fs::read_to_string(&path).expect("read");
        assert!(contents.contains("\"isCustom\": true"));
        assert!(contents.contains("\"customTheme\""));
        assert!(contents.contains("\"headerStyle\": \"solid\""));
    }

    #[test]
    fn test_corrupt_file_loads_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("theme.json");
        fs::write(&path, "{\"isCustom\":").expect("write");

        let store = ThemeStore::load(&path);
        assert!(!store.is_custom());
        assert_eq!(store.current_theme().id, "classic-blue");
    }
}
