//! # Persistent Stores
//!
//! The three storage-backed state containers: resume data, template
//! selection, and theme selection.
//!
//! ## Storage Location
//!
//! ```text
//! ~/.config/vitae/
//! ├── resume.json     the Resume aggregate
//! ├── template.json   the selected template id
//! └── theme.json      predefined theme id, or the full custom theme
//! ```
//!
//! The `directories` crate resolves the platform-appropriate config
//! directory; tests and the `--data-dir` flag substitute their own root.
//!
//! Each store follows the same discipline: load once at startup (a missing
//! file means defaults; a file that fails to parse is logged to stderr and
//! treated as missing), keep the value in memory, and write the full
//! serialized value back synchronously after every change. Stores perform
//! no validation; callers validate before updating. Concurrent processes
//! are not coordinated: the last writer wins.

pub mod resume;
pub mod template;
pub mod theme;

pub use resume::ResumeStore;
pub use template::TemplateStore;
pub use theme::{ThemeSelection, ThemeStore};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolved file paths for the three stores.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub resume: PathBuf,
    pub template: PathBuf,
    pub theme: PathBuf,
}

impl StorePaths {
    /// Paths under the platform config directory (`~/.config/vitae` on
    /// Linux).
    pub fn resolve() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "vitae")
            .context("Could not determine config directory")?;
        Ok(Self::in_dir(dirs.config_dir()))
    }

    /// Paths under an explicit root. Used by tests and `--data-dir`.
    pub fn in_dir(root: &Path) -> Self {
        Self {
            resume: root.join("resume.json"),
            template: root.join("template.json"),
            theme: root.join("theme.json"),
        }
    }
}

/// Write `contents` to `path`, creating parent directories as needed.
pub(crate) fn write_json(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write data file: {}", path.display()))?;
    Ok(())
}
