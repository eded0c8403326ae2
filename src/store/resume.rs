//! # Resume Store
//!
//! Owns the canonical [`Resume`] and persists it after every change. No
//! other component writes the resume file.

use crate::resume::{Resume, ResumePatch};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The canonical resume record, backed by one JSON file.
#[derive(Debug)]
pub struct ResumeStore {
    path: PathBuf,
    data: Resume,
}

impl ResumeStore {
    /// Load the resume from `path`. A missing file yields the default empty
    /// resume; a file that fails to parse is logged and treated as missing.
    pub fn load(path: &Path) -> Self {
        let data = match Self::try_load(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Warning: discarding saved resume data: {e:#}");
                Resume::default()
            }
        };
        Self {
            path: path.to_path_buf(),
            data,
        }
    }

    fn try_load(path: &Path) -> Result<Resume> {
        if !path.exists() {
            return Ok(Resume::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume file: {}", path.display()))?;
        let resume: Resume = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse resume file: {}", path.display()))?;
        Ok(resume)
    }

    /// The current resume.
    pub fn get(&self) -> &Resume {
        &self.data
    }

    /// Apply a field-replacement patch and persist the merged resume.
    /// The store does not validate; editors validate before calling this.
    pub fn update(&mut self, patch: ResumePatch) -> Result<()> {
        self.data.apply(patch);
        self.save()
    }

    /// Restore the default empty resume and clear persisted state.
    pub fn reset(&mut self) -> Result<()> {
        self.data = Resume::default();
        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove resume file: {}", self.path.display())
            })?;
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(&self.data).context("Failed to serialize resume")?;
        super::write_json(&self.path, &contents)
    }

    /// The file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
