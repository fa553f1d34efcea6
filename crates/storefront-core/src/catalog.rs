//! JSON-backed catalog source.
//!
//! A path may name a single JSON file or a directory; directories are walked
//! recursively and every `*.json` file is read in sorted path order, with the
//! categories of each file appended after those of the previous one.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::traits::CatalogSource;
use crate::types::Catalog;

#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(path: &Path) -> Result<Catalog> {
        let content = fs::read_to_string(path).map_err(|source| Error::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        Catalog::from_json_str(&content)
    }

    fn list_json_files(root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("json"))
            .map(|e| e.path().to_path_buf())
            .collect();
        files.sort();
        files
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load_catalog(&self) -> Result<Catalog> {
        if !self.path.exists() {
            return Err(Error::NotFound(self.path.display().to_string()));
        }
        if self.path.is_file() {
            let catalog = Self::read_file(&self.path)?;
            info!(path = %self.path.display(), variants = catalog.variant_count(), "loaded catalog");
            return Ok(catalog);
        }

        let files = Self::list_json_files(&self.path);
        if files.is_empty() {
            warn!(dir = %self.path.display(), "no .json catalog files found");
        }
        let mut catalog = Catalog::default();
        for file in &files {
            match Self::read_file(file) {
                Ok(part) => catalog.extend(part),
                Err(e) => warn!(path = %file.display(), error = %e, "skipping unreadable catalog file"),
            }
        }
        info!(
            dir = %self.path.display(),
            files = files.len(),
            variants = catalog.variant_count(),
            "loaded catalog directory"
        );
        Ok(catalog)
    }
}
