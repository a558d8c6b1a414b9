//! Catalog snapshot persistence with format detection.
//!
//! A [`CatalogStore`] reads and writes catalog files under one base
//! directory. The format follows the file extension (RON, JSON, or TOML);
//! every format carries the same [`CatalogFile`] shape. Planner configuration
//! files go through the same path.

use crate::schema::{CatalogFile, GoodRecord};
use granary_core::PlannerConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur reading or writing catalog files.
#[derive(Debug, thiserror::Error)]
pub enum CatalogStoreError {
    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A serialization error occurred.
    #[error("serialize error for {file}: {detail}")]
    Serialize { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Format detection
// ---------------------------------------------------------------------------

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, CatalogStoreError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(CatalogStoreError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ---------------------------------------------------------------------------
// CatalogStore
// ---------------------------------------------------------------------------

/// File persistence for catalog snapshots under a base directory.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    base_dir: PathBuf,
}

impl CatalogStore {
    /// Open a store rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, CatalogStoreError> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_of(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// Load a catalog snapshot.
    pub fn load(&self, filename: &str) -> Result<Vec<GoodRecord>, CatalogStoreError> {
        let file: CatalogFile = self.read_value(filename)?;
        Ok(file.goods)
    }

    /// Write a catalog snapshot, replacing any existing file.
    pub fn save(&self, filename: &str, goods: &[GoodRecord]) -> Result<(), CatalogStoreError> {
        let file = CatalogFile {
            goods: goods.to_vec(),
        };
        self.write_value(filename, &file)
    }

    /// Load a planner configuration file.
    pub fn load_planner_config(&self, filename: &str) -> Result<PlannerConfig, CatalogStoreError> {
        self.read_value(filename)
    }

    pub fn exists(&self, filename: &str) -> bool {
        self.path_of(filename).exists()
    }

    pub fn delete(&self, filename: &str) -> Result<(), CatalogStoreError> {
        std::fs::remove_file(self.path_of(filename))?;
        Ok(())
    }

    fn read_value<T: DeserializeOwned>(&self, filename: &str) -> Result<T, CatalogStoreError> {
        let path = self.path_of(filename);
        let format = detect_format(&path)?;
        let content = std::fs::read_to_string(&path)?;

        match format {
            Format::Ron => ron::from_str(&content).map_err(|err| CatalogStoreError::Parse {
                file: path,
                detail: err.to_string(),
            }),
            Format::Json => {
                serde_json::from_str(&content).map_err(|err| CatalogStoreError::Parse {
                    file: path,
                    detail: err.to_string(),
                })
            }
            Format::Toml => toml::from_str(&content).map_err(|err| CatalogStoreError::Parse {
                file: path,
                detail: err.to_string(),
            }),
        }
    }

    fn write_value<T: Serialize>(&self, filename: &str, value: &T) -> Result<(), CatalogStoreError> {
        let path = self.path_of(filename);
        let format = detect_format(&path)?;

        let content = match format {
            Format::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map_err(|err| CatalogStoreError::Serialize {
                    file: path.clone(),
                    detail: err.to_string(),
                })?,
            Format::Json => serde_json::to_string_pretty(value).map_err(|err| {
                CatalogStoreError::Serialize {
                    file: path.clone(),
                    detail: err.to_string(),
                }
            })?,
            Format::Toml => {
                toml::to_string_pretty(value).map_err(|err| CatalogStoreError::Serialize {
                    file: path.clone(),
                    detail: err.to_string(),
                })?
            }
        };

        std::fs::write(&path, content)?;
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
