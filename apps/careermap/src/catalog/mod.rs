//! Career catalog — the read-only list of careers loaded once at startup.
//!
//! The on-disk format is a JSON array of [`CareerRecord`] objects. Any read,
//! parse or validation failure is fatal: the assistant cannot run without it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::CareerRecord;

#[cfg(test)]
const INLINE_SOURCE: &str = "<inline>";

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    careers: Vec<CareerRecord>,
}

impl Catalog {
    /// Builds a catalog from records, rejecting empty or duplicate titles.
    pub fn new(careers: Vec<CareerRecord>) -> Result<Self, AppError> {
        validate(&careers)?;
        Ok(Self { careers })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| AppError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = parse(&raw, path)?;
        info!(
            "Loaded {} careers from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    #[cfg(test)]
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        parse(raw, Path::new(INLINE_SOURCE))
    }

    pub fn careers(&self) -> &[CareerRecord] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

fn parse(raw: &str, path: &Path) -> Result<Catalog, AppError> {
    let careers: Vec<CareerRecord> =
        serde_json::from_str(raw).map_err(|source| AppError::CatalogParse {
            path: PathBuf::from(path),
            source,
        })?;
    Catalog::new(careers)
}

fn validate(careers: &[CareerRecord]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for (idx, career) in careers.iter().enumerate() {
        if career.title.trim().is_empty() {
            return Err(AppError::CatalogInvalid(format!(
                "career at position {idx} has an empty title"
            )));
        }
        if !seen.insert(career.title.as_str()) {
            return Err(AppError::CatalogInvalid(format!(
                "duplicate career title '{}'",
                career.title
            )));
        }
        if career.keywords.is_empty() && career.required_skills.is_empty() {
            debug!("Career '{}' has no keywords or skills and can never match", career.title);
        }
    }
    Ok(())
}
