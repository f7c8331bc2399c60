use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use tracing::info;

use super::error::CatalogError;
use super::model::Assessment;

/// Owner of the authoritative assessment collection.
///
/// Loaded once at process initialization and read-only thereafter, so it can
/// be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    assessments: Vec<Assessment>,
    by_id: HashMap<u64, usize>,
}

impl CatalogStore {
    /// Loads and validates the catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let store = Self::from_json(&content)?;

        info!(
            path = %path.display(),
            assessments = store.len(),
            "Catalog loaded"
        );

        Ok(store)
    }

    /// Parses and validates the catalog from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let assessments: Vec<Assessment> =
            serde_json::from_reader(reader).map_err(|e| CatalogError::Parse { source: e })?;
        Self::from_assessments(assessments)
    }

    /// Parses and validates the catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let assessments: Vec<Assessment> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse { source: e })?;
        Self::from_assessments(assessments)
    }

    /// Validates pre-parsed records and builds the store.
    ///
    /// Rejects empty catalogs, empty urls/names, zero durations, and
    /// duplicate urls. Skill lists are deduplicated preserving first
    /// occurrence.
    pub fn from_assessments(assessments: Vec<Assessment>) -> Result<Self, CatalogError> {
        if assessments.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen_urls: HashSet<&str> = HashSet::with_capacity(assessments.len());
        for assessment in &assessments {
            if assessment.url.trim().is_empty() {
                return Err(CatalogError::InvalidRecord {
                    name: assessment.name.clone(),
                    reason: "url is empty".to_string(),
                });
            }
            if assessment.name.trim().is_empty() {
                return Err(CatalogError::InvalidRecord {
                    name: assessment.url.clone(),
                    reason: "name is empty".to_string(),
                });
            }
            if assessment.duration_minutes == 0 {
                return Err(CatalogError::InvalidRecord {
                    name: assessment.name.clone(),
                    reason: "duration_minutes must be positive".to_string(),
                });
            }
            if !seen_urls.insert(assessment.url.as_str()) {
                return Err(CatalogError::DuplicateUrl {
                    url: assessment.url.clone(),
                });
            }
        }

        let assessments: Vec<Assessment> = assessments
            .into_iter()
            .map(|mut a| {
                let mut seen = HashSet::with_capacity(a.skills.len());
                a.skills.retain(|s| seen.insert(s.clone()));
                a
            })
            .collect();

        let by_id = assessments
            .iter()
            .enumerate()
            .map(|(idx, a)| (a.id(), idx))
            .collect();

        Ok(Self { assessments, by_id })
    }

    /// Number of assessments in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    /// Returns `true` if the catalog holds no assessments.
    ///
    /// Always `false` for a successfully constructed store; present for API
    /// completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }

    /// Looks up an assessment by its 64-bit id.
    #[inline]
    pub fn get(&self, id: u64) -> Option<&Assessment> {
        self.by_id.get(&id).map(|&idx| &self.assessments[idx])
    }

    /// Iterates over all assessments in catalog order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Assessment> {
        self.assessments.iter()
    }

    /// All assessments in catalog order.
    #[inline]
    pub fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }
}
