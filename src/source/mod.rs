//! Animal record acquisition.
//!
//! Ownership model:
//! - `AnimalSource` is the pipeline-facing lookup interface.
//! - `DatasetStore` owns snapshot persistence (load/save of raw records).
//! - The pipeline itself never fetches; callers fetch or load, then pass the
//!   records in by value.

use crate::errors::GeneratorError;
use crate::record::RawAnimal;

#[cfg(feature = "remote")]
/// Remote animals-API source implementation.
pub mod api;
/// Dataset snapshot persistence.
pub mod store;

#[cfg(feature = "remote")]
pub use api::{ApiSource, ApiSourceConfig};
pub use store::{DatasetSnapshot, DatasetStore};

/// Pipeline-facing animal lookup interface.
///
/// A query is a (partial) animal name; implementations return every matching
/// record. An empty result is a valid answer, not a failure — failures mean
/// the source itself could not be consulted.
pub trait AnimalSource {
    /// Stable source identifier used in errors and logging.
    fn id(&self) -> &str;
    /// Fetch all records matching `query`.
    fn fetch(&self, query: &str) -> Result<Vec<RawAnimal>, GeneratorError>;
}

/// In-memory source for tests and small fixed datasets.
///
/// Matches the remote API contract: a record matches when its name contains
/// the query, case-insensitively.
pub struct InMemorySource {
    id: String,
    animals: Vec<RawAnimal>,
}

impl InMemorySource {
    /// Create an in-memory source from prebuilt records.
    pub fn new(id: impl Into<String>, animals: Vec<RawAnimal>) -> Self {
        Self {
            id: id.into(),
            animals,
        }
    }
}

impl AnimalSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn fetch(&self, query: &str) -> Result<Vec<RawAnimal>, GeneratorError> {
        let needle = query.to_lowercase();
        Ok(self
            .animals
            .iter()
            .filter(|animal| {
                animal
                    .name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}
