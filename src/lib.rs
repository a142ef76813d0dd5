#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Generation run configuration.
pub mod config;
/// Shared constants: template anchors, attribute keys, menu and API values.
pub mod constants;
/// Document assembly: template fixes and placeholder substitution.
pub mod document;
/// Dataset indexing, filter menu, and selection.
pub mod index;
/// Record normalization and the pure location/color formatters.
pub mod normalize;
/// Raw and normalized record types.
pub mod record;
/// Card rendering and fallback fragments.
pub mod render;
/// Animal sources and snapshot persistence.
pub mod source;
/// File transports (filesystem today).
pub mod transport;
/// Shared type aliases.
pub mod types;

mod errors;
mod generator;

pub use config::GeneratorConfig;
pub use errors::GeneratorError;
pub use generator::{GenerateReport, generate};
pub use index::{DatasetIndex, FilterMenu, IndexOutcome, MenuSelection, SkippedRecord};
pub use normalize::normalize;
pub use record::{AnimalProfile, Characteristics, RawAnimal, Taxonomy};
pub use render::{EmptyReason, RenderedBatch, render_card, render_cards};
#[cfg(feature = "remote")]
pub use source::{ApiSource, ApiSourceConfig};
pub use source::{AnimalSource, DatasetSnapshot, DatasetStore, InMemorySource};
