//! Dataset indexing: normalized profiles, skin-type derivation, and the
//! numbered filter menu.
//!
//! Ownership model:
//! - `DatasetIndex` owns the normalized snapshot and answers selections.
//! - `FilterMenu` is derived from one snapshot; its numbering is only valid
//!   for that snapshot and must be rebuilt when the dataset changes.

use std::collections::BTreeSet;
use std::fmt;

use tracing::warn;

use crate::constants::menu::EXIT_LABEL;
use crate::errors::GeneratorError;
use crate::normalize::normalize;
use crate::record::{AnimalProfile, RawAnimal};
use crate::types::SkinType;

/// Ordered collection of normalized profiles plus the derived skin-type set.
#[derive(Clone, Debug, Default)]
pub struct DatasetIndex {
    profiles: Vec<AnimalProfile>,
    skin_types: Vec<SkinType>,
}

/// Result of indexing a raw batch: the index plus skipped-record reports.
#[derive(Debug, Default)]
pub struct IndexOutcome {
    /// The usable dataset index.
    pub index: DatasetIndex,
    /// Records that failed normalization, with their input positions.
    pub skipped: Vec<SkippedRecord>,
}

/// One record dropped during indexing.
#[derive(Debug)]
pub struct SkippedRecord {
    /// Zero-based position in the raw input sequence.
    pub position: usize,
    /// Why the record was dropped.
    pub reason: GeneratorError,
}

impl DatasetIndex {
    /// Build an index from raw records, keeping input order.
    ///
    /// Records that fail normalization are skipped and reported in the
    /// outcome (and logged), never silently dropped. Identical input always
    /// produces an identical index and menu numbering.
    pub fn from_records(records: &[RawAnimal]) -> IndexOutcome {
        let mut profiles = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();
        for (position, raw) in records.iter().enumerate() {
            match normalize(raw, position) {
                Ok(profile) => profiles.push(profile),
                Err(reason) => {
                    warn!(position, %reason, "skipping record during indexing");
                    skipped.push(SkippedRecord { position, reason });
                }
            }
        }

        let skin_types: BTreeSet<SkinType> = profiles
            .iter()
            .filter_map(|profile| profile.skin_type().map(str::to_string))
            .collect();

        IndexOutcome {
            index: DatasetIndex {
                profiles,
                skin_types: skin_types.into_iter().collect(),
            },
            skipped,
        }
    }

    /// Normalized profiles in dataset order.
    pub fn profiles(&self) -> &[AnimalProfile] {
        &self.profiles
    }

    /// Distinct skin types, sorted lexicographically.
    pub fn skin_types(&self) -> &[SkinType] {
        &self.skin_types
    }

    /// Number of indexed profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True when no profile was indexed.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Numbered filter menu over the current snapshot.
    pub fn menu(&self) -> FilterMenu {
        FilterMenu {
            options: self.skin_types.clone(),
        }
    }

    /// Profiles matching `skin`, in dataset order.
    ///
    /// An empty string selects every profile. A non-empty value matches the
    /// Skin Type attribute exactly (case-sensitive); profiles without a skin
    /// type match only the empty selection. An unknown value yields an empty
    /// result, which is not an error at this layer.
    pub fn select(&self, skin: &str) -> Vec<&AnimalProfile> {
        self.profiles
            .iter()
            .filter(|profile| {
                skin.is_empty() || profile.skin_type().is_some_and(|value| value == skin)
            })
            .collect()
    }
}

/// 1-based numbered menu over the distinct skin types, with an exit sentinel
/// numbered one past the last option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterMenu {
    options: Vec<SkinType>,
}

/// Outcome of resolving a menu token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuSelection {
    /// Empty token: no filter, display everything.
    All,
    /// A numbered skin-type option.
    Filter(SkinType),
    /// The exit sentinel: terminate without generating.
    Exit,
    /// Anything else; the caller should re-prompt.
    Invalid,
}

impl FilterMenu {
    /// Menu options in display order (option 1 first).
    pub fn options(&self) -> &[SkinType] {
        &self.options
    }

    /// Number of the exit sentinel, one past the last option.
    pub fn exit_number(&self) -> usize {
        self.options.len() + 1
    }

    /// Resolve a typed token into a selection.
    ///
    /// Leading/trailing whitespace is ignored; an empty token means "no
    /// filter"; the sentinel number exits; any other value is invalid and
    /// left to the caller to handle.
    pub fn resolve(&self, token: &str) -> MenuSelection {
        let token = token.trim();
        if token.is_empty() {
            return MenuSelection::All;
        }
        match token.parse::<usize>() {
            Ok(number) if number == self.exit_number() => MenuSelection::Exit,
            Ok(number) if (1..=self.options.len()).contains(&number) => {
                MenuSelection::Filter(self.options[number - 1].clone())
            }
            _ => MenuSelection::Invalid,
        }
    }
}

impl fmt::Display for FilterMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, option) in self.options.iter().enumerate() {
            writeln!(f, "{}. {option}", idx + 1)?;
        }
        write!(f, "{}. {EXIT_LABEL}", self.exit_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Characteristics;

    fn raw(name: &str, skin: Option<&str>) -> RawAnimal {
        RawAnimal {
            name: Some(name.to_string()),
            characteristics: Some(Characteristics {
                skin_type: skin.map(str::to_string),
                ..Characteristics::default()
            }),
            ..RawAnimal::default()
        }
    }

    fn sample_records() -> Vec<RawAnimal> {
        vec![
            raw("Shark", Some("Scales")),
            raw("Fox", Some("Fur")),
            raw("Axolotl", None),
            raw("Wolf", Some("Fur")),
        ]
    }

    #[test]
    fn skin_types_are_distinct_and_sorted() {
        let outcome = DatasetIndex::from_records(&sample_records());
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.index.skin_types(), ["Fur", "Scales"]);
    }

    #[test]
    fn records_without_skin_type_are_indexed_but_not_in_the_menu() {
        let outcome = DatasetIndex::from_records(&sample_records());
        assert_eq!(outcome.index.len(), 4);
        assert_eq!(outcome.index.menu().options().len(), 2);
    }

    #[test]
    fn malformed_records_are_skipped_with_a_report() {
        let mut records = sample_records();
        records.insert(1, RawAnimal::default());
        let outcome = DatasetIndex::from_records(&records);

        assert_eq!(outcome.index.len(), 4);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].position, 1);
        assert!(matches!(
            outcome.skipped[0].reason,
            GeneratorError::MalformedRecord { .. }
        ));
    }

    #[test]
    fn empty_selection_returns_everything_in_order() {
        let outcome = DatasetIndex::from_records(&sample_records());
        let all = outcome.index.select("");
        let names: Vec<_> = all.iter().filter_map(|profile| profile.name()).collect();
        assert_eq!(names, vec!["Shark", "Fox", "Axolotl", "Wolf"]);
    }

    #[test]
    fn selection_matches_exactly_and_preserves_order() {
        let outcome = DatasetIndex::from_records(&sample_records());
        let furry = outcome.index.select("Fur");
        let names: Vec<_> = furry.iter().filter_map(|profile| profile.name()).collect();
        assert_eq!(names, vec!["Fox", "Wolf"]);
        assert!(outcome.index.select("fur").is_empty());
    }

    #[test]
    fn unknown_category_yields_empty_not_error() {
        let outcome = DatasetIndex::from_records(&sample_records());
        assert!(outcome.index.select("Feathers").is_empty());
    }

    #[test]
    fn menu_numbers_options_and_appends_the_exit_sentinel() {
        let outcome = DatasetIndex::from_records(&sample_records());
        let menu = outcome.index.menu();
        assert_eq!(menu.exit_number(), 3);
        assert_eq!(menu.to_string(), "1. Fur\n2. Scales\n3. Exit program");
    }

    #[test]
    fn empty_dataset_menu_holds_only_the_exit_sentinel() {
        let outcome = DatasetIndex::from_records(&[]);
        let menu = outcome.index.menu();
        assert_eq!(menu.exit_number(), 1);
        assert_eq!(menu.to_string(), "1. Exit program");
        assert_eq!(menu.resolve("1"), MenuSelection::Exit);
    }

    #[test]
    fn menu_tokens_resolve_to_selections() {
        let outcome = DatasetIndex::from_records(&sample_records());
        let menu = outcome.index.menu();

        assert_eq!(menu.resolve(""), MenuSelection::All);
        assert_eq!(menu.resolve("  "), MenuSelection::All);
        assert_eq!(menu.resolve("1"), MenuSelection::Filter("Fur".into()));
        assert_eq!(menu.resolve(" 2 "), MenuSelection::Filter("Scales".into()));
        assert_eq!(menu.resolve("3"), MenuSelection::Exit);
        assert_eq!(menu.resolve("4"), MenuSelection::Invalid);
        assert_eq!(menu.resolve("0"), MenuSelection::Invalid);
        assert_eq!(menu.resolve("Fur"), MenuSelection::Invalid);
    }
}
