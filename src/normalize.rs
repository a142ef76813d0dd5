//! Record normalization: raw nested records to flat attribute profiles.
//!
//! The two formatters in here are pure string transforms. Their exact output
//! shape (including the two-item `"A and B"` form produced by the rewrite
//! count below) is load-bearing for rendered pages and must not change.

use crate::constants::{attrs, format};
use crate::errors::GeneratorError;
use crate::record::{AnimalProfile, RawAnimal};

/// Normalize one raw record into a flat ordered attribute profile.
///
/// Missing optional fields (diet, type, color, skin type, locations) simply
/// stay absent from the profile. A record carrying neither taxonomy nor
/// characteristics is rejected as malformed; `position` is used for the
/// diagnostic when the record has no name.
pub fn normalize(raw: &RawAnimal, position: usize) -> Result<AnimalProfile, GeneratorError> {
    if raw.taxonomy.is_none() && raw.characteristics.is_none() {
        return Err(GeneratorError::MalformedRecord {
            record: raw.label(position),
        });
    }

    let mut profile = AnimalProfile::default();
    profile.insert(attrs::NAME, raw.name.clone());
    profile.insert(
        attrs::SCIENTIFIC_NAME,
        raw.taxonomy
            .as_ref()
            .and_then(|taxonomy| taxonomy.scientific_name.clone()),
    );

    let characteristics = raw.characteristics.as_ref();
    profile.insert(
        attrs::DIET,
        characteristics.and_then(|c| c.diet.clone()),
    );
    profile.insert(attrs::LOCATIONS, Some(join_locations(&raw.locations)));
    profile.insert(attrs::TYPE, characteristics.and_then(|c| c.kind.clone()));
    profile.insert(
        attrs::COLOR,
        characteristics
            .and_then(|c| c.color.as_deref())
            .map(split_color_words),
    );
    profile.insert(
        attrs::SKIN_TYPE,
        characteristics.and_then(|c| c.skin_type.clone()),
    );

    Ok(profile)
}

/// Join location names with `", "` between all but the last pair, which
/// keeps `" and "`.
///
/// The list is first joined entirely with `" and "`, then all but the final
/// separator are rewritten to `", "`. With two locations there is nothing to
/// rewrite, so the result stays `"A and B"`; three yield `"A, B and C"`.
pub fn join_locations(locations: &[String]) -> String {
    let joined = locations.join(format::LOCATION_FINAL_SEPARATOR);
    let separators = joined.matches(format::LOCATION_FINAL_SEPARATOR).count();
    if separators <= 1 {
        return joined;
    }
    joined.replacen(
        format::LOCATION_FINAL_SEPARATOR,
        format::LOCATION_SEPARATOR,
        separators - 1,
    )
}

/// Split a camel-joined color list at each internal uppercase boundary and
/// rejoin the words with `" / "`.
///
/// `"BlackWhiteTan"` becomes `"Black / White / Tan"`; a single word or the
/// empty string is returned unchanged.
pub fn split_color_words(color: &str) -> String {
    let mut formatted = String::with_capacity(color.len());
    let mut chars = color.chars();
    if let Some(first) = chars.next() {
        formatted.push(first);
    }
    for ch in chars {
        if ch.is_uppercase() {
            formatted.push_str(format::COLOR_SEPARATOR);
        }
        formatted.push(ch);
    }
    formatted
}
