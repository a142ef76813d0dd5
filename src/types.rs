/// Filterable skin/coat category value.
/// Examples: `Fur`, `Scales`, `Hair`
pub type SkinType = String;
/// Canonical attribute key used in normalized profiles.
/// Examples: `Scientific Name`, `Skin Type`
pub type AttributeKey = &'static str;
/// Rendered HTML fragment for a single animal card.
pub type CardHtml = String;
/// Identifier for the source that produced a batch of records.
/// Examples: `animals_api`, `memory`, `snapshot`
pub type SourceId = String;
