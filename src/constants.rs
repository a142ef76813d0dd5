/// Constants used by the template contract and HTML injection.
pub mod template {
    /// Unique marker replaced with the concatenated card fragments.
    pub const PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";
    /// Column the stock template indents the placeholder to.
    pub const PLACEHOLDER_INDENT: &str = "            ";
    /// Head anchor after which the charset declaration is injected.
    pub const HEAD_ANCHOR: &str = "<head>";
    /// Style anchor before which the list-styling rules are injected.
    pub const STYLE_CLOSE_ANCHOR: &str = "</style>";
    /// Charset declaration injected into the head region.
    pub const CHARSET_META: &str = "<meta charset=\"UTF-8\">";
    /// Substring whose presence marks the charset step as already applied.
    pub const CHARSET_MARK: &str = "<meta charset";
    /// Substring whose presence marks the list-style step as already applied.
    pub const LIST_STYLE_MARK: &str = ".cards__list {";
    /// Styling rules for the per-card detail list, injected before the
    /// closing style anchor.
    pub const LIST_STYLE_RULES: &str = "\
.cards__list {
  list-style-type: disc;
  list-style-position: inside;
  margin: 0;
  padding: 20px 0 0 0;
}
";
}

/// Canonical attribute keys, in the fixed profile order.
pub mod attrs {
    use crate::types::AttributeKey;

    /// Card title key; required for rendering.
    pub const NAME: AttributeKey = "Name";
    /// Scientific name from the taxonomy substructure.
    pub const SCIENTIFIC_NAME: AttributeKey = "Scientific Name";
    /// Diet from the characteristics substructure.
    pub const DIET: AttributeKey = "Diet";
    /// Formatted location list.
    pub const LOCATIONS: AttributeKey = "Locations";
    /// Generic type/group, e.g. `Mammal`.
    pub const TYPE: AttributeKey = "Type";
    /// Formatted color list.
    pub const COLOR: AttributeKey = "Color";
    /// Filterable skin/coat category.
    pub const SKIN_TYPE: AttributeKey = "Skin Type";

    /// Detail-line order below the card title.
    pub const DETAIL_ORDER: [AttributeKey; 6] =
        [SCIENTIFIC_NAME, DIET, LOCATIONS, TYPE, COLOR, SKIN_TYPE];
}

/// Constants used by the location and color formatters.
pub mod format {
    /// Separator kept before the final location.
    pub const LOCATION_FINAL_SEPARATOR: &str = " and ";
    /// Separator rewritten between all non-final locations.
    pub const LOCATION_SEPARATOR: &str = ", ";
    /// Separator placed between split color words.
    pub const COLOR_SEPARATOR: &str = " / ";
}

/// Constants used by the filter menu.
pub mod menu {
    /// Label shown next to the exit sentinel number.
    pub const EXIT_LABEL: &str = "Exit program";
}

/// Constants used by the remote animal lookup.
pub mod api {
    /// Default animals API endpoint.
    pub const DEFAULT_URL: &str = "https://api.api-ninjas.com/v1/animals";
    /// Environment variable holding the API key.
    pub const KEY_ENV: &str = "API_NINJAS_KEY";
    /// Header carrying the API key.
    pub const KEY_HEADER: &str = "X-Api-Key";
    /// Query parameter carrying the animal name.
    pub const NAME_PARAM: &str = "name";
    /// Request timeout in seconds.
    pub const TIMEOUT_SECS: u64 = 15;
}

/// Fallback fragments substituted when no cards were rendered.
pub mod fallback {
    /// Shown when the source produced no records at all.
    pub const NO_DATA: &str = "<h2>The animal doesn't exist.</h2>";
    /// Shown when a chosen filter matched no records.
    pub const NO_MATCHES: &str = "<h2>No animals match the selected filter.</h2>";
}
