use std::fs;

use tempfile::tempdir;

use menagerie::{
    AnimalSource, DatasetIndex, DatasetSnapshot, DatasetStore, GeneratorConfig, InMemorySource,
    RawAnimal, generate,
};

const TEMPLATE: &str = r#"<html>
<head>
    <style>
    </style>
</head>
<body>
    <ul class="cards">
            __REPLACE_ANIMALS_INFO__
    </ul>
</body>
</html>
"#;

fn zoo() -> Vec<RawAnimal> {
    serde_json::from_str(
        r#"[
            {
                "name": "Red Fox",
                "taxonomy": {"scientific_name": "Vulpes vulpes"},
                "locations": ["Asia", "Europe", "North-America"],
                "characteristics": {"diet": "Omnivore", "type": "Mammal",
                                    "color": "RedWhite", "skin_type": "Fur"}
            },
            {
                "name": "Fennec Fox",
                "taxonomy": {"scientific_name": "Vulpes zerda"},
                "locations": ["Africa"],
                "characteristics": {"diet": "Omnivore", "skin_type": "Fur"}
            }
        ]"#,
    )
    .unwrap()
}

#[test]
fn fetch_save_reload_generate_round_trip() {
    let temp = tempdir().unwrap();
    let template_path = temp.path().join("template.html");
    fs::write(&template_path, TEMPLATE).unwrap();

    // Fetch through the source abstraction, persist, then regenerate from
    // the snapshot alone as the --offline flow does.
    let source = InMemorySource::new("memory", zoo());
    let fetched = source.fetch("fox").unwrap();
    assert_eq!(fetched.len(), 2);

    let store = DatasetStore::new(temp.path().join("animals_data.json"));
    store.save(&DatasetSnapshot::new("fox", fetched)).unwrap();

    let snapshot = store.load().unwrap();
    assert_eq!(snapshot.query, "fox");

    let outcome = DatasetIndex::from_records(&snapshot.animals);
    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.index.skin_types(), ["Fur"]);

    let config = GeneratorConfig::default()
        .with_template(&template_path)
        .with_dest(temp.path().join("animals.html"));
    let report = generate(&config, &outcome.index, "Fur").unwrap();
    assert_eq!(report.cards, 2);

    let page = fs::read_to_string(&report.dest).unwrap();
    assert!(page.contains("Red Fox"));
    assert!(page.contains("<li><strong>Locations:</strong> Asia, Europe and North-America</li>"));
    assert!(page.contains("<li><strong>Color:</strong> Red / White</li>"));
    // The second record has no color or type attribute, so no empty lines
    // leak into its card.
    assert!(page.contains("Fennec Fox"));
    assert!(!page.contains("<li><strong>Color:</strong> </li>"));
    assert!(!page.contains("<li><strong>Type:</strong> </li>"));
}

#[test]
fn snapshot_regeneration_is_deterministic() {
    let temp = tempdir().unwrap();
    let template_path = temp.path().join("template.html");
    fs::write(&template_path, TEMPLATE).unwrap();

    let store = DatasetStore::new(temp.path().join("animals_data.json"));
    store.save(&DatasetSnapshot::new("fox", zoo())).unwrap();

    let first_dest = temp.path().join("first.html");
    let second_dest = temp.path().join("second.html");
    for dest in [&first_dest, &second_dest] {
        let snapshot = store.load().unwrap();
        let outcome = DatasetIndex::from_records(&snapshot.animals);
        let config = GeneratorConfig::default()
            .with_template(&template_path)
            .with_dest(dest);
        generate(&config, &outcome.index, "").unwrap();
    }

    assert_eq!(
        fs::read_to_string(&first_dest).unwrap(),
        fs::read_to_string(&second_dest).unwrap()
    );
}
