use stockmeta::{format, FormatConfig, MetadataFormatter, RawInput};

/// Builder with every option set
#[test]
fn test_builder_all_options() {
    let formatter = MetadataFormatter::builder()
        .max_tags(2)
        .max_title_length(30)
        .prefix("Stock")
        .suffix("HD")
        .negative_keywords(["photo"])
        .negative_title_words(["free"])
        .build();

    let result = formatter.format("  Free Sunset  ", "photo, sunset, beach, sky");
    assert_eq!(result.title, "Stock Sunset HD");
    assert_eq!(result.keywords, vec!["sunset", "beach"]);
}

/// The builder and the free function agree for the same config
#[test]
fn test_builder_matches_core_function() {
    let config = FormatConfig::new(3, 12, "New", "", ["cat"], ["car"]);
    let formatter = MetadataFormatter::builder().config(&config).build();
    assert_eq!(formatter.config(), &config);

    let raw = RawInput::new("Red car in town", "cat, dog, bird, fish, Cat");
    assert_eq!(
        formatter.format(&raw.title, &raw.keywords_csv),
        format(&raw, &config)
    );
}

/// Options set after config() override it
#[test]
fn test_builder_setters_after_config() {
    let config = FormatConfig::new(3, 12, "New", "", ["cat"], ["car"]);
    let formatter = MetadataFormatter::builder()
        .config(&config)
        .prefix("")
        .max_tags(1)
        .build();

    assert_eq!(formatter.config().prefix(), "");
    assert_eq!(formatter.config().max_tags(), 1);
    assert_eq!(formatter.config().negative_keywords(), ["cat"]);
}

/// Format-then-export through the builder
#[test]
fn test_builder_to_csv() {
    let formatter = MetadataFormatter::new(FormatConfig::default());
    let csv = formatter.to_csv("Sunset", "sun, sea", "Nature", "Image_01.jpg");
    assert_eq!(
        csv,
        "Filename,Title,Keywords,Category\n\"Image_01.jpg\",\"Sunset\",\"sun, sea\",\"Nature\""
    );
}

/// The formatter can be shared across threads
#[test]
fn test_formatter_is_shareable() {
    let formatter = std::sync::Arc::new(MetadataFormatter::builder().max_tags(1).build());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let formatter = formatter.clone();
            std::thread::spawn(move || formatter.format(&format!("Title {}", i), "a, b"))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result.title, format!("Title {}", i));
        assert_eq!(result.keywords, vec!["a"]);
    }
}
