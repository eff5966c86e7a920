//! Basic formatter usage
//!
//! Formats one submission with the builder API and prints the CSV export.

use stockmeta::MetadataFormatter;

fn main() {
    let formatter = MetadataFormatter::builder()
        .max_tags(5)
        .prefix("Stock Photo:")
        .negative_title_words(["free"])
        .negative_keywords(["photo", "image"])
        .build();

    let title = "  Free Golden Sunset over the Beach  ";
    let keywords = "sunset, photo, beach, golden hour, Image, ocean, sky, waves";

    let result = formatter.format(title, keywords);
    println!("Title:    {}", result.title);
    println!("Keywords: {}", result.keywords_joined());

    println!("\n=== metadata.csv ===");
    println!(
        "{}",
        formatter.to_csv(title, keywords, "Nature", "Image_01.jpg")
    );
}
