use dialecta_atlas::Atlas;
use dialecta_domain::config::DataConfig;

/// The document shipped with the application.
pub const DOCUMENT: &str = include_str!("../../../../../data/linguistic_data.json");

/// Builds the atlas from the shipped document and the default links.
/// # Panics
/// * If the shipped document does not load.
#[must_use]
pub fn shipped_atlas() -> Atlas {
    let raw: serde_json::Value = serde_json::from_str(DOCUMENT).expect("document is JSON");
    Atlas::load(&raw, DataConfig::default().linked_zones).expect("document loads")
}
