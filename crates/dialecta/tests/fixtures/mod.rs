use dialecta::Session;
use dialecta::domain::config::{ChallengeConfig, DataConfig, GradingMode};
use dialecta::domain::kinds::ChallengeKinds;
use dialecta::features::atlas::Atlas;

pub const DOCUMENT: &str = include_str!("../../../../data/linguistic_data.json");

/// # Panics
/// * If the shipped document does not load.
#[must_use]
pub fn atlas() -> Atlas {
    let raw: serde_json::Value = serde_json::from_str(DOCUMENT).expect("document is JSON");
    Atlas::load(&raw, DataConfig::default().linked_zones).expect("document loads")
}

#[must_use]
pub fn session(features: &[&str], grading: GradingMode, kinds: ChallengeKinds) -> Session {
    let config = ChallengeConfig {
        candidate_features: features.iter().map(|&f| f.to_owned()).collect(),
        grading,
        kinds,
        seed: Some(2024),
        ..ChallengeConfig::default()
    };
    Session::new(atlas(), config)
}
