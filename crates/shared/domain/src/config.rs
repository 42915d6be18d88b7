use crate::constants::{
    CANDIDATE_FEATURES, CARIBE, CARIBE_COLOMBIA, CARIBE_VENEZUELA, DEFAULT_DATA_PATH,
    DEFAULT_DOUBLE_CLICK_MS, MAX_DOUBLE_CLICK_MS,
};
use crate::kinds::ChallengeKinds;
use crate::{FeatureKey, ZoneKey};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub data: DataConfig,
    pub challenge: ChallengeConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the data document lives and how zones are grouped for display.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub path: PathBuf,
    /// Parent zone → zones whose units are shown and selected as the parent's.
    pub linked_zones: BTreeMap<ZoneKey, Vec<ZoneKey>>,
}

/// How feature questions are graded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingMode {
    /// Single "present" class; clicks toggle selection.
    #[default]
    Presence,
    /// "Present" and "variable" classes; double click marks a zone variable.
    PresenceAndVariable,
}

/// Challenge engine knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChallengeConfig {
    pub candidate_features: Vec<FeatureKey>,
    pub grading: GradingMode,
    pub kinds: ChallengeKinds,
    pub double_click_ms: u64,
    /// Fixed seed for reproducible sessions; entropy when absent.
    pub seed: Option<u64>,
}

impl ChallengeConfig {
    /// Debounce window, capped at [`MAX_DOUBLE_CLICK_MS`].
    #[must_use]
    pub const fn double_click_window(&self) -> Duration {
        let ms = if self.double_click_ms > MAX_DOUBLE_CLICK_MS { MAX_DOUBLE_CLICK_MS } else { self.double_click_ms };
        Duration::from_millis(ms)
    }
}

/// Logging output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
    /// Extra `EnvFilter` directives, e.g. `dialecta_atlas=debug`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for DataConfig {
    fn default() -> Self {
        let caribe = vec![CARIBE_COLOMBIA.to_owned(), CARIBE_VENEZUELA.to_owned()];
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
            linked_zones: BTreeMap::from([(CARIBE.to_owned(), caribe)]),
        }
    }
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            candidate_features: CANDIDATE_FEATURES.iter().map(|&f| f.to_owned()).collect(),
            grading: GradingMode::default(),
            kinds: ChallengeKinds::default(),
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false, filter: None }
    }
}
