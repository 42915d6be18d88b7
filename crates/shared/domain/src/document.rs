//! Shape of the linguistic data document consumed once at startup.
//!
//! Field names follow the Spanish keys of the published document (`nombre`,
//! `sustrato`, ...); the Rust side uses English names.

use crate::value::FeatureMap;
use crate::{UnitCode, ZoneKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A dialect zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Filled from the enclosing map key when the document is loaded.
    #[serde(skip)]
    pub key: ZoneKey,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub features: FeatureMap,
    #[serde(default)]
    pub admin_units: Vec<UnitCode>,
    #[serde(default)]
    pub admin_overrides: BTreeMap<UnitCode, FeatureMap>,
    #[serde(default, rename = "descripcion_detallada")]
    pub description: Option<String>,
    #[serde(default, rename = "sustrato")]
    pub substrate: Option<String>,
    #[serde(default, rename = "adstrato")]
    pub adstrate: Option<String>,
}

impl Zone {
    /// Minimal zone, mostly useful for fixtures.
    #[must_use]
    pub fn new(key: impl Into<ZoneKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            features: FeatureMap::new(),
            admin_units: Vec::new(),
            admin_overrides: BTreeMap::new(),
            description: None,
            substrate: None,
            adstrate: None,
        }
    }

    /// Override map for a single unit, if any.
    #[must_use]
    pub fn overrides_for(&self, unit: &str) -> Option<&FeatureMap> {
        self.admin_overrides.get(unit)
    }
}

/// Human description of a feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescription {
    #[serde(rename = "nombre")]
    pub label: String,
    #[serde(default, rename = "descripcion")]
    pub description: String,
}

/// A text excerpt whose dialect zone has to be identified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextExcerpt {
    #[serde(rename = "texto", alias = "frase", alias = "text")]
    pub text: String,
    #[serde(rename = "zona", alias = "respuesta", alias = "zone")]
    pub answer: ZoneKey,
    #[serde(default, rename = "pista", alias = "fuente", alias = "hint")]
    pub hint: Option<String>,
}

/// A multiple-choice quiz question from the static bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(rename = "pregunta", alias = "question")]
    pub prompt: String,
    #[serde(rename = "opciones", alias = "options")]
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    #[serde(rename = "respuesta", alias = "answer")]
    pub answer: usize,
    #[serde(default, rename = "explicacion", alias = "explanation")]
    pub explanation: Option<String>,
}

/// The whole data document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataDocument {
    pub zones: BTreeMap<ZoneKey, Zone>,
    #[serde(default)]
    pub feature_descriptions: BTreeMap<String, FeatureDescription>,
    #[serde(default)]
    pub phrase_challenges: Vec<TextExcerpt>,
    #[serde(default)]
    pub text_bank_questions: Vec<TextExcerpt>,
    #[serde(default)]
    pub quiz_questions: Vec<QuizQuestion>,
}

impl DataDocument {
    /// Copies every map key into its zone's `key` field.
    #[must_use]
    pub fn with_keys(mut self) -> Self {
        for (key, zone) in &mut self.zones {
            zone.key.clone_from(key);
        }
        self
    }
}
