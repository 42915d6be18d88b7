//! # Zone Repository
//!
//! Immutable-after-load catalog of zones, feature descriptions and the
//! read-only text and quiz banks. Loading validates the whole document up
//! front so that a broken document never yields a half-usable catalog:
//!
//! * `zones` must be present and well formed,
//! * an administrative unit may belong to one zone only,
//! * text-bank answers must name existing zones,
//! * quiz answers must index an existing option.

use crate::error::{LoadError, LoadErrorExt};
use dialecta_domain::constants::fallback_label;
use dialecta_domain::document::{
    DataDocument, FeatureDescription, QuizQuestion, TextExcerpt, Zone,
};
use dialecta_domain::ZoneKey;
use fxhash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ZoneRepository {
    zones: BTreeMap<ZoneKey, Zone>,
    descriptions: BTreeMap<String, FeatureDescription>,
    text_bank: Vec<TextExcerpt>,
    quiz_bank: Vec<QuizQuestion>,
}

impl ZoneRepository {
    /// Loads a parsed data document.
    ///
    /// # Errors
    /// * [`LoadError::Malformed`] if the document is not an object or lacks `zones`.
    /// * [`LoadError::Parse`] if a record does not match the expected shape.
    /// * Integrity errors from [`ZoneRepository::from_document`].
    pub fn load(raw: &Value) -> Result<Self, LoadError> {
        let Some(root) = raw.as_object() else {
            return Err(LoadError::Malformed {
                message: "expected a JSON object at the top level".into(),
                context: None,
            });
        };
        if !root.get("zones").is_some_and(Value::is_object) {
            return Err(LoadError::Malformed {
                message: "missing `zones` object".into(),
                context: None,
            });
        }

        let document = DataDocument::deserialize(raw).context("Decoding zone records")?;
        Self::from_document(document)
    }

    /// Parses and loads a JSON document.
    ///
    /// # Errors
    /// See [`ZoneRepository::load`]; invalid JSON yields [`LoadError::Parse`].
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let raw: Value = serde_json::from_str(json).context("Parsing the data document")?;
        Self::load(&raw)
    }

    /// Reads, parses and loads a JSON document from disk.
    ///
    /// # Errors
    /// [`LoadError::Io`] if the file cannot be read, otherwise as [`ZoneRepository::load`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .context(format!("Reading {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Validates and takes ownership of an already decoded document.
    ///
    /// # Errors
    /// [`LoadError::DuplicateUnit`], [`LoadError::UnknownZone`] or [`LoadError::InvalidQuiz`].
    pub fn from_document(document: DataDocument) -> Result<Self, LoadError> {
        let DataDocument {
            zones,
            feature_descriptions,
            phrase_challenges,
            text_bank_questions,
            quiz_questions,
        } = document.with_keys();

        check_unique_units(&zones)?;

        let text_bank: Vec<TextExcerpt> =
            text_bank_questions.into_iter().chain(phrase_challenges).collect();
        if let Some(orphan) = text_bank.iter().find(|t| !zones.contains_key(&t.answer)) {
            return Err(LoadError::UnknownZone {
                message: format!("'{}' (text: \"{}\")", orphan.answer, orphan.text).into(),
                context: Some("Text bank".into()),
            });
        }

        for (i, quiz) in quiz_questions.iter().enumerate() {
            if quiz.answer >= quiz.options.len() {
                return Err(LoadError::InvalidQuiz {
                    message: format!(
                        "question #{i} answers option {} of {}",
                        quiz.answer,
                        quiz.options.len()
                    )
                    .into(),
                    context: Some("Quiz bank".into()),
                });
            }
        }

        info!(
            zones = zones.len(),
            features = feature_descriptions.len(),
            texts = text_bank.len(),
            quizzes = quiz_questions.len(),
            "Linguistic data loaded"
        );

        Ok(Self {
            zones,
            descriptions: feature_descriptions,
            text_bank,
            quiz_bank: quiz_questions,
        })
    }

    #[must_use]
    pub fn get_zone(&self, key: &str) -> Option<&Zone> {
        self.zones.get(key)
    }

    /// Zones in key order.
    pub fn zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    #[must_use]
    pub fn feature_description(&self, key: &str) -> Option<&FeatureDescription> {
        self.descriptions.get(key)
    }

    /// Display label: document description, built-in label, then the key itself.
    #[must_use]
    pub fn feature_label<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        self.descriptions.get(key).map_or_else(
            || Cow::Borrowed(fallback_label(key).unwrap_or(key)),
            |d| Cow::Borrowed(d.label.as_str()),
        )
    }

    #[must_use]
    pub fn text_bank(&self) -> &[TextExcerpt] {
        &self.text_bank
    }

    #[must_use]
    pub fn quiz_bank(&self) -> &[QuizQuestion] {
        &self.quiz_bank
    }
}

fn check_unique_units(zones: &BTreeMap<ZoneKey, Zone>) -> Result<(), LoadError> {
    let mut owners: FxHashMap<&str, &str> = FxHashMap::default();
    for zone in zones.values() {
        for unit in &zone.admin_units {
            match owners.insert(unit, &zone.key) {
                Some(previous) if previous != zone.key => {
                    return Err(LoadError::DuplicateUnit {
                        message: format!("'{unit}' is listed by '{previous}' and '{}'", zone.key)
                            .into(),
                        context: Some("Zone member lists".into()),
                    });
                },
                _ => {},
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_rejects_non_objects_and_missing_zones() {
        assert!(matches!(
            ZoneRepository::load(&json!([])),
            Err(LoadError::Malformed { .. })
        ));
        assert!(matches!(
            ZoneRepository::load(&json!({ "feature_descriptions": {} })),
            Err(LoadError::Malformed { .. })
        ));
        assert!(matches!(
            ZoneRepository::load(&json!({ "zones": [] })),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn load_rejects_bad_zone_records() {
        let raw = json!({ "zones": { "andino": { "admin_units": ["BO"] } } });
        let err = ZoneRepository::load(&raw).expect_err("zone without nombre");
        assert!(matches!(err, LoadError::Parse { context: Some(_), .. }));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = ZoneRepository::from_json_str("{ zones: ").expect_err("not json");
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn duplicate_units_fail_loudly() {
        let raw = json!({
            "zones": {
                "a": { "nombre": "A", "admin_units": ["X"] },
                "b": { "nombre": "B", "admin_units": ["X"] }
            }
        });
        let err = ZoneRepository::load(&raw).expect_err("X is claimed twice");
        assert!(matches!(err, LoadError::DuplicateUnit { .. }));
        assert!(err.to_string().contains("'X' is listed by 'a' and 'b'"));
    }

    #[test]
    fn repeated_unit_within_one_zone_is_tolerated() {
        let raw = json!({ "zones": { "a": { "nombre": "A", "admin_units": ["X", "X"] } } });
        assert!(ZoneRepository::load(&raw).is_ok());
    }

    #[test]
    fn text_bank_answers_must_exist() {
        let raw = json!({
            "zones": { "a": { "nombre": "A", "admin_units": ["X"] } },
            "text_bank_questions": [{ "texto": "hola", "zona": "b" }]
        });
        assert!(matches!(ZoneRepository::load(&raw), Err(LoadError::UnknownZone { .. })));
    }

    #[test]
    fn quiz_answers_must_index_an_option() {
        let raw = json!({
            "zones": { "a": { "nombre": "A" } },
            "quiz_questions": [{ "pregunta": "?", "opciones": ["uno"], "respuesta": 1 }]
        });
        assert!(matches!(ZoneRepository::load(&raw), Err(LoadError::InvalidQuiz { .. })));
    }

    #[test]
    fn labels_fall_back_to_builtins_then_key() -> Result<(), LoadError> {
        let raw = json!({
            "zones": { "a": { "nombre": "A" } },
            "feature_descriptions": { "seseo": { "nombre": "Seseo (doc)", "descripcion": "" } }
        });
        let repo = ZoneRepository::load(&raw)?;
        assert_eq!(repo.feature_label("seseo"), "Seseo (doc)");
        assert_eq!(repo.feature_label("yeismo"), "Yeísmo");
        assert_eq!(repo.feature_label("voseo_verbal"), "voseo_verbal");
        assert_eq!(repo.get_zone("a").map(|z| z.key.as_str()), Some("a"));
        assert!(repo.get_zone("b").is_none());
        Ok(())
    }

    #[test]
    fn text_bank_merges_both_sources() -> Result<(), LoadError> {
        let raw = json!({
            "zones": { "a": { "nombre": "A" } },
            "text_bank_questions": [{ "texto": "uno", "zona": "a" }],
            "phrase_challenges": [{ "frase": "dos", "zona": "a" }]
        });
        let repo = ZoneRepository::load(&raw)?;
        let texts: Vec<&str> = repo.text_bank().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["uno", "dos"]);
        Ok(())
    }
}
