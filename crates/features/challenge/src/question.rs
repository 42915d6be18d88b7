//! # Question generation
//!
//! Feature questions ask for every zone where a feature is present (and, in
//! the richer grading mode, every zone where it is variable). Ground truth
//! comes from zone base values only; overrides never change which zones are
//! correct. A linked zone is selected through its display parent, so its own
//! value puts the parent in the ground truth; a parent holding both classes is
//! graded as present. At unit granularity every unit keeps its own zone's value.
//!
//! A question without a single correct answer is never produced: candidates
//! are tried in a random order drawn from the caller's random source and the
//! search gives up with [`GenerationError::NoQuestion`] once all of them fail.

use crate::error::GenerationError;
use dialecta_atlas::Atlas;
use dialecta_domain::config::GradingMode;
use dialecta_domain::value::FeatureValue;
use dialecta_domain::{FeatureKey, UnitCode, ZoneKey};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    Feature(FeatureQuestion),
    Text(TextQuestion),
}

impl Question {
    #[must_use]
    pub const fn as_feature(&self) -> Option<&FeatureQuestion> {
        match self {
            Self::Feature(q) => Some(q),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&TextQuestion> {
        match self {
            Self::Text(q) => Some(q),
            Self::Feature(_) => None,
        }
    }

    /// Prompt shown above the map.
    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Self::Feature(q) if q.variable.is_some() => {
                format!("Marca las zonas con «{}» (doble clic: variable)", q.label)
            },
            Self::Feature(q) => format!("Selecciona todas las zonas que tienen: {}", q.label),
            Self::Text(q) => format!("¿De qué zona es este texto? «{}»", q.text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureQuestion {
    pub feature: FeatureKey,
    pub label: String,
    /// Zones whose base value is present.
    pub present: BTreeSet<ZoneKey>,
    /// Zones whose base value is variable; `None` when the class is not graded.
    pub variable: Option<BTreeSet<ZoneKey>>,
}

impl FeatureQuestion {
    /// Ground truth for `feature`, whether or not it has a correct answer.
    #[must_use]
    pub fn ground_truth(atlas: &Atlas, feature: &str, grading: GradingMode) -> Self {
        let mut present = BTreeSet::new();
        let mut variable = BTreeSet::new();

        for zone in atlas.repository.zones() {
            let key = atlas.grouping.selection_key(&zone.key);
            match zone.features.get(feature) {
                Some(FeatureValue::Present) => {
                    present.insert(key.to_owned());
                },
                Some(FeatureValue::Variable) => {
                    variable.insert(key.to_owned());
                },
                _ => {},
            }
        }
        variable.retain(|zone| !present.contains(zone));

        Self {
            feature: feature.to_owned(),
            label: atlas.repository.feature_label(feature).into_owned(),
            present,
            variable: matches!(grading, GradingMode::PresenceAndVariable).then_some(variable),
        }
    }

    /// Number of zones the player has to find.
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.present.len() + self.variable.as_ref().map_or(0, BTreeSet::len)
    }

    #[must_use]
    pub fn has_answer(&self) -> bool {
        self.answer_count() > 0
    }

    /// Units whose own zone has the feature present.
    #[must_use]
    pub fn present_units(&self, atlas: &Atlas) -> BTreeSet<UnitCode> {
        units_with(atlas, &self.feature, FeatureValue::Present)
    }

    /// Units whose own zone has the feature variable; `None` when the class is not graded.
    #[must_use]
    pub fn variable_units(&self, atlas: &Atlas) -> Option<BTreeSet<UnitCode>> {
        self.variable.as_ref().map(|_| units_with(atlas, &self.feature, FeatureValue::Variable))
    }
}

fn units_with(atlas: &Atlas, feature: &str, value: FeatureValue) -> BTreeSet<UnitCode> {
    atlas
        .repository
        .zones()
        .filter(|zone| zone.features.get(feature) == Some(value))
        .flat_map(|zone| zone.admin_units.iter().cloned())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextQuestion {
    pub text: String,
    pub hint: Option<String>,
    /// Selectable zone the excerpt belongs to.
    pub answer: ZoneKey,
}

/// Draws a feature question.
///
/// `requested` is tried first; the remaining candidates follow in shuffled order.
///
/// # Errors
/// [`GenerationError::NoQuestion`] when no tried feature has a correct answer.
pub fn generate_feature_question<R>(
    atlas: &Atlas,
    candidates: &[FeatureKey],
    grading: GradingMode,
    requested: Option<&str>,
    rng: &mut R,
) -> Result<FeatureQuestion, GenerationError>
where
    R: Rng + ?Sized,
{
    let mut order: Vec<&str> =
        candidates.iter().map(String::as_str).filter(|c| Some(*c) != requested).collect();
    order.shuffle(rng);
    if let Some(feature) = requested {
        order.insert(0, feature);
    }

    for (attempt, feature) in order.iter().enumerate() {
        let question = FeatureQuestion::ground_truth(atlas, feature, grading);
        if question.has_answer() {
            debug!(feature, attempt, answers = question.answer_count(), "Feature question drawn");
            return Ok(question);
        }
        warn!(feature, "Feature has no correct zone, drawing another");
    }

    warn!(tried = order.len(), "No feature question available");
    Err(GenerationError::NoQuestion {
        message: format!("none of {} candidate features has a correct zone", order.len()).into(),
        context: Some("Feature question".into()),
    })
}

/// Draws an excerpt from the text bank; `None` when the bank is empty.
pub fn generate_text_question<R>(atlas: &Atlas, rng: &mut R) -> Option<TextQuestion>
where
    R: Rng + ?Sized,
{
    let excerpt = atlas.repository.text_bank().choose(rng)?;
    let answer = atlas.grouping.selection_key(&excerpt.answer).to_owned();
    debug!(answer = %answer, "Text question drawn");

    Some(TextQuestion { text: excerpt.text.clone(), hint: excerpt.hint.clone(), answer })
}
