//! # Challenge engine
//!
//! ```text
//! Idle --generate--> QuestionActive --check--> Graded --generate--> QuestionActive
//!   ^                                                                    |
//!   +--------------------------------- reset ----------------------------+
//! ```
//!
//! Selections are recorded only while a question is active. Generating a new
//! question, failing to generate one, or resetting clears them.

use crate::error::GenerationError;
use crate::grading::{FeatureGrade, Grade, grade, grade_units};
use crate::question::{Question, generate_feature_question, generate_text_question};
use crate::selection::{ClickKind, Mark, Selections};
use dialecta_atlas::Atlas;
use dialecta_domain::config::{ChallengeConfig, GradingMode};
use dialecta_domain::kinds::ChallengeKinds;
use dialecta_domain::{UnitCode, ZoneKey};
use dialecta_kernel::rng::SessionRng;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeState {
    Idle,
    QuestionActive,
    Graded,
}

/// What a recorded click did to the selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionUpdate {
    /// No active question, or the zone is unknown.
    Ignored,
    Marked { zone: ZoneKey, mark: Mark },
    Cleared { zone: ZoneKey },
    /// Single-answer questions: `zone` replaced `previous`.
    Replaced { zone: ZoneKey, previous: Option<ZoneKey> },
}

#[derive(Debug)]
pub struct ChallengeEngine<R = SessionRng> {
    atlas: Atlas,
    config: ChallengeConfig,
    rng: R,
    state: ChallengeState,
    question: Option<Question>,
    selections: Selections,
    grade: Option<Grade>,
}

impl ChallengeEngine<SessionRng> {
    /// Seeded from `config.seed`, or from OS entropy when absent.
    #[must_use]
    pub fn from_config(atlas: Atlas, config: ChallengeConfig) -> Self {
        let rng = SessionRng::from_optional_seed(config.seed);
        Self::new(atlas, config, rng)
    }
}

impl<R: Rng> ChallengeEngine<R> {
    pub fn new(atlas: Atlas, config: ChallengeConfig, rng: R) -> Self {
        Self {
            atlas,
            config,
            rng,
            state: ChallengeState::Idle,
            question: None,
            selections: Selections::new(),
            grade: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> ChallengeState {
        self.state
    }

    #[must_use]
    pub const fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    #[must_use]
    pub const fn selections(&self) -> &Selections {
        &self.selections
    }

    #[must_use]
    pub const fn config(&self) -> &ChallengeConfig {
        &self.config
    }

    #[must_use]
    pub const fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    /// Mutable access to the random source, shared with quizzes.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Draws a question of one of the configured kinds.
    ///
    /// With both kinds enabled the kind is a coin flip.
    ///
    /// # Errors
    /// [`GenerationError::NoQuestion`] when no feature question can be built.
    pub fn generate(&mut self) -> Result<&Question, GenerationError> {
        let kinds = self.config.kinds;
        let text = if kinds.contains(ChallengeKinds::ALL) {
            self.rng.random_bool(0.5)
        } else {
            kinds == ChallengeKinds::TEXT
        };

        if text { self.generate_text() } else { self.generate_feature(None) }
    }

    /// # Errors
    /// [`GenerationError::NoQuestion`] when no candidate has a correct zone.
    pub fn generate_feature(&mut self, feature: Option<&str>) -> Result<&Question, GenerationError> {
        match generate_feature_question(
            &self.atlas,
            &self.config.candidate_features,
            self.config.grading,
            feature,
            &mut self.rng,
        ) {
            Ok(question) => Ok(self.install(Question::Feature(question))),
            Err(e) => {
                self.reset();
                Err(e)
            },
        }
    }

    /// Draws from the text bank, falling over to a feature question when it is empty.
    ///
    /// # Errors
    /// As [`ChallengeEngine::generate_feature`] on fall-over.
    pub fn generate_text(&mut self) -> Result<&Question, GenerationError> {
        match generate_text_question(&self.atlas, &mut self.rng) {
            Some(question) => Ok(self.install(Question::Text(question))),
            None => {
                warn!("Text bank is empty, falling over to a feature question");
                self.generate_feature(None)
            },
        }
    }

    fn install(&mut self, question: Question) -> &Question {
        self.selections.clear();
        self.grade = None;
        self.state = ChallengeState::QuestionActive;
        self.question.insert(question)
    }

    /// Records a debounced click on `zone`.
    ///
    /// Linked zones are recorded as their parent.
    pub fn record_selection(&mut self, zone: &str, click: ClickKind) -> SelectionUpdate {
        if self.state != ChallengeState::QuestionActive || self.atlas.repository.get_zone(zone).is_none() {
            return SelectionUpdate::Ignored;
        }
        let zone = self.atlas.grouping.selection_key(zone).to_owned();

        match (&self.question, self.config.grading) {
            (Some(Question::Text(_)), _) => {
                let previous = self.selections.zones().into_iter().find(|z| *z != zone);
                self.selections.replace(&zone);
                SelectionUpdate::Replaced { zone, previous }
            },
            (Some(Question::Feature(_)), mode) => {
                let mark = match mode {
                    GradingMode::Presence => self.selections.toggle(&zone),
                    GradingMode::PresenceAndVariable => self.selections.apply(&zone, click),
                };
                debug!(zone = %zone, ?mark, "Selection recorded");
                match mark {
                    Some(mark) => SelectionUpdate::Marked { zone, mark },
                    None => SelectionUpdate::Cleared { zone },
                }
            },
            (None, _) => SelectionUpdate::Ignored,
        }
    }

    /// Grades the current selections; `None` without a question.
    ///
    /// The first check locks the selections; later checks return the same grade.
    pub fn check(&mut self) -> Option<&Grade> {
        let question = self.question.as_ref()?;
        if self.grade.is_none() {
            let result = grade(question, &self.selections);
            debug!(correct = result.is_correct(), selected = self.selections.len(), "Answer graded");
            self.grade = Some(result);
            self.state = ChallengeState::Graded;
        }
        self.grade.as_ref()
    }

    #[must_use]
    pub const fn last_grade(&self) -> Option<&Grade> {
        self.grade.as_ref()
    }

    /// Grades unit-level selections against the active feature question.
    #[must_use]
    pub fn grade_units(&self, units: &BTreeMap<UnitCode, Mark>) -> Option<FeatureGrade<UnitCode>> {
        let question = self.question.as_ref()?.as_feature()?;
        Some(grade_units(question, &self.atlas, units))
    }

    /// Back to `Idle`: drops the question, the grade and every selection.
    pub fn reset(&mut self) {
        self.question = None;
        self.grade = None;
        self.selections.clear();
        self.state = ChallengeState::Idle;
    }
}
