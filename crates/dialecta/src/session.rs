//! # Session
//!
//! The explicit context owned by the host: the shared [`Atlas`], the current
//! [`Mode`], the challenge engine, the pending debounced click, the active
//! filter and the current quiz. Every operation returns the
//! [`StyleRequest`]s the renderer has to apply, in order.
//!
//! Clicks route by mode. Exploration and filter clicks answer with the zone
//! profile right away. Challenge clicks select the clicked unit's selection
//! zone; they go through the debouncer only when a double click means
//! something (feature questions graded with the variable class). The
//! debouncer tracks units, so two units of one zone never form a double click.

use crate::mode::Mode;
use crate::style::{Style, StyleRequest};
use dialecta_atlas::{Atlas, FeatureFilter, ZoneProfile};
use dialecta_challenge::{
    ChallengeEngine, ChallengeState, ClickDebouncer, ClickEvent, ClickKind, GenerationError, Grade,
    Mark, Question, Quiz, QuizAnswer, SelectionUpdate, TextOutcome,
};
use dialecta_domain::config::{ChallengeConfig, GradingMode};
use dialecta_domain::{UnitCode, ZoneKey};
use dialecta_kernel::rng::SessionRng;
use rand::Rng;
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{debug, info};

/// What a click (or a fired timer) produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickResponse {
    /// Exploration and filter modes; `None` there means the unit has no data.
    pub profile: Option<ZoneProfile>,
    /// Challenge mode.
    pub selections: Vec<SelectionUpdate>,
    pub styles: Vec<StyleRequest>,
}

#[derive(Debug)]
pub struct Session<R = SessionRng> {
    atlas: Atlas,
    mode: Mode,
    engine: ChallengeEngine<R>,
    debouncer: ClickDebouncer<UnitCode>,
    feature: Option<String>,
    quiz: Option<Quiz>,
}

impl Session<SessionRng> {
    #[must_use]
    pub fn new(atlas: Atlas, config: ChallengeConfig) -> Self {
        let rng = SessionRng::from_optional_seed(config.seed);
        Self::with_rng(atlas, config, rng)
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(atlas: Atlas, config: ChallengeConfig, rng: R) -> Self {
        let debouncer = ClickDebouncer::new(config.double_click_window());
        let engine = ChallengeEngine::new(atlas.clone(), config, rng);
        Self { atlas, mode: Mode::default(), engine, debouncer, feature: None, quiz: None }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    #[must_use]
    pub const fn engine(&self) -> &ChallengeEngine<R> {
        &self.engine
    }

    /// Feature shown by the filter, if any.
    #[must_use]
    pub fn active_filter(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    /// When [`Session::poll`] should be called next.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Enters `mode`, dropping selections, the question, the filter and any pending click.
    pub fn switch_mode(&mut self, mode: Mode) -> Vec<StyleRequest> {
        info!(from = %self.mode, to = %mode, "Switching mode");
        self.mode = mode;
        self.debouncer.cancel();
        self.engine.reset();
        self.feature = None;
        self.quiz = None;
        vec![self.reset_styles()]
    }

    pub fn click(&mut self, unit: &str, now: Instant) -> ClickResponse {
        match self.mode {
            Mode::Exploration | Mode::Filter => {
                ClickResponse { profile: self.explore(unit), ..ClickResponse::default() }
            },
            Mode::Challenge => self.challenge_click(unit, now),
        }
    }

    /// Fires a pending single click whose window elapsed.
    pub fn poll(&mut self, now: Instant) -> ClickResponse {
        let mut response = ClickResponse::default();
        if let Some(event) = self.debouncer.poll(now) {
            self.apply_click(event, &mut response);
        }
        response
    }

    #[must_use]
    pub fn explore(&self, unit: &str) -> Option<ZoneProfile> {
        let profile = self.atlas.profile(unit);
        if profile.is_none() {
            debug!(unit, "Unit has no linguistic data");
        }
        profile
    }

    /// Colors the map by `feature`; an empty key resets it.
    pub fn filter(&mut self, feature: &str) -> (FeatureFilter, Vec<StyleRequest>) {
        let result = self.atlas.filter(feature);
        let mut styles = vec![self.reset_styles()];

        if result.is_reset() {
            self.feature = None;
        } else {
            self.feature = Some(feature.to_owned());
            for style in [Style::Present, Style::Variable, Style::Absent] {
                let units: BTreeSet<UnitCode> = result
                    .units
                    .iter()
                    .filter(|(_, value)| Style::from(**value) == style)
                    .map(|(unit, _)| unit.clone())
                    .collect();
                if !units.is_empty() {
                    styles.push(StyleRequest::new(units, style));
                }
            }
        }
        (result, styles)
    }

    /// Draws a new question, entering challenge mode if needed.
    ///
    /// # Errors
    /// [`GenerationError::NoQuestion`] when no question is available.
    pub fn generate_question(&mut self) -> Result<(Question, Vec<StyleRequest>), GenerationError> {
        self.enter_challenge();
        let question = self.engine.generate()?.clone();
        Ok((question, vec![self.reset_styles()]))
    }

    /// As [`Session::generate_question`], trying `feature` before the shuffled candidates.
    ///
    /// # Errors
    /// [`GenerationError::NoQuestion`] when no question is available.
    pub fn generate_feature_question(
        &mut self,
        feature: &str,
    ) -> Result<(Question, Vec<StyleRequest>), GenerationError> {
        self.enter_challenge();
        let question = self.engine.generate_feature(Some(feature))?.clone();
        Ok((question, vec![self.reset_styles()]))
    }

    fn enter_challenge(&mut self) {
        if self.mode != Mode::Challenge {
            self.switch_mode(Mode::Challenge);
        }
        self.debouncer.cancel();
    }

    /// Grades the current answer; `None` without a question.
    ///
    /// A pending single click is committed first.
    pub fn check_answer(&mut self) -> Option<(Grade, Vec<StyleRequest>)> {
        if self.engine.state() == ChallengeState::QuestionActive
            && let Some(unit) = self.debouncer.cancel()
            && let Some(zone) = self.atlas.selection_zone(&unit).map(str::to_owned)
        {
            self.engine.record_selection(&zone, ClickKind::Single);
        }

        let grade = self.engine.check()?.clone();
        let mut styles = vec![self.reset_styles()];
        match &grade {
            Grade::Feature(g) => {
                let (present, variable) = self
                    .engine
                    .question()
                    .and_then(Question::as_feature)
                    .map(|q| (q.present_units(&self.atlas), q.variable_units(&self.atlas).unwrap_or_default()))
                    .unwrap_or_default();

                // Only units whose own zone carries the class are painted.
                let mut correct = self.units_in(&g.present.correct, &present);
                let mut missed = self.units_in(&g.present.missed, &present);
                if let Some(v) = &g.variable {
                    correct.extend(self.units_in(&v.correct, &variable));
                    missed.extend(self.units_in(&v.missed, &variable));
                }
                push_units(&mut styles, correct, Style::Correct);
                push_units(&mut styles, missed, Style::Missed);
                self.push_zone_styles(&mut styles, &g.wrong(), Style::Wrong);
            },
            Grade::Text(g) => {
                let answer_style =
                    if g.outcome == TextOutcome::Correct { Style::Correct } else { Style::Missed };
                self.push_zone_styles(&mut styles, [&g.answer], answer_style);
                if g.outcome == TextOutcome::Incorrect {
                    self.push_zone_styles(&mut styles, g.selected.iter(), Style::Wrong);
                }
            },
        }
        Some((grade, styles))
    }

    /// Draws a quiz question from the bank.
    pub fn draw_quiz(&mut self) -> Option<&Quiz> {
        let quiz = Quiz::draw(self.atlas.repository.quiz_bank(), self.engine.rng_mut())?;
        Some(self.quiz.insert(quiz))
    }

    /// Answers the current quiz question; `None` without one.
    #[must_use]
    pub fn answer_quiz(&self, choice: usize) -> Option<QuizAnswer> {
        self.quiz.as_ref().map(|quiz| quiz.answer(choice))
    }

    fn challenge_click(&mut self, unit: &str, now: Instant) -> ClickResponse {
        let mut response = ClickResponse::default();
        if self.atlas.selection_zone(unit).is_none() {
            debug!(unit, "Click outside every zone");
            return response;
        }
        if self.engine.state() != ChallengeState::QuestionActive {
            return response;
        }

        let unit = unit.to_owned();
        if self.debounces() {
            for event in self.debouncer.press(unit, now) {
                self.apply_click(event, &mut response);
            }
        } else {
            self.apply_click(ClickEvent::Single(unit), &mut response);
        }
        response
    }

    const fn debounces(&self) -> bool {
        matches!(self.engine.config().grading, GradingMode::PresenceAndVariable)
            && matches!(self.engine.question(), Some(Question::Feature(_)))
    }

    fn apply_click(&mut self, event: ClickEvent<UnitCode>, response: &mut ClickResponse) {
        let (unit, kind) = match event {
            ClickEvent::Single(unit) => (unit, ClickKind::Single),
            ClickEvent::Double(unit) => (unit, ClickKind::Double),
        };
        let Some(zone) = self.atlas.selection_zone(&unit).map(str::to_owned) else {
            return;
        };

        let update = self.engine.record_selection(&zone, kind);
        match &update {
            SelectionUpdate::Ignored => return,
            SelectionUpdate::Marked { zone, mark } => {
                let style = match mark {
                    Mark::Present => Style::Selected,
                    Mark::Variable => Style::SelectedVariable,
                };
                self.push_zone_styles(&mut response.styles, [zone], style);
            },
            SelectionUpdate::Cleared { zone } => {
                self.push_zone_styles(&mut response.styles, [zone], Style::Neutral);
            },
            SelectionUpdate::Replaced { zone, previous } => {
                self.push_zone_styles(&mut response.styles, previous.iter(), Style::Neutral);
                self.push_zone_styles(&mut response.styles, [zone], Style::Selected);
            },
        }
        response.selections.push(update);
    }

    fn push_zone_styles<'a>(
        &self,
        styles: &mut Vec<StyleRequest>,
        zones: impl IntoIterator<Item = &'a ZoneKey>,
        style: Style,
    ) {
        push_units(styles, zones.into_iter().flat_map(|z| self.atlas.expand(z)).collect(), style);
    }

    /// Expanded units of `zones` that belong to `class`.
    fn units_in(&self, zones: &BTreeSet<ZoneKey>, class: &BTreeSet<UnitCode>) -> BTreeSet<UnitCode> {
        zones.iter().flat_map(|z| self.atlas.expand(z)).filter(|unit| class.contains(unit)).collect()
    }

    fn reset_styles(&self) -> StyleRequest {
        let units = self.atlas.index.iter().map(|(unit, _)| unit.to_owned()).collect();
        StyleRequest::new(units, Style::Neutral)
    }
}

fn push_units(styles: &mut Vec<StyleRequest>, units: BTreeSet<UnitCode>, style: Style) {
    if !units.is_empty() {
        styles.push(StyleRequest::new(units, style));
    }
}
