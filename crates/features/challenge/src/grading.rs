//! # Grading
//!
//! Pure set comparison between ground truth and selections. Nothing here
//! mutates its inputs; a grade can be recomputed at will.
//!
//! Feature questions grade per class. In presence-only mode every selection
//! counts as "present", whatever its mark. With the variable class in play a
//! zone marked present whose truth is variable is wrong for one class and
//! missed for the other.

use crate::question::{FeatureQuestion, Question, TextQuestion};
use crate::selection::{Mark, Selections};
use dialecta_atlas::Atlas;
use dialecta_domain::{UnitCode, ZoneKey};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Comparison of one answer class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassGrade<K: Ord> {
    pub correct: BTreeSet<K>,
    pub missed: BTreeSet<K>,
    pub wrong: BTreeSet<K>,
}

impl<K: Ord + Clone> ClassGrade<K> {
    #[must_use]
    pub fn compare(truth: &BTreeSet<K>, selected: &BTreeSet<K>) -> Self {
        Self {
            correct: truth.intersection(selected).cloned().collect(),
            missed: truth.difference(selected).cloned().collect(),
            wrong: selected.difference(truth).cloned().collect(),
        }
    }

    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.missed.is_empty() && self.wrong.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureGrade<K: Ord> {
    pub present: ClassGrade<K>,
    /// Only when the question grades the variable class.
    pub variable: Option<ClassGrade<K>>,
    pub correct: bool,
}

impl<K: Ord + Clone> FeatureGrade<K> {
    fn new(present: ClassGrade<K>, variable: Option<ClassGrade<K>>) -> Self {
        let correct = present.is_exact() && variable.as_ref().is_none_or(ClassGrade::is_exact);
        Self { present, variable, correct }
    }

    /// Keys missed in any class.
    #[must_use]
    pub fn missed(&self) -> BTreeSet<K> {
        self.classes().flat_map(|c| c.missed.iter().cloned()).collect()
    }

    /// Keys wrongly selected in any class.
    #[must_use]
    pub fn wrong(&self) -> BTreeSet<K> {
        self.classes().flat_map(|c| c.wrong.iter().cloned()).collect()
    }

    fn classes(&self) -> impl Iterator<Item = &ClassGrade<K>> {
        std::iter::once(&self.present).chain(self.variable.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextOutcome {
    Correct,
    Incorrect,
    /// Nothing was selected before checking.
    NoSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextGrade {
    pub answer: ZoneKey,
    pub selected: Option<ZoneKey>,
    pub outcome: TextOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Grade {
    Feature(FeatureGrade<ZoneKey>),
    Text(TextGrade),
}

impl Grade {
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        match self {
            Self::Feature(g) => g.correct,
            Self::Text(g) => matches!(g.outcome, TextOutcome::Correct),
        }
    }
}

/// Grades zone selections against a question.
#[must_use]
pub fn grade(question: &Question, selections: &Selections) -> Grade {
    match question {
        Question::Feature(q) => Grade::Feature(grade_zones(q, selections)),
        Question::Text(q) => Grade::Text(grade_text(q, selections)),
    }
}

#[must_use]
pub fn grade_zones(question: &FeatureQuestion, selections: &Selections) -> FeatureGrade<ZoneKey> {
    match &question.variable {
        None => FeatureGrade::new(ClassGrade::compare(&question.present, &selections.zones()), None),
        Some(variable) => FeatureGrade::new(
            ClassGrade::compare(&question.present, &selections.with_mark(Mark::Present)),
            Some(ClassGrade::compare(variable, &selections.with_mark(Mark::Variable))),
        ),
    }
}

/// Grades unit selections; ground truth zones are expanded to their member units.
#[must_use]
pub fn grade_units(
    question: &FeatureQuestion,
    atlas: &Atlas,
    units: &BTreeMap<UnitCode, Mark>,
) -> FeatureGrade<UnitCode> {
    let marked = |mark: Mark| -> BTreeSet<UnitCode> {
        units.iter().filter(|(_, m)| **m == mark).map(|(u, _)| u.clone()).collect()
    };

    match question.variable_units(atlas) {
        None => FeatureGrade::new(
            ClassGrade::compare(&question.present_units(atlas), &units.keys().cloned().collect()),
            None,
        ),
        Some(variable) => FeatureGrade::new(
            ClassGrade::compare(&question.present_units(atlas), &marked(Mark::Present)),
            Some(ClassGrade::compare(&variable, &marked(Mark::Variable))),
        ),
    }
}

fn grade_text(question: &TextQuestion, selections: &Selections) -> TextGrade {
    let selected = selections.iter().next().map(|(zone, _)| zone.to_owned());
    let outcome = match &selected {
        None => TextOutcome::NoSelection,
        Some(zone) if *zone == question.answer => TextOutcome::Correct,
        Some(_) => TextOutcome::Incorrect,
    };
    TextGrade { answer: question.answer.clone(), selected, outcome }
}
