//! # Challenge
//!
//! Question generation, selection tracking, click debouncing and grading for
//! the identification game, plus the multiple-choice quiz. Every random
//! operation draws from a caller-supplied [`rand::Rng`], so a seeded
//! [`dialecta_kernel::rng::SessionRng`] replays a session exactly.

mod debounce;
mod engine;
mod error;
mod grading;
mod question;
mod quiz;
mod selection;

pub use crate::debounce::{ClickDebouncer, ClickEvent, DebounceState};
pub use crate::engine::{ChallengeEngine, ChallengeState, SelectionUpdate};
pub use crate::error::{GenerationError, GenerationErrorExt};
pub use crate::grading::{
    ClassGrade, FeatureGrade, Grade, TextGrade, TextOutcome, grade, grade_units, grade_zones,
};
pub use crate::question::{
    FeatureQuestion, Question, TextQuestion, generate_feature_question, generate_text_question,
};
pub use crate::quiz::{Quiz, QuizAnswer};
pub use crate::selection::{ClickKind, Mark, Selections};
