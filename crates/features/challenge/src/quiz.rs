use dialecta_domain::document::QuizQuestion;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QuizAnswer {
    Correct,
    Incorrect { expected: usize },
    OutOfRange,
}

/// A quiz question with its options in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quiz {
    pub prompt: String,
    pub options: Vec<String>,
    pub explanation: Option<String>,
    correct: usize,
}

impl Quiz {
    /// Random question from `bank` with shuffled options; `None` for an empty bank.
    pub fn draw<R>(bank: &[QuizQuestion], rng: &mut R) -> Option<Self>
    where
        R: Rng + ?Sized,
    {
        bank.choose(rng).and_then(|question| Self::shuffled(question, rng))
    }

    /// Shuffles the options of `question`, tracking where the answer lands.
    ///
    /// `None` when the answer index is out of range.
    pub fn shuffled<R>(question: &QuizQuestion, rng: &mut R) -> Option<Self>
    where
        R: Rng + ?Sized,
    {
        let mut order: Vec<usize> = (0..question.options.len()).collect();
        order.shuffle(rng);

        let Some(correct) = order.iter().position(|&i| i == question.answer) else {
            warn!(answer = question.answer, options = order.len(), "Quiz answer out of range");
            return None;
        };
        debug!(options = order.len(), correct, "Quiz drawn");

        Some(Self {
            prompt: question.prompt.clone(),
            options: order.iter().map(|&i| question.options[i].clone()).collect(),
            explanation: question.explanation.clone(),
            correct,
        })
    }

    #[must_use]
    pub const fn correct_index(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn answer(&self, choice: usize) -> QuizAnswer {
        if choice >= self.options.len() {
            QuizAnswer::OutOfRange
        } else if choice == self.correct {
            QuizAnswer::Correct
        } else {
            QuizAnswer::Incorrect { expected: self.correct }
        }
    }
}
