//! Random, non-repeating quiz question selection.
//!
//! The selector keeps no state between calls: the caller owns the set of
//! questions already asked in a game and passes it in every time. Given the
//! same pool, the same asked set and an identically seeded RNG, the result is
//! the same.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use super::QuestionFields;
use crate::types::QuestionId;

/// Outcome of drawing the next quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizDraw<T> {
    /// An unseen question.
    Question(T),
    /// Every question in scope has been asked; the game is over.
    Exhausted,
}

impl<T> QuizDraw<T> {
    /// The drawn question, if any.
    pub fn into_question(self) -> Option<T> {
        match self {
            QuizDraw::Question(q) => Some(q),
            QuizDraw::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, QuizDraw::Exhausted)
    }
}

/// Draw the next question using the thread-local RNG.
pub fn next_question<T: QuestionFields + Clone>(
    pool: &[T],
    asked: &HashSet<QuestionId>,
) -> QuizDraw<T> {
    let mut rng = rand::thread_rng();
    next_question_with_rng(&mut rng, pool, asked)
}

/// Draw the next question with a provided RNG.
///
/// Each unseen question in `pool` is equally likely.
pub fn next_question_with_rng<R, T>(
    rng: &mut R,
    pool: &[T],
    asked: &HashSet<QuestionId>,
) -> QuizDraw<T>
where
    R: Rng + ?Sized,
    T: QuestionFields + Clone,
{
    let candidates: Vec<&T> = pool.iter().filter(|q| !asked.contains(&q.id())).collect();

    match candidates.choose(rng) {
        Some(question) => QuizDraw::Question((*question).clone()),
        None => QuizDraw::Exhausted,
    }
}
