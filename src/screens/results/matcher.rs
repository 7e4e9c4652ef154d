//! Turning answers into a ranked career list.

use crate::catalog::{CareerEntry, CAREERS};
use crate::screens::assessment::AnswerMap;

pub trait CareerMatcher {
    /// Careers ordered best match first.
    fn rank(&self, answers: &AnswerMap) -> Vec<CareerEntry>;
}

/// Returns the built-in career table whatever the answers.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticMatcher;

impl CareerMatcher for StaticMatcher {
    fn rank(&self, _answers: &AnswerMap) -> Vec<CareerEntry> {
        CAREERS.to_vec()
    }
}
