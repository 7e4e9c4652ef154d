//! Assessment flow: which question is showing and what has been answered.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Question;
use crate::error::AssessmentError;
use crate::screens::Navigation;

use super::presenter::QuestionPresenter;

/// Question id → chosen option text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<u32, String>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: u32, answer: impl Into<String>) {
        self.0.insert(question_id, answer.into());
    }

    pub fn get(&self, question_id: u32) -> Option<&str> {
        self.0.get(&question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct AssessmentFlow {
    questions: &'static [Question],
    current: usize,
    answers: AnswerMap,
    presenters: Vec<QuestionPresenter>,
    confirm_ticks: u32,
}

impl AssessmentFlow {
    pub fn new(questions: &'static [Question], confirm_ticks: u32) -> Self {
        Self {
            questions,
            current: 0,
            answers: AnswerMap::new(),
            presenters: questions.iter().map(|q| QuestionPresenter::new(q.id)).collect(),
            confirm_ticks,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &'static Question {
        &self.questions[self.current]
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    /// Share of questions answered, 0.0..=100.0.
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        100.0 * self.answers.len() as f64 / self.questions.len() as f64
    }

    /// Record an answer for any question of this assessment, not only the
    /// visible one.
    pub fn record_answer(&mut self, question_id: u32, value: &str) -> Result<(), AssessmentError> {
        if !self.questions.iter().any(|q| q.id == question_id) {
            return Err(AssessmentError::UnknownQuestion(question_id));
        }
        self.answers.insert(question_id, value);
        Ok(())
    }

    /// Pick option `index` of the visible question.
    pub fn select_option(&mut self, index: usize) -> Result<(), AssessmentError> {
        let question = self.current_question();
        let option = *question.options.get(index).ok_or(AssessmentError::UnknownOption {
            question_id: question.id,
            index,
        })?;
        let confirm_ticks = self.confirm_ticks;
        self.presenter_mut().select(option, confirm_ticks);
        self.record_answer(question.id, option)
    }

    /// The card for the visible question. Binding to the question id happens
    /// on mutation, in `presenter_mut`.
    pub fn presenter(&self) -> &QuestionPresenter {
        &self.presenters[self.current]
    }

    fn presenter_mut(&mut self) -> &mut QuestionPresenter {
        let id = self.questions[self.current].id;
        let presenter = &mut self.presenters[self.current];
        presenter.bind(id);
        presenter
    }

    /// Whether the visible card shows its Next control.
    pub fn can_proceed(&self) -> bool {
        self.presenter().proceed_ready()
    }

    /// Move to the next question, or hand the answers to the results screen
    /// when already on the last one.
    pub fn advance(&mut self) -> Option<Navigation> {
        if self.is_last() {
            Some(Navigation::Results(Some(self.answers.clone())))
        } else {
            self.current += 1;
            None
        }
    }

    pub fn retreat(&mut self) -> Option<Navigation> {
        if self.current > 0 {
            self.current -= 1;
            None
        } else {
            Some(Navigation::Landing)
        }
    }

    pub fn can_view_results(&self) -> bool {
        self.is_last() && self.is_complete()
    }

    pub fn view_results(&self) -> Option<Navigation> {
        self.can_view_results()
            .then(|| Navigation::Results(Some(self.answers.clone())))
    }

    /// Every card's timer runs, visible or not.
    pub fn tick(&mut self, delta_ticks: u32) {
        for presenter in &mut self.presenters {
            presenter.tick(delta_ticks);
        }
    }
}
