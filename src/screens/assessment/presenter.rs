//! Local state of one question card.

use crate::time::Countdown;

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionPresenter {
    question_id: u32,
    selected: Option<String>,
    /// Armed on selection; the Next control appears when it fires.
    reveal: Option<Countdown>,
    proceed_ready: bool,
}

impl QuestionPresenter {
    pub fn new(question_id: u32) -> Self {
        Self {
            question_id,
            selected: None,
            reveal: None,
            proceed_ready: false,
        }
    }

    /// Attach to a question. Switching to a different question starts from a
    /// blank selection; re-binding the same question keeps everything.
    pub fn bind(&mut self, question_id: u32) {
        if self.question_id != question_id {
            *self = Self::new(question_id);
        }
    }

    pub fn question_id(&self) -> u32 {
        self.question_id
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, option: &str, confirm_ticks: u32) {
        self.selected = Some(option.to_string());
        self.reveal = Some(Countdown::new(confirm_ticks));
    }

    pub fn tick(&mut self, delta_ticks: u32) {
        if let Some(reveal) = &mut self.reveal {
            if reveal.advance(delta_ticks) {
                self.proceed_ready = true;
                self.reveal = None;
            }
        }
    }

    pub fn proceed_ready(&self) -> bool {
        self.proceed_ready
    }
}
