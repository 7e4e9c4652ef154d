//! The three screens and the messages that move between them.

pub mod assessment;
pub mod landing;
pub mod results;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::config::AppConfig;
use crate::input::{ClickMap, InputEvent};
use crate::notice::NoticeBoard;
use crate::store::KeyValueStore;

use assessment::AnswerMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Assessment,
    Results,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Assessment => "/assessment",
            Route::Results => "/results",
        }
    }
}

/// A one-shot request to switch screens.
///
/// Only the results route carries data: the answers collected by the
/// assessment. `Results(None)` is a legal request (header link, landing
/// shortcut) that the results screen answers with a redirect.
#[derive(Clone, Debug, PartialEq)]
pub enum Navigation {
    Landing,
    Assessment,
    Results(Option<AnswerMap>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Ignored,
    Handled,
    Navigate(Navigation),
    /// The browser's file chooser should be opened.
    OpenFilePicker,
}

impl Outcome {
    pub fn handled_if(cond: bool) -> Self {
        if cond {
            Outcome::Handled
        } else {
            Outcome::Ignored
        }
    }
}

/// Services a screen may use while handling input or time.
pub struct Context<'a> {
    pub config: &'a AppConfig,
    pub store: &'a mut dyn KeyValueStore,
    pub notices: &'a mut NoticeBoard,
}

pub trait Screen {
    fn route(&self) -> Route;

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut Context) -> Outcome;

    /// Advance timers by `delta_ticks`.
    fn tick(&mut self, delta_ticks: u32, ctx: &mut Context);

    fn render(&self, f: &mut Frame, area: Rect, map: &mut ClickMap);
}

/// Map '1'..='9' to a zero-based index.
pub fn digit_index(ch: char) -> Option<usize> {
    match ch {
        '1'..='9' => Some(ch as usize - '1' as usize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths() {
        assert_eq!(Route::Landing.path(), "/");
        assert_eq!(Route::Assessment.path(), "/assessment");
        assert_eq!(Route::Results.path(), "/results");
    }

    #[test]
    fn digits() {
        assert_eq!(digit_index('1'), Some(0));
        assert_eq!(digit_index('9'), Some(8));
        assert_eq!(digit_index('0'), None);
        assert_eq!(digit_index('a'), None);
    }
}
