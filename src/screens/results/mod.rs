//! Career recommendations computed from the assessment answers.

pub mod actions;
pub mod matcher;
pub mod render;
pub mod state;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::config::AppConfig;
use crate::input::{ClickMap, InputEvent};
use crate::screens::assessment::AnswerMap;
use crate::screens::{Context, Navigation, Outcome, Route, Screen};

use actions::*;
pub use matcher::{CareerMatcher, StaticMatcher};
pub use state::{Phase, ResultTab, ResultsView};

/// Rows moved per scroll key press.
const SCROLL_STEP: i32 = 3;

pub struct ResultsScreen {
    pub view: ResultsView,
}

impl ResultsScreen {
    /// `None` when `answers` is missing; see [`ResultsView::enter`].
    pub fn enter(
        answers: Option<AnswerMap>,
        matcher: &dyn CareerMatcher,
        config: &AppConfig,
    ) -> Option<Self> {
        ResultsView::enter(answers, matcher, config).map(|view| Self { view })
    }

    fn tab(&mut self, tab: ResultTab) -> Outcome {
        Outcome::handled_if(self.view.select_tab(tab))
    }

    fn scroll(&mut self, delta: i32) -> Outcome {
        Outcome::handled_if(self.view.scroll_by(delta))
    }

    fn retake(&self) -> Outcome {
        if self.view.is_ready() {
            Outcome::Navigate(Navigation::Assessment)
        } else {
            Outcome::Ignored
        }
    }

    fn explore(&mut self) -> Outcome {
        if self.view.tab != ResultTab::Saved {
            return Outcome::Ignored;
        }
        self.tab(ResultTab::Recommended)
    }

    fn handle_key(&mut self, key: char) -> Outcome {
        match key {
            '1' => self.tab(ResultTab::Recommended),
            '2' => self.tab(ResultTab::All),
            '3' => self.tab(ResultTab::Saved),
            '>' => self.tab(self.view.tab.next()),
            '<' => self.tab(self.view.tab.prev()),
            '↑' => self.scroll(-SCROLL_STEP),
            '↓' => self.scroll(SCROLL_STEP),
            't' => self.retake(),
            'e' => self.explore(),
            _ => Outcome::Ignored,
        }
    }

    fn handle_click(&mut self, action_id: u16) -> Outcome {
        match action_id {
            TAB_RECOMMENDED => self.tab(ResultTab::Recommended),
            TAB_ALL => self.tab(ResultTab::All),
            TAB_SAVED => self.tab(ResultTab::Saved),
            RETAKE => self.retake(),
            EXPLORE => self.explore(),
            SCROLL_UP => self.scroll(-SCROLL_STEP),
            SCROLL_DOWN => self.scroll(SCROLL_STEP),
            _ => Outcome::Ignored,
        }
    }
}

impl Screen for ResultsScreen {
    fn route(&self) -> Route {
        Route::Results
    }

    fn handle_input(&mut self, event: &InputEvent, _ctx: &mut Context) -> Outcome {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
            InputEvent::File(_) => Outcome::Ignored,
        }
    }

    fn tick(&mut self, delta_ticks: u32, _ctx: &mut Context) {
        self.view.tick(delta_ticks);
    }

    fn render(&self, f: &mut Frame, area: Rect, map: &mut ClickMap) {
        render::render(&self.view, f, area, map);
    }
}
