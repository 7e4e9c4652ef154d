//! Five-question career assessment.

pub mod actions;
pub mod presenter;
pub mod render;
pub mod state;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::catalog::QUESTIONS;
use crate::config::AppConfig;
use crate::input::{ClickMap, InputEvent};
use crate::screens::{digit_index, Context, Navigation, Outcome, Route, Screen};

use actions::*;
pub use state::{AnswerMap, AssessmentFlow};

pub struct AssessmentScreen {
    pub flow: AssessmentFlow,
}

impl AssessmentScreen {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            flow: AssessmentFlow::new(&QUESTIONS, config.ticks(config.selection_confirm_ms)),
        }
    }

    fn select(&mut self, index: usize) -> Outcome {
        match self.flow.select_option(index) {
            Ok(()) => Outcome::Handled,
            Err(_) => Outcome::Ignored,
        }
    }

    fn proceed(&mut self) -> Outcome {
        if !self.flow.can_proceed() {
            return Outcome::Ignored;
        }
        navigate_or_handled(self.flow.advance())
    }

    fn back(&mut self) -> Outcome {
        navigate_or_handled(self.flow.retreat())
    }

    fn view_results(&self) -> Outcome {
        self.flow
            .view_results()
            .map_or(Outcome::Ignored, Outcome::Navigate)
    }

    fn handle_key(&mut self, key: char) -> Outcome {
        match key {
            'n' | '\n' => self.proceed(),
            'b' | 'q' => self.back(),
            'v' => self.view_results(),
            _ => match digit_index(key) {
                Some(i) => self.select(i),
                None => Outcome::Ignored,
            },
        }
    }

    fn handle_click(&mut self, action_id: u16) -> Outcome {
        match action_id {
            NEXT => self.proceed(),
            BACK => self.back(),
            VIEW_RESULTS => self.view_results(),
            id if (OPTION_BASE..OPTION_BASE + 4).contains(&id) => {
                self.select((id - OPTION_BASE) as usize)
            }
            _ => Outcome::Ignored,
        }
    }
}

fn navigate_or_handled(nav: Option<Navigation>) -> Outcome {
    nav.map_or(Outcome::Handled, Outcome::Navigate)
}

impl Screen for AssessmentScreen {
    fn route(&self) -> Route {
        Route::Assessment
    }

    fn handle_input(&mut self, event: &InputEvent, _ctx: &mut Context) -> Outcome {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
            _ => Outcome::Ignored,
        }
    }

    fn tick(&mut self, delta_ticks: u32, _ctx: &mut Context) {
        self.flow.tick(delta_ticks);
    }

    fn render(&self, f: &mut Frame, area: Rect, map: &mut ClickMap) {
        render::render(&self.flow, f, area, map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeBoard;
    use crate::store::MemoryStore;

    struct Harness {
        config: AppConfig,
        store: MemoryStore,
        notices: NoticeBoard,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                config: AppConfig::default(),
                store: MemoryStore::new(),
                notices: NoticeBoard::new(80),
            }
        }

        fn press(&mut self, screen: &mut AssessmentScreen, event: InputEvent) -> Outcome {
            let mut ctx = Context {
                config: &self.config,
                store: &mut self.store,
                notices: &mut self.notices,
            };
            screen.handle_input(&event, &mut ctx)
        }

        fn wait(&mut self, screen: &mut AssessmentScreen, ticks: u32) {
            let mut ctx = Context {
                config: &self.config,
                store: &mut self.store,
                notices: &mut self.notices,
            };
            screen.tick(ticks, &mut ctx);
        }
    }

    #[test]
    fn next_needs_confirm_delay() {
        let mut h = Harness::new();
        let mut screen = AssessmentScreen::new(&h.config);
        assert_eq!(h.press(&mut screen, InputEvent::Key('2')), Outcome::Handled);
        assert_eq!(h.press(&mut screen, InputEvent::Key('n')), Outcome::Ignored);
        h.wait(&mut screen, 8); // 400 ms
        assert_eq!(h.press(&mut screen, InputEvent::Key('n')), Outcome::Handled);
        assert_eq!(screen.flow.current_index(), 1);
    }

    #[test]
    fn full_run_by_clicks_ends_on_results() {
        let mut h = Harness::new();
        let mut screen = AssessmentScreen::new(&h.config);
        for q in 0..5 {
            h.press(&mut screen, InputEvent::Click(OPTION_BASE + (q % 4) as u16));
            h.wait(&mut screen, 8);
            let outcome = h.press(&mut screen, InputEvent::Click(NEXT));
            if q < 4 {
                assert_eq!(outcome, Outcome::Handled);
            } else {
                match outcome {
                    Outcome::Navigate(Navigation::Results(Some(answers))) => {
                        assert_eq!(answers.len(), 5);
                        assert_eq!(answers.get(1), Some("Solving complex problems or puzzles"));
                    }
                    other => panic!("unexpected {other:?}"),
                }
            }
        }
    }

    #[test]
    fn escape_on_first_question_goes_home() {
        let mut h = Harness::new();
        let mut screen = AssessmentScreen::new(&h.config);
        assert_eq!(
            h.press(&mut screen, InputEvent::Key('q')),
            Outcome::Navigate(Navigation::Landing)
        );
    }

    #[test]
    fn view_results_ignored_until_complete() {
        let mut h = Harness::new();
        let mut screen = AssessmentScreen::new(&h.config);
        assert_eq!(h.press(&mut screen, InputEvent::Key('v')), Outcome::Ignored);
        assert_eq!(h.press(&mut screen, InputEvent::Click(VIEW_RESULTS)), Outcome::Ignored);
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut h = Harness::new();
        let mut screen = AssessmentScreen::new(&h.config);
        assert_eq!(h.press(&mut screen, InputEvent::Key('5')), Outcome::Ignored);
        assert!(screen.flow.answers().is_empty());
    }
}
