//! Landing screen: entry to the assessment and the resume intake.

pub mod actions;
pub mod intake;
pub mod render;
pub mod session;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::console;
use crate::input::{ClickMap, InputEvent, SelectedFile};
use crate::screens::{digit_index, Context, Navigation, Outcome, Route, Screen};

use actions::*;
pub use session::ResumeSession;

/// Skills beyond this many get no remove shortcut.
pub const MAX_REMOVABLE_SKILLS: usize = 9;

/// A view over the app's [`ResumeSession`]. The session's timers are ticked
/// by the app, not by this screen.
pub struct LandingScreen {
    session: Rc<RefCell<ResumeSession>>,
}

impl LandingScreen {
    pub fn new(session: Rc<RefCell<ResumeSession>>) -> Self {
        Self { session }
    }

    pub fn remove_skill(&mut self, index: usize, ctx: &mut Context) -> bool {
        self.session
            .borrow_mut()
            .profile
            .remove(index, ctx.store, ctx.config.skills_key)
    }

    fn select_file(&mut self, file: &SelectedFile, ctx: &mut Context) -> Outcome {
        // A rejected file still counts as handled: the notice is the feedback.
        let result = self
            .session
            .borrow_mut()
            .intake
            .select_file(file.clone(), ctx.notices);
        if let Err(e) = result {
            console::log(&format!("file rejected: {e}"));
        }
        Outcome::Handled
    }

    fn browse(&self) -> Outcome {
        if self.session.borrow().intake.is_busy() {
            Outcome::Ignored
        } else {
            Outcome::OpenFilePicker
        }
    }

    fn process(&mut self) -> Outcome {
        Outcome::handled_if(self.session.borrow_mut().intake.start().is_ok())
    }

    fn remove_file(&mut self) -> Outcome {
        Outcome::handled_if(self.session.borrow_mut().intake.remove_file())
    }

    fn view_recommendations(&self) -> Outcome {
        if self.session.borrow().profile.processed {
            Outcome::Navigate(Navigation::Results(None))
        } else {
            Outcome::Ignored
        }
    }

    fn handle_key(&mut self, key: char, ctx: &mut Context) -> Outcome {
        match key {
            's' | '\n' => Outcome::Navigate(Navigation::Assessment),
            'r' => self.view_recommendations(),
            'b' => self.browse(),
            'p' => self.process(),
            'x' => self.remove_file(),
            _ => match digit_index(key) {
                Some(i) => Outcome::handled_if(self.remove_skill(i, ctx)),
                None => Outcome::Ignored,
            },
        }
    }

    fn handle_click(&mut self, action_id: u16, ctx: &mut Context) -> Outcome {
        match action_id {
            START_ASSESSMENT => Outcome::Navigate(Navigation::Assessment),
            VIEW_RECOMMENDATIONS => self.view_recommendations(),
            BROWSE_FILES => self.browse(),
            PROCESS_RESUME => self.process(),
            REMOVE_FILE => self.remove_file(),
            id if (REMOVE_SKILL_BASE..REMOVE_SKILL_BASE + MAX_REMOVABLE_SKILLS as u16)
                .contains(&id) =>
            {
                Outcome::handled_if(self.remove_skill((id - REMOVE_SKILL_BASE) as usize, ctx))
            }
            _ => Outcome::Ignored,
        }
    }
}

impl Screen for LandingScreen {
    fn route(&self) -> Route {
        Route::Landing
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut Context) -> Outcome {
        match event {
            InputEvent::Key(c) => self.handle_key(*c, ctx),
            InputEvent::Click(id) => self.handle_click(*id, ctx),
            InputEvent::File(file) => self.select_file(file, ctx),
        }
    }

    fn tick(&mut self, _delta_ticks: u32, _ctx: &mut Context) {}

    fn render(&self, f: &mut Frame, area: Rect, map: &mut ClickMap) {
        render::render(&self.session.borrow(), f, area, map);
    }
}
