//! Application shell: header navigation, routing between screens and toasts.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::config::AppConfig;
use crate::console;
use crate::input::{is_narrow_layout, ClickMap, InputEvent};
use crate::notice::{NoticeBoard, NoticeKind};
use crate::screens::assessment::AssessmentScreen;
use crate::screens::landing::intake::KeywordExtractor;
use crate::screens::landing::{LandingScreen, ResumeSession};
use crate::screens::results::{CareerMatcher, ResultsScreen};
use crate::screens::{Context, Navigation, Outcome, Route, Screen};
use crate::store::KeyValueStore;
use crate::widgets::TabBar;

// Screen-independent click ids, kept clear of the per-screen ranges.
pub const NAV_HOME: u16 = 200;
pub const NAV_ASSESSMENT: u16 = 201;
pub const NAV_DISCOVER: u16 = 202;
pub const DISMISS_NOTICE: u16 = 210;

pub struct App {
    config: AppConfig,
    store: Box<dyn KeyValueStore>,
    matcher: Box<dyn CareerMatcher>,
    pub notices: NoticeBoard,
    /// Ticked on every route; only the landing screen shows it.
    resume: Rc<RefCell<ResumeSession>>,
    screen: Box<dyn Screen>,
}

impl App {
    pub fn new(
        config: AppConfig,
        mut store: Box<dyn KeyValueStore>,
        matcher: Box<dyn CareerMatcher>,
        extractor: Box<dyn KeywordExtractor>,
    ) -> Self {
        let notices = NoticeBoard::new(config.ticks(config.notice_ms));
        let resume = Rc::new(RefCell::new(ResumeSession::new(
            &config,
            store.as_mut(),
            extractor,
        )));
        Self {
            screen: Box::new(LandingScreen::new(resume.clone())),
            config,
            store,
            matcher,
            notices,
            resume,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    /// Replace the current screen with a fresh one. The old screen and any
    /// timers it owns are dropped; the resume session is not.
    pub fn navigate(&mut self, nav: Navigation) {
        let screen: Box<dyn Screen> = match nav {
            Navigation::Landing => Box::new(LandingScreen::new(self.resume.clone())),
            Navigation::Assessment => Box::new(AssessmentScreen::new(&self.config)),
            Navigation::Results(answers) => {
                match ResultsScreen::enter(answers, self.matcher.as_ref(), &self.config) {
                    Some(results) => Box::new(results),
                    None => {
                        console::log("no assessment answers, redirecting to /assessment");
                        Box::new(AssessmentScreen::new(&self.config))
                    }
                }
            }
        };
        self.screen = screen;
    }

    fn header_action(event: &InputEvent) -> Option<Navigation> {
        match event {
            InputEvent::Key('H') | InputEvent::Click(NAV_HOME) => Some(Navigation::Landing),
            InputEvent::Key('A') | InputEvent::Click(NAV_ASSESSMENT) => {
                Some(Navigation::Assessment)
            }
            InputEvent::Key('D') | InputEvent::Click(NAV_DISCOVER) => {
                Some(Navigation::Results(None))
            }
            _ => None,
        }
    }

    /// Route one input event. A navigation is applied before returning;
    /// `OpenFilePicker` is left to the caller, which owns the browser side.
    pub fn handle_input(&mut self, event: &InputEvent) -> Outcome {
        if let Some(nav) = Self::header_action(event) {
            self.navigate(nav.clone());
            return Outcome::Navigate(nav);
        }
        if *event == InputEvent::Click(DISMISS_NOTICE) {
            self.notices.dismiss_all();
            return Outcome::Handled;
        }

        let outcome = self.screen.handle_input(
            event,
            &mut Context {
                config: &self.config,
                store: self.store.as_mut(),
                notices: &mut self.notices,
            },
        );
        if let Outcome::Navigate(nav) = &outcome {
            self.navigate(nav.clone());
        }
        outcome
    }

    pub fn tick(&mut self, delta_ticks: u32) {
        if delta_ticks == 0 {
            return;
        }
        self.notices.tick(delta_ticks);
        self.resume.borrow_mut().tick(
            delta_ticks,
            self.store.as_mut(),
            self.config.skills_key,
            &mut self.notices,
        );
        self.screen.tick(
            delta_ticks,
            &mut Context {
                config: &self.config,
                store: self.store.as_mut(),
                notices: &mut self.notices,
            },
        );
    }

    pub fn render(&self, f: &mut Frame, map: &mut ClickMap) {
        let size = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(10)])
            .split(size);

        self.render_header(f, chunks[0], map);
        self.screen.render(f, chunks[1], map);
        self.render_notices(f, chunks[1], map);
    }

    fn render_header(&self, f: &mut Frame, area: Rect, map: &mut ClickMap) {
        let route = self.route();
        let title = if is_narrow_layout(area.width) {
            " CareerPath ".to_string()
        } else {
            format!(" CareerPath  {} ", route.path())
        };
        TabBar::new(Color::Cyan)
            .tab("Home", route == Route::Landing, NAV_HOME)
            .tab("Assessment", route == Route::Assessment, NAV_ASSESSMENT)
            .tab("Discover", route == Route::Results, NAV_DISCOVER)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        title,
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )),
            )
            .render(f, area, map);
    }

    /// Notices as toasts stacked up from the bottom of the body, newest
    /// lowest. Tapping any of them dismisses all.
    fn render_notices(&self, f: &mut Frame, body: Rect, map: &mut ClickMap) {
        const TOAST_HEIGHT: u16 = 4;
        let width = body.width.min(60);
        let mut bottom = body.y + body.height;

        for notice in self.notices.iter() {
            if bottom < body.y + TOAST_HEIGHT {
                break;
            }
            let area = Rect::new(
                body.x + body.width.saturating_sub(width),
                bottom - TOAST_HEIGHT,
                width,
                TOAST_HEIGHT,
            );
            bottom = area.y;

            let color = match notice.kind {
                NoticeKind::Info => Color::Green,
                NoticeKind::Error => Color::Red,
            };
            let lines = vec![
                Line::from(Span::styled(
                    notice.title.as_str(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    notice.description.as_str(),
                    Style::default().fg(Color::Gray),
                )),
            ];
            f.render_widget(Clear, area);
            f.render_widget(
                Paragraph::new(lines)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(color)),
                    )
                    .wrap(Wrap { trim: true }),
                area,
            );
            map.add(area, DISMISS_NOTICE);
        }
    }
}
