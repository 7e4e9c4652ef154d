//! Results view state: loading phase, tabs and scrolling.

use std::cell::Cell;

use crate::catalog::{CareerEntry, ANALYSIS_STEPS, RECOMMENDED_COUNT};
use crate::config::AppConfig;
use crate::screens::assessment::AnswerMap;
use crate::time::Countdown;

use super::matcher::CareerMatcher;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTab {
    Recommended,
    All,
    Saved,
}

impl ResultTab {
    pub const ALL: [ResultTab; 3] = [ResultTab::Recommended, ResultTab::All, ResultTab::Saved];

    pub fn label(self) -> &'static str {
        match self {
            ResultTab::Recommended => "Recommended",
            ResultTab::All => "All Matches",
            ResultTab::Saved => "Saved",
        }
    }

    fn index(self) -> usize {
        match self {
            ResultTab::Recommended => 0,
            ResultTab::All => 1,
            ResultTab::Saved => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading(Countdown),
    Ready,
}

pub struct ResultsView {
    pub answers: AnswerMap,
    careers: Vec<CareerEntry>,
    pub phase: Phase,
    pub tab: ResultTab,
    scroll: u16,
    /// Largest useful scroll offset, refreshed by the renderer every frame.
    max_scroll: Cell<u16>,
    stagger_ticks: u32,
}

impl ResultsView {
    /// `None` when there are no answers to show results for; the caller
    /// redirects instead of rendering anything.
    pub fn enter(
        answers: Option<AnswerMap>,
        matcher: &dyn CareerMatcher,
        config: &AppConfig,
    ) -> Option<Self> {
        let answers = answers?;
        let careers = matcher.rank(&answers);
        Some(Self {
            answers,
            careers,
            phase: Phase::Loading(Countdown::new(config.ticks(config.results_delay_ms))),
            tab: ResultTab::Recommended,
            scroll: 0,
            max_scroll: Cell::new(u16::MAX),
            stagger_ticks: config.ticks(config.analysis_stagger_ms),
        })
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn tick(&mut self, delta_ticks: u32) {
        if let Phase::Loading(countdown) = &mut self.phase {
            if countdown.advance(delta_ticks) {
                self.phase = Phase::Ready;
            }
        }
    }

    /// Fill level (0..=100) of analysis step `step` while loading.
    ///
    /// Steps start one stagger apart and all reach 100 when loading ends.
    pub fn analysis_progress(&self, step: usize) -> u16 {
        let countdown = match self.phase {
            Phase::Loading(c) => c,
            Phase::Ready => return 100,
        };
        let steps = ANALYSIS_STEPS.len() as u32;
        let start = self.stagger_ticks * step as u32;
        let fill = countdown
            .total()
            .saturating_sub(self.stagger_ticks * (steps - 1))
            .max(1);
        let into = countdown.elapsed().saturating_sub(start);
        (into.min(fill) * 100 / fill) as u16
    }

    /// Careers listed on the active tab.
    pub fn visible_careers(&self) -> &[CareerEntry] {
        match self.tab {
            ResultTab::Recommended => &self.careers[..RECOMMENDED_COUNT.min(self.careers.len())],
            ResultTab::All => &self.careers,
            ResultTab::Saved => &[],
        }
    }

    pub fn select_tab(&mut self, tab: ResultTab) -> bool {
        if !self.is_ready() || self.tab == tab {
            return false;
        }
        self.tab = tab;
        self.scroll = 0;
        true
    }

    pub fn scroll(&self) -> u16 {
        self.scroll.min(self.max_scroll.get())
    }

    pub fn scroll_by(&mut self, delta: i32) -> bool {
        if !self.is_ready() {
            return false;
        }
        let current = self.scroll();
        let target = (current as i32 + delta).clamp(0, self.max_scroll.get() as i32) as u16;
        self.scroll = target;
        target != current
    }

    pub(super) fn set_max_scroll(&self, max: u16) {
        self.max_scroll.set(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::results::matcher::StaticMatcher;

    fn view() -> ResultsView {
        let mut answers = AnswerMap::new();
        answers.insert(1, "Creating or designing things");
        ResultsView::enter(Some(answers), &StaticMatcher, &AppConfig::default()).unwrap()
    }

    #[test]
    fn no_answers_no_view() {
        assert!(ResultsView::enter(None, &StaticMatcher, &AppConfig::default()).is_none());
    }

    #[test]
    fn empty_answers_still_show_results() {
        let v = ResultsView::enter(Some(AnswerMap::new()), &StaticMatcher, &AppConfig::default());
        assert!(v.is_some());
    }

    #[test]
    fn loading_lasts_one_and_a_half_seconds() {
        let mut v = view();
        assert!(!v.is_ready());
        v.tick(29);
        assert!(!v.is_ready());
        v.tick(1);
        assert!(v.is_ready());
    }

    #[test]
    fn analysis_bars_are_staggered() {
        let mut v = view();
        assert_eq!(v.analysis_progress(0), 0);
        v.tick(10);
        assert_eq!(v.analysis_progress(0), 100);
        assert_eq!(v.analysis_progress(1), 0);
        v.tick(5);
        assert_eq!(v.analysis_progress(1), 50);
        assert_eq!(v.analysis_progress(2), 0);
        v.tick(14);
        assert_eq!(v.analysis_progress(2), 90);
        v.tick(1);
        assert_eq!(v.analysis_progress(2), 100);
    }

    #[test]
    fn recommended_is_top_three_in_order() {
        let mut v = view();
        v.tick(30);
        let titles: Vec<&str> = v.visible_careers().iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec!["UX/UI Designer", "Data Scientist", "Digital Marketing Specialist"]
        );
    }

    #[test]
    fn all_and_saved_tabs() {
        let mut v = view();
        v.tick(30);
        assert!(v.select_tab(ResultTab::All));
        assert_eq!(v.visible_careers().len(), 6);
        assert!(v.select_tab(ResultTab::Saved));
        assert!(v.visible_careers().is_empty());
        assert!(!v.select_tab(ResultTab::Saved));
    }

    #[test]
    fn tabs_locked_while_loading() {
        let mut v = view();
        assert!(!v.select_tab(ResultTab::All));
        assert_eq!(v.tab, ResultTab::Recommended);
    }

    #[test]
    fn tab_cycle() {
        assert_eq!(ResultTab::Recommended.next(), ResultTab::All);
        assert_eq!(ResultTab::Saved.next(), ResultTab::Recommended);
        assert_eq!(ResultTab::Recommended.prev(), ResultTab::Saved);
    }

    #[test]
    fn scroll_is_clamped_and_reset_on_tab_change() {
        let mut v = view();
        v.tick(30);
        v.set_max_scroll(4);
        assert!(v.scroll_by(10));
        assert_eq!(v.scroll(), 4);
        assert!(!v.scroll_by(1));
        assert!(v.scroll_by(-1));
        assert_eq!(v.scroll(), 3);
        v.select_tab(ResultTab::All);
        assert_eq!(v.scroll(), 0);
        assert!(!v.scroll_by(-3));
    }
}
