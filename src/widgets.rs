//! Clickable building blocks shared by the screens.
//!
//! Each widget draws itself and registers its own click regions in the same
//! call, so a label can never be drawn in one place and be clickable in another.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::ClickMap;

const TAB_GAP: &str = " │ ";

/// One-row tab strip (header navigation, result tabs).
pub struct TabBar<'a> {
    tabs: Vec<(String, bool, u16)>,
    accent: Color,
    block: Option<Block<'a>>,
}

impl<'a> TabBar<'a> {
    pub fn new(accent: Color) -> Self {
        Self {
            tabs: Vec::new(),
            accent,
            block: None,
        }
    }

    pub fn tab(mut self, label: impl Into<String>, active: bool, action_id: u16) -> Self {
        self.tabs.push((label.into(), active, action_id));
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, map: &mut ClickMap) {
        let gap_width = Line::from(TAB_GAP).width() as u16;
        let mut spans = Vec::new();
        let mut widths = Vec::new();

        for (i, (label, active, action_id)) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(TAB_GAP, Style::default().fg(Color::DarkGray)));
            }
            let padded = format!(" {label} ");
            widths.push((Line::from(padded.as_str()).width() as u16, *action_id));
            let style = if *active {
                Style::default()
                    .fg(Color::Black)
                    .bg(self.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(padded, style));
        }

        let inner = self.block.as_ref().map_or(area, |b| b.inner(area));
        let paragraph = Paragraph::new(Line::from(spans));
        let paragraph = match self.block {
            Some(block) => paragraph.block(block),
            None => paragraph,
        };
        f.render_widget(paragraph, area);

        // Full outer height so taps on the border still land on a tab.
        map.add_tabs(
            &widths,
            gap_width,
            Rect::new(inner.x, area.y, inner.width, area.height.max(1)),
        );
    }
}

/// Lines for a `Paragraph`, some of them clickable.
///
/// Clickable lines remember their index, so inserting a line above them moves
/// their click region with them.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    actions: Vec<(usize, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: impl Into<Line<'a>>) {
        self.lines.push(line.into());
    }

    pub fn push_clickable(&mut self, line: impl Into<Line<'a>>, action_id: u16) {
        self.actions.push((self.lines.len(), action_id));
        self.lines.push(line.into());
    }

    /// A `[key] label` choice row.
    pub fn push_choice(&mut self, key: char, label: impl Into<String>, style: Style, action_id: u16) {
        let line = Line::from(vec![
            Span::styled(
                format!(" [{key}] "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(label.into(), style),
        ]);
        self.push_clickable(line, action_id);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click regions for the clickable lines.
    ///
    /// `top`/`bottom` are the rows taken by borders, `scroll` the paragraph's
    /// vertical scroll in visual rows. With `wrap_width > 0` a line wider than
    /// that spans several rows (all of them clickable); with `0` every line is
    /// one row.
    pub fn register(
        &self,
        area: Rect,
        map: &mut ClickMap,
        top: u16,
        bottom: u16,
        scroll: u16,
        wrap_width: u16,
    ) {
        let first_row = area.y + top;
        let end_row = area.y + area.height.saturating_sub(bottom);

        let mut visual_start = Vec::with_capacity(self.lines.len());
        let mut row = 0u16;
        for line in &self.lines {
            visual_start.push(row);
            row += visual_height(line, wrap_width);
        }

        for &(index, action_id) in &self.actions {
            let start = visual_start[index];
            let height = visual_height(&self.lines[index], wrap_width);
            for v in start..start + height {
                if v < scroll {
                    continue;
                }
                let screen_row = first_row + (v - scroll);
                if screen_row >= end_row {
                    break;
                }
                map.add_row(area, screen_row, action_id);
            }
        }
    }
}

/// Rows a line takes once word-wrapped, measured the way `Paragraph` wraps.
fn visual_height(line: &Line, wrap_width: u16) -> u16 {
    if wrap_width == 0 || line.width() <= wrap_width as usize {
        return 1;
    }
    Paragraph::new(line.clone())
        .wrap(Wrap { trim: false })
        .line_count(wrap_width)
        .max(1) as u16
}

/// `██████░░░░` style bar for percentages.
pub fn percent_bar(percent: u16, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    "█".repeat(filled) + &"░".repeat(width - filled)
}
