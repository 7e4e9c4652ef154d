//! Results rendering (read-only from state, apart from the scroll bound).

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::catalog::{CareerEntry, ANALYSIS_STEPS, NEXT_STEPS, VALUE_SUMMARY};
use crate::input::{is_narrow_layout, ClickMap};
use crate::widgets::{percent_bar, ClickableList, TabBar};

use super::actions::*;
use super::state::{Phase, ResultTab, ResultsView};

/// Industries listed on a card before collapsing into "+N more".
const INDUSTRY_PREVIEW: usize = 3;

pub fn render(view: &ResultsView, f: &mut Frame, area: Rect, map: &mut ClickMap) {
    match view.phase {
        Phase::Loading(_) => render_loading(view, f, area),
        Phase::Ready => render_ready(view, f, area, map),
    }
}

// ── Loading ────────────────────────────────────────────────────────────

fn render_loading(view: &ResultsView, f: &mut Frame, area: Rect) {
    let bar_width = if is_narrow_layout(area.width) { 12 } else { 30 };
    let mut lines = vec![
        Line::from(Span::styled(
            " Analyzing your responses...",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                " Matching {} answers against career paths",
                view.answers.len()
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    for (i, step) in ANALYSIS_STEPS.iter().enumerate() {
        let pct = view.analysis_progress(i);
        let color = if pct >= 100 { Color::Green } else { Color::Cyan };
        lines.push(Line::from(vec![
            Span::styled(format!(" {step:<22}"), Style::default().fg(Color::Gray)),
            Span::styled(percent_bar(pct, bar_width), Style::default().fg(color)),
            Span::styled(format!(" {pct:>3}%"), Style::default().fg(Color::White)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Your Career Matches ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

// ── Ready ──────────────────────────────────────────────────────────────

fn render_ready(view: &ResultsView, f: &mut Frame, area: Rect, map: &mut ClickMap) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(6),    // Cards
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let mut tabs = TabBar::new(Color::Magenta).block(
        Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Your Career Matches "),
    );
    for (tab, id) in ResultTab::ALL
        .iter()
        .zip([TAB_RECOMMENDED, TAB_ALL, TAB_SAVED])
    {
        tabs = tabs.tab(tab.label(), *tab == view.tab, id);
    }
    tabs.render(f, chunks[0], map);

    render_content(view, f, chunks[1], borders, is_narrow, map);
    render_footer(f, chunks[2], borders, map);
}

fn render_content(
    view: &ResultsView,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    is_narrow: bool,
    map: &mut ClickMap,
) {
    let cl = content_lines(view, is_narrow);

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Blue))
        .title(format!(" {} ", view.tab.label()));
    let inner = block.inner(area);

    let paragraph = Paragraph::new(cl.lines().to_vec()).wrap(Wrap { trim: false });
    let total = paragraph.line_count(inner.width) as u16;
    view.set_max_scroll(total.saturating_sub(inner.height));
    let scroll = view.scroll();

    let top = u16::from(borders.contains(Borders::TOP));
    let bottom = u16::from(borders.contains(Borders::BOTTOM));
    cl.register(area, map, top, bottom, scroll, inner.width);

    f.render_widget(paragraph.block(block).scroll((scroll, 0)), area);
}

/// Tab content followed by the sections shown under every tab.
fn content_lines(view: &ResultsView, is_narrow: bool) -> ClickableList<'static> {
    let mut cl = ClickableList::new();
    if view.tab == ResultTab::Saved {
        saved_empty_state(&mut cl);
        cl.push("");
    } else {
        for career in view.visible_careers() {
            career_card(&mut cl, career, is_narrow);
        }
    }
    next_steps(&mut cl);
    assessment_summary(&mut cl, if is_narrow { 10 } else { 20 });
    cl
}

fn career_card(cl: &mut ClickableList<'static>, career: &CareerEntry, is_narrow: bool) {
    cl.push(Line::from(vec![
        Span::styled(
            format!(" {}", career.title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}% Match", career.match_score),
            Style::default().fg(score_color(career.match_score)),
        ),
    ]));
    cl.push(Line::from(Span::styled(
        format!("   {}", career.description),
        Style::default().fg(Color::Gray),
    )));
    if is_narrow {
        cl.push(detail_line("Salary", career.salary));
        cl.push(detail_line("Growth", career.growth));
    } else {
        cl.push(Line::from(vec![
            Span::styled("   Salary: ", Style::default().fg(Color::DarkGray)),
            Span::styled(career.salary, Style::default().fg(Color::Green)),
            Span::styled("   Growth: ", Style::default().fg(Color::DarkGray)),
            Span::styled(career.growth, Style::default().fg(Color::Yellow)),
        ]));
    }
    cl.push(Line::from(vec![
        Span::styled("   Education: ", Style::default().fg(Color::DarkGray)),
        Span::styled(career.education, Style::default().fg(Color::White)),
        Span::styled(
            format!("   Industries: {}", career.industries.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    cl.push(Line::from(Span::styled(
        format!("   {}", industry_preview(career.industries)),
        Style::default().fg(Color::Cyan),
    )));
    cl.push("");
}

fn detail_line(label: &'static str, value: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("   {label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// `"Technology · Marketing · E-commerce  +2 more"`
pub fn industry_preview(industries: &[&str]) -> String {
    let shown = industries
        .iter()
        .take(INDUSTRY_PREVIEW)
        .copied()
        .collect::<Vec<_>>()
        .join(" · ");
    match industries.len().saturating_sub(INDUSTRY_PREVIEW) {
        0 => shown,
        more => format!("{shown}  +{more} more"),
    }
}

fn score_color(score: u8) -> Color {
    match score {
        90.. => Color::Green,
        80..=89 => Color::Cyan,
        _ => Color::Yellow,
    }
}

fn next_steps(cl: &mut ClickableList<'static>) {
    cl.push(Line::from(Span::styled(
        " Next Steps",
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    )));
    for step in NEXT_STEPS {
        cl.push(Line::from(Span::styled(
            format!("   • {step}"),
            Style::default().fg(Color::Gray),
        )));
    }
    cl.push("");
}

fn assessment_summary(cl: &mut ClickableList<'static>, bar_width: usize) {
    cl.push(Line::from(Span::styled(
        " Your Assessment Summary",
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    )));
    for (label, pct) in VALUE_SUMMARY {
        cl.push(Line::from(vec![
            Span::styled(format!("   {label:<16}"), Style::default().fg(Color::Gray)),
            Span::styled(percent_bar(pct, bar_width), Style::default().fg(Color::Magenta)),
            Span::styled(format!(" {pct}%"), Style::default().fg(Color::White)),
        ]));
    }
}

fn saved_empty_state(cl: &mut ClickableList<'static>) {
    cl.push("");
    cl.push(Line::from(Span::styled(
        " No saved careers yet",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        " Save careers you're interested in to compare them later.",
        Style::default().fg(Color::DarkGray),
    )));
    cl.push("");
    cl.push_choice(
        'e',
        "Explore Recommendations",
        Style::default().fg(Color::Cyan),
        EXPLORE,
    );
}

fn render_footer(f: &mut Frame, area: Rect, borders: Borders, map: &mut ClickMap) {
    TabBar::new(Color::White)
        .tab("↻ Retake Assessment (t)", false, RETAKE)
        .tab("▲", false, SCROLL_UP)
        .tab("▼", false, SCROLL_DOWN)
        .block(
            Block::default()
                .borders(borders)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(f, area, map);
}
