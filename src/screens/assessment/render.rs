//! Assessment rendering (read-only from state).

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickMap};
use crate::widgets::ClickableList;

use super::actions::*;
use super::state::AssessmentFlow;

pub fn render(flow: &AssessmentFlow, f: &mut Frame, area: Rect, map: &mut ClickMap) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Progress
            Constraint::Min(10),   // Question card
            Constraint::Length(4), // Footer
        ])
        .split(area);

    render_progress(flow, f, chunks[0], borders);
    render_question(flow, f, chunks[1], borders, map);
    render_footer(flow, f, chunks[2], borders, is_narrow, map);
}

fn render_progress(flow: &AssessmentFlow, f: &mut Frame, area: Rect, borders: Borders) {
    let percent = flow.progress_percent().round() as u16;
    let title = format!(
        " Question {} of {} ",
        flow.current_index() + 1,
        flow.question_count()
    );
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(borders)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    title,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
        )
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(percent.min(100))
        .label(format!("{percent}% Complete"));
    f.render_widget(gauge, area);
}

fn render_question(
    flow: &AssessmentFlow,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    map: &mut ClickMap,
) {
    let question = flow.current_question();
    let presenter = flow.presenter();
    let mut cl = ClickableList::new();

    cl.push(Line::from(Span::styled(
        format!(" {}", question.text),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    cl.push("");

    for (i, option) in question.options.iter().enumerate() {
        let key = (b'1' + i as u8) as char;
        let chosen = presenter.selected() == Some(*option);
        let (label, style) = if chosen {
            (
                format!("● {option}"),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            (format!("○ {option}"), Style::default().fg(Color::Gray))
        };
        cl.push_choice(key, label, style, OPTION_BASE + i as u16);
    }

    if presenter.proceed_ready() {
        cl.push("");
        cl.push_choice(
            'n',
            "Next →",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            NEXT,
        );
    }

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Blue))
        .title(" Career Assessment ");
    let top = u16::from(borders.contains(Borders::TOP));
    let bottom = u16::from(borders.contains(Borders::BOTTOM));
    let side = u16::from(borders.contains(Borders::LEFT)) * 2;
    cl.register(area, map, top, bottom, 0, area.width.saturating_sub(side));

    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn render_footer(
    flow: &AssessmentFlow,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    is_narrow: bool,
    map: &mut ClickMap,
) {
    let mut cl = ClickableList::new();
    let back = match (flow.is_first(), is_narrow) {
        (true, true) => "← Home",
        (true, false) => "← Back to Home",
        (false, true) => "← Previous",
        (false, false) => "← Previous Question",
    };
    cl.push_choice('b', back, Style::default().fg(Color::White), BACK);

    if flow.can_view_results() {
        cl.push_choice(
            'v',
            "View Results",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            VIEW_RESULTS,
        );
    } else {
        cl.push(Line::from(Span::styled(
            format!(
                "     {} of {} answered",
                flow.answers().len(),
                flow.question_count()
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let top = u16::from(borders.contains(Borders::TOP));
    let bottom = u16::from(borders.contains(Borders::BOTTOM));
    cl.register(area, map, top, bottom, 0, 0);

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}
