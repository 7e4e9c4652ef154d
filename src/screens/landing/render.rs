//! Landing rendering (read-only from state).

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickMap};
use crate::widgets::{percent_bar, ClickableList};

use super::actions::*;
use super::intake::IntakeState;
use super::{ResumeSession, MAX_REMOVABLE_SKILLS};

pub fn render(session: &ResumeSession, f: &mut Frame, area: Rect, map: &mut ClickMap) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    // Side by side on wide screens, stacked on phones.
    let chunks = Layout::default()
        .direction(if is_narrow {
            Direction::Vertical
        } else {
            Direction::Horizontal
        })
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_hero(session, f, chunks[0], borders, map);
    render_upload(session, f, chunks[1], borders, is_narrow, map);
}

fn inner_width(area: Rect, borders: Borders) -> u16 {
    area.width
        .saturating_sub(u16::from(borders.contains(Borders::LEFT)) * 2)
}

fn register(cl: &ClickableList, area: Rect, borders: Borders, map: &mut ClickMap) {
    let top = u16::from(borders.contains(Borders::TOP));
    let bottom = u16::from(borders.contains(Borders::BOTTOM));
    cl.register(area, map, top, bottom, 0, inner_width(area, borders));
}

// ── Hero ───────────────────────────────────────────────────────────────

fn render_hero(
    session: &ResumeSession,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    map: &mut ClickMap,
) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(vec![
        Span::styled(
            " Discover Your Ideal ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Career Path",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]));
    cl.push("");
    cl.push(Line::from(Span::styled(
        " Take our assessment to find career recommendations tailored to your unique \
         skills, interests, and values. Or upload your resume for even more \
         personalized matches.",
        Style::default().fg(Color::Gray),
    )));
    cl.push("");
    cl.push_choice(
        's',
        "Start Assessment →",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        START_ASSESSMENT,
    );

    let profile = &session.profile;
    if profile.processed {
        cl.push_choice(
            'r',
            "View Recommendations",
            Style::default().fg(Color::White),
            VIEW_RECOMMENDATIONS,
        );
        if !profile.skills.is_empty() {
            cl.push("");
            cl.push(Line::from(Span::styled(
                " Skills extracted from your resume:",
                Style::default().fg(Color::Gray),
            )));
            for (i, skill) in profile.skills.iter().enumerate() {
                if i < MAX_REMOVABLE_SKILLS {
                    let key = (b'1' + i as u8) as char;
                    cl.push_choice(
                        key,
                        format!("{skill}  ✕"),
                        Style::default().fg(Color::Magenta),
                        REMOVE_SKILL_BASE + i as u16,
                    );
                } else {
                    cl.push(Line::from(Span::styled(
                        format!("     {skill}"),
                        Style::default().fg(Color::Magenta),
                    )));
                }
            }
        }
    }

    register(&cl, area, borders, map);
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" CareerPath ");
    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

// ── Resume upload ──────────────────────────────────────────────────────

fn render_upload(
    session: &ResumeSession,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    is_narrow: bool,
    map: &mut ClickMap,
) {
    let intake = &session.intake;
    let bar_width = if is_narrow { 16 } else { 24 };
    let mut cl = ClickableList::new();

    cl.push(Line::from(Span::styled(
        " Upload your resume to get more accurate career recommendations based on \
         your skills and experience.",
        Style::default().fg(Color::DarkGray),
    )));
    cl.push("");

    if let Some(file) = intake.file() {
        cl.push(Line::from(vec![
            Span::styled(" ▤ ", Style::default().fg(Color::Cyan)),
            Span::styled(
                file.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
        cl.push(Line::from(Span::styled(
            format!("   {}", file.size_label()),
            Style::default().fg(Color::DarkGray),
        )));
        cl.push("");
    }

    match &intake.state {
        IntakeState::Idle => {
            cl.push(Line::from(Span::styled(
                " Choose your resume file",
                Style::default().fg(Color::White),
            )));
            cl.push(Line::from(Span::styled(
                " PDF or DOCX files only",
                Style::default().fg(Color::DarkGray),
            )));
            cl.push("");
            cl.push_choice(
                'b',
                "Browse Files",
                Style::default().fg(Color::Cyan),
                BROWSE_FILES,
            );
        }
        IntakeState::Uploading { progress, .. } => {
            cl.push(Line::from(vec![
                Span::styled(" Uploading... ", Style::default().fg(Color::White)),
                Span::styled(format!("{progress}%"), Style::default().fg(Color::Cyan)),
            ]));
            cl.push(Line::from(Span::styled(
                format!(" {}", percent_bar(u16::from(*progress), bar_width)),
                Style::default().fg(Color::Cyan),
            )));
        }
        IntakeState::Processing { countdown, .. } => {
            const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];
            let frame = SPINNER[(countdown.elapsed() / 2) as usize % SPINNER.len()];
            cl.push(Line::from(Span::styled(
                format!(" {frame} Analyzing resume content..."),
                Style::default().fg(Color::Yellow),
            )));
        }
        IntakeState::FileSelected(_) | IntakeState::Done(_) => {
            cl.push_choice(
                'p',
                "Process Resume",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                PROCESS_RESUME,
            );
            cl.push_choice(
                'x',
                "Remove file",
                Style::default().fg(Color::Gray),
                REMOVE_FILE,
            );
        }
    }

    register(&cl, area, borders, map);
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Upload Your Resume ");
    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
