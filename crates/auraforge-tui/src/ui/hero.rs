//! Hero screen
//!
//! Marketing copy, the launch call to action, a telemetry strip, and the
//! live rank card. The whole screen dims while the exit animation runs.

use auraforge_app::{App, Screen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::rank_card;

const CARD_WIDTH: u16 = 36;

/// Render the hero screen.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Screen::Hero { card, exit } = app.screen() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(CARD_WIDTH)])
        .split(area);

    let [copy_area, card_area] = chunks.as_ref() else {
        return;
    };

    render_copy(frame, *copy_area);
    rank_card::render(frame, card, *card_area);

    if exit.is_some() {
        dim(frame, area);
    }
}

/// Render the left-hand copy column.
fn render_copy(frame: &mut Frame, area: Rect) {
    let dim_style = Style::default().fg(Color::DarkGray);
    let headline = Style::default().add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled(" [ FOCUS PROTOCOLS ESTABLISHED ]", dim_style)),
        Line::default(),
        Line::from(Span::styled(" REFORGE THE WIRING", headline)),
        Line::from(vec![
            Span::styled(" OF YOUR ", headline),
            Span::styled("MIND", headline.fg(Color::Cyan)),
            Span::styled(".", headline),
        ]),
        Line::default(),
        Line::from(Span::styled(
            " The first neural-link trainer for deep focus.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            " Gamify your attention. Reach flow sovereignty.",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(" > ", Style::default().fg(Color::Cyan)),
            Span::styled(
                "LAUNCH APP",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [enter]", dim_style),
        ]),
        Line::default(),
        Line::from(Span::styled(
            " LATENCY 4ms   UPTIME 99.99%   NODES 1,024   STATUS NOMINAL",
            dim_style,
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Repaint an area in dark gray, the terminal version of a fade-out.
fn dim(frame: &mut Frame, area: Rect) {
    let buf = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_fg(Color::DarkGray);
            }
        }
    }
}
