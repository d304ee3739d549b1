//! Zen screen
//!
//! The coming-soon screen: headline, the one-shot progress fill, and key
//! hints while the core initializes.

use auraforge_app::{App, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

/// Render the zen screen.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Screen::Zen { progress, .. } = app.screen() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let [_, middle, _] = chunks.as_ref() else {
        return;
    };
    let content = middle.inner(Margin { horizontal: 4, vertical: 0 });

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(content);

    let [title_area, core_area, bar_area, _] = rows.as_ref() else {
        return;
    };

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "FINAL POLISHING IN PROGRESS...",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "FOCUS PROTOCOLS ESTABLISHED. BETA ACCESS STARTING SOON.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, *title_area);

    let core = Paragraph::new(Line::from(Span::styled(
        "INITIALIZING CORE...",
        Style::default().fg(Color::Cyan),
    )));
    frame.render_widget(core, *core_area);

    render_fill_bar(frame, progress.ratio(), progress.percent(), *bar_area);
}

/// Render the thin fill bar with its loaded percentage.
fn render_fill_bar(frame: &mut Frame, ratio: f64, percent: u16, area: Rect) {
    let bar = Gauge::default()
        .ratio(ratio)
        .label(format!("{percent}% LOADED"))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black));
    frame.render_widget(bar, area);
}
