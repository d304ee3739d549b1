//! Status bar
//!
//! Shows the current screen and the keys that do something on it.

use auraforge_app::{App, Screen};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.screen() {
        Screen::Hero { exit: Some(_), .. } => "esc abort",
        Screen::Hero { .. } => "enter launch · s snow · esc quit",
        Screen::Loading { .. } => "...",
        Screen::Zen { notify: Some(form), .. } if form.is_submitted() => "syncing...",
        Screen::Zen { notify: Some(_), .. } => "enter submit · esc close",
        Screen::Zen { .. } => "n notify me · b go back · s snow · q quit",
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.screen().label()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {hints}"), Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(line).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(paragraph, area);
}
