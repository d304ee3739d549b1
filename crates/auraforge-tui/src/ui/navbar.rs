//! Navigation bar
//!
//! Logo, section links, snow toggle state, and the beta tag.

use auraforge_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the navigation bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let snow_chip = if app.snow_enabled() {
        Span::styled("[* SNOW]", Style::default().fg(Color::Cyan))
    } else {
        Span::styled("[  SNOW]", Style::default().fg(Color::DarkGray))
    };

    let line = Line::from(vec![
        Span::styled(" AURAFORGE", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled("   SIGNAL · CODEX · RANKS", Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        snow_chip,
        Span::styled("  BETA v0.3", Style::default().fg(Color::Magenta)),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(paragraph, area);
}
