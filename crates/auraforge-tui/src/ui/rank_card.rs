//! Operative rank card
//!
//! The hero screen's live card: tier title, level, XP bar, and stat meters.

use auraforge_app::anim::RankCard;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Render the rank card.
pub fn render(frame: &mut Frame, card: &RankCard, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" OPERATIVE CARD ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    let [header_area, level_area, bar_area, meters_area, _] = chunks.as_ref() else {
        return;
    };

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", card.title().to_uppercase()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(" STATUS: ACTIVE", Style::default().fg(Color::DarkGray))),
    ]);
    frame.render_widget(header, *header_area);

    let level = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" LEVEL {}", card.level()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("   {} XP", card.xp()), Style::default().fg(Color::Gray)),
    ]));
    frame.render_widget(level, *level_area);

    let bar = Gauge::default()
        .ratio(card.progress_ratio())
        .label(format!("{} / {}", card.xp(), RankCard::LEVEL_THRESHOLD))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black));
    frame.render_widget(bar, *bar_area);

    let meters = Paragraph::new(vec![
        meter_line("FOCUS", 8, "84%", Color::Cyan),
        meter_line("ENERGY", 6, "62%", Color::Magenta),
    ]);
    frame.render_widget(meters, *meters_area);
}

/// Build a ten-segment stat meter line.
fn meter_line(label: &str, filled: usize, percent: &str, color: Color) -> Line<'static> {
    let mut bar = String::new();
    for i in 0..10 {
        bar.push(if i < filled { '█' } else { '░' });
    }
    Line::from(vec![
        Span::styled(format!(" {label:<7}"), Style::default().fg(Color::DarkGray)),
        Span::styled(bar, Style::default().fg(color)),
        Span::styled(format!(" {percent}"), Style::default().fg(color)),
    ])
}
