//! Notify popup
//!
//! Centered modal over the zen screen: an email form while editing, a
//! confirmation card once submitted.

use auraforge_app::{App, NotifyForm, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const POPUP_WIDTH: u16 = 48;
const POPUP_HEIGHT: u16 = 10;
const PROMPT_WIDTH: u16 = 3; // " > "

/// Render the notify popup if one is open.
pub fn render(frame: &mut Frame, app: &App) {
    let Screen::Zen { notify: Some(form), .. } = app.screen() else {
        return;
    };

    let area = popup_area(frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" CORE ALERT ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if form.is_submitted() {
        render_confirmation(frame, inner);
    } else {
        render_form(frame, form, inner);
    }
}

/// Center the popup rect inside `area`, clamping to fit.
fn popup_area(area: Rect) -> Rect {
    let width = POPUP_WIDTH.min(area.width);
    let height = POPUP_HEIGHT.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Render the editing state with the email input and cursor.
fn render_form(frame: &mut Frame, form: &NotifyForm, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let [blurb_area, input_area, hint_area, _, terms_area] = chunks.as_ref() else {
        return;
    };

    let blurb = Paragraph::new(vec![
        Line::from(Span::raw(" Join the neural beta. Be the first to")),
        Line::from(Span::raw(" reforge your daily protocols.")),
        Line::default(),
    ]);
    frame.render_widget(blurb, *blurb_area);

    let input_line = if form.email().is_empty() {
        Line::from(vec![
            Span::styled(" > ", Style::default().fg(Color::Cyan)),
            Span::styled("operative@auraforge.io", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(" > ", Style::default().fg(Color::Cyan)),
            Span::raw(form.email().to_owned()),
        ])
    };
    frame.render_widget(Paragraph::new(input_line), *input_area);

    let hint = Paragraph::new(Line::from(Span::styled(
        " enter SYNC IDENTITY · esc close",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hint, *hint_area);

    let terms = Paragraph::new(Line::from(Span::styled(
        "BY SYNCING YOU AGREE TO NEURAL LINK TERMS",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(terms, *terms_area);

    set_cursor(frame, form, *input_area);
}

/// Place the terminal cursor at the form's edit position.
fn set_cursor(frame: &mut Frame, form: &NotifyForm, input_area: Rect) {
    #[allow(clippy::cast_possible_truncation)]
    let cursor_offset = form.cursor_column() as u16;

    let available_width = input_area.width.saturating_sub(PROMPT_WIDTH + 1);
    let cursor_x = input_area
        .x
        .saturating_add(PROMPT_WIDTH)
        .saturating_add(cursor_offset.min(available_width));
    frame.set_cursor_position((cursor_x, input_area.y));
}

/// Render the post-submit confirmation.
fn render_confirmation(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "ACCESS GRANTED",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::raw("Your core is on the priority list.")),
        Line::from(Span::raw("Check your transmission soon.")),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
