//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and an
//! area and painting into the frame. The backdrop paints first and the
//! screen widgets draw over it; the snow overlay then dusts the cells
//! still empty, and the notify popup draws over everything.

mod backdrop;
mod hero;
mod navbar;
mod notify;
mod rank_card;
mod status;
mod zen;

use auraforge_app::{App, Screen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::Snowfield;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, snow: &Snowfield) {
    const NAVBAR_HEIGHT: u16 = 3;
    const BODY_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Min(BODY_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [navbar_area, body_area, status_area] = chunks.as_ref() else {
        return;
    };

    navbar::render(frame, app, *navbar_area);
    backdrop::render(frame, *body_area);
    match app.screen() {
        Screen::Hero { .. } => hero::render(frame, app, *body_area),
        // The loading frame draws no widgets over the backdrop.
        Screen::Loading { .. } => {},
        Screen::Zen { .. } => zen::render(frame, app, *body_area),
    }
    status::render(frame, app, *status_area);

    if app.snow_enabled() {
        snow.render(frame);
    }
    notify::render(frame, app);
}
