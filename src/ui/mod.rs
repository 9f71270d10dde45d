//! UI rendering for the analytics panel
//!
//! [`render`] draws the whole screen for an [`App`]; [`render_panel`] draws
//! just the panel for a view and is what tests and benches call directly.

pub mod components;
mod header;
pub mod helpers;
mod panels;
pub mod theme;

pub use header::{render_header, HEADER_HEIGHT, PANEL_TITLE};
pub use panels::{
    render_error, render_loading, render_success, ACTIVE_USERS_LABEL, ERROR_TITLE,
    LOADING_MESSAGE, PAGE_VIEWS_LABEL, RESOLVED_PATH_LABEL,
};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::analytics::{AnalyticsView, ViewState};
use crate::app::App;
use helpers::inner_rect;
use theme::COLOR_DIM;

/// Draw the full screen: panel plus key hints.
pub fn render(frame: &mut Frame, app: &App) {
    let [panel_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    render_panel(frame, panel_area, &app.view);
    render_footer(
        frame,
        footer_area,
        app.host.selected_index(),
        app.host.items().len(),
    );
}

/// Draw header plus the body for the current state.
pub fn render_panel(frame: &mut Frame, area: Rect, view: &AnalyticsView) {
    let area = inner_rect(area, 1);
    let [header_area, _, body_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    render_header(frame, header_area, view.item());

    match view.state() {
        ViewState::Loading => render_loading(frame, body_area, view.spinner_frame()),
        ViewState::Error { message } => render_error(frame, body_area, message),
        ViewState::Success { data } => render_success(frame, body_area, data),
    }
}

fn render_footer(frame: &mut Frame, area: Rect, selected: usize, total: usize) {
    let mut spans = Vec::new();
    if total > 1 {
        spans.push(Span::styled(
            format!(" item {}/{} · Tab next · Shift+Tab prev ·", selected + 1, total),
            Style::default().fg(COLOR_DIM),
        ));
    }
    spans.push(Span::styled(" q quit", Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
