//! State bodies: loading line, error panel, stats plus resolved path.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use super::components::{render_spinner_line, render_stat_card, STAT_CARD_HEIGHT};
use super::helpers::wrapped_line_count;
use super::theme::{
    COLOR_ERROR, COLOR_ERROR_TEXT, COLOR_INFO_BORDER, COLOR_INFO_VALUE, COLOR_MUTED,
};
use crate::models::ApiResponse;

pub const LOADING_MESSAGE: &str = "Loading analytics data…";
pub const ERROR_TITLE: &str = "Failed to load analytics";
pub const PAGE_VIEWS_LABEL: &str = "Page Views";
pub const ACTIVE_USERS_LABEL: &str = "Active Users";
pub const RESOLVED_PATH_LABEL: &str = "Resolved path:";

pub fn render_loading(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let lines = vec![Line::raw(""), render_spinner_line(spinner_frame, LOADING_MESSAGE)];
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    // borders + horizontal padding
    let inner_width = area.width.saturating_sub(4) as usize;
    // one spare row: the estimate can be off where ratatui breaks long words
    let rows = wrapped_line_count(message, inner_width) + 1;
    let height = u16::try_from(rows + 2).unwrap_or(u16::MAX).min(area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ERROR))
        .title(Span::styled(
            format!(" {} ", ERROR_TITLE),
            Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(COLOR_ERROR_TEXT))
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, Rect { height, ..area });
}

pub fn render_success(frame: &mut Frame, area: Rect, data: &ApiResponse) {
    let [cards_area, _, path_area] = Layout::vertical([
        Constraint::Length(STAT_CARD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let [views_area, users_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
            .spacing(2)
            .areas(cards_area);

    render_stat_card(frame, views_area, PAGE_VIEWS_LABEL, data.screen_page_views);
    render_stat_card(frame, users_area, ACTIVE_USERS_LABEL, data.active_users);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_INFO_BORDER))
        .padding(Padding::horizontal(1));

    let line = Line::from(vec![
        Span::styled("↳ ", Style::default().fg(COLOR_INFO_BORDER)),
        Span::styled(RESOLVED_PATH_LABEL, Style::default().fg(COLOR_MUTED)),
        Span::raw(" "),
        Span::styled(
            data.slug.clone(),
            Style::default()
                .fg(COLOR_INFO_VALUE)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), path_area);
}
