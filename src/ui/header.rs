//! Panel header: fixed title plus the item's name and codename.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::helpers::truncate_to_width;
use super::theme::{COLOR_CODE, COLOR_DIM, COLOR_HEADER, COLOR_MUTED};
use crate::models::ItemInfo;

/// Fixed panel title
pub const PANEL_TITLE: &str = "GA4 Analytics";

/// Rows the header occupies
pub const HEADER_HEIGHT: u16 = 2;

const SEPARATOR: &str = " · ";

/// Render the header. The codename is kept whole when possible; the
/// display name gives way first on narrow terminals.
pub fn render_header(frame: &mut Frame, area: Rect, item: &ItemInfo) {
    let width = area.width as usize;
    let codename = truncate_to_width(&item.codename, width);
    let name_budget = width.saturating_sub(codename.width() + SEPARATOR.width());
    let name = truncate_to_width(&item.name, name_budget);

    let text = Text::from(vec![
        Line::from(Span::styled(
            PANEL_TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(name, Style::default().fg(COLOR_MUTED)),
            Span::styled(SEPARATOR, Style::default().fg(COLOR_DIM)),
            Span::styled(codename, Style::default().fg(COLOR_CODE)),
        ]),
    ]);

    frame.render_widget(Paragraph::new(text), area);
}
