//! Stat Card Component
//!
//! A bordered card with an uppercase label over a large grouped number.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

use crate::ui::helpers::format_thousands;
use crate::ui::theme::{COLOR_BORDER, COLOR_MUTED, COLOR_STAT_VALUE};

/// Height of a stat card including borders
pub const STAT_CARD_HEIGHT: u16 = 6;

/// Render one stat card into `area`
pub fn render_stat_card(frame: &mut Frame, area: Rect, label: &str, value: u64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .padding(Padding::horizontal(2));

    let text = Text::from(vec![
        Line::from(Span::styled(
            label.to_uppercase(),
            Style::default()
                .fg(COLOR_MUTED)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format_thousands(value),
            Style::default()
                .fg(COLOR_STAT_VALUE)
                .add_modifier(Modifier::BOLD),
        )),
    ]);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}
