//! Status Indicator Component
//!
//! Renders the spinner line shown while a fetch is in flight.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_MUTED, COLOR_SPINNER};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Advance the spinner frame
pub fn next_spinner_frame(current: usize) -> usize {
    (current + 1) % SPINNER_FRAMES.len()
}

/// Render a spinner followed by a message
pub fn render_spinner_line(frame: usize, message: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} ", get_spinner_char(frame)),
            Style::default()
                .fg(COLOR_SPINNER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(COLOR_MUTED)),
    ])
}
