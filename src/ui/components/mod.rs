//! Reusable UI Components
//!
//! - `StatusIndicator` - spinner line for the loading state
//! - `StatCard` - labelled numeric card for the success state

mod stat_card;
mod status_indicator;

pub use stat_card::{render_stat_card, STAT_CARD_HEIGHT};
pub use status_indicator::{get_spinner_char, next_spinner_frame, render_spinner_line};
