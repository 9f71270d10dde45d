//! Color theme constants for the analytics panel
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Header text color - white for the title
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Secondary text (item name, stat labels)
pub const COLOR_MUTED: Color = Color::Gray;

/// Codename chip text
pub const COLOR_CODE: Color = Color::Rgb(209, 213, 219);

// ============================================================================
// State Colors
// ============================================================================

/// Loading spinner - blue
pub const COLOR_SPINNER: Color = Color::Rgb(59, 130, 246); // #3b82f6

/// Error panel border and heading - red
pub const COLOR_ERROR: Color = Color::Rgb(185, 28, 28); // #b91c1c

/// Error message body - lighter red
pub const COLOR_ERROR_TEXT: Color = Color::Rgb(239, 68, 68); // #ef4444

/// Stat card values - bright white
pub const COLOR_STAT_VALUE: Color = Color::White;

/// Info panel border - blue
pub const COLOR_INFO_BORDER: Color = Color::Rgb(30, 64, 175); // #1e40af

/// Info panel emphasised value - lighter blue
pub const COLOR_INFO_VALUE: Color = Color::Rgb(96, 165, 250); // #60a5fa
