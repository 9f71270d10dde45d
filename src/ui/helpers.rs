//! Helper functions for UI rendering
//!
//! Contains utility functions for number formatting and truncation.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Group digits in threes with commas (e.g., 1500 -> "1,500")
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Truncate `text` to at most `max_width` display columns, ending in "…" when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Rows `text` needs when word-wrapped at `width` columns.
///
/// Greedy estimate; words wider than a row are split across rows.
pub fn wrapped_line_count(text: &str, width: usize) -> usize {
    let width = width.max(1);
    text.lines()
        .map(|line| {
            let mut rows = 1;
            let mut used = 0;
            for word in line.split_whitespace() {
                let w = word.width();
                let needed = if used == 0 { w } else { used + 1 + w };
                if needed <= width {
                    used = needed;
                } else if w <= width {
                    rows += 1;
                    used = w;
                } else {
                    if used > 0 {
                        rows += 1;
                    }
                    rows += (w - 1) / width;
                    used = w - (w - 1) / width * width;
                }
            }
            rows
        })
        .sum::<usize>()
        .max(1)
}
