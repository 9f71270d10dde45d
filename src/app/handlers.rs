//! Message and key handling for [`App`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, AppMessage};

impl App {
    /// Apply a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::AnalyticsSettled {
                generation,
                outcome,
            } => {
                if self.view.apply(generation, outcome) {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::BackTab => self.previous_item(),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.previous_item(),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.next_item(),
            KeyCode::Left | KeyCode::Char('h') => self.previous_item(),
            _ => {}
        }
    }
}
