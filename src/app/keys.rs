//! Keyboard and paste handling.
//!
//! Global bindings are checked first, then open dialogs swallow everything
//! else, then the focused element gets the key.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus};
use crate::domain::FormAction;

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.quit();
                return;
            }
            KeyCode::Char('s') if ctrl => {
                self.submit();
                return;
            }
            KeyCode::Char('d') if ctrl => {
                self.ui.open_disclaimer();
                return;
            }
            KeyCode::F(1) => {
                self.ui.open_disclaimer();
                return;
            }
            _ => {}
        }

        if self.ui.has_dialog() {
            self.handle_dialog_key(key);
            return;
        }

        match key.code {
            KeyCode::Esc => self.ui.dismiss_error(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.focus_prev(),
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::Enter => self.activate(),
            _ if ctrl => {}
            _ => self.handle_field_key(key.code),
        }
    }

    /// Paste text into the focused text field.
    pub fn handle_paste(&mut self, text: &str) {
        if self.ui.has_dialog() {
            return;
        }
        if let Some(field) = self.focus.text_field() {
            for ch in text.trim().chars() {
                self.dispatch(FormAction::InsertChar(field, ch));
            }
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
            // The disclaimer can sit on top of the details dialog
            if self.ui.show_disclaimer {
                self.ui.close_disclaimer();
            } else {
                self.ui.close_details();
            }
        }
    }

    /// Enter on the focused element.
    fn activate(&mut self) {
        match self.focus {
            Focus::Submit => self.submit(),
            Focus::Result => self.ui.open_details(),
            _ => self.focus_next(),
        }
    }

    fn handle_field_key(&mut self, code: KeyCode) {
        if let Some(field) = self.focus.text_field() {
            match code {
                KeyCode::Char(ch) => self.dispatch(FormAction::InsertChar(field, ch)),
                KeyCode::Backspace => self.dispatch(FormAction::DeleteChar(field)),
                _ => {}
            }
            return;
        }

        if let Some(field) = self.focus.option_field() {
            let action = match code {
                KeyCode::Left => Some(field.cycle(&self.form, -1)),
                KeyCode::Right | KeyCode::Char(' ') => Some(field.cycle(&self.form, 1)),
                KeyCode::Char(ch) => ch
                    .to_digit(10)
                    .filter(|d| *d >= 1)
                    .and_then(|d| field.pick(d as usize - 1)),
                _ => None,
            };
            if let Some(action) = action {
                self.dispatch(action);
            }
            return;
        }

        match (self.focus, code) {
            (Focus::Consent, KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right) => {
                self.dispatch(FormAction::ToggleConsent)
            }
            (Focus::Submit, KeyCode::Char(' ')) => self.submit(),
            (Focus::Result, KeyCode::Char(' ')) => self.ui.open_details(),
            _ => {}
        }
    }
}
