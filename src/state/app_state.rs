//! Application state definitions

use super::forms::FormKind;
use super::theme::{Theme, ThemeContext};
use std::collections::VecDeque;

/// Shell state shared by every tab
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub theme: ThemeContext,
    pub active_tab: FormKind,
    /// Errors waiting to be shown, oldest first
    errors: VecDeque<String>,
    /// One-line notice in the footer, cleared on the next key press
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(theme: Theme, active_tab: FormKind) -> Self {
        Self {
            theme: ThemeContext::new(theme),
            active_tab,
            ..Default::default()
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn pending_errors(&self) -> usize {
        self.errors.len()
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_theme_and_tab() {
        let state = AppState::new(Theme::Purple, FormKind::Contact);
        assert_eq!(state.theme.theme, Theme::Purple);
        assert_eq!(state.active_tab, FormKind::Contact);
        assert!(!state.has_errors());
    }

    #[test]
    fn test_errors_are_shown_in_order() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.pending_errors(), 2);
        assert_eq!(state.current_error(), Some("first"));

        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_dismiss_on_empty_queue_is_noop() {
        let mut state = AppState::default();
        state.dismiss_error();
        assert_eq!(state.current_error(), None);
    }
}
