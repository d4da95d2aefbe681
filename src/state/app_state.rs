//! Application state definitions

use super::forms::LeadFormFocus;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    /// Lead capture form (or its confirmation once submitted)
    #[default]
    LeadForm,
}

/// Main application state (everything except the lead form controller)
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Form focus
    pub focus: LeadFormFocus,

    // Modal error dialogs, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    /// Queue an error message for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
