//! Application state and key handling

use crate::config::LeadsConfig;
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{
    AppState, FieldKind, Form, LeadFormController, LeadFormView, SplashState, SubmitAttempt, View,
};
use crate::transport::{SimulatedTransport, SubmissionTransport};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Window for the second Ctrl+C press
const DOUBLE_CTRL_C_WINDOW: Duration = Duration::from_millis(1000);

/// Spinner advances once per this many milliseconds
const SPINNER_STEP_MS: u128 = 80;

/// Reason the simulated transport gives when configured to fail
const SIMULATED_FAILURE_REASON: &str = "simulated failure";

/// Main application struct
pub struct App {
    /// Navigation, focus and error dialogs
    pub state: AppState,
    /// The mounted lead form
    pub form: LeadFormController,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
    started: Instant,
}

impl App {
    /// Create the app with the transport described by the user config
    pub fn new(config: &LeadsConfig) -> Self {
        let transport: Arc<dyn SubmissionTransport> = if config.simulate_failure() {
            Arc::new(SimulatedTransport::failing(
                config.submit_delay(),
                SIMULATED_FAILURE_REASON,
            ))
        } else {
            Arc::new(SimulatedTransport::new(config.submit_delay()))
        };
        tracing::info!(
            delay_ms = config.submit_delay().as_millis() as u64,
            simulate_failure = config.simulate_failure(),
            "Using simulated submission transport"
        );

        Self::with_transport(transport, config.submit_timeout(), !config.skip_splash())
    }

    /// Create the app around an explicit transport
    pub fn with_transport(
        transport: Arc<dyn SubmissionTransport>,
        timeout: Option<Duration>,
        show_splash: bool,
    ) -> Self {
        let mut form = LeadFormController::new(transport);
        if let Some(limit) = timeout {
            form = form.with_timeout(limit);
        }

        let mut state = AppState::default();
        let splash_state = if show_splash {
            state.current_view = View::Splash;
            Some(SplashState::new())
        } else {
            None
        };

        Self {
            state,
            form,
            quit: false,
            status_message: None,
            splash_state,
            last_ctrl_c: None,
            started: Instant::now(),
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.finish_splash();
                return true;
            }
        }
        false
    }

    fn finish_splash(&mut self) {
        self.splash_state = None;
        self.state.current_view = View::LeadForm;
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Current frame of the busy spinner
    pub fn spinner_frame(&self) -> usize {
        (self.started.elapsed().as_millis() / SPINNER_STEP_MS) as usize
    }

    /// Per-tick housekeeping: apply a finished submission if there is one
    pub fn tick(&mut self) {
        if !self.form.poll_outcome() {
            return;
        }
        let status = self.form.status();
        self.status_message = if status.is_succeeded() {
            Some("Inquiry received".to_string())
        } else {
            status
                .failure_reason()
                .map(|reason| format!("Submission failed: {reason}"))
        };
    }

    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Double Ctrl+C quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::LeadForm => self.handle_lead_form_key(key),
        }
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(prev) if now.duration_since(prev) <= DOUBLE_CTRL_C_WINDOW => {
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    fn handle_splash_key(&mut self, _key: KeyEvent) -> Result<()> {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
        self.finish_splash();
        Ok(())
    }

    /// Handle keys in the lead form view
    fn handle_lead_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let editable = match self.form.view() {
            LeadFormView::Confirmation { .. } => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    self.quit = true;
                }
                return Ok(());
            }
            LeadFormView::Form { editable, .. } => editable,
        };

        if key.code == KeyCode::Esc {
            self.quit = true;
            return Ok(());
        }

        let is_submit_shortcut = key.code == KeyCode::Char('s')
            && (key.modifiers.contains(SUBMIT_MODIFIER)
                || key.modifiers.contains(KeyModifiers::CONTROL));
        let on_submit_row = self.state.focus.is_submit_active();

        if is_submit_shortcut || (on_submit_row && key.code == KeyCode::Enter) {
            self.submit();
            return Ok(());
        }

        // Everything below edits the form, which is locked while submitting
        if !editable {
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.focus.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus.prev_field(),
            KeyCode::Left => self.cycle_option(false),
            KeyCode::Right => self.cycle_option(true),
            KeyCode::Enter => self.handle_enter_on_field(),
            KeyCode::Backspace => self.form_backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form_input_char(c)
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate and start a submission, reporting the outcome to the visitor
    fn submit(&mut self) {
        match self.form.submit() {
            SubmitAttempt::Started { attempt } => {
                tracing::debug!(attempt, "Submission started from the form");
                self.status_message = Some("Sending your inquiry...".to_string());
            }
            SubmitAttempt::Rejected(errors) => {
                if let Some(first) = errors.errors().first() {
                    self.state.focus.focus_field(first.field);
                }
                self.push_error(errors.summary());
            }
            SubmitAttempt::Ignored => {}
        }
    }

    fn handle_enter_on_field(&mut self) {
        match self.state.focus.active_field_id() {
            Some(field) if field.is_multiline() => {
                let value = format!("{}\n", self.form.fields().get(field));
                self.form.update_field(field, value);
            }
            Some(_) => self.state.focus.next_field(),
            None => {}
        }
    }

    fn form_input_char(&mut self, c: char) {
        let Some(field) = self.state.focus.active_field_id() else {
            return;
        };
        match field.kind() {
            FieldKind::Text => {
                let mut value = self.form.fields().get(field).to_string();
                value.push(c);
                self.form.update_field(field, value);
            }
            FieldKind::Select if c == ' ' => self.cycle_option(true),
            FieldKind::Select => {}
        }
    }

    fn form_backspace(&mut self) {
        let Some(field) = self.state.focus.active_field_id() else {
            return;
        };
        let value = match field.kind() {
            FieldKind::Text => {
                let mut value = self.form.fields().get(field).to_string();
                value.pop();
                value
            }
            // Backspace on a select clears the choice
            FieldKind::Select => String::new(),
        };
        self.form.update_field(field, value);
    }

    fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.state.focus.active_field_id() else {
            return;
        };
        if field.kind() != FieldKind::Select {
            return;
        }
        let current = self.form.fields().get(field);
        let value = if forward {
            field.next_option(current)
        } else {
            field.prev_option(current)
        };
        self.form.update_field(field, value);
    }
}
