//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod splash;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let (View::Splash, Some(splash_state)) = (&app.state.current_view, &app.splash_state) {
        splash::draw(frame, area, splash_state);
        return;
    }

    let (header_area, content_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area);
    forms::draw_lead_form(frame, content_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal error dialog goes on top of everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockSubmissionTransport, SubmissionReceipt, TransportError};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn app_with(mock: MockSubmissionTransport) -> App {
        App::with_transport(Arc::new(mock), None, false)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn submit(app: &mut App) {
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn fill_valid(app: &mut App) {
        for (i, text) in ["Jane Doe", "jane@acme.com", "Acme Corp"].iter().enumerate() {
            if i > 0 {
                press(app, KeyCode::Tab);
            }
            for c in text.chars() {
                press(app, KeyCode::Char(c));
            }
        }
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right);
    }

    #[test]
    fn renders_form_with_info_panel_on_wide_screens() {
        let mut mock = MockSubmissionTransport::new();
        mock.expect_submit().never();
        let app = app_with(mock);

        let output = render(&app, 120, 40);
        assert!(output.contains("Request a Consultation"));
        assert!(output.contains("Full Name *"));
        assert!(output.contains("Project Details (Optional)"));
        assert!(output.contains("Get Your Free Assessment"));
        assert!(output.contains("1-800-BESS-NOW"));
        assert!(output.contains("info@powergridbess.com"));
    }

    #[test]
    fn drops_info_panel_on_narrow_screens() {
        let mut mock = MockSubmissionTransport::new();
        mock.expect_submit().never();
        let app = app_with(mock);

        let output = render(&app, 80, 40);
        assert!(output.contains("Request a Consultation"));
        assert!(!output.contains("1-800-BESS-NOW"));
    }

    #[test]
    fn renders_splash_before_form() {
        let mut mock = MockSubmissionTransport::new();
        mock.expect_submit().never();
        let app = App::with_transport(Arc::new(mock), None, true);

        let output = render(&app, 100, 30);
        assert!(output.contains("BATTERY ENERGY STORAGE SOLUTIONS"));
        assert!(!output.contains("Request a Consultation"));
    }

    #[tokio::test]
    async fn renders_validation_dialog_over_form() {
        let mut mock = MockSubmissionTransport::new();
        mock.expect_submit().never();
        let mut app = app_with(mock);

        submit(&mut app);

        let output = render(&app, 120, 40);
        assert!(output.contains("Check your details"));
        assert!(output.contains("Please complete the required"));
        assert!(output.contains("This field is required"));
    }

    #[tokio::test]
    async fn renders_failure_reason_and_keeps_form() {
        let mut mock = MockSubmissionTransport::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(TransportError::Rejected("offline".to_string())));
        let mut app = app_with(mock);
        fill_valid(&mut app);
        submit(&mut app);
        app.form.wait_for_outcome().await;

        let output = render(&app, 120, 40);
        assert!(output.contains("Something went wrong. Please try again."));
        assert!(output.contains("Jane Doe"));
        assert!(!output.contains("offline"));
    }

    #[tokio::test]
    async fn renders_confirmation_after_success() {
        let mut mock = MockSubmissionTransport::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Ok(SubmissionReceipt::issue()));
        let mut app = app_with(mock);
        fill_valid(&mut app);
        submit(&mut app);
        app.form.wait_for_outcome().await;

        let output = render(&app, 120, 40);
        assert!(output.contains("Thank You!"));
        assert!(!output.contains("Request a Consultation"));
        assert!(!output.contains("Get Your Free Assessment"));
    }
}
