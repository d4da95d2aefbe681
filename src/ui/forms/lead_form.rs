//! Lead capture form rendering

use super::confirmation;
use super::field_renderer::{draw_field, FieldRenderState};
use crate::app::App;
use crate::state::{FieldId, LeadFormView};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Below this width the info panel is dropped and the form takes the whole area
const INFO_PANEL_MIN_TOTAL_WIDTH: u16 = 100;

const SUBMIT_LABEL: &str = "Get Your Free Assessment";

const BENEFITS: [(&str, &str); 3] = [
    (
        "Free Site Assessment",
        "We'll analyze your energy usage and identify optimization opportunities",
    ),
    (
        "Custom ROI Analysis",
        "Receive a detailed financial model tailored to your specific situation",
    ),
    (
        "Expert Consultation",
        "Connect with our engineers to discuss your project requirements",
    ),
];

/// Draw the lead form, or the confirmation once the lead was accepted
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    match app.form.view() {
        LeadFormView::Confirmation { receipt } => confirmation::draw(frame, area, receipt),
        LeadFormView::Form {
            editable,
            busy,
            failure,
        } => {
            let form_area = if area.width >= INFO_PANEL_MIN_TOTAL_WIDTH {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(44), Constraint::Min(50)])
                    .split(area);
                draw_info_panel(frame, chunks[0]);
                chunks[1]
            } else {
                area
            };
            draw_form(frame, form_area, app, editable, busy, failure);
        }
    }
}

fn draw_info_panel(frame: &mut Frame, area: Rect) {
    let heading = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let accent = Style::default().fg(Color::Cyan);
    let muted = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Start Your ", heading),
            Span::styled("Energy Storage", accent.add_modifier(Modifier::BOLD)),
            Span::styled(" Journey", heading),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Ready to explore how battery energy storage can transform your \
             operations? Our team of experts is here to help you navigate the \
             options and design the optimal solution for your needs.",
            muted,
        )),
        Line::from(""),
    ];

    for (title, detail) in BENEFITS {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::styled(title, heading),
        ]));
        lines.push(Line::from(Span::styled(format!("  {detail}"), muted)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Prefer to talk directly? Reach us at:",
        muted,
    )));
    lines.push(Line::from(Span::styled("  ☎ 1-800-BESS-NOW", accent)));
    lines.push(Line::from(Span::styled("  ✉ info@powergridbess.com", accent)));

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Contact "),
    );
    frame.render_widget(panel, area);
}

fn draw_form(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    editable: bool,
    busy: bool,
    failure: Option<&str>,
) {
    let block = Block::default()
        .title(" Request a Consultation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editable {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner_height = if failure.is_some() { 3 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Company
            Constraint::Length(3),             // Interest level + project type
            Constraint::Min(4),                // Message
            Constraint::Length(banner_height), // Failure reason
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Privacy note
        ])
        .split(inner);

    let selects = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);

    let placements = [
        (FieldId::Name, rows[0]),
        (FieldId::Email, rows[1]),
        (FieldId::Company, rows[2]),
        (FieldId::InterestLevel, selects[0]),
        (FieldId::ProjectType, selects[1]),
        (FieldId::Message, rows[4]),
    ];

    let validation = app.form.validation();
    for (field, field_area) in placements {
        draw_field(
            frame,
            field_area,
            app.form.fields(),
            field,
            FieldRenderState {
                is_active: app.state.focus.is_field_active(field),
                editable,
                error: validation.and_then(|v| v.for_field(field)),
            },
        );
    }

    if let Some(reason) = failure {
        let banner = Paragraph::new(reason)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            );
        frame.render_widget(banner, rows[5]);
    }

    let busy_frame = busy.then(|| app.spinner_frame());
    render_submit_button(
        frame,
        rows[6],
        SUBMIT_LABEL,
        app.state.focus.is_submit_active(),
        busy_frame,
    );

    let privacy = Paragraph::new(Line::from(Span::styled(
        "By submitting this form, you agree to our Privacy Policy. \
         We'll never share your information with third parties.",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(privacy, rows[7]);
}
