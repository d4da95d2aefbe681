//! Confirmation view shown once a lead has been accepted

use crate::transport::SubmissionReceipt;
use crate::ui::components::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, receipt: &SubmissionReceipt) {
    let muted = Style::default().fg(Color::Gray);
    let lines = vec![
        Line::from(Span::styled(
            "✓",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Thank You!",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your inquiry has been received. One of our energy storage \
             specialists will contact you within 24 hours.",
            muted,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Reference ", muted),
            Span::styled(
                receipt.short_reference(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  ·  received {}",
                    receipt.received_at.format("%Y-%m-%d %H:%M UTC")
                ),
                muted,
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "In the meantime, explore our project portfolio to learn more about our capabilities.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    frame.render_widget(card, centered_rect(area, 72, 15));
}
