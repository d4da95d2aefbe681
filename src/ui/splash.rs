//! Splash screen rendering with block-letter logo

use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LOGO: [&str; 5] = [
    "█████   ████  ██   ██ ██████ █████   █████ █████  ██ █████ ",
    "██  ██ ██  ██ ██   ██ ██     ██  ██ ██     ██  ██ ██ ██  ██",
    "█████  ██  ██ ██ █ ██ ████   █████  ██ ███ █████  ██ ██  ██",
    "██     ██  ██ ███████ ██     ██  ██ ██  ██ ██  ██ ██ ██  ██",
    "██      ████  ██   ██ ██████ ██  ██  █████ ██  ██ ██ █████ ",
];

const LOGO_WIDTH: u16 = 59;

const TAGLINE: &str = "⚡ BATTERY ENERGY STORAGE SOLUTIONS ⚡";

fn build_logo() -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::Cyan);
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect();
    lines.push(Line::from(""));
    let pad = (LOGO_WIDTH as usize).saturating_sub(TAGLINE.chars().count()) / 2;
    lines.push(Line::from(Span::styled(
        format!("{}{}", " ".repeat(pad), TAGLINE),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines = build_logo();
    let logo_height = lines.len() as u16;

    // Centered, then shifted up by the animation offset (may go above the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + area.width.saturating_sub(LOGO_WIDTH) / 2;

    let lines_off_top = if y_pos < area.y as i32 {
        (area.y as i32 - y_pos) as usize
    } else {
        0
    };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let render_y = y_pos.max(area.y as i32) as u16;
    let logo_area = Rect {
        x,
        y: render_y,
        width: LOGO_WIDTH.min(area.width),
        height: visible.len() as u16,
    }
    .intersection(area);
    frame.render_widget(Paragraph::new(visible), logo_area);

    if splash_state.scroll_offset < 1.0 && area.height > 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x + area.width.saturating_sub(hint.len() as u16) / 2,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(Color::DarkGray),
            ))),
            hint_area,
        );
    }
}
