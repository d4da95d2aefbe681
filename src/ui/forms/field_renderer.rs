//! Field rendering for the lead form

use crate::state::{FieldId, FieldKind, LeadFormFields, ValidationErrorKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// How a single field should be drawn this frame
#[derive(Debug, Clone, Copy)]
pub struct FieldRenderState {
    pub is_active: bool,
    /// False while a submission is in flight
    pub editable: bool,
    pub error: Option<ValidationErrorKind>,
}

/// Title shown on the field border, with required marker and error text
pub fn field_title(field: FieldId, error: Option<ValidationErrorKind>) -> String {
    let marker = if field.is_required() { " *" } else { "" };
    match error {
        Some(kind) => format!(" {}{} - {} ", field.label(), marker, kind),
        None => format!(" {}{} ", field.label(), marker),
    }
}

fn border_style(state: FieldRenderState) -> Style {
    if !state.editable {
        Style::default().fg(Color::DarkGray)
    } else if state.error.is_some() {
        Style::default().fg(Color::Red)
    } else if state.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Draw one lead form field
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    fields: &LeadFormFields,
    field: FieldId,
    state: FieldRenderState,
) {
    let value = fields.display_value(field);
    let show_cursor = state.is_active && state.editable;
    let value_style = if state.editable {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));

    let content = match field.kind() {
        FieldKind::Select => {
            let (text, style) = if value.is_empty() {
                (field.placeholder().to_string(), placeholder_style)
            } else {
                (value, value_style)
            };
            let arrow_style = if show_cursor {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Paragraph::new(Line::from(vec![
                Span::styled("◂ ", arrow_style),
                Span::styled(text, style),
                Span::styled(" ▸", arrow_style),
            ]))
        }
        FieldKind::Text if value.is_empty() => {
            let mut spans = Vec::new();
            if show_cursor {
                spans.push(cursor);
            }
            spans.push(Span::styled(field.placeholder(), placeholder_style));
            Paragraph::new(Line::from(spans))
        }
        FieldKind::Text if field.is_multiline() => {
            let mut lines: Vec<Line> = value
                .split('\n')
                .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
                .collect();
            if show_cursor {
                if let Some(last) = lines.last_mut() {
                    last.spans.push(cursor);
                }
            }
            Paragraph::new(lines)
        }
        FieldKind::Text => {
            let mut spans = vec![Span::styled(value, value_style)];
            if show_cursor {
                spans.push(cursor);
            }
            Paragraph::new(Line::from(spans))
        }
    };

    let block = Block::default()
        .title(field_title(field, state.error))
        .borders(Borders::ALL)
        .border_style(border_style(state));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_are_marked() {
        assert_eq!(field_title(FieldId::Name, None), " Full Name * ");
        assert_eq!(field_title(FieldId::ProjectType, None), " Project Type ");
    }

    #[test]
    fn test_error_is_shown_in_title() {
        assert_eq!(
            field_title(FieldId::Email, Some(ValidationErrorKind::InvalidEmail)),
            " Work Email * - Enter a valid email address "
        );
    }

    #[test]
    fn test_disabled_border_wins_over_error() {
        let style = border_style(FieldRenderState {
            is_active: true,
            editable: false,
            error: Some(ValidationErrorKind::Missing),
        });
        assert_eq!(style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_error_border_is_red() {
        let style = border_style(FieldRenderState {
            is_active: false,
            editable: true,
            error: Some(ValidationErrorKind::Missing),
        });
        assert_eq!(style.fg, Some(Color::Red));
    }
}
