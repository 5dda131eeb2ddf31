//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a text input showing `value`, or its placeholder when empty
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, value: &str, is_active: bool) {
    let accent = if is_active {
        Color::LightGreen
    } else {
        Color::DarkGray
    };
    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(accent));

    let mut lines: Vec<Line> = if value.is_empty() {
        vec![Line::from(Span::styled(
            field.placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::White))))
            .collect()
    };

    if is_active {
        if value.is_empty() {
            if let Some(first) = lines.first_mut() {
                first.spans.insert(0, cursor);
            }
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    // Keep the tail of long multiline answers in view
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let block = Block::default()
        .title(format!(" {} ", field.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);

    frame.render_widget(paragraph, area);
}
