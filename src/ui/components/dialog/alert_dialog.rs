//! Alert dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::{Alert, AlertKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render an alert overlay centered on the screen
pub fn render_alert_dialog(frame: &mut Frame, alert: &Alert) {
    let key_style = Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Pressione "),
        Span::styled("Enter", key_style),
        Span::raw(" ou "),
        Span::styled("Esc", key_style),
        Span::raw(" para continuar"),
    ];

    let color = match alert.kind {
        AlertKind::Validation => Color::Yellow,
        AlertKind::Submission => Color::Red,
    };

    render_dialog(
        frame,
        DialogConfig {
            title: alert.kind.title(),
            title_color: color,
            border_color: color,
            message: &alert.message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
