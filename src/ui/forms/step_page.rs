//! One step of the diagnostic form

use super::choices::{draw_moment_group, draw_pain_checklist};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{first_visible, FocusTarget, Form, FormButton};
use crate::ui::components::render_button;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

fn outer_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Split the step body into heading and focus-target regions
fn split_body(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading + question
            Constraint::Min(0),    // Targets
        ])
        .horizontal_margin(2)
        .split(outer_block().inner(area));
    (chunks[0], chunks[1])
}

/// Rows left for focus targets when the step body is drawn in `area`
pub fn target_rows(area: Rect) -> u16 {
    split_body(area).1.height
}

/// Draw the current step screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    frame.render_widget(outer_block(), area);
    let (heading_area, body) = split_body(area);

    let heading = vec![
        Line::from(Span::styled(
            form.step.heading(),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            form.step.question(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(heading), heading_area);

    let heights: Vec<u16> = form.targets.iter().map(FocusTarget::rows).collect();
    // Normally the stored offset; differs only if the screen shrank since the last event
    let start = first_visible(&heights, app.state.scroll_offset, form.active_field(), body.height);

    let mut y = body.y;
    for (idx, target) in form.targets.iter().enumerate().skip(start) {
        let height = heights[idx];
        if y + height > body.y + body.height {
            break;
        }
        let rect = Rect {
            x: body.x,
            y,
            width: body.width,
            height,
        };
        let is_active = idx == form.active_field() && !app.state.has_alerts();
        draw_target(frame, rect, app, target, is_active);
        y += height;
    }
}

fn draw_target(frame: &mut Frame, area: Rect, app: &App, target: &FocusTarget, is_active: bool) {
    let lead = app.state.session.lead();
    let cursor = app.state.form.option_cursor;
    match target {
        FocusTarget::Text(field) => draw_field(frame, area, field, field.value(lead), is_active),
        FocusTarget::MomentGroup => draw_moment_group(frame, area, lead, is_active, cursor),
        FocusTarget::PainChecklist => draw_pain_checklist(frame, area, lead, is_active, cursor),
        FocusTarget::Actions => draw_actions(frame, area, app, is_active),
    }
}

fn draw_actions(frame: &mut Frame, area: Rect, app: &App, is_active: bool) {
    let buttons = app.state.form.buttons();
    let submitting = app.is_submitting();

    let constraints: Vec<Constraint> = buttons
        .iter()
        .map(|b| match b {
            FormButton::Back => Constraint::Length(16),
            _ => Constraint::Min(20),
        })
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .spacing(2)
        .split(area);

    for (idx, button) in buttons.iter().enumerate() {
        let is_selected = is_active && idx == app.state.form.selected_button;
        let is_enabled = !submitting;
        let is_primary = matches!(button, FormButton::Submit);
        render_button(
            frame,
            chunks[idx],
            button.label(submitting),
            is_selected || (submitting && is_primary),
            is_enabled,
            is_primary,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_rows_excludes_frame_and_heading() {
        // 2 border rows + 3 heading rows
        assert_eq!(target_rows(Rect::new(0, 0, 80, 30)), 25);
    }

    #[test]
    fn test_target_rows_tiny_area() {
        assert_eq!(target_rows(Rect::new(0, 0, 10, 3)), 0);
    }
}
