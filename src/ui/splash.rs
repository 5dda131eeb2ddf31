//! Splash screen rendering with the brand logo

use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LOGO: [&str; 5] = [
    "██╗   ██╗███╗   ███╗",
    "██║   ██║████╗ ████║",
    "╚██╗ ██╔╝██╔████╔██║",
    " ╚████╔╝ ██║╚██╔╝██║",
    "  ╚═══╝  ╚═╝ ╚═╝ ╚═╝",
];

const TAGLINE: &str = "VM_SOLUTIONS // ENGENHARIA DIGITAL";

fn build_logo() -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::LightGreen);
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        TAGLINE,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines = build_logo();
    let logo_height = lines.len() as u16;
    let logo_width = TAGLINE.chars().count() as u16;

    // Centered, then shifted up by the animation (may leave the screen)
    let base_y = i32::from(area.y) + i32::from(area.height.saturating_sub(logo_height)) / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(lines_off_top)
        .map(|l| l.centered())
        .collect();
    let visible_height = visible.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let logo_area = Rect {
        x: area.x + area.width.saturating_sub(logo_width) / 2,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(area.height.saturating_sub(render_y - area.y)),
    };
    frame.render_widget(Paragraph::new(visible), logo_area);

    if splash_state.scroll_offset < 1.0 && area.height > 2 {
        let hint = "Pressione qualquer tecla para começar";
        let hint_width = hint.chars().count() as u16;
        let hint_area = Rect {
            x: area.x + area.width.saturating_sub(hint_width) / 2,
            y: area.y + area.height - 2,
            width: hint_width.min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
            hint_area,
        );
    }
}
