//! Moment radio group and pains checklist

use crate::state::{LeadData, Moment, PAIN_CATALOGUE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

fn group_block(title: &str, is_active: bool) -> Block<'_> {
    let accent = if is_active {
        Color::LightGreen
    } else {
        Color::DarkGray
    };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
}

fn option_style(is_chosen: bool, is_under_cursor: bool) -> Style {
    let style = if is_chosen {
        Style::default().fg(Color::LightGreen)
    } else {
        Style::default().fg(Color::Gray)
    };
    if is_under_cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Draw the single-select moment options
pub fn draw_moment_group(
    frame: &mut Frame,
    area: Rect,
    lead: &LeadData,
    is_active: bool,
    cursor: usize,
) {
    let lines: Vec<Line> = Moment::ALL
        .iter()
        .enumerate()
        .map(|(idx, moment)| {
            let chosen = lead.moment() == Some(*moment);
            let style = option_style(chosen, is_active && idx == cursor);
            Line::from(vec![
                Span::styled(if chosen { "(•) " } else { "( ) " }, style),
                Span::styled(moment.title(), style.add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {}", moment.description()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(group_block("SEU_MOMENTO *", is_active)),
        area,
    );
}

/// Draw the multi-select pains checklist
pub fn draw_pain_checklist(
    frame: &mut Frame,
    area: Rect,
    lead: &LeadData,
    is_active: bool,
    cursor: usize,
) {
    let lines: Vec<Line> = PAIN_CATALOGUE
        .iter()
        .enumerate()
        .map(|(idx, pain)| {
            let checked = lead.has_pain(pain);
            let style = option_style(checked, is_active && idx == cursor);
            Line::from(Span::styled(
                format!("{} {pain}", if checked { "[✓]" } else { "[ ]" }),
                style,
            ))
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(group_block("O que mais te incomoda hoje?", is_active)),
        area,
    );
}
