//! "Diagnóstico Recebido" view shown after a successful submission

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect) {
    let width = area.width.min(64);
    let height = area.height.min(13);
    let card = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let green = Style::default().fg(Color::LightGreen);
    let lines = vec![
        Line::from(Span::styled("✓", green.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(
            "DIAGNÓSTICO RECEBIDO",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Sua visão já está em nosso radar. Em breve, um especialista da ",
                Style::default().fg(Color::Gray),
            ),
            Span::styled("VM_SOLUTIONS", green),
            Span::styled(
                " entrará em contato para apresentar sua engenharia digital.",
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("[ REINICIALIZAR_SISTEMA: r ]", green)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        card,
    );
}
