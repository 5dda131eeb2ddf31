//! Layout components (brand header, progress tracker, footer, status bar)

use crate::app::App;
use crate::platform::{NEXT_SHORTCUT, PRIMARY_SHORTCUT};
use crate::state::{FocusTarget, Step, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{LineGauge, Paragraph},
    Frame,
};

/// Areas of the form screen
pub struct FormLayout {
    pub header: Rect,
    pub tracker: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Split the screen for the form view, centered at a readable width
pub fn create_layout(area: Rect) -> FormLayout {
    let column = center_column(area, 84);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Brand header
            Constraint::Length(3), // Progress tracker
            Constraint::Min(8),    // Step body
            Constraint::Length(1), // Footer line
            Constraint::Length(1), // Status bar
        ])
        .split(column);

    FormLayout {
        header: chunks[0],
        tracker: chunks[1],
        body: chunks[2],
        footer: chunks[3],
    }
}

/// Horizontally centered column at most `max_width` wide
pub fn center_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Draw the brand header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "DIGITAL ENGINEERING UNIT // PREMIUM TECHNOLOGY",
            Style::default().fg(Color::Green),
        )),
        Line::from(vec![
            Span::styled("Vamos ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(
                "Evoluir",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " seu Negócio?",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Conte um pouco sobre sua visão. A gente cuida da engenharia digital.",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw the three-step progress tracker
pub fn draw_tracker(frame: &mut Frame, area: Rect, current: Step) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[0]);

    for (step, column) in Step::ALL.iter().zip(columns.iter()) {
        let reached = current >= *step;
        let style = if reached {
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if reached { "◆" } else { "◇" };
        let label = Line::from(Span::styled(
            format!("{marker} {}", step.label().to_uppercase()),
            style,
        ));
        frame.render_widget(Paragraph::new(label).alignment(Alignment::Center), *column);
    }

    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(Color::LightGreen))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .label("")
        .ratio(current.progress());
    frame.render_widget(gauge, chunks[1]);
}

/// Draw the footer promise line
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::LightGreen)),
        Span::styled("SYSTEM_ONLINE  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "Prometemos não usar \"agencês\" complicado na nossa conversa.",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the status bar with key hints for the current view
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", get_view_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if app.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "ENVIANDO_DADOS...",
            Style::default().fg(Color::LightGreen),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:sair ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(quit_hint).style(Style::default().bg(Color::Black).fg(Color::DarkGray)),
        quit_area,
    );
}

/// Keyboard hints for the current view and focus
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Splash => "Pressione qualquer tecla".to_string(),
        View::Confirmation => "r:recomeçar  q:sair".to_string(),
        View::Form => {
            let step = app.state.session.step();
            let nav = if step.is_last() {
                format!("{PRIMARY_SHORTCUT}:enviar  Esc:voltar")
            } else if step.prev().is_some() {
                format!("{NEXT_SHORTCUT}:próxima  Esc:voltar")
            } else {
                format!("{NEXT_SHORTCUT}:próxima")
            };
            let form = &app.state.form;
            let focus = match form.active_target() {
                FocusTarget::MomentGroup => "↑/↓:opção  Espaço:escolher",
                FocusTarget::PainChecklist => "↑/↓:opção  Espaço:marcar",
                _ if form.is_buttons_row_active() => "←/→:botão  Enter:confirmar",
                _ if form.is_active_field_multiline() => "Enter:nova linha",
                _ => "Enter:próximo campo",
            };
            format!("Tab:campo  {focus}  {nav}")
        }
    }
}
