//! UI module for rendering the TUI

mod components;
mod confirmation;
mod forms;
mod layout;
mod splash;

use crate::app::App;
use crate::state::View;
use ratatui::{layout::Rect, Frame};

/// Rows the form view leaves for focus targets on a screen of `area`
pub fn form_target_rows(area: Rect) -> u16 {
    forms::target_rows(layout::create_layout(area).body)
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.state.current_view {
        View::Splash => {
            if let Some(ref splash) = app.splash_state {
                splash::draw(frame, area, splash);
            }
        }
        View::Form => {
            let regions = layout::create_layout(area);
            layout::draw_header(frame, regions.header);
            layout::draw_tracker(frame, regions.tracker, app.state.session.step());
            forms::draw(frame, regions.body, app);
            layout::draw_footer(frame, regions.footer);
        }
        View::Confirmation => confirmation::draw(frame, area),
    }

    if !app.in_splash() {
        layout::draw_status_bar(frame, app);
    }

    // Alerts overlay everything
    if let Some(alert) = app.state.current_alert() {
        components::render_alert_dialog(frame, alert);
    }
}
