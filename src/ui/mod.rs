mod feedback;
mod header;
mod layout;
mod options;
mod question_card;
mod status_bar;
mod summary;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header, state);
    if state.session.is_round_complete() {
        summary::render(frame, app_layout.body, state);
    } else {
        question_card::render(frame, app_layout.question, state);
        options::render(frame, app_layout.options, state);
        feedback::render(frame, app_layout.feedback, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
