use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = Line::from(vec![
        Span::styled(" crabquiz ", Theme::status_bar().add_modifier(Modifier::BOLD)),
        Span::styled("│ ", Theme::status_bar()),
        Span::styled(state.status_line(), Theme::status_bar()),
    ]);
    let paragraph = Paragraph::new(line).style(Theme::status_bar());
    frame.render_widget(paragraph, area);
}
