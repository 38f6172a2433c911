use crate::app::state::AppState;
use crate::quiz::display::{self, OptionState};
use crate::quiz::session::Phase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;
    let awaiting = session.phase() == Phase::Idle;
    let states = display::classify_all(session);

    let items: Vec<ListItem> = session
        .current()
        .options
        .iter()
        .zip(states)
        .enumerate()
        .map(|(i, (text, option_state))| {
            let highlighted = awaiting && i == state.highlighted;
            let marker = if highlighted { "❯ " } else { "  " };
            let badge = match option_state {
                OptionState::CorrectSelected => "✔".to_string(),
                OptionState::IncorrectSelected => "✘".to_string(),
                _ => (i + 1).to_string(),
            };
            let style = Theme::option(option_state, highlighted);
            ListItem::new(Line::from(vec![
                Span::styled(marker, Theme::highlight_marker()),
                Span::styled(format!("[{}] ", badge), style),
                Span::styled(text.as_str(), style),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(" Answers ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    frame.render_widget(List::new(items).block(block), area);
}
