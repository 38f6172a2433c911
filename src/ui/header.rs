use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let session = &state.session;
    let counter = Line::from(vec![
        Span::styled(" Q ", Theme::logo()),
        Span::styled(" Question ", Theme::text()),
        Span::styled(
            format!("{}/{}", session.question_number(), session.round_length()),
            Theme::title(),
        ),
    ]);
    let score = Line::from(vec![
        Span::styled("✦ ", Theme::sparkle()),
        Span::styled(session.score().to_string(), Theme::score()),
        Span::styled(" points ", Theme::text()),
    ])
    .alignment(Alignment::Right);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    frame.render_widget(Paragraph::new(counter), halves[0]);
    frame.render_widget(Paragraph::new(score), halves[1]);
}
