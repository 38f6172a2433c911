use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use std::time::Instant;

/// Completion screen shown between rounds.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;
    let score = session.score();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}/{} ", score, session.round_length()),
            Theme::play_again(),
        )),
        Line::from(""),
        Line::from(Span::styled("Game Complete!", Theme::title())),
        Line::from(Span::styled(
            "Your trivia adventure has come to an end... for now!",
            Theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Final Score: {} points", score),
            Theme::text().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Thanks for playing! Get ready for more brain-tickling challenges coming soon.",
            Theme::muted(),
        )),
        Line::from(""),
    ];

    if let Some(secs) = state.restart_countdown(Instant::now()) {
        lines.push(Line::from(Span::styled(
            format!("Next round in {}s", secs),
            Theme::text(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Play Again [Enter] ", Theme::play_again())));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
