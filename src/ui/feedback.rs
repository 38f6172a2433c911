use crate::app::state::AppState;
use crate::quiz::session::Feedback;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let correct = match state.session.feedback() {
        Feedback::None => return,
        Feedback::Correct => true,
        Feedback::Incorrect => false,
    };

    let (mark, verdict) = if correct {
        ("✔ ", "Correct!")
    } else {
        ("✘ ", "Incorrect!")
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(mark, Theme::verdict(correct)),
        Span::styled(verdict, Theme::verdict(correct)),
    ])];

    if state.config.ui.show_explanations {
        if let Some(explanation) = &state.session.current().explanation {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(explanation.as_str(), Theme::muted())));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::verdict(correct))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
