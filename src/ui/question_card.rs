use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let question = state.session.current();
    let kind = question.kind;

    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(format!(" {} ", kind.badge()), Theme::kind_badge(kind)),
        Span::styled(format!(" {} ", kind.label()), Theme::title()),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(question.prompt.as_str())
        .style(Theme::text())
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
