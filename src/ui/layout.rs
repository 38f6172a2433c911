use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    /// Everything between header and status bar; the completion screen uses it whole.
    pub body: Rect,
    pub question: Rect,
    pub options: Rect,
    pub feedback: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | body | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let body = main_chunks[1];
    let status_bar = main_chunks[2];

    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Question card
            Constraint::Length(6), // Options
            Constraint::Min(3),    // Feedback
        ])
        .split(body);

    AppLayout {
        header,
        body,
        question: body_chunks[0],
        options: body_chunks[1],
        feedback: body_chunks[2],
        status_bar,
    }
}
