use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use crate::quiz::display::OptionState;
use crate::quiz::question::QuestionKind;

pub struct Theme;

impl Theme {
    pub const TERRA_50: Color = Color::Rgb(0xFB, 0xF0, 0xED);
    pub const TERRA_300: Color = Color::Rgb(0xE2, 0x72, 0x5B);
    pub const TERRA_500: Color = Color::Rgb(0xC2, 0x4D, 0x32);
    pub const AMBER_500: Color = Color::Rgb(0xF5, 0x9E, 0x0B);
    pub const AMBER_600: Color = Color::Rgb(0xD9, 0x77, 0x06);
    pub const BROWN: Color = Color::Rgb(0x6B, 0x44, 0x23);
    pub const GREEN: Color = Color::Rgb(0x05, 0x96, 0x69);
    pub const GREEN_BG: Color = Color::Rgb(0xF0, 0xFD, 0xF4);
    pub const RED: Color = Color::Rgb(0xDC, 0x26, 0x26);
    pub const RED_BG: Color = Color::Rgb(0xFE, 0xF2, 0xF2);
    pub const TEXT_MUTED: Color = Color::Rgb(0x9C, 0x82, 0x6C);

    pub fn border() -> Style {
        Style::default().fg(Self::TERRA_300)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Self::TERRA_500).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::BROWN)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn score() -> Style {
        Style::default().fg(Self::TERRA_500).add_modifier(Modifier::BOLD)
    }

    pub fn sparkle() -> Style {
        Style::default().fg(Self::AMBER_500)
    }

    pub fn logo() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::TERRA_500)
            .add_modifier(Modifier::BOLD)
    }

    pub fn kind_badge(kind: QuestionKind) -> Style {
        let bg = match kind {
            QuestionKind::Fact => Self::TERRA_300,
            QuestionKind::Riddle => Self::AMBER_500,
        };
        Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_marker() -> Style {
        Style::default().fg(Self::AMBER_600).add_modifier(Modifier::BOLD)
    }

    pub fn option(state: OptionState, highlighted: bool) -> Style {
        match state {
            OptionState::Unselected if highlighted => Style::default()
                .fg(Self::BROWN)
                .bg(Self::TERRA_50)
                .add_modifier(Modifier::BOLD),
            OptionState::Unselected => Style::default().fg(Self::BROWN),
            OptionState::CorrectSelected => Style::default()
                .fg(Self::GREEN)
                .bg(Self::GREEN_BG)
                .add_modifier(Modifier::BOLD),
            OptionState::IncorrectSelected => Style::default()
                .fg(Self::RED)
                .bg(Self::RED_BG)
                .add_modifier(Modifier::BOLD),
            OptionState::OtherCorrect => Style::default()
                .fg(Self::GREEN)
                .add_modifier(Modifier::DIM),
            OptionState::OtherIncorrect => Style::default()
                .fg(Self::RED)
                .add_modifier(Modifier::DIM),
        }
    }

    pub fn verdict(correct: bool) -> Style {
        let fg = if correct { Self::GREEN } else { Self::RED };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Self::TERRA_500)
    }

    pub fn play_again() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::AMBER_500)
            .add_modifier(Modifier::BOLD)
    }
}
