use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::quiz::session::{Phase, TimerOutcome, TimerTask};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Timer { task, epoch } => handle_timer(state, task, epoch, Instant::now()),
        AppEvent::Tick => {
            // Only the restart countdown changes without input.
            if state.restart_at.is_some() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_timer(state: &mut AppState, task: TimerTask, epoch: u64, now: Instant) -> Vec<Action> {
    match state.session.on_timer(task, epoch) {
        TimerOutcome::Stale => {
            debug!(?task, epoch, current = state.session.epoch(), "timer ignored");
            vec![]
        }
        TimerOutcome::NextQuestion => {
            state.reset_highlight();
            vec![]
        }
        TimerOutcome::RoundComplete(pending) => {
            let delay = state.config.timing.restart_delay();
            state.restart_at = Some(now + delay);
            state.dirty = true;
            vec![Action::Schedule {
                task: pending.task,
                epoch: pending.epoch,
                delay,
            }]
        }
        TimerOutcome::Restarted => {
            state.restart_at = None;
            state.reset_highlight();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Char('r') => return restart(state),
        _ => {}
    }

    match state.session.phase() {
        Phase::Idle => match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                answer(state, index)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                state.move_highlight(false);
                vec![]
            }
            KeyCode::Down | KeyCode::Char('j') => {
                state.move_highlight(true);
                vec![]
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let index = state.highlighted;
                answer(state, index)
            }
            _ => vec![],
        },
        // Input is locked while feedback is on screen.
        Phase::Answered => vec![],
        Phase::RoundComplete => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => restart(state),
            _ => vec![],
        },
    }
}

fn answer(state: &mut AppState, index: usize) -> Vec<Action> {
    let Some(pending) = state.session.select_answer(index) else {
        return vec![];
    };
    state.highlighted = index;
    state.dirty = true;
    vec![Action::Schedule {
        task: pending.task,
        epoch: pending.epoch,
        delay: state.config.timing.feedback_delay(),
    }]
}

fn restart(state: &mut AppState) -> Vec<Action> {
    debug!("manual restart");
    state.session.restart();
    state.restart_at = None;
    state.reset_highlight();
    vec![Action::CancelTimers]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::quiz::bank::QuestionBank;
    use crate::quiz::session::{Feedback, QuizSession};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn state() -> AppState {
        let session =
            QuizSession::with_rng(QuestionBank::builtin().unwrap(), 5, StdRng::seed_from_u64(42));
        AppState::with_session(AppConfig::default(), session)
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn fire(state: &mut AppState, actions: Vec<Action>) -> Vec<Action> {
        match actions.as_slice() {
            [Action::Schedule { task, epoch, .. }] => {
                handle_event(state, AppEvent::Timer { task: *task, epoch: *epoch })
            }
            other => panic!("expected one scheduled timer, got {:?}", other),
        }
    }

    #[test]
    fn test_digit_answers_and_schedules_advance() {
        let mut s = state();
        let epoch = s.session.epoch();
        let actions = press(&mut s, KeyCode::Char('2'));
        assert_eq!(
            actions,
            vec![Action::Schedule {
                task: TimerTask::Advance,
                epoch,
                delay: Duration::from_secs(3),
            }]
        );
        assert_eq!(s.session.selected(), Some(1));
        assert_eq!(s.highlighted, 1);
    }

    #[test]
    fn test_repeat_input_while_answered_is_ignored() {
        let mut s = state();
        press(&mut s, KeyCode::Char('1'));
        assert!(press(&mut s, KeyCode::Char('2')).is_empty());
        assert!(press(&mut s, KeyCode::Enter).is_empty());
        assert_eq!(s.session.selected(), Some(0));
        assert_eq!(s.session.attempts(), 1);
    }

    #[test]
    fn test_arrows_then_enter_selects_highlighted() {
        let mut s = state();
        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Down);
        press(&mut s, KeyCode::Up);
        let actions = press(&mut s, KeyCode::Enter);
        assert_eq!(actions.len(), 1);
        assert_eq!(s.session.selected(), Some(1));
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let mut s = state();
        assert!(press(&mut s, KeyCode::Char('9')).is_empty());
        assert_eq!(s.session.selected(), None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut s = state();
        let mut key = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        let actions = handle_event(&mut s, AppEvent::Terminal(CEvent::Key(key)));
        assert!(actions.is_empty());
        assert_eq!(s.session.selected(), None);
    }

    #[test]
    fn test_full_round_schedules_restart_then_resets() {
        let mut s = state();
        for _ in 0..4 {
            let correct = s.session.current().correct_option;
            let actions = press(&mut s, KeyCode::Char((b'1' + correct as u8) as char));
            assert!(fire(&mut s, actions).is_empty());
            assert_eq!(s.session.feedback(), Feedback::None);
        }

        let correct = s.session.current().correct_option;
        let actions = press(&mut s, KeyCode::Char((b'1' + correct as u8) as char));
        let restart = fire(&mut s, actions);
        assert!(s.session.is_round_complete());
        assert_eq!(s.session.score(), 5);
        assert!(s.restart_at.is_some());
        assert!(matches!(
            restart.as_slice(),
            [Action::Schedule { task: TimerTask::Restart, delay, .. }] if *delay == Duration::from_secs(5)
        ));

        // Countdown ticks redraw while waiting.
        s.dirty = false;
        handle_event(&mut s, AppEvent::Tick);
        assert!(s.dirty);

        assert!(fire(&mut s, restart).is_empty());
        assert!(!s.session.is_round_complete());
        assert_eq!(s.session.score(), 0);
        assert_eq!(s.session.attempts(), 0);
        assert_eq!(s.restart_at, None);
    }

    #[test]
    fn test_play_again_on_completion_screen() {
        let session = QuizSession::with_rng(QuestionBank::builtin().unwrap(), 1, StdRng::seed_from_u64(1));
        let mut s = AppState::with_session(AppConfig::default(), session);
        let actions = press(&mut s, KeyCode::Char('1'));
        let restart = fire(&mut s, actions);
        assert!(s.session.is_round_complete());

        assert_eq!(press(&mut s, KeyCode::Enter), vec![Action::CancelTimers]);
        assert!(!s.session.is_round_complete());

        // The auto-restart that was pending is now stale.
        let epoch = s.session.epoch();
        assert!(fire(&mut s, restart).is_empty());
        assert_eq!(s.session.epoch(), epoch);
    }

    #[test]
    fn test_restart_mid_feedback_drops_pending_advance() {
        let mut s = state();
        let actions = press(&mut s, KeyCode::Char('1'));
        assert_eq!(press(&mut s, KeyCode::Char('r')), vec![Action::CancelTimers]);
        let question = s.session.current().id;
        assert!(fire(&mut s, actions).is_empty());
        assert_eq!(s.session.current().id, question);
        assert_eq!(s.session.attempts(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut s = state();
        assert_eq!(press(&mut s, KeyCode::Char('q')), vec![Action::Quit]);
        assert_eq!(press(&mut s, KeyCode::Esc), vec![Action::Quit]);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_event(&mut s, AppEvent::Terminal(CEvent::Key(ctrl_c))),
            vec![Action::Quit]
        );
    }
}
