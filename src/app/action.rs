use crate::quiz::session::TimerTask;
use std::time::Duration;

#[derive(Debug, PartialEq)]
pub enum Action {
    Schedule { task: TimerTask, epoch: u64, delay: Duration },
    CancelTimers,
    Quit,
}
