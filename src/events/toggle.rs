use super::{ProcessId, RunState, WindowId};
use nix::sys::signal::Signal;
use std::fmt;

/// Действие над процессом: противоположно текущему состоянию
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Suspend,
    Resume,
}

impl ToggleAction {
    pub fn for_state(state: RunState) -> Self {
        match state {
            RunState::Stopped => ToggleAction::Resume,
            RunState::Running => ToggleAction::Suspend,
        }
    }

    pub fn signal(&self) -> Signal {
        match self {
            ToggleAction::Suspend => Signal::SIGSTOP,
            ToggleAction::Resume => Signal::SIGCONT,
        }
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signal().as_str())
    }
}

/// Результат успешного переключения
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub window: WindowId,
    pub pid: ProcessId,
    pub action: ToggleAction,
}

impl fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> pid {} (window {})", self.action, self.pid, self.window)
    }
}
