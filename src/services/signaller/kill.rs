use super::r#trait::Signaller;
use crate::events::ToggleAction;
use nix::sys::signal;
use nix::unistd::Pid;
use tracing::debug;

/// Отправка SIGSTOP/SIGCONT через kill(2)
pub struct KillSignaller;

impl KillSignaller {
    pub fn new() -> Self {
        Self
    }
}

impl Signaller for KillSignaller {
    fn send(&self, pid: Pid, action: ToggleAction) -> nix::Result<()> {
        debug!("kill({}, {})", pid, action);
        signal::kill(pid, action.signal())
    }
}
