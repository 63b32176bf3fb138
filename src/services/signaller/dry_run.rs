use super::r#trait::Signaller;
use crate::events::ToggleAction;
use nix::unistd::Pid;
use tracing::info;

pub struct DryRunSignaller;

impl DryRunSignaller {
    pub fn new() -> Self {
        Self
    }
}

impl Signaller for DryRunSignaller {
    fn send(&self, pid: Pid, action: ToggleAction) -> nix::Result<()> {
        info!("Dry-run: {} процессу {} не отправлен", action, pid);
        Ok(())
    }
}
