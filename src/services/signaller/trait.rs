use crate::events::ToggleAction;
use nix::unistd::Pid;

/// Trait for delivering the suspend/resume request to a process
pub trait Signaller: Send + Sync {
    /// Fire-and-forget: the OS applies the new state on its own schedule
    fn send(&self, pid: Pid, action: ToggleAction) -> nix::Result<()>;
}

/// Factory function to create a signaller based on the dry_run flag
pub fn create_signaller(dry_run: bool) -> Box<dyn Signaller> {
    if dry_run {
        Box::new(super::dry_run::DryRunSignaller::new())
    } else {
        Box::new(super::kill::KillSignaller::new())
    }
}
