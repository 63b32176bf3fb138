use crate::error::ToggleError;
use crate::events::{ProcessId, RunState, ToggleAction, ToggleOutcome, WindowId};
use crate::services::process_state::ProcessInspector;
use crate::services::signaller::Signaller;
use crate::services::window_system::{self, WindowSystem};
use std::sync::Arc;
use tracing::{debug, warn};

/// Переключает процесс окна в фокусе между "остановлен" и "работает".
///
/// Состояние не хранится: каждое нажатие заново проходит цепочку
/// окно -> pid -> /proc/<pid>/status -> сигнал и останавливается на первой ошибке.
pub struct ToggleController<W: ?Sized> {
    windows: Arc<W>,
    inspector: ProcessInspector,
    signaller: Box<dyn Signaller>,
}

impl<W: WindowSystem + ?Sized> ToggleController<W> {
    pub fn new(windows: Arc<W>, inspector: ProcessInspector, signaller: Box<dyn Signaller>) -> Self {
        Self {
            windows,
            inspector,
            signaller,
        }
    }

    pub fn toggle(&self) -> Result<ToggleOutcome, ToggleError> {
        let window = self.active_window()?;
        let pid = self.window_pid(window)?;

        let target = pid
            .to_pid()
            .ok_or(ToggleError::InvalidPid { window, pid: pid.raw() })?;

        let action = ToggleAction::for_state(self.run_state(pid));

        self.signaller
            .send(target, action)
            .map_err(|source| ToggleError::Signal { pid, action, source })?;

        Ok(ToggleOutcome { window, pid, action })
    }

    fn active_window(&self) -> Result<WindowId, ToggleError> {
        window_system::active_window(&*self.windows)
            .map_err(|e| ToggleError::NoActiveWindow(Some(e)))?
            .ok_or(ToggleError::NoActiveWindow(None))
    }

    fn window_pid(&self, window: WindowId) -> Result<ProcessId, ToggleError> {
        window_system::window_pid(&*self.windows, window)
            .map_err(|e| ToggleError::NoWindowPid {
                window,
                source: Some(e),
            })?
            .ok_or(ToggleError::NoWindowPid {
                window,
                source: None,
            })
    }

    /// Если состояние прочитать не удалось, процесс считается остановленным:
    /// тогда уйдёт SIGCONT, а он для работающего процесса ничего не меняет
    fn run_state(&self, pid: ProcessId) -> RunState {
        match self.inspector.inspect(pid) {
            Ok(state) => {
                debug!("Процесс {}: {:?}", pid, state);
                state
            }
            Err(e) => {
                warn!(
                    cause = ?std::error::Error::source(&e),
                    "{}; процесс {} считается остановленным",
                    e,
                    pid
                );
                RunState::Stopped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::window_system::fake::FakeWindowSystem;
    use nix::errno::Errno;
    use nix::unistd::Pid;
    use parking_lot::Mutex;
    use std::fs;
    use tempfile::TempDir;

    /// Записывает отправленные сигналы вместо настоящего kill
    #[derive(Clone, Default)]
    struct RecordingSignaller {
        sent: Arc<Mutex<Vec<(Pid, ToggleAction)>>>,
        fail_with: Option<Errno>,
    }

    impl Signaller for RecordingSignaller {
        fn send(&self, pid: Pid, action: ToggleAction) -> nix::Result<()> {
            self.sent.lock().push((pid, action));
            match self.fail_with {
                Some(errno) => Err(errno),
                None => Ok(()),
            }
        }
    }

    struct Fixture {
        windows: Arc<FakeWindowSystem>,
        signaller: RecordingSignaller,
        procfs: TempDir,
    }

    impl Fixture {
        fn new(windows: FakeWindowSystem) -> Self {
            Self {
                windows: Arc::new(windows),
                signaller: RecordingSignaller::default(),
                procfs: TempDir::new().unwrap(),
            }
        }

        fn with_status(self, pid: u32, status: &str) -> Self {
            let dir = self.procfs.path().join(pid.to_string());
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("status"), status).unwrap();
            self
        }

        fn controller(&self) -> ToggleController<FakeWindowSystem> {
            ToggleController::new(
                self.windows.clone(),
                ProcessInspector::new(self.procfs.path()),
                Box::new(self.signaller.clone()),
            )
        }

        fn sent(&self) -> Vec<(Pid, ToggleAction)> {
            self.signaller.sent.lock().clone()
        }
    }

    #[test]
    fn test_running_process_gets_sigstop() {
        let fixture = Fixture::new(FakeWindowSystem::with_focused(0x123, 4242))
            .with_status(4242, "Name:\tmpv\nState:\tS (sleeping)\n");

        let outcome = fixture.controller().toggle().unwrap();

        assert_eq!(outcome.window, WindowId::from_raw(0x123).unwrap());
        assert_eq!(outcome.pid, ProcessId::from_raw(4242).unwrap());
        assert_eq!(outcome.action, ToggleAction::Suspend);
        assert_eq!(fixture.sent(), vec![(Pid::from_raw(4242), ToggleAction::Suspend)]);
    }

    #[test]
    fn test_stopped_process_gets_sigcont() {
        let fixture = Fixture::new(FakeWindowSystem::with_focused(0x123, 4242))
            .with_status(4242, "Name:\tmpv\nState:\tT (stopped)\n");

        let outcome = fixture.controller().toggle().unwrap();

        assert_eq!(outcome.action, ToggleAction::Resume);
        assert_eq!(fixture.sent(), vec![(Pid::from_raw(4242), ToggleAction::Resume)]);
    }

    #[test]
    fn test_unreadable_status_resumes() {
        let fixture = Fixture::new(FakeWindowSystem::with_focused(0x123, 4242));

        let outcome = fixture.controller().toggle().unwrap();

        assert_eq!(outcome.action, ToggleAction::Resume);
        assert_eq!(fixture.sent(), vec![(Pid::from_raw(4242), ToggleAction::Resume)]);
    }

    #[test]
    fn test_no_active_window_stops_early() {
        let fixture = Fixture::new(FakeWindowSystem::with_focused(0, 4242))
            .with_status(4242, "State:\tS (sleeping)\n");

        let err = fixture.controller().toggle().unwrap_err();

        assert!(matches!(err, ToggleError::NoActiveWindow(None)));
        assert_eq!(err.to_string(), "get_active_window: failed");
        // Только один запрос: _NET_ACTIVE_WINDOW
        assert_eq!(
            fixture.windows.queried_properties(),
            vec![fixture.windows.atoms.net_active_window.atom]
        );
        assert!(fixture.sent().is_empty());
    }

    #[test]
    fn test_failed_active_window_query_keeps_cause() {
        let windows = FakeWindowSystem::with_focused(0x123, 4242);
        windows.fail_property(windows.atoms.net_active_window.atom);
        let fixture = Fixture::new(windows);

        let err = fixture.controller().toggle().unwrap_err();

        assert!(matches!(err, ToggleError::NoActiveWindow(Some(_))));
        let cause = std::error::Error::source(&err).unwrap().to_string();
        assert!(cause.starts_with("XGetWindowProperty: failed"));
        assert!(fixture.sent().is_empty());
    }

    #[test]
    fn test_window_without_pid() {
        let windows = FakeWindowSystem::with_focused(0x123, 0);
        let fixture = Fixture::new(windows);

        let err = fixture.controller().toggle().unwrap_err();

        assert!(matches!(err, ToggleError::NoWindowPid { source: None, .. }));
        assert!(err.to_string().starts_with("get_window_pid: failed"));
        assert!(fixture.sent().is_empty());
    }

    #[test]
    fn test_pid_out_of_range_is_not_signalled() {
        let fixture = Fixture::new(FakeWindowSystem::with_focused(0x123, u32::MAX));

        let err = fixture.controller().toggle().unwrap_err();

        assert!(matches!(err, ToggleError::InvalidPid { pid: u32::MAX, .. }));
        assert!(fixture.sent().is_empty());
    }

    #[test]
    fn test_signal_failure_is_reported() {
        let mut fixture = Fixture::new(FakeWindowSystem::with_focused(0x123, 4242))
            .with_status(4242, "State:\tR (running)\n");
        fixture.signaller.fail_with = Some(Errno::EPERM);

        let err = fixture.controller().toggle().unwrap_err();

        match err {
            ToggleError::Signal { pid, action, source } => {
                assert_eq!(pid.raw(), 4242);
                assert_eq!(action, ToggleAction::Suspend);
                assert_eq!(source, Errno::EPERM);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_state_is_read_on_every_toggle() {
        let fixture = Fixture::new(FakeWindowSystem::with_focused(0x123, 4242))
            .with_status(4242, "State:\tS (sleeping)\n");
        let controller = fixture.controller();

        assert_eq!(controller.toggle().unwrap().action, ToggleAction::Suspend);

        let fixture = fixture.with_status(4242, "State:\tT (stopped)\n");
        assert_eq!(controller.toggle().unwrap().action, ToggleAction::Resume);
        assert_eq!(fixture.sent().len(), 2);
    }
}
