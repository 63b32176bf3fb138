use nix::unistd::Pid;
use std::fmt;

/// PID процесса-владельца окна (значение _NET_WM_PID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(u32);

impl ProcessId {
    pub fn from_raw(raw: u32) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    pub fn raw(&self) -> u32 {
        self.0
    }

    /// PID для kill(2). Значения вне положительного диапазона pid_t отвергаются:
    /// kill с нулём или отрицательным числом адресует группу процессов
    pub fn to_pid(&self) -> Option<Pid> {
        i32::try_from(self.0)
            .ok()
            .filter(|raw| *raw > 0)
            .map(Pid::from_raw)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Состояние процесса, прочитанное из /proc при каждом нажатии
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}
