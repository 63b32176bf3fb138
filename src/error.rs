use crate::events::{ProcessId, ToggleAction, WindowId};
use std::path::PathBuf;
use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError};

/// Ошибки запуска и инфраструктуры: любая из них завершает процесс
#[derive(Error, Debug)]
pub enum PauseError {
    #[error("Cannot open display: {0}")]
    Connect(#[from] ConnectError),

    #[error("X11 connection lost: {0}")]
    Connection(#[from] ConnectionError),

    #[error("X11 request failed: {0}")]
    Reply(#[from] ReplyError),

    #[error("Active window not supported")]
    ActiveWindowUnsupported,

    #[error("XKeysymToKeycode: no keycode for keysym 0x{keysym:x}")]
    NoKeycode { keysym: u32 },

    #[error("XGrabKey: failed")]
    Grab(#[source] ReplyError),

    #[error("XSelectInput: failed")]
    SelectInput(#[source] ReplyError),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PauseError>;

/// Ошибка чтения свойства окна
#[derive(Error, Debug)]
pub enum PropertyError {
    #[error("XGetWindowProperty: failed ({property})")]
    Query {
        property: &'static str,
        #[source]
        source: ReplyError,
    },

    #[error("XGetWindowProperty: {property} has format {actual}, expected {expected}")]
    Format {
        property: &'static str,
        expected: u8,
        actual: u8,
    },
}

/// Ошибка чтения /proc/<pid>/status
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("open: failed ({})", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read: failed ({})", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ошибки одного нажатия: сообщаются и прерывают только текущее переключение
#[derive(Error, Debug)]
pub enum ToggleError {
    #[error("get_active_window: failed")]
    NoActiveWindow(#[source] Option<PropertyError>),

    #[error("get_window_pid: failed (window {window})")]
    NoWindowPid {
        window: WindowId,
        #[source]
        source: Option<PropertyError>,
    },

    #[error("get_window_pid: pid {pid} of window {window} is out of range")]
    InvalidPid { window: WindowId, pid: u32 },

    #[error("kill: failed ({action} -> pid {pid})")]
    Signal {
        pid: ProcessId,
        action: ToggleAction,
        #[source]
        source: nix::errno::Errno,
    },
}
