use crate::error::InspectError;
use crate::events::{ProcessId, RunState};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Сколько байт status читается за раз. Строка State: обычно третья, но при
/// очень длинном Name: она может не поместиться, и процесс будет считаться
/// работающим. Повторного чтения нет
pub const STATUS_READ_LIMIT: usize = 512;

const STOPPED_MARKER: &[u8] = b"State:\tT";

/// Читает состояние процесса из <procfs>/<pid>/status
#[derive(Debug, Clone)]
pub struct ProcessInspector {
    procfs_root: PathBuf,
}

impl ProcessInspector {
    pub fn new(procfs_root: impl Into<PathBuf>) -> Self {
        Self {
            procfs_root: procfs_root.into(),
        }
    }

    pub fn status_path(&self, pid: ProcessId) -> PathBuf {
        self.procfs_root.join(pid.raw().to_string()).join("status")
    }

    /// Состояние процесса на момент вызова. Файл закрывается при выходе
    /// из функции на любом пути
    pub fn inspect(&self, pid: ProcessId) -> Result<RunState, InspectError> {
        let path = self.status_path(pid);

        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(source) => return Err(InspectError::Open { path, source }),
        };

        let mut buf = [0u8; STATUS_READ_LIMIT];
        let read = match file.read(&mut buf) {
            Ok(0) => {
                return Err(InspectError::Read {
                    path,
                    source: io::Error::new(io::ErrorKind::UnexpectedEof, "status is empty"),
                })
            }
            Ok(read) => read,
            Err(source) => return Err(InspectError::Read { path, source }),
        };

        if is_stopped(&buf[..read]) {
            Ok(RunState::Stopped)
        } else {
            Ok(RunState::Running)
        }
    }
}

/// Есть ли строка, начинающаяся с "State:\tT"
fn is_stopped(status: &[u8]) -> bool {
    status.starts_with(STOPPED_MARKER)
        || status
            .windows(STOPPED_MARKER.len() + 1)
            .any(|w| w[0] == b'\n' && &w[1..] == STOPPED_MARKER)
}
