use super::property::{read_property, AtomList, CardinalList, WindowList};
use super::r#trait::WindowSystem;
use crate::error::{PauseError, PropertyError};
use crate::events::{ProcessId, WindowId};
use tracing::{debug, warn};
use x11rb::errors::ReplyError;
use x11rb::protocol::xproto::{Atom, ConnectionExt};

/// Атом свойства вместе с его именем (для диагностики)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyAtom {
    pub atom: Atom,
    pub name: &'static str,
}

/// Атомы EWMH, с которыми работает переключатель
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EwmhAtoms {
    pub net_supported: PropertyAtom,
    pub net_active_window: PropertyAtom,
    pub net_wm_pid: PropertyAtom,
}

impl EwmhAtoms {
    pub const NET_SUPPORTED: &'static str = "_NET_SUPPORTED";
    pub const NET_ACTIVE_WINDOW: &'static str = "_NET_ACTIVE_WINDOW";
    pub const NET_WM_PID: &'static str = "_NET_WM_PID";

    /// Интернирует атомы (only_if_exists = false: отсутствующие создаются)
    pub fn intern<C: ConnectionExt>(conn: &C) -> Result<Self, ReplyError> {
        let intern = |name: &'static str| -> Result<PropertyAtom, ReplyError> {
            let atom = conn.intern_atom(false, name.as_bytes())?.reply()?.atom;
            debug!("Атом {} = {}", name, atom);
            Ok(PropertyAtom { atom, name })
        };

        Ok(Self {
            net_supported: intern(Self::NET_SUPPORTED)?,
            net_active_window: intern(Self::NET_ACTIVE_WINDOW)?,
            net_wm_pid: intern(Self::NET_WM_PID)?,
        })
    }
}

/// Объявляет ли оконный менеджер поддержку _NET_ACTIVE_WINDOW.
/// Пустой список или ошибка запроса означают "нет"
pub fn active_window_supported<W: WindowSystem + ?Sized>(windows: &W) -> bool {
    let atoms = windows.atoms();

    match read_property::<AtomList, _>(windows, atoms.net_supported, None) {
        Ok(supported) => supported
            .iter()
            .any(|atom| *atom == atoms.net_active_window.atom),
        Err(e) => {
            warn!(cause = ?std::error::Error::source(&e), "{}", e);
            false
        }
    }
}

/// Проверка при запуске: без _NET_ACTIVE_WINDOW работать не с чем
pub fn require_active_window<W: WindowSystem + ?Sized>(windows: &W) -> Result<(), PauseError> {
    if active_window_supported(windows) {
        Ok(())
    } else {
        Err(PauseError::ActiveWindowUnsupported)
    }
}

/// Окно в фокусе. Актуальность окна не проверяется: фокус мог уже смениться
pub fn active_window<W: WindowSystem + ?Sized>(
    windows: &W,
) -> Result<Option<WindowId>, PropertyError> {
    let values = read_property::<WindowList, _>(windows, windows.atoms().net_active_window, None)?;
    Ok(values.first().flatten())
}

/// PID процесса, создавшего окно. Окно без _NET_WM_PID неотличимо от ошибки
pub fn window_pid<W: WindowSystem + ?Sized>(
    windows: &W,
    window: WindowId,
) -> Result<Option<ProcessId>, PropertyError> {
    let values = read_property::<CardinalList, _>(windows, windows.atoms().net_wm_pid, Some(window))?;
    Ok(values.first().and_then(ProcessId::from_raw))
}
