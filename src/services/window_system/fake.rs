//! Поддельная оконная система для тестов: свойства задаются вручную,
//! все запросы записываются
use super::ewmh::{EwmhAtoms, PropertyAtom};
use super::r#trait::{RawProperty, WindowSystem};
use crate::events::WindowId;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use x11rb::errors::{ConnectionError, ReplyError};
use x11rb::protocol::xproto::{Atom, AtomEnum};

const ROOT: u32 = 0x1e5;

pub struct FakeWindowSystem {
    pub atoms: EwmhAtoms,
    properties: Mutex<HashMap<(u32, Atom), RawProperty>>,
    failing: Mutex<HashSet<Atom>>,
    queries: Mutex<Vec<(WindowId, Atom)>>,
}

impl FakeWindowSystem {
    pub fn new() -> Self {
        Self {
            atoms: EwmhAtoms {
                net_supported: PropertyAtom {
                    atom: 301,
                    name: EwmhAtoms::NET_SUPPORTED,
                },
                net_active_window: PropertyAtom {
                    atom: 302,
                    name: EwmhAtoms::NET_ACTIVE_WINDOW,
                },
                net_wm_pid: PropertyAtom {
                    atom: 303,
                    name: EwmhAtoms::NET_WM_PID,
                },
            },
            properties: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Окно `window` в фокусе, его процесс `pid`, менеджер поддерживает _NET_ACTIVE_WINDOW
    pub fn with_focused(window: u32, pid: u32) -> Self {
        let windows = Self::new();
        let atoms = windows.atoms;
        windows.set_words(
            windows.root_id(),
            atoms.net_supported.atom,
            &[atoms.net_active_window.atom, atoms.net_wm_pid.atom],
        );
        windows.set_words(windows.root_id(), atoms.net_active_window.atom, &[window]);
        if let Some(window) = WindowId::from_raw(window) {
            windows.set_words(window, atoms.net_wm_pid.atom, &[pid]);
        }
        windows
    }

    pub fn root_id(&self) -> WindowId {
        WindowId::from_raw(ROOT).unwrap()
    }

    pub fn set_words(&self, window: WindowId, property: Atom, words: &[u32]) {
        let type_atom = if property == self.atoms.net_active_window.atom {
            AtomEnum::WINDOW.into()
        } else if property == self.atoms.net_supported.atom {
            AtomEnum::ATOM.into()
        } else {
            AtomEnum::CARDINAL.into()
        };
        let value = words.iter().flat_map(|w| w.to_ne_bytes()).collect();
        self.set_raw(
            window,
            property,
            RawProperty {
                type_atom,
                format: 32,
                value,
            },
        );
    }

    pub fn set_raw(&self, window: WindowId, property: Atom, raw: RawProperty) {
        self.properties.lock().insert((window.raw(), property), raw);
    }

    pub fn fail_property(&self, property: Atom) {
        self.failing.lock().insert(property);
    }

    pub fn queried_windows(&self) -> Vec<WindowId> {
        self.queries.lock().iter().map(|(window, _)| *window).collect()
    }

    pub fn queried_properties(&self) -> Vec<Atom> {
        self.queries.lock().iter().map(|(_, atom)| *atom).collect()
    }
}

impl WindowSystem for FakeWindowSystem {
    fn root(&self) -> WindowId {
        self.root_id()
    }

    fn atoms(&self) -> &EwmhAtoms {
        &self.atoms
    }

    fn get_property(&self, window: WindowId, property: Atom) -> Result<RawProperty, ReplyError> {
        self.queries.lock().push((window, property));

        if self.failing.lock().contains(&property) {
            return Err(ReplyError::from(ConnectionError::UnknownError));
        }

        Ok(self
            .properties
            .lock()
            .get(&(window.raw(), property))
            .cloned()
            .unwrap_or(RawProperty {
                type_atom: AtomEnum::NONE.into(),
                format: 0,
                value: Vec::new(),
            }))
    }
}
