use super::ewmh::EwmhAtoms;
use crate::events::WindowId;
use x11rb::errors::ReplyError;
use x11rb::protocol::xproto::{Atom, AtomEnum};

/// Значение свойства в том виде, в каком его вернул сервер
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProperty {
    pub type_atom: Atom,
    /// Ширина элемента в битах: 0 (свойство не задано), 8, 16 или 32
    pub format: u8,
    pub value: Vec<u8>,
}

impl RawProperty {
    pub fn is_unset(&self) -> bool {
        self.type_atom == Atom::from(AtomEnum::NONE) && self.format == 0
    }
}

/// Trait for the windowing backend used by the toggle pipeline
pub trait WindowSystem {
    /// Root window of the screen the session was opened on
    fn root(&self) -> WindowId;

    /// EWMH atoms interned once when the session was created
    fn atoms(&self) -> &EwmhAtoms;

    /// Full, non-destructive read of `property` on `window`, any type
    fn get_property(&self, window: WindowId, property: Atom) -> Result<RawProperty, ReplyError>;
}
