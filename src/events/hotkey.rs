use std::fmt;

/// Нажатие захваченной клавиши. Ядру нужен только сам факт нажатия
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyPress {
    pub keycode: u8,
    /// Время X-сервера (мс)
    pub time: u32,
}

impl HotkeyPress {
    pub fn new(keycode: u8, time: u32) -> Self {
        Self { keycode, time }
    }
}

impl fmt::Display for HotkeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "keycode {} @ {}", self.keycode, self.time)
    }
}
