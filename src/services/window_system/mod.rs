//! Доступ к оконной системе: сессия X11 и чтение свойств окон.
//!
//! Модуль ничего не решает сам: он только отвечает на вопросы "какие свойства
//! у окна". Что с ними делать, решает ToggleController.

mod ewmh;
mod property;
mod r#trait;
mod x11;

#[cfg(test)]
pub mod fake;

pub use self::ewmh::{active_window, require_active_window, window_pid};
pub use self::r#trait::WindowSystem;
pub use self::x11::X11Session;
