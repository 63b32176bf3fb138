mod r#trait;
mod x11;

pub use self::r#trait::HotkeySource;
pub use self::x11::X11HotkeyListener;
