pub mod event_loop;
pub mod hotkey_listener;
pub mod process_state;
pub mod signaller;
pub mod toggle_controller;
pub mod window_system;

pub use hotkey_listener::X11HotkeyListener;
pub use process_state::ProcessInspector;
pub use signaller::create_signaller;
pub use toggle_controller::ToggleController;
pub use window_system::X11Session;
