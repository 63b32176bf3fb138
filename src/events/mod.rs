pub mod hotkey;
pub mod process;
pub mod toggle;
pub mod window;

pub use hotkey::HotkeyPress;
pub use process::{ProcessId, RunState};
pub use toggle::{ToggleAction, ToggleOutcome};
pub use window::WindowId;
