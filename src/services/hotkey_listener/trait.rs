use crate::error::Result;
use crate::events::HotkeyPress;

/// Trait for sources of hotkey presses
#[async_trait::async_trait]
pub trait HotkeySource: Send {
    /// Wait for the next press. Errors are fatal for the event loop
    async fn next_press(&mut self) -> Result<HotkeyPress>;
}
