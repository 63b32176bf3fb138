use super::r#trait::HotkeySource;
use crate::error::Result;
use crate::events::HotkeyPress;
use crate::services::window_system::X11Session;
use std::os::fd::{AsFd, OwnedFd};
use std::sync::Arc;
use tokio::io::unix::AsyncFd;
use tokio::io::Interest;
use tracing::{debug, warn};
use x11rb::connection::Connection;
use x11rb::protocol::Event;

/// Ждёт KeyPress от X-сервера, не блокируя runtime
pub struct X11HotkeyListener {
    // Снимается с регистрации раньше, чем закроется соединение
    fd: AsyncFd<OwnedFd>,
    session: Arc<X11Session>,
}

impl X11HotkeyListener {
    pub fn new(session: Arc<X11Session>) -> Result<Self> {
        // Дубликат дескриптора сокета: готовность та же, а владеет им только listener
        let dup = session.connection().stream().as_fd().try_clone_to_owned()?;
        let fd = AsyncFd::with_interest(dup, Interest::READABLE)?;
        Ok(Self { fd, session })
    }

    /// Разбирает уже полученные события до первого KeyPress
    fn poll_press(&self) -> Result<Option<HotkeyPress>> {
        let conn = self.session.connection();

        while let Some(event) = conn.poll_for_event()? {
            match event {
                Event::KeyPress(e) => return Ok(Some(HotkeyPress::new(e.detail, e.time))),
                Event::Error(e) => warn!("Ошибка X11: {:?}", e),
                other => debug!("Пропущено событие: {:?}", other),
            }
        }

        Ok(None)
    }
}

#[async_trait::async_trait]
impl HotkeySource for X11HotkeyListener {
    async fn next_press(&mut self) -> Result<HotkeyPress> {
        loop {
            // Ответы на запросы свойств могли принести события в очередь x11rb
            if let Some(press) = self.poll_press()? {
                return Ok(press);
            }

            self.session.connection().flush()?;

            let mut guard = self.fd.readable().await?;
            if let Some(press) = self.poll_press()? {
                return Ok(press);
            }
            guard.clear_ready();
        }
    }
}
