use super::ewmh::EwmhAtoms;
use super::r#trait::{RawProperty, WindowSystem};
use crate::error::{PauseError, Result};
use crate::events::WindowId;
use crate::utils::keycode_for_keysym;
use tracing::{debug, info};
use x11rb::connection::Connection;
use x11rb::errors::{ConnectError, ReplyError};
use x11rb::protocol::xproto::{
    Atom, AtomEnum, ChangeWindowAttributesAux, ConnectionExt, EventMask, GrabMode, ModMask, Window,
};
use x11rb::rust_connection::RustConnection;

/// Сессия X11: соединение, корневое окно и атомы.
///
/// Создаётся один раз при запуске и передаётся всем, кому нужен X-сервер.
/// Соединение закрывается ровно один раз, когда сессия уничтожается.
pub struct X11Session {
    conn: RustConnection,
    root: WindowId,
    atoms: EwmhAtoms,
}

impl X11Session {
    pub fn connect(display: Option<&str>) -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(display)?;

        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .and_then(|screen| WindowId::from_raw(screen.root))
            .ok_or(ConnectError::InvalidScreen)?;

        let atoms = EwmhAtoms::intern(&conn)?;

        info!(
            "Подключено к X-серверу: экран {}, корневое окно {}",
            screen_num, root
        );

        Ok(Self {
            conn,
            root,
            atoms,
        })
    }

    pub fn connection(&self) -> &RustConnection {
        &self.conn
    }

    /// Аналог XKeysymToKeycode по текущей раскладке сервера
    pub fn keycode_for_keysym(&self, keysym: u32) -> Result<u8> {
        let setup = self.conn.setup();
        let min_keycode = setup.min_keycode;
        let max_keycode = setup.max_keycode;

        let mapping = self
            .conn
            .get_keyboard_mapping(min_keycode, max_keycode - min_keycode + 1)?
            .reply()?;

        let keycode = keycode_for_keysym(
            min_keycode,
            mapping.keysyms_per_keycode,
            &mapping.keysyms,
            keysym,
        )
        .ok_or(PauseError::NoKeycode { keysym })?;

        debug!("keysym 0x{:x} -> keycode {}", keysym, keycode);
        Ok(keycode)
    }

    /// Захватывает клавишу на корневом окне с любыми модификаторами
    pub fn grab_key(&self, keycode: u8) -> Result<()> {
        self.conn
            .grab_key(
                false, // owner_events
                self.root.raw(),
                ModMask::ANY,
                keycode,
                GrabMode::ASYNC,
                GrabMode::ASYNC,
            )
            .map_err(|e| PauseError::Grab(e.into()))?
            .check()
            .map_err(PauseError::Grab)?;

        info!("Клавиша с keycode {} захвачена", keycode);
        Ok(())
    }

    /// Подписывает корневое окно на KeyPress
    pub fn select_key_press(&self) -> Result<()> {
        let aux = ChangeWindowAttributesAux::new().event_mask(EventMask::KEY_PRESS);

        self.conn
            .change_window_attributes(self.root.raw(), &aux)
            .map_err(|e| PauseError::SelectInput(e.into()))?
            .check()
            .map_err(PauseError::SelectInput)?;

        Ok(())
    }
}

impl WindowSystem for X11Session {
    fn root(&self) -> WindowId {
        self.root
    }

    fn atoms(&self) -> &EwmhAtoms {
        &self.atoms
    }

    fn get_property(&self, window: WindowId, property: Atom) -> std::result::Result<RawProperty, ReplyError> {
        let window: Window = window.raw();

        // Всё значение целиком, без удаления, любого типа
        let reply = self
            .conn
            .get_property(false, window, property, AtomEnum::ANY, 0, u32::MAX)?
            .reply()?;

        Ok(RawProperty {
            type_atom: reply.type_,
            format: reply.format,
            value: reply.value,
        })
    }
}

impl Drop for X11Session {
    fn drop(&mut self) {
        info!("Закрытие соединения с X-сервером");
    }
}
