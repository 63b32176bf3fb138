use super::ewmh::PropertyAtom;
use super::r#trait::WindowSystem;
use crate::error::PropertyError;
use crate::events::WindowId;
use std::marker::PhantomData;
use x11rb::protocol::xproto::Atom;

/// Как разбирать значение свойства конкретного вида.
///
/// Вместо слепой переинтерпретации буфера каждый вид объявляет ожидаемую
/// ширину элемента; при несовпадении чтение завершается PropertyError::Format.
pub trait PropertyKind {
    type Item: Copy;

    const FORMAT: u8;

    fn item(word: u32) -> Self::Item;
}

/// Список атомов (_NET_SUPPORTED)
#[derive(Debug)]
pub struct AtomList;

impl PropertyKind for AtomList {
    type Item = Atom;

    const FORMAT: u8 = 32;

    fn item(word: u32) -> Atom {
        word
    }
}

/// Список окон (_NET_ACTIVE_WINDOW). Ноль означает "нет окна"
#[derive(Debug)]
pub struct WindowList;

impl PropertyKind for WindowList {
    type Item = Option<WindowId>;

    const FORMAT: u8 = 32;

    fn item(word: u32) -> Option<WindowId> {
        WindowId::from_raw(word)
    }
}

/// Список беззнаковых чисел (_NET_WM_PID)
#[derive(Debug)]
pub struct CardinalList;

impl PropertyKind for CardinalList {
    type Item = u32;

    const FORMAT: u8 = 32;

    fn item(word: u32) -> u32 {
        word
    }
}

/// Разобранное значение свойства. Владеет своими данными и освобождается
/// вместе с областью видимости вызывающего
#[derive(Debug)]
pub struct PropertyValues<K: PropertyKind> {
    items: Vec<K::Item>,
    _kind: PhantomData<K>,
}

impl<K: PropertyKind> PropertyValues<K> {
    fn new(items: Vec<K::Item>) -> Self {
        Self {
            items,
            _kind: PhantomData,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<K::Item> {
        self.items.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &K::Item> {
        self.items.iter()
    }
}

/// Читает свойство целиком с окна `window` (по умолчанию корневое окно)
pub fn read_property<K, W>(
    windows: &W,
    property: PropertyAtom,
    window: Option<WindowId>,
) -> Result<PropertyValues<K>, PropertyError>
where
    K: PropertyKind,
    W: WindowSystem + ?Sized,
{
    let window = window.unwrap_or_else(|| windows.root());

    let raw = windows
        .get_property(window, property.atom)
        .map_err(|source| PropertyError::Query {
            property: property.name,
            source,
        })?;

    if raw.is_unset() {
        return Ok(PropertyValues::empty());
    }

    if raw.format != K::FORMAT {
        return Err(PropertyError::Format {
            property: property.name,
            expected: K::FORMAT,
            actual: raw.format,
        });
    }

    // Сервер присылает ответы в порядке байт клиента
    let items = raw
        .value
        .chunks_exact(4)
        .map(|chunk| u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .map(K::item)
        .collect();

    Ok(PropertyValues::new(items))
}
