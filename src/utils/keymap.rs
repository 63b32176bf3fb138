/// Keysym клавиши Pause
pub const PAUSE_KEYSYM: u32 = 0xff13;

/// Находит keycode по таблице GetKeyboardMapping так же, как XKeysymToKeycode:
/// сначала колонка 0 всех клавиш, затем колонка 1 и т.д., внутри колонки
/// побеждает наименьший keycode. Ноль не возвращается, так как для GrabKey
/// он означает "любая клавиша"
pub fn keycode_for_keysym(
    min_keycode: u8,
    keysyms_per_keycode: u8,
    keysyms: &[u32],
    keysym: u32,
) -> Option<u8> {
    let per = keysyms_per_keycode as usize;
    if per == 0 {
        return None;
    }

    (0..per)
        .flat_map(|column| {
            keysyms
                .chunks_exact(per)
                .enumerate()
                .filter(move |(_, row)| row[column] == keysym)
                .map(|(index, _)| index)
        })
        .next()
        .and_then(|index| u8::try_from(index).ok())
        .and_then(|index| min_keycode.checked_add(index))
        .filter(|keycode| *keycode != 0)
}
