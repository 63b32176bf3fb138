pub mod keymap;

pub use keymap::keycode_for_keysym;
