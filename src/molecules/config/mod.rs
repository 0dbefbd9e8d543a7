mod keybindings;
mod themes;

pub use keybindings::{KeyChord, Keybindings};
pub use themes::ThemeManager;
