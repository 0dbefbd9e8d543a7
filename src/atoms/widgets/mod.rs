mod editor_widget;
mod status_bar;
pub mod wrap_calc;

pub use editor_widget::{text_column, EditorWidget};
pub use status_bar::StatusBar;
