mod config;
mod mode;
mod theme;

pub use config::{Config, ExportConfig, GeneralConfig, KeyboardConfig};
pub use mode::DraftState;
pub use theme::Theme;
