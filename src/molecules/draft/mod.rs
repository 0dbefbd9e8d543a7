pub mod export;
mod manager;
mod placeholder;
mod ticker;

pub use export::{
    build_export_uri, build_payload, format_char_count, format_export_date, format_short_date,
    OBSIDIAN_NEW_NOTE_PREFIX,
};
pub use manager::{DraftManager, ExportOutcome};
pub use placeholder::{PlaceholderRotation, PLACEHOLDER_PROMPTS};
pub use ticker::{Ticker, TickerHandle, DEFAULT_TICK_PERIOD};
