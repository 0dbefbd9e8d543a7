mod config_io;
mod draft_store;
mod logging;

pub use config_io::{
    config_dir, config_path, ensure_config_dir, expand_tilde, load_config, load_config_from,
    resolve_data_dir, save_config, save_config_to,
};
pub use draft_store::{DraftStore, FileStore, MemoryStore, DRAFT_KEY};
pub use logging::{init_logging, log_dir};
