use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::fs;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "void";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

pub fn log_dir(config_dir: &Path) -> PathBuf {
    config_dir.join("logs")
}

/// Start file logging. The terminal belongs to the UI, so nothing goes to stderr.
///
/// `RUST_LOG` overrides `level`. Keep the returned handle alive for the life of
/// the process.
pub fn init_logging(level: &str, dir: &Path) -> Result<LoggerHandle> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {:?}", dir))?;

    let handle = Logger::try_with_env_or_str(level)
        .with_context(|| format!("Invalid log level: {}", level))?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::Direct)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .with_context(|| "Failed to start logger")?;

    log::info!(
        "event=app_start version={} platform={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        dir.display()
    );

    Ok(handle)
}
