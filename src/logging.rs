use env_logger::{Builder, Target};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use crate::app_dirs::AppDirs;

/// Filter spec for the file logger, e.g. `TYPIST_LOG=debug`
pub const LOG_ENV: &str = "TYPIST_LOG";

/// Install the file logger when `TYPIST_LOG` is set. The terminal belongs to
/// the UI, so log lines only ever go to the log file.
pub fn init() -> io::Result<()> {
    let Ok(filters) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    let Some(path) = AppDirs::log_path() else {
        return Ok(());
    };

    init_with(&filters, &path)
}

pub fn init_with(filters: &str, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::new()
        .parse_filters(filters)
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(io::Error::other)
}
