// File logger: the terminal belongs to the UI, so records go to a log file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

struct FileLogger {
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(timestamp_millis(), record);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{line}");
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

fn format_line(ts: u128, record: &Record) -> String {
    format!(
        "[{}] [{:>5}] {}: {}",
        ts,
        record.level(),
        record.target(),
        record.args()
    )
}

fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Installs the global logger. Fails if the log file can't be opened or a
/// logger is already installed.
pub fn init(path: &Path, level: LevelFilter) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    log::set_boxed_logger(Box::new(FileLogger {
        file: Mutex::new(file),
    }))
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    #[test]
    fn line_carries_level_target_and_message() {
        let line = format_line(
            42,
            &Record::builder()
                .level(Level::Warn)
                .target("keygames::catalog")
                .args(format_args!("Cannot load catalog"))
                .build(),
        );
        assert_eq!(line, "[42] [ WARN] keygames::catalog: Cannot load catalog");
    }
}
