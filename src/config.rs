use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

use crate::catalog::CatalogSource;

pub struct Config {
    pub catalog: CatalogSource,
    pub data_path: PathBuf,
    pub log_path: PathBuf,
    pub log_level: LevelFilter,
    pub tick_rate_ms: u64,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog = lookup("KEYGAMES_CATALOG").unwrap_or_else(|| "games.json".to_string());
        Self {
            catalog: CatalogSource::parse(&catalog),
            data_path: lookup("KEYGAMES_DATA")
                .map(PathBuf::from)
                .unwrap_or_else(|| beside_exe("keygames.storage.json")),
            log_path: lookup("KEYGAMES_LOG")
                .map(PathBuf::from)
                .unwrap_or_else(|| beside_exe("keygames.log")),
            log_level: parse_or("KEYGAMES_LOG_LEVEL", lookup("KEYGAMES_LOG_LEVEL"), LevelFilter::Info),
            tick_rate_ms: parse_or("KEYGAMES_TICK_MS", lookup("KEYGAMES_TICK_MS"), 100),
        }
    }

    /// Startup summary, logged once the logger is up.
    pub fn log_summary(&self) {
        log::info!("Catalog source: {}", self.catalog.describe());
        log::info!("Storage file: {}", self.data_path.display());
        log::info!("Tick rate: {}ms", self.tick_rate_ms);
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T
where
    T::Err: Display,
{
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            log::warn!("Invalid {key} value {raw:?}: {e}, using default");
            default
        }),
    }
}

fn beside_exe(file_name: &str) -> PathBuf {
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.join(file_name);
        }
    }
    PathBuf::from(file_name)
}
