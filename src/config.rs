use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::views::DEFAULT_RECENT_COUNT;

/// Slot the collection is stored under.
pub const STORAGE_KEY: &str = "budgetBuddyData";
/// Environment variable overriding the artificial load delay, in milliseconds.
pub const LOAD_DELAY_ENV: &str = "BUDGET_BUDDY_LOAD_DELAY_MS";
/// Store argument that keeps the collection in memory only.
pub const IN_MEMORY_STORE: &str = "-";

const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(500);

pub const USAGE: &str = "Usage: budget-buddy [store_dir|-] [events].csv [log_level:optional] > [report].csv
Available log levels: error, warn, info, debug, trace (default: error)
Set BUDGET_BUDDY_LOAD_DELAY_MS to change the initial load delay (default: 500)";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("Invalid load delay [{0}], expected a whole number of milliseconds")]
    InvalidLoadDelay(String)
}

/// Knobs of a single budget session.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SessionSettings {
    pub storage_key: String,
    pub load_delay: Duration,
    pub recent_count: usize
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            load_delay: DEFAULT_LOAD_DELAY,
            recent_count: DEFAULT_RECENT_COUNT
        }
    }
}

/// Where the store lives.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StoreLocation {
    Directory(PathBuf),
    InMemory
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub store: StoreLocation,
    pub events_path: PathBuf,
    pub log_level: LevelFilter,
    pub settings: SessionSettings
}

impl Config {
    /// Builds the configuration from the process arguments (program name first) and the value of
    /// [`LOAD_DELAY_ENV`], if set.
    pub fn from_args(args: &[String], load_delay: Option<&str>) -> Result<Self, ConfigError> {
        let store = match args.get(1).map(String::as_str) {
            Some(IN_MEMORY_STORE) => StoreLocation::InMemory,
            Some(directory) => StoreLocation::Directory(PathBuf::from(directory)),
            None => return Err(ConfigError::MissingArgument("store_dir"))
        };

        let events_path = args.get(2)
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingArgument("events"))?;

        let log_level = args.get(3)
            .map(|level| parse_log_level(level))
            .unwrap_or(LevelFilter::ERROR);

        let mut settings = SessionSettings::default();

        if let Some(delay) = load_delay {
            let millis: u64 = delay.trim().parse()
                .map_err(|_| ConfigError::InvalidLoadDelay(delay.to_string()))?;
            settings.load_delay = Duration::from_millis(millis);
        }

        Ok(Self { store, events_path, log_level, settings })
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
