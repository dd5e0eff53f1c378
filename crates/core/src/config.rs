use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub reminder: ReminderConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            reminder: ReminderConfig::from_env(),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  storage:   data_dir={}", self.storage.data_dir.display());
        tracing::info!(
            "  reminder:  interval={}h",
            self.reminder.interval_hours
        );
    }
}

// ── Storage ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    fn from_env() -> Self {
        Self {
            data_dir: PathBuf::from(env_or("CAMPUSFIX_DATA_DIR", "data")),
        }
    }
}

// ── Reminder ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Minimum gap between reminders on a track, in hours. Both tracks use
    /// the same interval.
    pub interval_hours: u32,
}

impl ReminderConfig {
    fn from_env() -> Self {
        Self {
            interval_hours: env_u32("CAMPUSFIX_REMINDER_INTERVAL_HOURS", 48),
        }
    }

    pub fn interval(&self) -> chrono::Duration {
        chrono::Duration::hours(i64::from(self.interval_hours))
    }
}
