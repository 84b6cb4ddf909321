use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use chrono::Utc;

use crate::config::Config;
use crate::rules::BlockReason;

const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Append-only record of blocked commands
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger with the default log path
    pub fn new() -> std::io::Result<Self> {
        let log_path = Self::default_log_path()?;
        Self::with_path(log_path)
    }

    /// Create an AuditLogger with a custom log path
    pub fn with_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let log_path = path.as_ref().to_path_buf();

        // Ensure directory exists
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(Self { log_path })
    }

    /// Default log path: ~/.config/git-safety-guard/blocked.log
    fn default_log_path() -> std::io::Result<PathBuf> {
        let dir = Config::config_dir().map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "HOME environment variable not set",
            )
        })?;

        Ok(dir.join("blocked.log"))
    }

    /// Log a blocked command
    pub fn log_blocked(&self, command: &str, reason: BlockReason) -> std::io::Result<()> {
        self.rotate_if_needed()?;

        let timestamp = Utc::now().to_rfc3339();
        let user = std::env::var("USER").unwrap_or_else(|_| "unknown".to_string());

        let log_entry = format!(
            "[{}] [{}] [BLOCKED] reason=\"{}\" command=\"{}\"\n",
            timestamp,
            user,
            reason,
            single_line(command)
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        file.write_all(log_entry.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Rotate log file if it exceeds MAX_LOG_SIZE
    fn rotate_if_needed(&self) -> std::io::Result<()> {
        if !self.log_path.exists() {
            return Ok(());
        }

        let metadata = fs::metadata(&self.log_path)?;
        if metadata.len() > MAX_LOG_SIZE {
            fs::rename(&self.log_path, self.backup_path())?;
        }

        Ok(())
    }

    /// Rotation target: the log's full file name with `.1` appended
    fn backup_path(&self) -> PathBuf {
        let mut name = self.log_path.clone().into_os_string();
        name.push(".1");
        PathBuf::from(name)
    }

    /// Get the path to the log file
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Keep one entry per line even for multi-line commands
fn single_line(command: &str) -> String {
    command.replace('\n', "\\n").replace('\r', "\\r")
}
