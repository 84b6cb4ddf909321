use std::io;
use thiserror::Error;

use crate::config::ConfigError;
use crate::hook::{BlockedCommand, InputError};
use crate::rules::BlockReason;

/// Top-level application error that wraps all module-specific errors
///
/// All module errors convert to AppError via the `From` trait.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Hook input error: {0}")]
    Input(#[from] InputError),

    #[error("{0}")]
    Blocked(#[from] BlockedCommand),

    /// A command line rejected by `check`, reported without the hook banner
    #[error("blocked: {0}")]
    Rejected(BlockReason),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Process exit status for this error: 2 for a block, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Blocked(_) | AppError::Rejected(_) => 2,
            _ => 1,
        }
    }
}

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
