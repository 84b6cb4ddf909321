pub mod audit;
pub mod config;
pub mod error;
pub mod hook;
pub mod rules;
pub mod shell;

// Re-export commonly used types for convenience
pub use error::{AppError, AppResult};
pub use hook::{BlockedCommand, Guard, ToolInvocation};
pub use rules::{BlockReason, Verdict, analyze_command};
