use serde::Deserialize;
use thiserror::Error;

use crate::audit::AuditLogger;
use crate::config::Config;
use crate::rules::{BlockReason, Verdict, analyze_command};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to parse hook input: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A tool call about to be executed by the host
#[derive(Debug, Clone, Deserialize)]
pub struct ToolInvocation {
    pub tool: String,
    #[serde(default)]
    pub args: serde_json::Value,
}

impl ToolInvocation {
    pub fn from_json(input: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(input)?)
    }

    /// The shell command, if `args.command` is a string
    pub fn bash_command(&self) -> Option<&str> {
        self.args.get("command")?.as_str()
    }
}

/// A command the guard refused to let through
///
/// The `Display` text is the full report shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "BLOCKED by git-safety-guard\n\nReason: {reason}\n\nCommand: {command}\n\nSuggested: run `git status`, `git diff`, then `git stash push -u` before destructive ops."
)]
pub struct BlockedCommand {
    pub command: String,
    pub reason: BlockReason,
}

/// Pre-execution check applied to tool invocations
pub struct Guard {
    tools: Vec<String>,
    audit: Option<AuditLogger>,
}

impl Guard {
    pub fn new(tools: Vec<String>, audit: Option<AuditLogger>) -> Self {
        Self { tools, audit }
    }

    /// Build a guard from configuration.
    ///
    /// An audit log that cannot be opened is reported on stderr and skipped;
    /// it never stops commands from being checked.
    pub fn from_config(config: &Config) -> Self {
        let audit = if config.audit.enabled {
            let opened = match &config.audit.path {
                Some(path) => AuditLogger::with_path(path),
                None => AuditLogger::new(),
            };
            match opened {
                Ok(logger) => Some(logger),
                Err(e) => {
                    eprintln!("Audit log disabled: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self::new(config.guard.tools.clone(), audit)
    }

    /// Whether blocked commands are being recorded
    pub fn is_auditing(&self) -> bool {
        self.audit.is_some()
    }

    /// Check a tool invocation.
    ///
    /// Tools not configured for guarding, and invocations without a string
    /// command, pass through untouched.
    pub fn check(&self, invocation: &ToolInvocation) -> Result<(), BlockedCommand> {
        if !self.tools.iter().any(|tool| *tool == invocation.tool) {
            return Ok(());
        }

        let Some(command) = invocation.bash_command() else {
            return Ok(());
        };

        self.check_command(command)
    }

    /// Check a raw command line
    pub fn check_command(&self, command: &str) -> Result<(), BlockedCommand> {
        let Verdict::Blocked(reason) = analyze_command(command) else {
            return Ok(());
        };

        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log_blocked(command, reason) {
                eprintln!("Failed to write audit log: {}", e);
            }
        }

        Err(BlockedCommand {
            command: command.to_string(),
            reason,
        })
    }
}

impl Default for Guard {
    fn default() -> Self {
        Self::new(vec!["bash".to_string()], None)
    }
}
