use git_safety_guard::config::ConfigError;
use git_safety_guard::hook::{BlockedCommand, InputError, ToolInvocation};
use git_safety_guard::{AppError, AppResult, BlockReason};
use std::error::Error;

/// Test that ConfigError converts to AppError::Config
#[test]
fn test_config_error_converts_to_app_error() {
    let config_err = ConfigError::DirectoryNotFound;
    let app_err: AppError = config_err.into();
    assert!(matches!(app_err, AppError::Config(_)));
    assert_eq!(app_err.exit_code(), 1);
}

/// Test that InputError converts to AppError::Input
#[test]
fn test_input_error_converts_to_app_error() {
    let input_err = ToolInvocation::from_json("{").unwrap_err();
    let app_err: AppError = input_err.into();
    assert!(matches!(app_err, AppError::Input(InputError::Parse(_))));
    assert!(app_err.to_string().starts_with("Hook input error: "));
}

/// Test that BlockedCommand converts to AppError::Blocked
#[test]
fn test_blocked_command_converts_to_app_error() {
    let blocked = BlockedCommand {
        command: "git push -f".to_string(),
        reason: BlockReason::PushForce,
    };
    let app_err: AppError = blocked.clone().into();

    assert!(matches!(app_err, AppError::Blocked(_)));
    assert_eq!(app_err.exit_code(), 2);
    // The block report is surfaced verbatim
    assert_eq!(app_err.to_string(), blocked.to_string());
}

/// Test that io::Error converts to AppError::Io
#[test]
fn test_io_error_converts_to_app_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let app_err: AppError = io_err.into();
    assert!(matches!(app_err, AppError::Io(_)));
}

/// Test the error source chain is preserved
#[test]
fn test_error_source_chain() {
    let config_err = ConfigError::ReadError(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "denied",
    ));
    let app_err: AppError = config_err.into();

    let source = app_err.source().expect("AppError::Config should have a source");
    assert!(source.to_string().contains("Failed to read config file"));
}

/// Test that `?` works with AppResult
#[test]
fn test_question_mark_operator() {
    fn parse(input: &str) -> AppResult<String> {
        let invocation = ToolInvocation::from_json(input)?;
        Ok(invocation.tool)
    }

    assert_eq!(parse(r#"{"tool":"bash"}"#).unwrap(), "bash");
    assert!(matches!(parse("[]").unwrap_err(), AppError::Input(_)));
}

/// Test that a rejected command line exits like a blocked hook
#[test]
fn test_rejected_command_exit_code() {
    let app_err = AppError::Rejected(BlockReason::StashClear);
    assert_eq!(app_err.exit_code(), 2);
    assert_eq!(
        app_err.to_string(),
        "blocked: `git stash clear` permanently deletes ALL stashes."
    );
}
