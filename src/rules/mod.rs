pub mod git;
pub mod rm;

use thiserror::Error;

use crate::shell::{basename, tokenize, unwrap_wrappers};

pub use git::{GitInvocation, GitSubcommand, analyze_git, parse_git_invocation};
pub use rm::analyze_rm;

/// Why a command was blocked
///
/// The `Display` text is shown verbatim to the user, so every variant
/// carries its own explanation rather than a generic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlockReason {
    #[error("`rm -rf` without explicit targets is not allowed.")]
    RmWithoutTargets,

    #[error("`rm -rf /` is not allowed.")]
    RmRoot,

    #[error("`rm -rf ~` is not allowed.")]
    RmHome,

    #[error("`rm -rf /tmp` is too broad; target a subpath like `/tmp/<name>` or `/tmp/*`.")]
    RmTmpRoot,

    #[error("`rm -rf /var/tmp` is too broad; target a subpath like `/var/tmp/<name>` or `/var/tmp/*`.")]
    RmVarTmpRoot,

    #[error("`rm -rf` is only allowed within `/tmp/`, `/var/tmp/`, or `$TMPDIR/`.")]
    RmOutsideTempDirs,

    #[error("`git checkout [<ref>] -- <paths>` overwrites the working tree with uncommitted changes lost.")]
    CheckoutPaths,

    #[error("`git checkout --force` overwrites the working tree.")]
    CheckoutForce,

    #[error("`git restore --worktree` discards uncommitted changes.")]
    RestoreWorktree,

    #[error("`git restore` is only allowed with `--staged` (worktree changes are blocked).")]
    RestoreWithoutStaged,

    #[error("`git clean` is only allowed with `-n`/`--dry-run`.")]
    CleanWithoutDryRun,

    #[error("`git clean` with force flags (`-f`/`--force`) is not allowed.")]
    CleanForce,

    #[error("Do not combine `--force-with-lease` with other force flags.")]
    PushLeaseWithForce,

    #[error("Force pushes are only allowed with `--force-with-lease`.")]
    PushForce,

    #[error("`git reset --hard` destroys uncommitted changes.")]
    ResetHard,

    #[error("`git reset --merge` can lose uncommitted changes.")]
    ResetMerge,

    #[error("`git branch -D` force-deletes a branch.")]
    BranchForceDelete,

    #[error("`git stash drop` permanently deletes stashed changes.")]
    StashDrop,

    #[error("`git stash clear` permanently deletes ALL stashes.")]
    StashClear,
}

/// Outcome of analyzing one command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Blocked(BlockReason),
}

impl Verdict {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Verdict::Blocked(_))
    }

    pub fn reason(&self) -> Option<BlockReason> {
        match self {
            Verdict::Allowed => None,
            Verdict::Blocked(reason) => Some(*reason),
        }
    }
}

impl From<Option<BlockReason>> for Verdict {
    fn from(reason: Option<BlockReason>) -> Self {
        reason.map_or(Verdict::Allowed, Verdict::Blocked)
    }
}

/// Executables with a dedicated analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Guarded {
    Rm,
    Git,
}

impl Guarded {
    fn from_executable(executable: &str) -> Option<Self> {
        match basename(executable) {
            "rm" => Some(Guarded::Rm),
            "git" => Some(Guarded::Git),
            _ => None,
        }
    }
}

/// Analyze a raw command line before it is executed.
///
/// Pure and deterministic: anything unrecognized (unknown executables,
/// odd syntax, empty input) is allowed.
pub fn analyze_command(command: &str) -> Verdict {
    let words = tokenize(command);
    let exec_index = unwrap_wrappers(&words);

    let Some(executable) = words.get(exec_index) else {
        return Verdict::Allowed;
    };
    let args = &words[exec_index + 1..];

    let reason = match Guarded::from_executable(executable) {
        Some(Guarded::Rm) => analyze_rm(args),
        Some(Guarded::Git) => analyze_git(args),
        None => None,
    };

    reason.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_allowed() {
        assert_eq!(analyze_command(""), Verdict::Allowed);
        assert_eq!(analyze_command("   # just a comment"), Verdict::Allowed);
    }

    #[test]
    fn test_unknown_executable_allowed() {
        assert_eq!(analyze_command("ls -la /"), Verdict::Allowed);
        assert_eq!(analyze_command("rmdir /tmp"), Verdict::Allowed);
    }

    #[test]
    fn test_dispatch_by_basename() {
        assert_eq!(
            analyze_command("/bin/rm -rf /"),
            Verdict::Blocked(BlockReason::RmRoot)
        );
        assert_eq!(
            analyze_command("/usr/bin/git reset --hard"),
            Verdict::Blocked(BlockReason::ResetHard)
        );
    }

    #[test]
    fn test_wrappers_only_allowed() {
        assert_eq!(analyze_command("sudo"), Verdict::Allowed);
        assert_eq!(analyze_command("env FOO=bar"), Verdict::Allowed);
    }

    #[test]
    fn test_verdict_accessors() {
        let blocked = analyze_command("git branch -D old");
        assert!(blocked.is_blocked());
        assert_eq!(blocked.reason(), Some(BlockReason::BranchForceDelete));

        let allowed = analyze_command("git branch -d old");
        assert!(!allowed.is_blocked());
        assert_eq!(allowed.reason(), None);
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(BlockReason::RmRoot.to_string(), "`rm -rf /` is not allowed.");
        assert_eq!(
            BlockReason::PushForce.to_string(),
            "Force pushes are only allowed with `--force-with-lease`."
        );
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let command = "sudo rm -rf /var/tmp";
        assert_eq!(analyze_command(command), analyze_command(command));
    }
}
