use super::BlockReason;
use crate::shell::has_short_flag;

/// Global options that take a separate value word
const VALUE_OPTIONS: &[&str] = &["-C", "-c", "--git-dir", "--work-tree", "--namespace"];

/// A git command line split into its subcommand and remaining arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInvocation {
    pub subcommand: Option<String>,
    pub args: Vec<String>,
}

/// Subcommands with a destructive mode worth guarding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitSubcommand {
    Checkout,
    Restore,
    Clean,
    Push,
    Reset,
    Branch,
    Stash,
    Other,
}

impl GitSubcommand {
    pub fn from_name(name: &str) -> Self {
        match name {
            "checkout" => GitSubcommand::Checkout,
            "restore" => GitSubcommand::Restore,
            "clean" => GitSubcommand::Clean,
            "push" => GitSubcommand::Push,
            "reset" => GitSubcommand::Reset,
            "branch" => GitSubcommand::Branch,
            "stash" => GitSubcommand::Stash,
            _ => GitSubcommand::Other,
        }
    }
}

/// Skip global git options to find the subcommand.
///
/// `args` are the words after `git` itself. A `--` ends option skipping
/// and is consumed.
pub fn parse_git_invocation(args: &[String]) -> GitInvocation {
    let mut i = 0;

    while let Some(tok) = args.get(i) {
        if tok == "--" {
            i += 1;
            break;
        }
        if !tok.starts_with('-') {
            break;
        }
        if VALUE_OPTIONS.contains(&tok.as_str()) && i + 1 < args.len() {
            i += 2;
        } else {
            i += 1;
        }
    }

    match args.get(i) {
        Some(subcommand) => GitInvocation {
            subcommand: Some(subcommand.clone()),
            args: args[i + 1..].to_vec(),
        },
        None => GitInvocation {
            subcommand: None,
            args: Vec::new(),
        },
    }
}

/// Analyze the arguments of a `git` invocation.
pub fn analyze_git(args: &[String]) -> Option<BlockReason> {
    let invocation = parse_git_invocation(args);
    let subcommand = invocation.subcommand.as_deref()?;
    let args = Args(&invocation.args);

    match GitSubcommand::from_name(subcommand) {
        GitSubcommand::Checkout => check_checkout(args),
        GitSubcommand::Restore => check_restore(args),
        GitSubcommand::Clean => check_clean(args),
        GitSubcommand::Push => check_push(args),
        GitSubcommand::Reset => check_reset(args),
        GitSubcommand::Branch => args.has("-D").then_some(BlockReason::BranchForceDelete),
        GitSubcommand::Stash => check_stash(args),
        GitSubcommand::Other => None,
    }
}

#[derive(Clone, Copy)]
struct Args<'a>(&'a [String]);

impl Args<'_> {
    fn has(&self, flag: &str) -> bool {
        self.0.iter().any(|arg| arg == flag)
    }

    fn has_short(&self, flag: char) -> bool {
        self.0.iter().any(|arg| has_short_flag(arg, flag))
    }

    fn has_force(&self) -> bool {
        self.has("--force") || self.has_short('f')
    }

    fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }
}

fn check_checkout(args: Args) -> Option<BlockReason> {
    if args.has("-b") || args.has("--orphan") {
        return None;
    }
    if args.has("--") {
        return Some(BlockReason::CheckoutPaths);
    }
    if args.has("-f") || args.has("--force") {
        return Some(BlockReason::CheckoutForce);
    }
    None
}

fn check_restore(args: Args) -> Option<BlockReason> {
    if args.has("--worktree") || args.has("-W") {
        return Some(BlockReason::RestoreWorktree);
    }
    if args.has("--staged") {
        return None;
    }
    Some(BlockReason::RestoreWithoutStaged)
}

fn check_clean(args: Args) -> Option<BlockReason> {
    let dry_run = args.has("--dry-run") || args.has_short('n');
    if !dry_run {
        return Some(BlockReason::CleanWithoutDryRun);
    }
    if args.has_force() {
        return Some(BlockReason::CleanForce);
    }
    None
}

fn check_push(args: Args) -> Option<BlockReason> {
    let with_lease = args
        .0
        .iter()
        .any(|arg| arg == "--force-with-lease" || arg.starts_with("--force-with-lease="));

    match (with_lease, args.has_force()) {
        (true, true) => Some(BlockReason::PushLeaseWithForce),
        (false, true) => Some(BlockReason::PushForce),
        (_, false) => None,
    }
}

fn check_reset(args: Args) -> Option<BlockReason> {
    if args.has("--hard") {
        return Some(BlockReason::ResetHard);
    }
    if args.has("--merge") {
        return Some(BlockReason::ResetMerge);
    }
    None
}

fn check_stash(args: Args) -> Option<BlockReason> {
    match args.first() {
        Some("drop") => Some(BlockReason::StashDrop),
        Some("clear") => Some(BlockReason::StashClear),
        _ => None,
    }
}
