use super::BlockReason;
use crate::shell::{has_dot_dot_segment, normalize_absolute_path};

const TMPDIR_PREFIXES: &[&str] = &["$TMPDIR", "${TMPDIR}"];

#[derive(Debug, Default)]
struct RmArgs<'a> {
    recursive: bool,
    force: bool,
    targets: Vec<&'a str>,
}

impl<'a> RmArgs<'a> {
    fn parse(args: &'a [String]) -> Self {
        let mut parsed = RmArgs::default();
        let mut end_of_options = false;

        for arg in args {
            let tok = arg.as_str();

            if end_of_options {
                parsed.targets.push(tok);
                continue;
            }

            if tok == "--" {
                end_of_options = true;
            } else if let Some(long) = tok.strip_prefix("--") {
                match long {
                    "recursive" => parsed.recursive = true,
                    "force" => parsed.force = true,
                    "no-preserve-root" => {
                        parsed.recursive = true;
                        parsed.force = true;
                    }
                    _ => {}
                }
            } else if let Some(cluster) = tok.strip_prefix('-').filter(|c| !c.is_empty()) {
                if cluster.contains(['r', 'R']) {
                    parsed.recursive = true;
                }
                if cluster.contains('f') {
                    parsed.force = true;
                }
            } else {
                parsed.targets.push(tok);
            }
        }

        parsed
    }
}

/// Analyze the arguments of an `rm` invocation.
///
/// Only recursive + forced removal is restricted; it must name explicit
/// targets inside `/tmp/`, `/var/tmp/` or `$TMPDIR/`.
pub fn analyze_rm(args: &[String]) -> Option<BlockReason> {
    let parsed = RmArgs::parse(args);

    if !(parsed.recursive && parsed.force) {
        return None;
    }

    if parsed.targets.is_empty() {
        return Some(BlockReason::RmWithoutTargets);
    }

    for target in &parsed.targets {
        if *target == "/" {
            return Some(BlockReason::RmRoot);
        }
        if *target == "~" || target.starts_with("~/") {
            return Some(BlockReason::RmHome);
        }
    }

    parsed.targets.iter().find_map(|target| check_target(target))
}

fn check_target(target: &str) -> Option<BlockReason> {
    if is_allowed_tmpdir_target(target) {
        return None;
    }

    let Some(normalized) = normalize_absolute_path(target) else {
        return Some(BlockReason::RmOutsideTempDirs);
    };

    match normalized.as_str() {
        "/tmp" => Some(BlockReason::RmTmpRoot),
        "/var/tmp" => Some(BlockReason::RmVarTmpRoot),
        path if path.starts_with("/tmp/") || path.starts_with("/var/tmp/") => None,
        _ => Some(BlockReason::RmOutsideTempDirs),
    }
}

/// `$TMPDIR/<sub>` or `${TMPDIR}/<sub>` without any `..` segment.
///
/// The variable's value is unknown here, so the bare directory itself is
/// never allowed and `..` is rejected rather than collapsed.
fn is_allowed_tmpdir_target(target: &str) -> bool {
    TMPDIR_PREFIXES.iter().any(|prefix| {
        target
            .strip_prefix(prefix)
            .and_then(|suffix| suffix.strip_prefix('/'))
            .is_some_and(|sub| !sub.is_empty() && !has_dot_dot_segment(sub))
    })
}
