pub mod path;
pub mod tokenizer;
pub mod wrappers;

// Re-export commonly used functions
pub use path::{has_dot_dot_segment, normalize_absolute_path};
pub use tokenizer::tokenize;
pub use wrappers::unwrap_wrappers;

/// Final `/`-delimited segment of an executable word.
///
/// Falls back to the whole word when the last segment is empty (`"foo/"`).
pub fn basename(executable: &str) -> &str {
    match executable.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => executable,
    }
}

/// Whether `token` is a short-option cluster (`-rf`) containing `flag`.
pub fn has_short_flag(token: &str, flag: char) -> bool {
    if token == "-" || token.starts_with("--") {
        return false;
    }
    token
        .strip_prefix('-')
        .is_some_and(|cluster| cluster.contains(flag))
}
