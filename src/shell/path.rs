/// Normalize a literal absolute POSIX path without touching the filesystem.
///
/// Empty and `.` segments are dropped and `..` pops the previous segment.
/// Returns `None` for relative paths and for paths whose `..` segments
/// would climb above `/`.
pub fn normalize_absolute_path(raw: &str) -> Option<String> {
    if !raw.starts_with('/') {
        return None;
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                segments.pop()?;
            }
            _ => segments.push(segment),
        }
    }

    Some(format!("/{}", segments.join("/")))
}

/// Whether a raw path contains a literal `..` segment.
pub fn has_dot_dot_segment(path: &str) -> bool {
    path.split('/').any(|segment| segment == "..")
}
