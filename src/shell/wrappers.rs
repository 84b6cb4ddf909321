/// Find the index of the real executable behind leading wrapper commands.
///
/// Skips `sudo`, `env`, `command`, `builtin`, `nice` and `time` along with
/// their own options. Returns `words.len()` when only wrappers are present.
pub fn unwrap_wrappers(words: &[String]) -> usize {
    let mut i = 0;

    while let Some(word) = words.get(i) {
        match word.as_str() {
            "sudo" => {
                i += 1;
                while let Some(opt) = words.get(i) {
                    if !opt.starts_with('-') {
                        break;
                    }
                    i += match opt.as_str() {
                        "-u" | "-g" | "-h" => with_value(words, i),
                        _ => 1,
                    };
                }
            }
            "command" | "builtin" => {
                i += 1;
                while matches!(words.get(i).map(String::as_str), Some("-p" | "-v" | "-V")) {
                    i += 1;
                }
            }
            "env" => {
                i += 1;
                while let Some(opt) = words.get(i) {
                    match opt.as_str() {
                        "-i" | "-0" => i += 1,
                        "-u" => i += with_value(words, i),
                        _ => break,
                    }
                }
                while words.get(i).is_some_and(|w| is_assignment(w)) {
                    i += 1;
                }
            }
            "nice" => {
                i += 1;
                match words.get(i).map(String::as_str) {
                    Some("-n") => i += with_value(words, i),
                    Some(opt) if opt.starts_with('-') => i += 1,
                    _ => {}
                }
            }
            "time" => {
                i += 1;
                while words.get(i).is_some_and(|w| w.starts_with('-')) {
                    i += 1;
                }
            }
            _ => break,
        }
    }

    i
}

/// Width of an option that takes a value: 2 if the value exists, else 1.
fn with_value(words: &[String], i: usize) -> usize {
    if i + 1 < words.len() { 2 } else { 1 }
}

/// `NAME=VALUE` with a non-empty name
fn is_assignment(word: &str) -> bool {
    word.find('=').is_some_and(|eq| eq > 0)
}
