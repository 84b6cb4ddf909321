/// Quoting state of the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

fn is_word_separator(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Split a command line into shell-like words.
///
/// Handles single and double quotes, backslash escapes and `#` comments.
/// Never fails: an unterminated quote runs to the end of the input.
/// Empty words are never emitted, so `""` on its own produces nothing.
pub fn tokenize(command: &str) -> Vec<String> {
    let chars: Vec<char> = command.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote = Quote::None;

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];

        match quote {
            Quote::Single => {
                if ch == '\'' {
                    quote = Quote::None;
                } else {
                    current.push(ch);
                }
            }
            Quote::Double => match ch {
                '"' => quote = Quote::None,
                '\\' => match chars.get(i + 1) {
                    Some(&next) => {
                        current.push(next);
                        i += 1;
                    }
                    None => current.push('\\'),
                },
                _ => current.push(ch),
            },
            Quote::None => match ch {
                '\'' => quote = Quote::Single,
                '"' => quote = Quote::Double,
                '\\' => match chars.get(i + 1) {
                    Some(&next) => {
                        current.push(next);
                        i += 1;
                    }
                    None => current.push('\\'),
                },
                '#' if i == 0 || is_word_separator(chars[i - 1]) => {
                    // Comment runs to end of input
                    break;
                }
                _ if is_word_separator(ch) => flush(&mut current, &mut words),
                _ => current.push(ch),
            },
        }

        i += 1;
    }

    flush(&mut current, &mut words);
    words
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(tokenize("git status"), vec!["git", "status"]);
        assert_eq!(tokenize("  rm   -rf\tfoo  "), vec!["rm", "-rf", "foo"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn test_double_quotes() {
        assert_eq!(tokenize("echo \"a b\" c"), vec!["echo", "a b", "c"]);
        assert_eq!(tokenize(r#"echo "say \"hi\"""#), vec!["echo", "say \"hi\""]);
    }

    #[test]
    fn test_single_quotes_are_literal() {
        assert_eq!(tokenize(r"echo 'a\b c'"), vec!["echo", r"a\b c"]);
        assert_eq!(tokenize("echo 'x # y'"), vec!["echo", "x # y"]);
    }

    #[test]
    fn test_adjacent_quotes_join_word() {
        assert_eq!(tokenize("rm -rf '/tmp'/\"build\""), vec!["rm", "-rf", "/tmp/build"]);
    }

    #[test]
    fn test_empty_quotes_produce_no_word() {
        assert_eq!(tokenize("echo '' \"\""), vec!["echo"]);
    }

    #[test]
    fn test_backslash_escapes() {
        assert_eq!(tokenize(r"rm my\ file"), vec!["rm", "my file"]);
        assert_eq!(tokenize(r"echo \#notacomment"), vec!["echo", "#notacomment"]);
    }

    #[test]
    fn test_trailing_backslash_is_kept() {
        assert_eq!(tokenize(r"echo foo\"), vec!["echo", r"foo\"]);
        assert_eq!(tokenize(r#"echo "foo\"#), vec!["echo", r"foo\"]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(tokenize("rm -rf foo # comment"), vec!["rm", "-rf", "foo"]);
        assert!(tokenize("# rm -rf /").is_empty());
        assert_eq!(tokenize("echo\t#tab comment"), vec!["echo"]);
    }

    #[test]
    fn test_hash_inside_word_is_literal() {
        assert_eq!(tokenize("echo a#b"), vec!["echo", "a#b"]);
        assert_eq!(tokenize("git checkout issue#12"), vec!["git", "checkout", "issue#12"]);
    }

    #[test]
    fn test_unterminated_quotes() {
        assert_eq!(tokenize("echo 'abc def"), vec!["echo", "abc def"]);
        assert_eq!(tokenize("echo \"abc # def"), vec!["echo", "abc # def"]);
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(tokenize("rm -rf /tmp/café"), vec!["rm", "-rf", "/tmp/café"]);
    }
}
