//! Splits a raw input line into a [`Command`].
//!
//! This is the whole grammar: runs of delimiter characters separate
//! tokens. There is no quoting, no escaping and no empty-token
//! preservation.

use crate::command::Command;

/// Characters that separate tokens: space, tab, carriage return, newline
/// and BEL. Keeping the line terminator in the set means callers may hand
/// over lines with or without their trailing newline.
fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{07}')
}

/// Tokenizes one line.
///
/// Returns `None` when the line holds no tokens at all (empty or
/// delimiters only), so the caller can skip the iteration without running
/// anything. The token vector grows without a fixed upper bound and
/// preserves input order.
pub fn parse_line(line: &str) -> Option<Command> {
    let argv: Vec<String> = line
        .split(is_delimiter)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect();
    Command::new(argv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_yields_no_command() {
        assert!(parse_line("").is_none());
    }

    #[test]
    fn test_delimiter_only_lines_yield_no_command() {
        for line in ["\n", "   ", " \t\r\n", "\u{07}", " \t \u{07} \n"] {
            assert!(parse_line(line).is_none(), "expected no command for {line:?}");
        }
    }

    #[test]
    fn test_simple_split() {
        let cmd = parse_line("echo hello world\n").unwrap();
        assert_eq!(cmd.name(), "echo");
        assert_eq!(cmd.argv(), ["echo", "hello", "world"]);
    }

    #[test]
    fn test_runs_of_delimiters_produce_no_empty_tokens() {
        let cmd = parse_line("\t ls \t\t -l\u{07}\u{07}/tmp \r\n").unwrap();
        assert_eq!(cmd.argv(), ["ls", "-l", "/tmp"]);
    }

    #[test]
    fn test_name_matches_first_token() {
        let cmd = parse_line("grep -r needle .").unwrap();
        assert_eq!(cmd.name(), cmd.argv()[0]);
        assert_eq!(cmd.arg_count(), cmd.argv().len());
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let line = "  cc -o out  main.c \t util.c\n";
        let first = parse_line(line).unwrap();
        let second = parse_line(&line.to_string()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_long_argument_vectors_are_preserved_in_order() {
        // Well past the fixed initial capacity a hand-rolled token array
        // would start with.
        let tokens: Vec<String> = (0..70).map(|i| format!("arg{i}")).collect();
        let line = tokens.join(" ");
        let cmd = parse_line(&line).unwrap();
        assert_eq!(cmd.arg_count(), 70);
        assert_eq!(cmd.argv(), &tokens[..]);
    }
}
