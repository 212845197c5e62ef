/// String literal escaping and unescaping for expression syntax.
///
/// This module converts between:
/// - Runtime strings (e.g., "hello\n" with an actual newline character)
/// - Source code string literals (e.g., "hello\n" with a backslash-n sequence)
///
/// Literals are always double-quoted. Recognised escapes are the C set
/// `\n \t \\ \" \a \b \f \r \v`; any other escaped character is passed
/// through literally (`\q` is `q`).
use core::fmt;

/// Escape special characters so that `s` can be written back as a literal.
///
/// The output includes the surrounding double quotes.
///
/// # Example
///
/// ```
/// use exparse_core::syntax::string_literal::escape_string;
///
/// let mut output = String::new();
/// escape_string(&mut output, "hello\n\"world\"").unwrap();
/// assert_eq!(output, r#""hello\n\"world\"""#);
/// ```
pub fn escape_string(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    f.write_char('"')?;

    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\u{07}' => f.write_str("\\a")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0C}' => f.write_str("\\f")?,
            '\u{0B}' => f.write_str("\\v")?,
            c => f.write_char(c)?,
        }
    }

    f.write_char('"')
}

/// Process the escape sequences of literal content (without the quotes).
///
/// This never fails: unknown escapes keep the escaped character and a
/// trailing lone backslash is kept as is.
pub fn unescape_string(input: &str) -> String {
    // Fast path: nothing to process
    if !input.contains('\\') {
        return input.to_string();
    }

    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            output.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => output.push('\n'),
            Some('t') => output.push('\t'),
            Some('r') => output.push('\r'),
            Some('a') => output.push('\u{07}'),
            Some('b') => output.push('\u{08}'),
            Some('f') => output.push('\u{0C}'),
            Some('v') => output.push('\u{0B}'),
            Some(other) => output.push(other),
            None => output.push('\\'),
        }
    }

    output
}

/// Unescape a full literal including its surrounding double quotes.
///
/// Returns `None` if `quoted` is not delimited by double quotes.
pub fn unescape_quoted(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    Some(unescape_string(inner))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(s: &str) -> String {
        let mut out = String::new();
        escape_string(&mut out, s).unwrap();
        out
    }

    #[test]
    fn test_escape_plain() {
        assert_eq!(escaped("abc"), "\"abc\"");
        assert_eq!(escaped(""), "\"\"");
    }

    #[test]
    fn test_escape_specials() {
        assert_eq!(escaped("a\"b"), r#""a\"b""#);
        assert_eq!(escaped("a\\b"), r#""a\\b""#);
        assert_eq!(escaped("\n\t\r"), r#""\n\t\r""#);
        assert_eq!(escaped("\u{07}\u{08}\u{0C}\u{0B}"), r#""\a\b\f\v""#);
    }

    #[test]
    fn test_unescape_c_escapes() {
        assert_eq!(unescape_string(r#"bla\n\\\"h"#), "bla\n\\\"h");
        assert_eq!(unescape_string(r"\a\b\f\r\v\t"), "\u{07}\u{08}\u{0C}\r\u{0B}\t");
    }

    #[test]
    fn test_unescape_passes_unknown_escapes_through() {
        assert_eq!(unescape_string(r"\q\%"), "q%");
        assert_eq!(unescape_string(r"end\"), "end\\");
    }

    #[test]
    fn test_unescape_quoted() {
        assert_eq!(
            unescape_quoted("\"bla\\n\\\\\\\"h\"").as_deref(),
            Some("bla\n\\\"h")
        );
        assert_eq!(unescape_quoted("no quotes"), None);
        assert_eq!(unescape_quoted("\""), None);
    }

    #[test]
    fn test_escape_then_unescape_is_identity() {
        for s in ["", "plain", "tab\there", "quote\"s", "back\\slash", "\u{0B}\u{07}é"] {
            assert_eq!(unescape_quoted(&escaped(s)).as_deref(), Some(s));
        }
    }
}
