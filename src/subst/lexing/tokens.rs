//! Raw token definitions for rule scripts
//!
//! Scanning is handled entirely by logos. The raw tokens here only classify
//! slices of the script; turning string literals into their values is done by
//! [unquote](super::unquote) once a token has been recognised.
use logos::Logos;

/// Character-level tokens of a rule script.
///
/// Spaces, tabs, line breaks, `//` line comments and `/* */` block comments
/// are skipped; any other control character is an unexpected token.
/// The `Unterminated*` variants never form part of a valid script; they exist
/// so a missing closing quote is reported as such rather than as a stray quote.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+|//[^\n]*|/\*([^*]|\*+[^*/])*\*+/")]
pub enum RawToken {
    // Keywords are plain identifiers; the parser decides which ones are legal
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Ident,

    // Interpreted string, single line, backslash escapes
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    String,

    // Raw string, may span lines, no escapes
    #[regex(r"`[^`]*`")]
    RawString,

    #[regex(r#""([^"\\\n]|\\[^\n])*"#)]
    UnterminatedString,

    #[regex(r"`[^`]*")]
    UnterminatedRawString,

    #[regex(r"/\*([^*]|\*+[^*/])*\**")]
    UnterminatedComment,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Result<RawToken, ()>> {
        RawToken::lexer(source).collect()
    }

    #[test]
    fn test_keywords_and_strings() {
        assert_eq!(
            kinds(r#"line "a+" with `b`"#),
            vec![
                Ok(RawToken::Ident),
                Ok(RawToken::String),
                Ok(RawToken::Ident),
                Ok(RawToken::RawString),
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let source = "// heading\ntext /* inline */ \"x\" with \"\" // trailing";
        assert_eq!(
            kinds(source),
            vec![
                Ok(RawToken::Ident),
                Ok(RawToken::String),
                Ok(RawToken::Ident),
                Ok(RawToken::String),
            ]
        );
    }

    #[test]
    fn test_escaped_quote_stays_inside_string() {
        let mut lexer = RawToken::lexer(r#""a\"b" x"#);
        assert_eq!(lexer.next(), Some(Ok(RawToken::String)));
        assert_eq!(lexer.slice(), r#""a\"b""#);
        assert_eq!(lexer.next(), Some(Ok(RawToken::Ident)));
    }

    #[test]
    fn test_raw_string_spans_lines() {
        let mut lexer = RawToken::lexer("`a\nb`");
        assert_eq!(lexer.next(), Some(Ok(RawToken::RawString)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_unterminated_literals() {
        assert_eq!(kinds("\"abc"), vec![Ok(RawToken::UnterminatedString)]);
        assert_eq!(kinds("`abc"), vec![Ok(RawToken::UnterminatedRawString)]);
        assert_eq!(kinds("/* abc"), vec![Ok(RawToken::UnterminatedComment)]);
    }

    #[test]
    fn test_digits_are_not_identifiers() {
        let mut lexer = RawToken::lexer("123");
        assert_eq!(lexer.next(), Some(Err(())));
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(kinds("строка_1"), vec![Ok(RawToken::Ident)]);
    }
}
