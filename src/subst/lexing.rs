//! Tokeniser for rule scripts
//!
//! Rule scripts have a three-token alphabet: identifiers (used as keywords),
//! quoted strings and end of input. Character-level scanning is done by a
//! logos lexer (see [tokens]); this module wraps it to
//!
//! - decode string literals into their values (see [unquote]),
//! - track the 1-based line of every token for diagnostics,
//! - turn anything logos does not recognise into a located [ScriptError].
//!
//! The tokeniser is pull-based: the parser asks for one token at a time and
//! nothing is retained once handed out.

pub mod tokens;
pub mod unquote;

pub use tokens::RawToken;
pub use unquote::unquote;

use crate::subst::error::{ScriptError, ScriptErrorKind};
use logos::{Lexer, Logos};

/// A token as seen by the rule parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A keyword-like word, e.g. `line`, `text` or `with`.
    Identifier(String),
    /// A string literal, already unescaped.
    QuotedString(String),
    EndOfInput,
}

/// Pull tokeniser over the full text of one rule script.
pub struct Tokeniser<'s> {
    file: String,
    source: &'s str,
    lexer: Lexer<'s, RawToken>,
    /// Line of the most recently returned token.
    line: usize,
    /// Byte offset up to which newlines have been counted into `counted_line`.
    counted_to: usize,
    counted_line: usize,
}

impl<'s> Tokeniser<'s> {
    /// Create a tokeniser; `file` is only used to label diagnostics.
    pub fn new(file: impl Into<String>, source: &'s str) -> Self {
        Self {
            file: file.into(),
            source,
            lexer: RawToken::lexer(source),
            line: 1,
            counted_to: 0,
            counted_line: 1,
        }
    }

    /// Name of the script being tokenised.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line of the most recently returned token (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Build an error located at the current token.
    pub fn fail(&self, kind: ScriptErrorKind) -> ScriptError {
        ScriptError::new(self.file.clone(), self.line, kind)
    }

    /// Return the next token, skipping whitespace and comments.
    pub fn next_token(&mut self) -> Result<Token, ScriptError> {
        let Some(raw) = self.lexer.next() else {
            self.line = self.line_at(self.source.len());
            return Ok(Token::EndOfInput);
        };

        self.line = self.line_at(self.lexer.span().start);
        let slice = self.lexer.slice();

        match raw {
            Ok(RawToken::Ident) => Ok(Token::Identifier(slice.to_string())),
            Ok(RawToken::String) | Ok(RawToken::RawString) => unquote(slice)
                .map(Token::QuotedString)
                .map_err(|kind| self.fail(kind)),
            Ok(RawToken::UnterminatedString) | Ok(RawToken::UnterminatedRawString) => {
                Err(self.fail(ScriptErrorKind::UnterminatedLiteral))
            }
            Ok(RawToken::UnterminatedComment) => {
                Err(self.fail(ScriptErrorKind::UnterminatedComment))
            }
            Err(()) => Err(self.fail(ScriptErrorKind::UnexpectedToken(slice.to_string()))),
        }
    }

    /// Line number of a byte offset. Offsets must not decrease between calls.
    fn line_at(&mut self, offset: usize) -> usize {
        let newlines = self.source[self.counted_to..offset]
            .bytes()
            .filter(|&b| b == b'\n')
            .count();
        self.counted_line += newlines;
        self.counted_to = offset;
        self.counted_line
    }
}

/// Convenience function to tokenise a whole script, stopping at the first error.
///
/// The returned list ends with [Token::EndOfInput].
pub fn tokenize(file: &str, source: &str) -> Result<Vec<Token>, ScriptError> {
    let mut tokeniser = Tokeniser::new(file, source);
    let mut tokens = Vec::new();
    loop {
        let token = tokeniser.next_token()?;
        let done = token == Token::EndOfInput;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
