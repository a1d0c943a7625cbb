//! Error types for rule loading and text processing.
//!
//! Every error in this crate is fatal: nothing here is recovered from locally.
//! Errors are propagated to the binary, which reports them once as
//! `ERROR: <message>` and exits with status 1.

use std::io;
use thiserror::Error;

/// What went wrong while reading a rule script.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptErrorKind {
    /// An identifier other than the one the grammar expects at this point.
    #[error("Unexpected keyword: {0:?}")]
    UnexpectedKeyword(String),

    /// A quoted string where a keyword was expected.
    #[error("Unexpected string: {0:?}")]
    UnexpectedString(String),

    /// The script ended in the middle of a rule.
    #[error("Unexpected end of file")]
    UnexpectedEof,

    /// Text that is neither an identifier, a string, whitespace nor a comment.
    #[error("Unexpected token: {0:?}")]
    UnexpectedToken(String),

    /// A string literal without its closing quote.
    #[error("literal not terminated")]
    UnterminatedLiteral,

    /// A backslash escape that the interpreted string syntax does not define.
    #[error("invalid escape sequence: {0:?}")]
    InvalidEscape(String),

    /// Byte escapes in a string literal that do not form valid UTF-8.
    #[error("invalid UTF-8 in string literal")]
    InvalidUtf8,

    /// A `/*` comment without its closing `*/`.
    #[error("comment not terminated")]
    UnterminatedComment,

    /// A rule whose pattern string is empty.
    #[error("Empty string as pattern")]
    EmptyPattern,

    /// The pattern failed to compile; holds the regex compiler's message.
    #[error("{0}")]
    InvalidPattern(String),
}

/// A rule script error, located by script name and 1-based line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{file}:{line} - {kind}")]
pub struct ScriptError {
    pub file: String,
    pub line: usize,
    pub kind: ScriptErrorKind,
}

impl ScriptError {
    pub fn new(file: impl Into<String>, line: usize, kind: ScriptErrorKind) -> Self {
        Self {
            file: file.into(),
            line,
            kind,
        }
    }
}

/// Top-level error for the filter.
#[derive(Debug, Error)]
pub enum SubstError {
    /// Wrong command line; holds the program name used in the usage line.
    #[error("Usage: {0} replacement-rules-file")]
    Usage(String),

    /// Reading the script or the input, or writing the output, failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// The rule script is malformed.
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// The rule script parsed cleanly but contains no rules.
    #[error("Empty substitution specification")]
    EmptyRuleSet,
}

impl SubstError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        SubstError::Io {
            context: context.into(),
            source,
        }
    }
}

/// A specialized `Result` type for subst operations.
pub type Result<T> = std::result::Result<T, SubstError>;
