//! Recursive-descent parser for rule scripts
//!
//! Grammar:
//!
//! ```text
//! script := rule* EOF
//! rule   := ("line" | "text") STRING "with" STRING
//! ```
//!
//! Each rule's pattern is compiled as soon as it is read, so the first problem
//! in the script (syntax or pattern) is the one reported. There is no
//! recovery: a script either parses completely or yields exactly one error.

use crate::subst::error::{ScriptError, ScriptErrorKind};
use crate::subst::lexing::{Token, Tokeniser};
use crate::subst::rules::{Rule, Scope, Substitution};

/// Keyword separating a pattern from its replacement.
pub const WITH_KEYWORD: &str = "with";

/// Reads rules one at a time from a script.
///
/// Also usable as an iterator of `Result<Rule, ScriptError>`; iteration ends
/// after the last rule or after the first error.
pub struct RuleParser<'s> {
    tz: Tokeniser<'s>,
    finished: bool,
}

impl<'s> RuleParser<'s> {
    /// Create a parser over `source`; `file` labels diagnostics.
    pub fn new(file: impl Into<String>, source: &'s str) -> Self {
        Self {
            tz: Tokeniser::new(file, source),
            finished: false,
        }
    }

    /// Parse the next rule, or `None` at a clean end of script.
    pub fn parse_next(&mut self) -> Result<Option<Rule>, ScriptError> {
        let scope = match self.tz.next_token()? {
            Token::EndOfInput => return Ok(None),
            Token::Identifier(word) => match Scope::from_keyword(&word) {
                Some(scope) => scope,
                None => return Err(self.reject(Token::Identifier(word))),
            },
            other => return Err(self.reject(other)),
        };
        let line = self.tz.line();

        let pattern = self.next_string()?;
        if pattern.is_empty() {
            return Err(self.tz.fail(ScriptErrorKind::EmptyPattern));
        }

        let regex = regex::bytes::Regex::new(&pattern)
            .map_err(|e| self.tz.fail(ScriptErrorKind::InvalidPattern(e.to_string())))?;

        self.match_keyword(WITH_KEYWORD)?;

        let template = self.next_string()?;

        let rule = Rule {
            scope,
            line,
            substitution: Substitution::new(regex, template),
        };

        tracing::debug!(
            file = self.tz.file(),
            line,
            scope = %rule.scope,
            pattern = rule.substitution.pattern(),
            "parsed rule"
        );

        Ok(Some(rule))
    }

    fn next_string(&mut self) -> Result<String, ScriptError> {
        match self.tz.next_token()? {
            Token::QuotedString(s) => Ok(s),
            other => Err(self.reject(other)),
        }
    }

    fn match_keyword(&mut self, keyword: &str) -> Result<(), ScriptError> {
        match self.tz.next_token()? {
            Token::Identifier(word) if word == keyword => Ok(()),
            other => Err(self.reject(other)),
        }
    }

    /// Error for a token that is not allowed at the current position.
    fn reject(&self, token: Token) -> ScriptError {
        let kind = match token {
            Token::Identifier(word) => ScriptErrorKind::UnexpectedKeyword(word),
            Token::QuotedString(s) => ScriptErrorKind::UnexpectedString(s),
            Token::EndOfInput => ScriptErrorKind::UnexpectedEof,
        };
        self.tz.fail(kind)
    }
}

impl Iterator for RuleParser<'_> {
    type Item = Result<Rule, ScriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.parse_next().transpose();
        if !matches!(result, Some(Ok(_))) {
            self.finished = true;
        }
        result
    }
}

/// Parse every rule in a script, stopping at the first error.
pub fn parse_rules(file: &str, source: &str) -> Result<Vec<Rule>, ScriptError> {
    RuleParser::new(file, source).collect()
}
