//! Compiled rules and the rule set built from a script
//!
//! A [Rule] pairs a [Scope] with a [Substitution]. A [RuleSet] keeps the
//! substitutions of each scope in declaration order; it is built once before
//! any input is read and never changes afterwards.

use crate::subst::error::{Result, SubstError};
use crate::subst::parsing::RuleParser;
use crate::subst::processor::Mode;
use regex::bytes::Regex;
use std::fmt;
use std::fs;
use std::path::Path;

/// Where a rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Applied to each input line separately.
    Line,
    /// Applied once to the whole text.
    Text,
}

impl Scope {
    /// Script keyword introducing a rule of this scope.
    pub fn keyword(&self) -> &'static str {
        match self {
            Scope::Line => "line",
            Scope::Text => "text",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Scope> {
        match word {
            "line" => Some(Scope::Line),
            "text" => Some(Scope::Text),
            _ => None,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Replace every non-overlapping match of a pattern with a template.
///
/// The template uses the `regex` crate's replacement syntax: `$1`, `${1}`,
/// `$name` and `${name}` expand to capture groups, `$$` is a literal `$`.
///
/// Matching works on bytes, so input that is not valid UTF-8 passes through
/// untouched wherever the pattern does not match.
#[derive(Debug, Clone)]
pub struct Substitution {
    regex: Regex,
    template: String,
}

impl Substitution {
    pub fn new(regex: Regex, template: impl Into<String>) -> Self {
        Self {
            regex,
            template: template.into(),
        }
    }

    /// Compile `pattern` and pair it with `template`.
    pub fn compile(pattern: &str, template: &str) -> std::result::Result<Self, regex::Error> {
        Ok(Self::new(Regex::new(pattern)?, template))
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Apply the substitution to `input`.
    pub fn apply(&self, input: &[u8]) -> Vec<u8> {
        self.regex
            .replace_all(input, self.template.as_bytes())
            .into_owned()
    }
}

/// One parsed rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub scope: Scope,
    /// Script line of the scope keyword.
    pub line: usize,
    pub substitution: Substitution,
}

/// The substitutions of a script, split by scope, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    line: Vec<Substitution>,
    text: Vec<Substitution>,
}

impl RuleSet {
    /// Partition `rules` by scope. An empty rule list is a configuration error.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Result<Self> {
        let mut set = RuleSet::default();
        for rule in rules {
            match rule.scope {
                Scope::Line => set.line.push(rule.substitution),
                Scope::Text => set.text.push(rule.substitution),
            }
        }

        if set.is_empty() {
            return Err(SubstError::EmptyRuleSet);
        }
        Ok(set)
    }

    /// Parse a script held in memory; `file` labels diagnostics.
    pub fn parse(file: &str, script: &str) -> Result<Self> {
        let rules = RuleParser::new(file, script).collect::<std::result::Result<Vec<_>, _>>()?;
        let set = Self::from_rules(rules)?;
        tracing::debug!(
            file,
            line_rules = set.line.len(),
            text_rules = set.text.len(),
            "loaded rule set"
        );
        Ok(set)
    }

    /// Read and parse a script file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let script = fs::read_to_string(path).map_err(|e| SubstError::io(name.as_str(), e))?;
        Self::parse(&name, &script)
    }

    /// Substitutions applied to each line.
    pub fn line_rules(&self) -> &[Substitution] {
        &self.line
    }

    /// Substitutions applied to the whole text.
    pub fn text_rules(&self) -> &[Substitution] {
        &self.text
    }

    /// Total number of rules in both scopes.
    pub fn len(&self) -> usize {
        self.line.len() + self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How input has to be read for this rule set.
    pub fn mode(&self) -> Mode {
        if self.line.is_empty() {
            Mode::Block
        } else {
            Mode::Lines
        }
    }
}
