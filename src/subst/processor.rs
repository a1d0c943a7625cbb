//! Input processing driver
//!
//! The processing mode is chosen once, from the rule set:
//!
//! - [Mode::Lines] (at least one `line` rule): input is read line by line.
//!   Each line loses its trailing whitespace, goes through the line rules, and
//!   the results are joined with `\n`. The joined text then goes through the
//!   text rules, if any.
//! - [Mode::Block] (only `text` rules): input is read as one undivided block
//!   and goes straight through the text rules. Nothing is trimmed.
//!
//! Output is written once, after all input has been transformed. An empty
//! result writes nothing, and no newline is ever added.

use crate::subst::error::{Result, SubstError};
use crate::subst::pipeline;
use crate::subst::rules::{RuleSet, Substitution};
use std::convert::Infallible;
use std::io::{BufRead, Write};

/// How input is split before substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Per-line substitution followed by whole-text substitution.
    Lines,
    /// Whole-text substitution only.
    Block,
}

/// Read all of `input`, transform it with `rules` and write the result to `output`.
///
/// Input is handled as bytes; anything that is not valid UTF-8 is copied
/// through unless a pattern matches it.
pub fn process<R: BufRead, W: Write>(rules: &RuleSet, mut input: R, mut output: W) -> Result<()> {
    let mode = rules.mode();
    tracing::debug!(?mode, "processing input");

    let text = match mode {
        Mode::Lines => {
            let lines = input
                .split(b'\n')
                .map(|line| line.map_err(|e| SubstError::io("error reading input", e)));
            substitute_lines(rules.line_rules(), lines)?
        }
        Mode::Block => {
            let mut text = Vec::new();
            input
                .read_to_end(&mut text)
                .map_err(|e| SubstError::io("error reading input", e))?;
            text
        }
    };

    let text = pipeline::apply(text, rules.text_rules());
    tracing::debug!(bytes = text.len(), "writing output");

    if !text.is_empty() {
        output
            .write_all(&text)
            .map_err(|e| SubstError::io("error writing output", e))?;
    }
    output
        .flush()
        .map_err(|e| SubstError::io("error writing output", e))
}

/// Transform text held in memory, with the same semantics as [process].
pub fn transform(rules: &RuleSet, input: &[u8]) -> Vec<u8> {
    let text = match rules.mode() {
        Mode::Lines => {
            // the `\n` terminator is whitespace and goes with the trim
            let lines = input
                .split_inclusive(|&b| b == b'\n')
                .map(Ok::<_, Infallible>);
            match substitute_lines(rules.line_rules(), lines) {
                Ok(text) => text,
                Err(never) => match never {},
            }
        }
        Mode::Block => input.to_vec(),
    };
    pipeline::apply(text, rules.text_rules())
}

/// Trim, substitute and rejoin lines, preserving their order.
fn substitute_lines<L, E, I>(subs: &[Substitution], lines: I) -> std::result::Result<Vec<u8>, E>
where
    L: AsRef<[u8]>,
    I: Iterator<Item = std::result::Result<L, E>>,
{
    let mut out = Vec::new();
    for line in lines {
        let line = line?;
        out.push(pipeline::apply(trim_end(line.as_ref()).to_vec(), subs));
    }
    tracing::debug!(lines = out.len(), "substituted lines");
    Ok(out.join(&b'\n'))
}

/// Strip trailing Unicode whitespace. Bytes that are not valid UTF-8 are never
/// whitespace, so trimming stops at the first one.
fn trim_end(line: &[u8]) -> &[u8] {
    let Some(last) = line.utf8_chunks().last() else {
        return line;
    };
    if !last.invalid().is_empty() {
        return line;
    }
    let valid = last.valid();
    let trailing = valid.len() - valid.trim_end().len();
    &line[..line.len() - trailing]
}
