//! Helpers for exercising rule scripts in tests.
//!
//! These run a script held in memory against in-memory input through the same
//! [process](crate::subst::processor::process) path the binary uses. They panic
//! on any error, which is what a test wants; do not use them outside tests.

use crate::subst::processor::process;
use crate::subst::rules::RuleSet;

/// Script name used in diagnostics produced by these helpers.
pub const TEST_SCRIPT: &str = "test.rules";

/// Parse `script`, panicking with the diagnostic if it is invalid.
pub fn rules(script: &str) -> RuleSet {
    RuleSet::parse(TEST_SCRIPT, script).unwrap_or_else(|e| panic!("invalid test script: {e}"))
}

/// Run `script` over raw input bytes and return the raw output bytes.
pub fn run_bytes(script: &str, input: &[u8]) -> Vec<u8> {
    let rules = rules(script);
    let mut output = Vec::new();
    process(&rules, input, &mut output).unwrap_or_else(|e| panic!("processing failed: {e}"));
    output
}

/// Run `script` over `input` and return the output as a string.
pub fn run(script: &str, input: &str) -> String {
    String::from_utf8(run_bytes(script, input.as_bytes()))
        .unwrap_or_else(|e| panic!("output is not UTF-8: {e}"))
}
