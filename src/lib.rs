//! # subst
//!
//! A text filter driven by a small rule script of ordered regular-expression
//! substitutions.
//!
//! A script is a sequence of rules of the form
//!
//! ```text
//! line "pattern" with "replacement"
//! text `pattern` with `replacement`
//! ```
//!
//! `line` rules run on every input line (after trailing whitespace is removed),
//! `text` rules run on the whole text once the lines have been joined back
//! together. See [subst::processor] for how the two scopes interact.

pub mod subst;
