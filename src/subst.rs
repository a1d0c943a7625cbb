//! Main module for subst library functionality

pub mod error;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod processor;
pub mod rules;
pub mod testing;

pub use error::{Result, ScriptError, ScriptErrorKind, SubstError};
pub use parsing::RuleParser;
pub use pipeline::Transform;
pub use processor::{process, transform, Mode};
pub use rules::{Rule, RuleSet, Scope, Substitution};
