//! Ordered application of substitutions
//!
//! A pipeline runs its transforms strictly in declaration order, each one
//! seeing the output of the previous. Once the text becomes empty nothing
//! further runs: an empty string is returned as-is, and an empty input never
//! reaches the first transform.

use crate::subst::rules::Substitution;

/// A bytes-to-bytes transformation step.
pub trait Transform {
    fn apply(&self, input: &[u8]) -> Vec<u8>;
}

impl Transform for Substitution {
    fn apply(&self, input: &[u8]) -> Vec<u8> {
        Substitution::apply(self, input)
    }
}

impl<F> Transform for F
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn apply(&self, input: &[u8]) -> Vec<u8> {
        self(input)
    }
}

/// Run `input` through `transforms` in order, stopping as soon as the text is empty.
pub fn apply<T: Transform>(input: Vec<u8>, transforms: &[T]) -> Vec<u8> {
    let mut text = input;
    for (index, transform) in transforms.iter().enumerate() {
        if text.is_empty() {
            tracing::trace!(skipped = transforms.len() - index, "pipeline emptied the text");
            break;
        }
        tracing::trace!(step = index, bytes = text.len(), "applying transform");
        text = transform.apply(&text);
    }
    text
}
