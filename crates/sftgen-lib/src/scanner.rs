//! Splits a format spec into literal runs and verbs.
//!
//! The scanner is a two-state machine over the characters of the spec.
//! Indices are byte offsets into the spec string.

use crate::verbs::Verb;
use crate::{Error, Result};

/// One unit of a scanned spec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A maximal run of text without `%`.
    Literal(String),
    /// A verb, with the byte index of its code character.
    Verb { verb: Verb, index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Literal,
    AfterPercent { percent: usize },
}

/// Scan `spec` into segments.
///
/// Fails on an empty spec, an unknown verb code, or a trailing `%`.
pub fn scan(spec: &str, allow_extra: bool) -> Result<Vec<Segment>> {
    if spec.is_empty() {
        return Err(Error::EmptySpec);
    }

    let mut segments = Vec::new();
    let mut pending = String::new();
    let mut state = State::Literal;

    for (index, ch) in spec.char_indices() {
        match state {
            State::Literal if ch == '%' => {
                flush(&mut pending, &mut segments);
                state = State::AfterPercent { percent: index };
            }
            State::Literal => pending.push(ch),
            State::AfterPercent { .. } => {
                let verb = Verb::from_code(ch, allow_extra)
                    .ok_or(Error::UnknownVerb { verb: ch, index })?;
                segments.push(Segment::Verb { verb, index });
                state = State::Literal;
            }
        }
    }

    if let State::AfterPercent { percent } = state {
        return Err(Error::UnterminatedVerb { index: percent });
    }

    flush(&mut pending, &mut segments);
    Ok(segments)
}

fn flush(pending: &mut String, segments: &mut Vec<Segment>) {
    if !pending.is_empty() {
        segments.push(Segment::Literal(std::mem::take(pending)));
    }
}
