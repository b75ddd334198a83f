//! Sentence and word boundary movement over a [`Document`]
//!
//! Movement is bounded: forward never passes the given limit, backward never
//! goes below it. Running out of content is reported as `None` instead of an
//! error so callers can use it as a stop condition.

mod sentence;
mod word;


use crate::document::Document;

/// Granularity of a boundary search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Sentence,
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// A single bounded movement: `(document, position, bound) -> new position`
type Step = fn(&Document, usize, usize) -> Option<usize>;

struct Steps {
    forward: Step,
    backward: Step,
}

const SENTENCE: Steps = Steps {
    forward: sentence::forward,
    backward: sentence::backward,
};

const WORD: Steps = Steps {
    forward: word::forward,
    backward: word::backward,
};

impl Unit {
    fn steps(self) -> &'static Steps {
        match self {
            Unit::Sentence => &SENTENCE,
            Unit::Word => &WORD,
        }
    }

    /// The next finer granularity, if any
    pub fn finer(self) -> Option<Unit> {
        match self {
            Unit::Sentence => Some(Unit::Word),
            Unit::Word => None,
        }
    }
}

/// Move from `position` by one `unit` in `direction`
///
/// `bound` is an upper limit when moving forward and a lower limit when
/// moving backward. Returns `None` when no movement is possible.
pub fn advance(
    doc: &Document,
    position: usize,
    unit: Unit,
    direction: Direction,
    bound: usize,
) -> Option<usize> {
    let steps = unit.steps();
    let step = match direction {
        Direction::Forward => steps.forward,
        Direction::Backward => steps.backward,
    };
    step(doc, position, bound).filter(|&p| p != position)
}

pub(crate) fn is_blank(c: char) -> bool {
    c.is_whitespace()
}

/// Position after the last non-whitespace character in `floor..position`,
/// or `floor` if there is none
pub(crate) fn skip_blank_backward(doc: &Document, position: usize, floor: usize) -> usize {
    let mut p = position.min(doc.len_chars());
    while p > floor && doc.char_at(p - 1).is_some_and(is_blank) {
        p -= 1;
    }
    p
}

/// First non-whitespace position in `position..limit`, or `limit`
pub(crate) fn skip_blank_forward(doc: &Document, position: usize, limit: usize) -> usize {
    let limit = limit.min(doc.len_chars());
    let mut p = position;
    while p < limit && doc.char_at(p).is_some_and(is_blank) {
        p += 1;
    }
    p
}
