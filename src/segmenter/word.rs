use super::{is_blank, skip_blank_backward, skip_blank_forward};
use crate::document::Document;

// A word is a maximal run of non-whitespace, so URLs and hashtags stay whole.

pub(super) fn forward(doc: &Document, position: usize, bound: usize) -> Option<usize> {
    let bound = bound.min(doc.len_chars());
    let mut p = skip_blank_forward(doc, position, bound);
    if p >= bound {
        return None;
    }
    while p < bound && doc.char_at(p).is_some_and(|c| !is_blank(c)) {
        p += 1;
    }
    Some(p)
}

pub(super) fn backward(doc: &Document, position: usize, floor: usize) -> Option<usize> {
    if position <= floor {
        return None;
    }
    let mut p = skip_blank_backward(doc, position, floor);
    while p > floor && doc.char_at(p - 1).is_some_and(|c| !is_blank(c)) {
        p -= 1;
    }
    Some(p)
}
