use super::{is_blank, skip_blank_backward, skip_blank_forward};
use crate::document::Document;

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '?' | '!' | '…')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | '”' | '’' | ')' | ']' | '»')
}

fn is_inline_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

/// True when the newline at `newline` is followed by a line holding only
/// whitespace
fn blank_line_after(doc: &Document, newline: usize, bound: usize) -> bool {
    let mut q = newline + 1;
    while q < bound && doc.char_at(q).is_some_and(is_inline_blank) {
        q += 1;
    }
    q < bound && doc.char_at(q) == Some('\n')
}

/// True when the newline at `newline` is preceded by a line holding only
/// whitespace
fn blank_line_before(doc: &Document, newline: usize, floor: usize) -> bool {
    let mut q = newline;
    while q > floor && doc.char_at(q - 1).is_some_and(is_inline_blank) {
        q -= 1;
    }
    q > floor && doc.char_at(q - 1) == Some('\n')
}

/// True when the text just before `blank` ends with sentence punctuation
fn ends_sentence_before(doc: &Document, blank: usize, floor: usize) -> bool {
    let mut j = blank;
    while j > floor && doc.char_at(j - 1).is_some_and(is_closer) {
        j -= 1;
    }
    j > floor && doc.char_at(j - 1).is_some_and(is_terminator)
}

/// Stop after the next sentence terminator (and its closing punctuation),
/// before a blank line, or at the end of content
pub(super) fn forward(doc: &Document, position: usize, bound: usize) -> Option<usize> {
    let bound = bound.min(doc.len_chars());
    let mut p = skip_blank_forward(doc, position, bound);
    if p >= bound {
        return None;
    }

    while p < bound {
        let c = doc.char_at(p)?;
        if is_terminator(c) {
            let mut q = p + 1;
            while q < bound && doc.char_at(q).is_some_and(is_closer) {
                q += 1;
            }
            if q >= bound || doc.char_at(q).is_some_and(is_blank) {
                return Some(q);
            }
            p = q;
            continue;
        }
        if c == '\n' && blank_line_after(doc, p, bound) {
            return Some(skip_blank_backward(doc, p, position));
        }
        p += 1;
    }

    Some(skip_blank_backward(doc, bound, position))
}

/// Move to the first character of the sentence that ends at or before
/// `position`
pub(super) fn backward(doc: &Document, position: usize, floor: usize) -> Option<usize> {
    if position <= floor {
        return None;
    }
    let content_end = skip_blank_backward(doc, position, floor);

    let mut k = content_end;
    while k > floor {
        let c = doc.char_at(k - 1)?;
        if is_blank(c) {
            let boundary = ends_sentence_before(doc, k - 1, floor)
                || (c == '\n' && blank_line_before(doc, k - 1, floor));
            if boundary {
                break;
            }
        }
        k -= 1;
    }

    Some(skip_blank_forward(doc, k, content_end))
}
