use super::fill::fill_chunks;
use super::ChunkOutcome;
use crate::config::Config;
use crate::document::{Document, Insertion, MarkerId};
use crate::error::{Error, Result};
use crate::segmenter::{self, Direction, Unit};
use crate::separator::{self, Separator};
use tracing::{debug, info};

/// Where the boundary search for one chunk stopped
enum Boundary {
    /// Budget is used well enough; cut here
    Full(usize),
    /// Content ran out before the budget did
    RegionEnd(usize),
}

/// Split `begin..end` of `doc` into separator-delimited chunks
///
/// Inserts an opening separator at `begin` and one separator after every
/// chunk, each with a placeholder readout of 0. The requested `end` is pushed
/// outward to the end of the word it falls in. Leading whitespace of the
/// region and the whitespace at each boundary are removed.
///
/// Fails with [`Error::UnchunkableToken`] when no acceptable boundary exists
/// even at word granularity; chunks closed before that point stay valid.
pub fn chunk_region(
    doc: &mut Document,
    begin: usize,
    end: usize,
    config: &Config,
) -> Result<ChunkOutcome> {
    config.validate()?;
    if begin > end || end > doc.len_chars() {
        return Err(Error::InvalidRegion {
            begin,
            end,
            len: doc.len_chars(),
        });
    }
    if let Some(found) = separator::find_next(doc, begin, end) {
        return Err(Error::RegionHasSeparators(found.range.start));
    }

    let end = extend_to_word_end(doc, end);
    let first = segmenter::skip_blank_forward(doc, begin, end);
    if first >= end {
        return Err(Error::EmptyRegion { begin, end });
    }
    doc.delete(begin..first)?;

    let end_marker = doc.add_marker(end - (first - begin), Insertion::Advance)?;
    let result = Splitter {
        doc: &mut *doc,
        config,
        end_marker,
    }
    .run(begin);
    doc.remove_marker(end_marker);

    let outcome = result?;
    if let Some(column) = config.fill_column {
        fill_chunks(doc, begin, outcome.end, column)?;
    }
    info!(
        chunks = outcome.chunks,
        begin,
        end = outcome.end,
        max_len = config.max_len,
        "chunked region"
    );
    Ok(outcome)
}

/// Never cut a word in half: move a mid-word stop point to the word's end
fn extend_to_word_end(doc: &Document, end: usize) -> usize {
    let mut end = end;
    let inside_word = end > 0
        && doc.char_at(end - 1).is_some_and(|c| !segmenter::is_blank(c))
        && doc.char_at(end).is_some_and(|c| !segmenter::is_blank(c));
    if inside_word {
        while doc.char_at(end).is_some_and(|c| !segmenter::is_blank(c)) {
            end += 1;
        }
    }
    end
}

struct Splitter<'a> {
    doc: &'a mut Document,
    config: &'a Config,
    end_marker: MarkerId,
}

impl Splitter<'_> {
    fn run(mut self, begin: usize) -> Result<ChunkOutcome> {
        let mut opoint = self.insert_separator(begin)?;
        let mut chunks = 0;

        while opoint < self.end() {
            match self.find_boundary(opoint)? {
                Boundary::Full(position) => {
                    let cut = self.trim_boundary(opoint, position)?;
                    chunks += 1;
                    debug!(chunk = chunks, length = cut - opoint, "closed chunk");
                    opoint = self.insert_separator(cut)?;
                }
                Boundary::RegionEnd(position) => {
                    if position > opoint {
                        opoint = self.insert_separator(position)?;
                        chunks += 1;
                        debug!(chunk = chunks, "closed final chunk");
                    }
                    break;
                }
            }
        }

        Ok(ChunkOutcome { chunks, end: opoint })
    }

    fn end(&self) -> usize {
        self.doc
            .marker(self.end_marker)
            .unwrap_or_else(|| self.doc.len_chars())
    }

    /// Search for the cut point of the chunk starting at `opoint`, sentence
    /// first and word as fallback
    fn find_boundary(&self, opoint: usize) -> Result<Boundary> {
        let available = self.config.available();
        let threshold = self.config.accept_threshold();
        let end = self.end();
        let mut unit = Unit::Sentence;
        let mut position = opoint;

        loop {
            while position - opoint <= available {
                match segmenter::advance(&*self.doc, position, unit, Direction::Forward, end) {
                    Some(next) => position = next,
                    None => return Ok(Boundary::RegionEnd(position)),
                }
            }

            position = segmenter::advance(&*self.doc, position, unit, Direction::Backward, opoint)
                .unwrap_or(opoint)
                .max(opoint);

            let unused = available.saturating_sub(position - opoint);
            if (unused as f64) < threshold {
                return Ok(Boundary::Full(position));
            }

            match unit.finer() {
                Some(finer) => {
                    debug!(opoint, position, unused, "boundary too early, refining granularity");
                    unit = finer;
                }
                None => {
                    return Err(Error::UnchunkableToken {
                        position,
                        available,
                    })
                }
            }
        }
    }

    /// Collapse the whitespace before `position` to a single space and eat
    /// it; returns where the separator goes
    fn trim_boundary(&mut self, opoint: usize, position: usize) -> Result<usize> {
        let cut = segmenter::skip_blank_backward(&*self.doc, position, opoint);
        if cut < position {
            self.doc.replace(cut..position, " ")?;
            self.doc.delete(cut..cut + 1)?;
        }
        Ok(cut)
    }

    /// Insert a placeholder separator; returns the position after it
    fn insert_separator(&mut self, position: usize) -> Result<usize> {
        let edit = self
            .doc
            .insert(position, &Separator::new(0, self.config.max_len).render())?;
        Ok(edit.end())
    }
}
