//! Second pass over a chunked region: ordinal tags and final readouts

use crate::chunker::ChunkOutcome;
use crate::config::Config;
use crate::document::{Document, Insertion, MarkerId};
use crate::error::Result;
use crate::separator;
use crate::tracker::bounds_between;
use tracing::warn;

/// Tag appended to chunk `index` of `total`
pub fn ordinal_tag(index: usize, total: usize) -> String {
    format!(" ({}/{})", index, total)
}

/// Tag every chunk in `begin..end` with ` (i/total)` when `total > 1`, then
/// write each fronting separator's readout including the tag
///
/// Chunk boundaries are never moved; the tag lands in the margin the chunker
/// reserved. Returns the number of chunks visited and the region end after
/// tagging.
pub fn number(
    doc: &mut Document,
    begin: usize,
    end: usize,
    total: usize,
    config: &Config,
) -> Result<ChunkOutcome> {
    let end_marker = doc.add_marker(end, Insertion::Advance)?;
    let result = number_chunks(doc, begin, end_marker, total, config);
    let end = doc.marker(end_marker).unwrap_or(end);
    doc.remove_marker(end_marker);
    let visited = result?;

    if visited != total {
        warn!(visited, total, "numbered chunk count differs from expected total");
    }
    Ok(ChunkOutcome {
        chunks: visited,
        end,
    })
}

fn number_chunks(
    doc: &mut Document,
    begin: usize,
    end_marker: MarkerId,
    total: usize,
    config: &Config,
) -> Result<usize> {
    let mut from = begin;
    let mut index = 0;

    loop {
        let end = doc.marker(end_marker).unwrap_or_else(|| doc.len_chars());
        let Some(front) = separator::find_next(doc, from, end) else {
            break;
        };
        let Some(back) = separator::find_next(doc, front.range.end, end) else {
            break;
        };
        let Some(bounds) = bounds_between(doc, &front, &back) else {
            from = back.range.start;
            continue;
        };

        index += 1;
        let next = doc.add_marker(back.range.start, Insertion::Advance)?;

        let mut length = bounds.len();
        if total > 1 {
            let tag = ordinal_tag(index, total);
            length += doc.insert(bounds.end, &tag)?.inserted;
        }
        if length > config.max_len {
            warn!(index, length, max_len = config.max_len, "tagged chunk exceeds max length");
        }
        separator::write_num(doc, &front, length)?;

        from = doc.marker(next).unwrap_or(end);
        doc.remove_marker(next);
    }

    Ok(index)
}
