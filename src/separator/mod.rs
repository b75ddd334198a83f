//! Separator markers inserted between chunks
//!
//! A separator looks like `\n\n<!-- ↓ [[[ 137 / 280 ]]] -->\n\n`: a direction
//! glyph, the live length of the chunk that follows, and the configured
//! maximum. Both numbers are base-10 without leading zeros.


use crate::document::{Document, Edit};
use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::sync::OnceLock;

const PATTERN: &str =
    r"\n\n<!-- ([↓↑]) \[\[\[ (0|[1-9][0-9]*) / (0|[1-9][0-9]*) \]\]\] -->\n\n";

/// Characters between a separator's start and its `NUM` field
const NUM_OFFSET: usize = 13;

/// Compiled separator pattern, shared by every lookup
pub fn pattern() -> &'static Regex {
    static PATTERN_RE: OnceLock<Regex> = OnceLock::new();
    PATTERN_RE.get_or_init(|| Regex::new(PATTERN).expect("separator pattern is valid"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    Down,
    Up,
}

impl Glyph {
    pub fn as_char(self) -> char {
        match self {
            Glyph::Down => '↓',
            Glyph::Up => '↑',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '↓' => Some(Glyph::Down),
            '↑' => Some(Glyph::Up),
            _ => None,
        }
    }
}

/// Parsed separator: glyph plus `NUM / DEN` readout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separator {
    pub glyph: Glyph,
    /// Live length of the chunk this separator fronts
    pub num: usize,
    /// Configured maximum chunk length
    pub den: usize,
}

impl Separator {
    /// Separator with the default glyph
    pub fn new(num: usize, den: usize) -> Self {
        Self {
            glyph: Glyph::Down,
            num,
            den,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Rendered length in characters
    pub fn len_chars(&self) -> usize {
        self.render().chars().count()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n\n<!-- {} [[[ {} / {} ]]] -->\n\n",
            self.glyph.as_char(),
            self.num,
            self.den
        )
    }
}

impl FromStr for Separator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let caps = pattern()
            .captures(s)
            .filter(|c| c.get(0).is_some_and(|m| m.start() == 0 && m.end() == s.len()))
            .ok_or_else(|| Error::MalformedSeparator(s.escape_debug().to_string()))?;

        let glyph = caps[1]
            .chars()
            .next()
            .and_then(Glyph::from_char)
            .ok_or_else(|| Error::MalformedSeparator(caps[1].to_string()))?;
        let num = parse_count(&caps[2])?;
        let den = parse_count(&caps[3])?;

        Ok(Self { glyph, num, den })
    }
}

fn parse_count(digits: &str) -> Result<usize> {
    digits
        .parse()
        .map_err(|_| Error::MalformedSeparator(format!("count out of range: {}", digits)))
}

/// A separator found in a document, with the character range it occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub range: Range<usize>,
    pub separator: Separator,
}

impl Located {
    fn read(doc: &Document, range: Range<usize>) -> Option<Self> {
        let separator = doc.slice(range.clone()).ok()?.parse().ok()?;
        Some(Self { range, separator })
    }

    /// Character range of the `NUM` digits
    pub fn num_range(&self) -> Range<usize> {
        let start = self.range.start + NUM_OFFSET;
        start..start + self.separator.num.to_string().len()
    }
}

/// First separator lying entirely within `from..bound`
pub fn find_next(doc: &Document, from: usize, bound: usize) -> Option<Located> {
    doc.search_forward(pattern(), from, bound)
        .and_then(|range| Located::read(doc, range))
}

/// Last separator lying entirely within `bound..from`
pub fn find_prev(doc: &Document, from: usize, bound: usize) -> Option<Located> {
    doc.search_backward(pattern(), from, bound)
        .and_then(|range| Located::read(doc, range))
}

/// All separators within `range`, in document order
pub fn find_all(doc: &Document, range: Range<usize>) -> Vec<Located> {
    let mut found = Vec::new();
    let mut from = range.start;
    while let Some(located) = find_next(doc, from, range.end) {
        from = located.range.end;
        found.push(located);
    }
    found
}

/// Rewrite the `NUM` field of a separator in place, leaving glyph and `DEN`
/// untouched. Returns `None` if the readout already shows `num`.
pub fn write_num(doc: &mut Document, located: &Located, num: usize) -> Result<Option<Edit>> {
    if located.separator.num == num {
        return Ok(None);
    }
    doc.replace(located.num_range(), &num.to_string()).map(Some)
}
