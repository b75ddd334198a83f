/// Handle to a position tracked by a [`super::Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub(super) usize);

/// How a marker reacts to text inserted exactly at its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Text inserted at the marker lands after it
    StayBefore,
    /// The marker moves past text inserted at its position
    Advance,
}

#[derive(Debug, Clone)]
pub(super) struct Marker {
    pub(super) position: usize,
    pub(super) insertion: Insertion,
}

impl Marker {
    pub(super) fn shift_for_insert(&mut self, at: usize, len: usize) {
        let moves = self.position > at
            || (self.position == at && self.insertion == Insertion::Advance);
        if moves {
            self.position += len;
        }
    }

    pub(super) fn shift_for_delete(&mut self, start: usize, end: usize) {
        if self.position >= end {
            self.position -= end - start;
        } else if self.position > start {
            self.position = start;
        }
    }
}
