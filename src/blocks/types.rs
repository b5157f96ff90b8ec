use crate::alignment::EditType;

/// `length` equal elements starting at `source_pos` in the source and
/// `dest_pos` in the destination. Lists always end with a zero-length block
/// at the end of both sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchingBlock {
    pub source_pos: usize,
    pub dest_pos: usize,
    pub length: usize,
}

impl MatchingBlock {
    pub fn new(source_pos: usize, dest_pos: usize, length: usize) -> Self {
        MatchingBlock {
            source_pos,
            dest_pos,
            length,
        }
    }
}

/// A range operation: `source[source_begin..source_end]` becomes
/// `dest[dest_begin..dest_end]` by way of `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpCode {
    pub kind: EditType,
    pub source_begin: usize,
    pub source_end: usize,
    pub dest_begin: usize,
    pub dest_end: usize,
}

impl OpCode {
    pub fn new(
        kind: EditType,
        source_begin: usize,
        source_end: usize,
        dest_begin: usize,
        dest_end: usize,
    ) -> Self {
        OpCode {
            kind,
            source_begin,
            source_end,
            dest_begin,
            dest_end,
        }
    }

    pub fn source_len(&self) -> usize {
        self.source_end.saturating_sub(self.source_begin)
    }

    pub fn dest_len(&self) -> usize {
        self.dest_end.saturating_sub(self.dest_begin)
    }
}
