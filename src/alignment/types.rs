/// Kind of a single alignment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditType {
    Keep,
    Insert,
    Delete,
    Replace,
}

/// One edit turning the source sequence into the destination sequence.
///
/// For `Insert`, `source_pos` is the position in the source just before the
/// inserted element and `dest_pos` is the inserted element. `Delete` is the
/// mirror image. `Replace` points at the two differing elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditOp {
    pub kind: EditType,
    pub source_pos: usize,
    pub dest_pos: usize,
}

impl EditOp {
    pub fn new(kind: EditType, source_pos: usize, dest_pos: usize) -> Self {
        EditOp {
            kind,
            source_pos,
            dest_pos,
        }
    }
}
