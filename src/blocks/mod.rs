//! Coarser views of an edit script.
//!
//! Both views come from one walk over the edit operations: untouched stretches
//! between edits are *gaps*, and consecutive operations of the same type that
//! continue exactly where the previous one stopped form a *run*. Matching
//! blocks keep only the gaps; opcodes keep both.

pub mod types;
pub use types::*;

use crate::alignment::{EditOp, EditType};
use crate::error::{LevenshteinError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    source_begin: usize,
    source_end: usize,
    dest_begin: usize,
    dest_end: usize,
}

trait RunSink {
    fn gap(&mut self, span: Span);
    fn run(&mut self, kind: EditType, span: Span);
}

#[derive(Default)]
struct Counter {
    gaps: usize,
    runs: usize,
}

impl RunSink for Counter {
    fn gap(&mut self, _: Span) {
        self.gaps += 1;
    }

    fn run(&mut self, _: EditType, _: Span) {
        self.runs += 1;
    }
}

impl RunSink for Vec<MatchingBlock> {
    fn gap(&mut self, span: Span) {
        self.push(MatchingBlock::new(
            span.source_begin,
            span.dest_begin,
            span.source_end - span.source_begin,
        ));
    }

    fn run(&mut self, _: EditType, _: Span) {}
}

impl RunSink for Vec<OpCode> {
    fn gap(&mut self, span: Span) {
        self.run(EditType::Keep, span);
    }

    fn run(&mut self, kind: EditType, span: Span) {
        self.push(OpCode::new(
            kind,
            span.source_begin,
            span.source_end,
            span.dest_begin,
            span.dest_end,
        ));
    }
}

fn advance(kind: EditType, source: &mut usize, dest: &mut usize) {
    match kind {
        EditType::Insert => *dest += 1,
        EditType::Delete => *source += 1,
        EditType::Replace | EditType::Keep => {
            *source += 1;
            *dest += 1;
        }
    }
}

fn walk_runs(ops: &[EditOp], len_a: usize, len_b: usize, sink: &mut impl RunSink) -> Result<()> {
    let (mut source, mut dest) = (0, 0);
    let mut ops = ops.iter().filter(|op| op.kind != EditType::Keep).peekable();

    while let Some(first) = ops.next() {
        if source < first.source_pos || dest < first.dest_pos {
            if first.source_pos.checked_sub(source) != first.dest_pos.checked_sub(dest) {
                return Err(LevenshteinError::internal(format!(
                    "gap before {first:?} is not diagonal from ({source}, {dest})"
                )));
            }
            sink.gap(Span {
                source_begin: source,
                source_end: first.source_pos,
                dest_begin: dest,
                dest_end: first.dest_pos,
            });
            source = first.source_pos;
            dest = first.dest_pos;
        }

        let (source_begin, dest_begin) = (source, dest);
        advance(first.kind, &mut source, &mut dest);
        while let Some(next) = ops.next_if(move |op| {
            op.kind == first.kind && op.source_pos == source && op.dest_pos == dest
        }) {
            advance(next.kind, &mut source, &mut dest);
        }
        sink.run(
            first.kind,
            Span {
                source_begin,
                source_end: source,
                dest_begin,
                dest_end: dest,
            },
        );
    }

    if source < len_a || dest < len_b {
        if len_a.checked_sub(source) != len_b.checked_sub(dest) {
            return Err(LevenshteinError::internal(format!(
                "trailing remainder ({source}, {dest}) does not reach ({len_a}, {len_b}) diagonally"
            )));
        }
        sink.gap(Span {
            source_begin: source,
            source_end: len_a,
            dest_begin: dest,
            dest_end: len_b,
        });
    }
    Ok(())
}

pub(crate) fn derive_matching_blocks(ops: &[EditOp], len_a: usize, len_b: usize) -> Result<Vec<MatchingBlock>> {
    let mut counter = Counter::default();
    walk_runs(ops, len_a, len_b, &mut counter)?;

    let mut blocks: Vec<MatchingBlock> = Vec::with_capacity(counter.gaps + 1);
    walk_runs(ops, len_a, len_b, &mut blocks)?;
    if blocks.len() != counter.gaps {
        return Err(LevenshteinError::internal(format!(
            "derived {} matching blocks, expected {}",
            blocks.len(),
            counter.gaps
        )));
    }

    blocks.push(MatchingBlock::new(len_a, len_b, 0));
    Ok(blocks)
}

pub(crate) fn derive_opcodes(ops: &[EditOp], len_a: usize, len_b: usize) -> Result<Vec<OpCode>> {
    let mut counter = Counter::default();
    walk_runs(ops, len_a, len_b, &mut counter)?;
    let expected = counter.gaps + counter.runs;

    let mut opcodes: Vec<OpCode> = Vec::with_capacity(expected);
    walk_runs(ops, len_a, len_b, &mut opcodes)?;
    if opcodes.len() != expected {
        return Err(LevenshteinError::internal(format!(
            "merged {} opcodes, expected {expected}",
            opcodes.len()
        )));
    }
    Ok(opcodes)
}

// Caller-supplied operations must describe one consistent path from (0, 0) to (len_a, len_b).
fn validate_editops(ops: &[EditOp], len_a: usize, len_b: usize) -> Result<()> {
    let (mut source, mut dest) = (0, 0);
    for (index, op) in ops.iter().enumerate() {
        if op.kind == EditType::Keep {
            continue;
        }
        if op.source_pos < source
            || op.dest_pos < dest
            || op.source_pos - source != op.dest_pos - dest
        {
            return Err(LevenshteinError::invalid(format!(
                "edit operation #{index} {op:?} does not continue from ({source}, {dest})"
            )));
        }
        source = op.source_pos;
        dest = op.dest_pos;
        advance(op.kind, &mut source, &mut dest);
        if source > len_a || dest > len_b {
            return Err(LevenshteinError::invalid(format!(
                "edit operation #{index} {op:?} is out of bounds for lengths ({len_a}, {len_b})"
            )));
        }
    }
    if len_a - source != len_b - dest {
        return Err(LevenshteinError::invalid(format!(
            "edit operations end at ({source}, {dest}) and cannot reach ({len_a}, {len_b})"
        )));
    }
    Ok(())
}

/// Merges caller-supplied edit operations into opcodes. `Keep` entries are ignored.
pub fn opcodes_from_editops(ops: &[EditOp], len_a: usize, len_b: usize) -> Result<Vec<OpCode>> {
    validate_editops(ops, len_a, len_b)?;
    derive_opcodes(ops, len_a, len_b)
}

/// Derives matching blocks from caller-supplied edit operations. `Keep` entries are ignored.
pub fn matching_blocks_from_editops(ops: &[EditOp], len_a: usize, len_b: usize) -> Result<Vec<MatchingBlock>> {
    validate_editops(ops, len_a, len_b)?;
    derive_matching_blocks(ops, len_a, len_b)
}

fn validate_opcodes(opcodes: &[OpCode], len_a: usize, len_b: usize) -> Result<()> {
    let (mut source, mut dest) = (0, 0);
    for (index, op) in opcodes.iter().enumerate() {
        if op.source_begin != source || op.dest_begin != dest {
            return Err(LevenshteinError::invalid(format!(
                "opcode #{index} {op:?} does not start at ({source}, {dest})"
            )));
        }
        if op.source_end < op.source_begin || op.dest_end < op.dest_begin {
            return Err(LevenshteinError::invalid(format!("opcode #{index} {op:?} has a negative range")));
        }
        let shape_ok = match op.kind {
            EditType::Keep | EditType::Replace => op.source_len() == op.dest_len(),
            EditType::Insert => op.source_len() == 0,
            EditType::Delete => op.dest_len() == 0,
        };
        if !shape_ok {
            return Err(LevenshteinError::invalid(format!(
                "opcode #{index} {op:?} has ranges that do not fit its type"
            )));
        }
        source = op.source_end;
        dest = op.dest_end;
    }
    if (source, dest) != (len_a, len_b) {
        return Err(LevenshteinError::invalid(format!(
            "opcodes end at ({source}, {dest}) instead of ({len_a}, {len_b})"
        )));
    }
    Ok(())
}

/// Derives matching blocks from an opcode list; adjacent `Keep` opcodes form one block.
///
/// ```
/// use levalign::alignment::{opcodes, EditType};
/// use levalign::blocks::{matching_blocks_from_opcodes, MatchingBlock};
///
/// let ops = opcodes(b"abc", b"axc").unwrap();
/// assert_eq!(ops[1].kind, EditType::Replace);
/// let blocks = matching_blocks_from_opcodes(3, 3, &ops).unwrap();
/// assert_eq!(blocks.last(), Some(&MatchingBlock::new(3, 3, 0)));
/// ```
pub fn matching_blocks_from_opcodes(len_a: usize, len_b: usize, opcodes: &[OpCode]) -> Result<Vec<MatchingBlock>> {
    validate_opcodes(opcodes, len_a, len_b)?;

    let mut blocks = Vec::new();
    let mut open: Option<MatchingBlock> = None;
    for op in opcodes {
        if op.kind == EditType::Keep {
            open.get_or_insert(MatchingBlock::new(op.source_begin, op.dest_begin, 0))
                .length += op.source_len();
        } else if let Some(block) = open.take() {
            blocks.push(block);
        }
    }
    blocks.extend(open);
    blocks.retain(|block| block.length > 0);

    blocks.push(MatchingBlock::new(len_a, len_b, 0));
    Ok(blocks)
}
