mod backtrace;
mod matrix;
pub mod types;
pub use types::*;

use crate::affix::{trim_common_affixes, Trimmed};
use crate::blocks::{self, MatchingBlock, OpCode};
use crate::config::AlignConfig;
use crate::error::Result;
use matrix::CostMatrix;

/// Entry point for the alignment path under a given [`AlignConfig`].
///
/// The free functions in this module use `Aligner::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aligner {
    config: AlignConfig,
}

impl Aligner {
    pub fn new(config: AlignConfig) -> Self {
        Aligner { config }
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Edit operations turning `a` into `b`, in increasing position order.
    /// `Keep` steps are implied by the gaps and never emitted.
    pub fn editops<T: PartialEq>(&self, a: &[T], b: &[T]) -> Result<Vec<EditOp>> {
        let Trimmed {
            left,
            right,
            prefix,
        } = trim_common_affixes(a, b);
        let matrix = CostMatrix::build(left, right, &self.config)?;
        backtrace::backtrace(&matrix, left, right, prefix)
    }

    pub fn matching_blocks<T: PartialEq>(&self, a: &[T], b: &[T]) -> Result<Vec<MatchingBlock>> {
        let ops = self.editops(a, b)?;
        blocks::derive_matching_blocks(&ops, a.len(), b.len())
    }

    pub fn opcodes<T: PartialEq>(&self, a: &[T], b: &[T]) -> Result<Vec<OpCode>> {
        let ops = self.editops(a, b)?;
        blocks::derive_opcodes(&ops, a.len(), b.len())
    }
}

/// Computes the edit operations turning `a` into `b`.
///
/// # Examples
///
/// ```
/// use levalign::alignment::{editops, EditOp, EditType};
///
/// let ops = editops(b"kitten", b"sitting").unwrap();
/// assert_eq!(ops, vec![
///     EditOp::new(EditType::Replace, 0, 0),
///     EditOp::new(EditType::Replace, 4, 4),
///     EditOp::new(EditType::Insert, 6, 6),
/// ]);
/// ```
pub fn editops<T: PartialEq>(a: &[T], b: &[T]) -> Result<Vec<EditOp>> {
    Aligner::default().editops(a, b)
}

/// Computes the maximal aligned runs of equal elements, terminated by a
/// zero-length block at `(a.len(), b.len())`.
///
/// # Examples
///
/// ```
/// use levalign::alignment::matching_blocks;
/// use levalign::blocks::MatchingBlock;
///
/// let blocks = matching_blocks(b"abc", b"axc").unwrap();
/// assert_eq!(blocks, vec![
///     MatchingBlock::new(0, 0, 1),
///     MatchingBlock::new(2, 2, 1),
///     MatchingBlock::new(3, 3, 0),
/// ]);
/// ```
pub fn matching_blocks<T: PartialEq>(a: &[T], b: &[T]) -> Result<Vec<MatchingBlock>> {
    Aligner::default().matching_blocks(a, b)
}

/// Computes the ranges that turn `a` into `b`, covering both sequences end to end.
pub fn opcodes<T: PartialEq>(a: &[T], b: &[T]) -> Result<Vec<OpCode>> {
    Aligner::default().opcodes(a, b)
}

pub fn editops_str(a: &str, b: &str) -> Result<Vec<EditOp>> {
    let (a, b) = (chars(a), chars(b));
    editops(&a, &b)
}

pub fn matching_blocks_str(a: &str, b: &str) -> Result<Vec<MatchingBlock>> {
    let (a, b) = (chars(a), chars(b));
    matching_blocks(&a, &b)
}

pub fn opcodes_str(a: &str, b: &str) -> Result<Vec<OpCode>> {
    let (a, b) = (chars(a), chars(b));
    opcodes(&a, &b)
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}
