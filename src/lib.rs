//! Levenshtein distance and alignment over arbitrary sequences.
//!
//! Two paths are offered. [`edit_distance`] and [`ratio`] only need a
//! single rolling row and are cheap. [`editops`], [`matching_blocks`] and
//! [`opcodes`] build the full cost matrix and walk it back to recover the
//! alignment itself.
//!
//! ```
//! use levalign::{edit_distance, opcodes, CostMode, EditType};
//!
//! assert_eq!(edit_distance(b"kitten", b"sitting", CostMode::Uniform), 3);
//!
//! let ops = opcodes(b"abc", b"axc").unwrap();
//! let kinds: Vec<EditType> = ops.iter().map(|op| op.kind).collect();
//! assert_eq!(kinds, [EditType::Keep, EditType::Replace, EditType::Keep]);
//! ```

pub mod affix;
pub mod alignment;
pub mod blocks;
pub mod config;
pub mod distance;
pub mod error;
pub mod ratio;

pub use alignment::{editops, matching_blocks, opcodes, Aligner, EditOp, EditType};
pub use blocks::{
    matching_blocks_from_editops, matching_blocks_from_opcodes, opcodes_from_editops, MatchingBlock,
    OpCode,
};
pub use config::AlignConfig;
pub use distance::{edit_distance, CostMode};
pub use error::{LevenshteinError, Result};
pub use ratio::ratio;
