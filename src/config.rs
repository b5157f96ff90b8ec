//! Limits for the alignment path.
//!
//! The distance path needs no configuration: its memory is bounded by the
//! length of the longer input. The alignment path allocates the full cost
//! matrix, so the number of cells it may use is capped here.

use std::mem::size_of;

/// Largest number of `usize` cells a single `Vec` can address on this platform.
pub const ADDRESSABLE_CELLS: usize = isize::MAX as usize / size_of::<usize>();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignConfig {
    /// Upper bound on `(len(a') + 1) * (len(b') + 1)` after affix trimming.
    pub max_matrix_cells: usize,
}

impl AlignConfig {
    pub fn with_max_matrix_cells(max_matrix_cells: usize) -> Self {
        AlignConfig {
            max_matrix_cells: max_matrix_cells.min(ADDRESSABLE_CELLS),
        }
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        AlignConfig {
            max_matrix_cells: ADDRESSABLE_CELLS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_clamped_to_platform() {
        assert_eq!(AlignConfig::default().max_matrix_cells, ADDRESSABLE_CELLS);
        assert_eq!(
            AlignConfig::with_max_matrix_cells(usize::MAX).max_matrix_cells,
            ADDRESSABLE_CELLS
        );
        assert_eq!(AlignConfig::with_max_matrix_cells(16).max_matrix_cells, 16);
    }
}
