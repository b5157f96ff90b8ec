use crate::config::AlignConfig;
use crate::error::{LevenshteinError, Result};

/// Full `(m+1) x (n+1)` table of uniform-cost edit distances between every
/// prefix of `left` and every prefix of `right`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CostMatrix {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl CostMatrix {
    pub(crate) fn build<T: PartialEq>(left: &[T], right: &[T], config: &AlignConfig) -> Result<Self> {
        let rows = left.len() + 1;
        let cols = right.len() + 1;
        let overflow = || LevenshteinError::Overflow { rows, cols };

        let size = rows.checked_mul(cols).ok_or_else(overflow)?;
        if size > config.max_matrix_cells {
            return Err(overflow());
        }

        log::debug!("allocating {rows}x{cols} cost matrix");
        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| overflow())?;
        cells.resize(size, 0);

        let mut matrix = CostMatrix { cells, rows, cols };
        for j in 0..cols {
            matrix.cells[j] = j;
        }
        for i in 1..rows {
            let (previous, current) = matrix.cells[(i - 1) * cols..(i + 1) * cols].split_at_mut(cols);
            current[0] = i;
            let element = &left[i - 1];
            for (j, other) in right.iter().enumerate() {
                let substitution = previous[j] + usize::from(element != other);
                let insertion = current[j] + 1;
                let deletion = previous[j + 1] + 1;
                current[j + 1] = substitution.min(insertion).min(deletion);
            }
        }

        Ok(matrix)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> usize {
        self.cells[self.index(row, col)]
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}
