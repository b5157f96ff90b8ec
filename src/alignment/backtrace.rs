use super::matrix::CostMatrix;
use super::types::{EditOp, EditType};
use crate::error::{LevenshteinError, Result};

/// Which way the backtrace last moved off the diagonal.
///
/// While biased, the walk keeps going the same way whenever that is legal so
/// equal-cost alternatives come out as contiguous runs instead of alternating
/// inserts and deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Direction {
    #[default]
    Neutral,
    Insert,
    Delete,
}

/// Moves that are legal from the current cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Moves {
    pub keep: bool,
    pub insert: bool,
    pub delete: bool,
    pub replace: bool,
}

impl Direction {
    /// Picks the next step and the bias to carry into the following cell.
    /// `None` means no move is legal, which a correct matrix never produces.
    pub(crate) fn step(self, moves: Moves) -> Option<(EditType, Direction)> {
        if moves.keep {
            return Some((EditType::Keep, Direction::Neutral));
        }
        match self {
            Direction::Insert if moves.insert => return Some((EditType::Insert, Direction::Insert)),
            Direction::Delete if moves.delete => return Some((EditType::Delete, Direction::Delete)),
            _ => {}
        }
        if moves.replace {
            return Some((EditType::Replace, Direction::Neutral));
        }
        if self == Direction::Neutral {
            if moves.insert {
                return Some((EditType::Insert, Direction::Insert));
            }
            if moves.delete {
                return Some((EditType::Delete, Direction::Delete));
            }
        }
        None
    }
}

fn available_moves<T: PartialEq>(matrix: &CostMatrix, left: &[T], right: &[T], i: usize, j: usize) -> Moves {
    let cost = matrix.get(i, j);
    let diagonal = (i > 0 && j > 0).then(|| matrix.get(i - 1, j - 1));
    Moves {
        keep: diagonal == Some(cost) && left[i - 1] == right[j - 1],
        insert: j > 0 && cost == matrix.get(i, j - 1) + 1,
        delete: i > 0 && cost == matrix.get(i - 1, j) + 1,
        replace: diagonal.map(|d| d + 1) == Some(cost),
    }
}

/// Walks `matrix` from the bottom-right cell back to the origin and returns the
/// non-keep steps in forward order, shifted by `offset` trimmed prefix elements.
pub(crate) fn backtrace<T: PartialEq>(
    matrix: &CostMatrix,
    left: &[T],
    right: &[T],
    offset: usize,
) -> Result<Vec<EditOp>> {
    let expected = matrix.distance();
    let mut ops = Vec::with_capacity(expected);
    let (mut i, mut j) = (matrix.rows() - 1, matrix.cols() - 1);
    let mut direction = Direction::Neutral;

    while i > 0 || j > 0 {
        let moves = available_moves(matrix, left, right, i, j);
        let (kind, next) = direction.step(moves).ok_or_else(|| {
            LevenshteinError::internal(format!(
                "no legal backtrace step at ({i}, {j}) with cost {}",
                matrix.get(i, j)
            ))
        })?;
        direction = next;

        match kind {
            EditType::Keep => {
                i -= 1;
                j -= 1;
                continue;
            }
            EditType::Insert => j -= 1,
            EditType::Delete => i -= 1,
            EditType::Replace => {
                i -= 1;
                j -= 1;
            }
        }
        ops.push(EditOp::new(kind, i + offset, j + offset));
    }

    if ops.len() != expected {
        return Err(LevenshteinError::internal(format!(
            "backtrace produced {} operations for distance {expected}",
            ops.len()
        )));
    }
    ops.reverse();
    Ok(ops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlignConfig;

    fn moves(keep: bool, insert: bool, delete: bool, replace: bool) -> Moves {
        Moves {
            keep,
            insert,
            delete,
            replace,
        }
    }

    #[test]
    fn test_keep_always_wins_and_resets() {
        for direction in [Direction::Neutral, Direction::Insert, Direction::Delete] {
            assert_eq!(
                direction.step(moves(true, true, true, true)),
                Some((EditType::Keep, Direction::Neutral))
            );
        }
    }

    #[test]
    fn test_bias_beats_replace() {
        assert_eq!(
            Direction::Insert.step(moves(false, true, true, true)),
            Some((EditType::Insert, Direction::Insert))
        );
        assert_eq!(
            Direction::Delete.step(moves(false, true, true, true)),
            Some((EditType::Delete, Direction::Delete))
        );
    }

    #[test]
    fn test_replace_beats_fresh_indel() {
        assert_eq!(
            Direction::Neutral.step(moves(false, true, true, true)),
            Some((EditType::Replace, Direction::Neutral))
        );
        assert_eq!(
            Direction::Insert.step(moves(false, false, true, true)),
            Some((EditType::Replace, Direction::Neutral))
        );
    }

    #[test]
    fn test_neutral_prefers_insert() {
        assert_eq!(
            Direction::Neutral.step(moves(false, true, true, false)),
            Some((EditType::Insert, Direction::Insert))
        );
        assert_eq!(
            Direction::Neutral.step(moves(false, false, true, false)),
            Some((EditType::Delete, Direction::Delete))
        );
    }

    #[test]
    fn test_biased_walk_never_switches_sides() {
        assert_eq!(Direction::Insert.step(moves(false, false, true, false)), None);
        assert_eq!(Direction::Delete.step(moves(false, true, false, false)), None);
        assert_eq!(Direction::Neutral.step(Moves::default()), None);
    }

    #[test]
    fn test_replace_in_middle() {
        let (left, right) = (b"b", b"x");
        let matrix = CostMatrix::build(left, right, &AlignConfig::default()).unwrap();
        let ops = backtrace(&matrix, left, right, 1).unwrap();
        assert_eq!(ops, vec![EditOp::new(EditType::Replace, 1, 1)]);
    }

    #[test]
    fn test_equal_cost_cells_prefer_replace() {
        let (left, right) = (b"ab", b"ba");
        let matrix = CostMatrix::build(left, right, &AlignConfig::default()).unwrap();
        let ops = backtrace(&matrix, left, right, 0).unwrap();
        assert_eq!(
            ops,
            vec![
                EditOp::new(EditType::Replace, 0, 0),
                EditOp::new(EditType::Replace, 1, 1),
            ]
        );
    }

    #[test]
    fn test_indel_runs_stay_contiguous() {
        let (left, right) = (b"xab", b"abyy");
        let matrix = CostMatrix::build(left, right, &AlignConfig::default()).unwrap();
        let ops = backtrace(&matrix, left, right, 0).unwrap();
        assert_eq!(
            ops,
            vec![
                EditOp::new(EditType::Delete, 0, 0),
                EditOp::new(EditType::Insert, 3, 2),
                EditOp::new(EditType::Insert, 3, 3),
            ]
        );
    }
}
