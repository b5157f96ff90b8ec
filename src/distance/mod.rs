mod row;
pub mod types;
pub use types::*;

use crate::affix::{trim_common_affixes, Trimmed};
use row::with_row;

/// Computes the edit distance between two sequences.
///
/// Only a single row of the cost matrix is kept, so this is the cheap path
/// when the alignment itself is not needed.
///
/// # Examples
///
/// ```
/// use levalign::distance::{edit_distance, CostMode};
///
/// let kitten: Vec<char> = "kitten".chars().collect();
/// let sitting: Vec<char> = "sitting".chars().collect();
/// assert_eq!(edit_distance(&kitten, &sitting, CostMode::Uniform), 3);
/// assert_eq!(edit_distance(&kitten, &sitting, CostMode::DoubleSubstitution), 5);
/// ```
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T], mode: CostMode) -> usize {
    let Trimmed { left, right, .. } = trim_common_affixes(a, b);
    let (short, long) = if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    };

    match short {
        [] => long.len(),
        [only] => {
            let found = usize::from(long.contains(only));
            match mode {
                CostMode::Uniform => long.len() - found,
                CostMode::DoubleSubstitution => long.len() + 1 - 2 * found,
            }
        }
        _ => with_row(long.len() + 1, |row| match mode {
            CostMode::Uniform => uniform_row(short, long, row),
            CostMode::DoubleSubstitution => double_substitution_row(short, long, row),
        }),
    }
}

/// Computes the distance between two strings, comparing `char`s.
pub fn edit_distance_str(a: &str, b: &str, mode: CostMode) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(&a, &b, mode)
}

// row[j] holds the cost of turning the first i elements of `short` into the first j of `long`
fn uniform_row<T: PartialEq>(short: &[T], long: &[T], row: &mut [usize]) -> usize {
    for (j, cell) in row.iter_mut().enumerate() {
        *cell = j;
    }

    for (i, s) in short.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, l) in long.iter().enumerate() {
            let above = row[j + 1];
            let insertion = row[j] + 1;
            let deletion = above + 1;
            let substitution = diagonal + usize::from(s != l);
            row[j + 1] = insertion.min(deletion).min(substitution);
            diagonal = above;
        }
    }

    row[long.len()]
}

// With substitution at 2 a mismatch is never cheaper than the left neighbour
// plus one, so each cell is min(match ? diagonal : left + 1, above + 1).
// `diagonal` carries the previous row's cell plus one between iterations;
// row[0] is never written, its value i + 1 is seeded into both locals.
fn double_substitution_row<T: PartialEq>(short: &[T], long: &[T], row: &mut [usize]) -> usize {
    for (j, cell) in row.iter_mut().enumerate() {
        *cell = j;
    }

    for (i, s) in short.iter().enumerate() {
        let mut diagonal = i + 1;
        let mut current = i + 1;
        for (j, l) in long.iter().enumerate() {
            if s == l {
                diagonal -= 1;
                current = diagonal;
            } else {
                current += 1;
            }
            diagonal = row[j + 1] + 1;
            current = current.min(diagonal);
            row[j + 1] = current;
        }
    }

    row[long.len()]
}

#[cfg(test)]
pub(crate) fn reference_distance<T: PartialEq>(a: &[T], b: &[T], mode: CostMode) -> usize {
    let substitution = mode.substitution_cost();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, x) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, y) in b.iter().enumerate() {
            let keep_or_sub = previous[j] + if x == y { 0 } else { substitution };
            current[j + 1] = (current[j] + 1).min(previous[j + 1] + 1).min(keep_or_sub);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}
