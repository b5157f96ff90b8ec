use crate::distance::{edit_distance, CostMode};

/// Normalized similarity in `[0, 1]`, derived from the double-substitution distance.
///
/// ```
/// use levalign::ratio::ratio;
///
/// assert_eq!(ratio(b"abc", b"abc"), 1.0);
/// assert_eq!(ratio(b"abc", b"xyz"), 0.0);
/// assert_eq!(ratio(b"abcd", b"abce"), 0.75);
/// ```
pub fn ratio<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let distance = edit_distance(a, b, CostMode::DoubleSubstitution);
    if distance == 0 {
        return 1.0;
    }
    let total = a.len() + b.len();
    (total - distance) as f64 / total as f64
}

pub fn ratio_str(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio(&a, &b)
}
