/// Two sequences with their shared prefix and suffix removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trimmed<'a, T> {
    pub left: &'a [T],
    pub right: &'a [T],
    /// Number of elements stripped from the front of both inputs.
    pub prefix: usize,
}

/// Strips the longest common prefix, then the longest common suffix of what remains.
///
/// ```
/// use levalign::affix::trim_common_affixes;
///
/// let trimmed = trim_common_affixes(b"sitting", b"setting");
/// assert_eq!(trimmed.left, b"i");
/// assert_eq!(trimmed.right, b"e");
/// assert_eq!(trimmed.prefix, 1);
/// ```
pub fn trim_common_affixes<'a, T: PartialEq>(left: &'a [T], right: &'a [T]) -> Trimmed<'a, T> {
    let prefix = left.iter().zip(right).take_while(|(a, b)| a == b).count();
    let (left, right) = (&left[prefix..], &right[prefix..]);

    let suffix = left
        .iter()
        .rev()
        .zip(right.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    Trimmed {
        left: &left[..left.len() - suffix],
        right: &right[..right.len() - suffix],
        prefix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_trimmed_is_a_window(left: Vec<u8>, right: Vec<u8>) {
            let t = trim_common_affixes(&left, &right);
            let left_suffix = left.len() - t.prefix - t.left.len();
            let right_suffix = right.len() - t.prefix - t.right.len();
            prop_assert_eq!(left_suffix, right_suffix);
            prop_assert_eq!(&left[t.prefix..t.prefix + t.left.len()], t.left);
            prop_assert_eq!(&right[t.prefix..t.prefix + t.right.len()], t.right);
            if !t.left.is_empty() && !t.right.is_empty() {
                prop_assert_ne!(t.left.first(), t.right.first());
                prop_assert_ne!(t.left.last(), t.right.last());
            }
        }
    }

    #[test]
    fn test_identical() {
        let t = trim_common_affixes(&[1, 2, 3], &[1, 2, 3]);
        assert_eq!(t.prefix, 3);
        assert!(t.left.is_empty());
        assert!(t.right.is_empty());
    }

    #[test]
    fn test_overlapping_prefix_and_suffix() {
        // "aa" vs "aaa": the prefix eats both a's of the shorter side, nothing is left for a suffix
        let t = trim_common_affixes(b"aa", b"aaa");
        assert_eq!(t.prefix, 2);
        assert_eq!(t.left, b"");
        assert_eq!(t.right, b"a");
    }

    #[test]
    fn test_middle_change() {
        let t = trim_common_affixes(b"abc", b"axc");
        assert_eq!(t.prefix, 1);
        assert_eq!(t.left, b"b");
        assert_eq!(t.right, b"x");
    }

    #[test]
    fn test_empty() {
        let t = trim_common_affixes::<u8>(&[], b"abc");
        assert_eq!(t.prefix, 0);
        assert_eq!(t.left, b"");
        assert_eq!(t.right, b"abc");
    }
}
