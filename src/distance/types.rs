/// Cost model for the distance path.
///
/// Insertions and deletions always cost 1. `Uniform` charges 1 for a
/// substitution (classic Levenshtein), `DoubleSubstitution` charges 2, which
/// makes the distance equal to the insert/delete-only distance and is what
/// [`ratio`](crate::ratio::ratio) is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CostMode {
    #[default]
    Uniform,
    DoubleSubstitution,
}

impl CostMode {
    /// Maps the integer "xcost" flag: 0 is `Uniform`, anything else `DoubleSubstitution`.
    pub fn from_xcost(xcost: i32) -> Self {
        if xcost == 0 {
            CostMode::Uniform
        } else {
            CostMode::DoubleSubstitution
        }
    }

    pub fn substitution_cost(self) -> usize {
        match self {
            CostMode::Uniform => 1,
            CostMode::DoubleSubstitution => 2,
        }
    }
}
