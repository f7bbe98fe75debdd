use super::{Set, SetElement};

impl<T: SetElement + Clone> Set<Set<T>> {
    /// Sum of the inner cardinalities.
    pub fn total_count(&self) -> usize {
        self.iter().map(Set::len).sum()
    }

    /// Union of all inner sets.
    pub fn flatten(&self) -> Set<T> {
        self.iter().fold(Set::new(), |acc, inner| acc.union(inner))
    }
}
