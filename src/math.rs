/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;

/// A set that remembers the order in which its elements were first inserted. Positions in
/// this set are stable, which is what allows states and symbols to be addressed by index.
pub type OrderedSet<S> = indexmap::IndexSet<S, fxhash::FxBuildHasher>;

#[cfg(test)]
mod tests {
    use super::OrderedSet;

    #[test]
    fn ordered_set_keeps_first_occurrence() {
        let set: OrderedSet<_> = ["b", "a", "b", "c", "a"].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get_index_of("b"), Some(0));
        assert_eq!(set.get_index_of("a"), Some(1));
        assert_eq!(set.get_index_of("c"), Some(2));
    }
}
