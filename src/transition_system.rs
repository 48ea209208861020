use crate::automaton::StateIndex;

mod directed;
pub use directed::DirectedGraph;

mod undirected;
pub use undirected::UndirectedGraph;

/// Contains the traversal that enumerates the states reachable from some origin.
pub mod reachable;
pub use reachable::ReachableStates;

/// Common interface of the graphs that are derived from an [`crate::Automaton`]. States are
/// identified by their [`StateIndex`], and a graph of size `n` has exactly the states
/// `0..n`.
pub trait Successors {
    /// Iterator over the successors of a single state.
    type SuccessorsIter<'a>: Iterator<Item = StateIndex>
    where
        Self: 'a;

    /// Number of states in the graph.
    fn size(&self) -> usize;

    /// Iterates over the states that are adjacent to `state`. The same successor may be
    /// produced more than once.
    fn successors(&self, state: StateIndex) -> Self::SuccessorsIter<'_>;

    /// Iterates over the states that can be reached from `origin`, including `origin`
    /// itself, in breadth-first order.
    fn reachable_from(&self, origin: StateIndex) -> ReachableStates<'_, Self>
    where
        Self: Sized,
    {
        ReachableStates::new(self, origin)
    }

    /// Returns `true` if every state of the graph can be reached from `origin`.
    fn reaches_all_from(&self, origin: StateIndex) -> bool
    where
        Self: Sized,
    {
        self.reachable_from(origin).count() == self.size()
    }
}
