use crate::{
    alphabet::SymbolIndex,
    automaton::{Automaton, StateIndex},
    math::Set,
};

use super::Successors;

/// The transition relation of an automaton, mapping each pair of a state and a symbol to
/// the set of states that the automaton may move to. Every pair of a declared state and a
/// declared symbol has an entry, pairs without transitions map to the empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph {
    alphabet_size: usize,
    destinations: Vec<Vec<Set<StateIndex>>>,
}

impl DirectedGraph {
    /// Builds the transition relation of `automaton`.
    pub fn from_automaton(automaton: &Automaton) -> Self {
        let alphabet_size = automaton.alphabet().size();
        let mut destinations = vec![vec![Set::default(); alphabet_size]; automaton.size()];
        for t in automaton.transitions() {
            destinations[t.source()][t.symbol()].insert(t.target());
        }
        Self {
            alphabet_size,
            destinations,
        }
    }

    /// Number of symbols, i.e. the number of entries per state.
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// The set of states reached from `state` on `symbol`. Panics if either is out of range.
    pub fn destinations(&self, state: StateIndex, symbol: SymbolIndex) -> &Set<StateIndex> {
        &self.destinations[state][symbol]
    }

    /// Iterates over all entries as `(state, symbol, destinations)`, ordered by state and
    /// then by symbol.
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (StateIndex, SymbolIndex, &Set<StateIndex>)> + '_ {
        self.destinations.iter().enumerate().flat_map(|(q, row)| {
            row.iter()
                .enumerate()
                .map(move |(a, targets)| (q, a, targets))
        })
    }
}

impl Successors for DirectedGraph {
    type SuccessorsIter<'a> =
        std::iter::Copied<std::iter::Flatten<std::slice::Iter<'a, Set<StateIndex>>>>;

    fn size(&self) -> usize {
        self.destinations.len()
    }

    fn successors(&self, state: StateIndex) -> Self::SuccessorsIter<'_> {
        self.destinations[state].iter().flatten().copied()
    }
}
