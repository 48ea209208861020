use std::fmt::{Debug, Display};

use itertools::Itertools;

use crate::{
    alphabet::{Alphabet, Symbol, SymbolIndex},
    math::{OrderedSet, Set},
};

/// Position of a [`State`] within the states of the [`Automaton`] that declared it.
pub type StateIndex = usize;

/// A state of an automaton. State names are non-empty and consist only of lowercase
/// ASCII letters and digits.
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct State(String);

impl State {
    /// Returns `true` if `c` may appear in a state name.
    pub fn is_name_char(c: char) -> bool {
        matches!(c, 'a'..='z' | '0'..='9')
    }

    /// Attempts to create a state with the given name, returns `None` if the name is empty
    /// or contains a character that is not allowed.
    pub fn try_new(name: &str) -> Option<Self> {
        if !name.is_empty() && name.chars().all(Self::is_name_char) {
            Some(Self(name.to_string()))
        } else {
            None
        }
    }

    /// The name of the state.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transition `(source, symbol, target)`, where all three components are given by their
/// position in the owning [`Automaton`].
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Transition {
    source: StateIndex,
    symbol: SymbolIndex,
    target: StateIndex,
}

impl Transition {
    /// Creates a new transition from its components.
    pub fn new(source: StateIndex, symbol: SymbolIndex, target: StateIndex) -> Self {
        Self {
            source,
            symbol,
            target,
        }
    }

    /// The state in which the transition originates.
    pub fn source(&self) -> StateIndex {
        self.source
    }

    /// The symbol on which the transition is taken.
    pub fn symbol(&self) -> SymbolIndex {
        self.symbol
    }

    /// The state the transition leads to.
    pub fn target(&self) -> StateIndex {
        self.target
    }
}

/// A finite-state automaton as it was described by its input: the declared states and
/// alphabet, a single initial state, a (possibly empty) set of final states and the list of
/// transitions.
///
/// An `Automaton` can only be obtained from [`crate::parser::parse`], which guarantees that
/// every index stored in it refers to a declared state or symbol.
#[derive(Clone, PartialEq, Eq)]
pub struct Automaton {
    states: OrderedSet<State>,
    alphabet: Alphabet,
    initial: StateIndex,
    finals: Set<StateIndex>,
    transitions: Vec<Transition>,
}

impl Automaton {
    pub(crate) fn from_parts(
        states: OrderedSet<State>,
        alphabet: Alphabet,
        initial: StateIndex,
        finals: Set<StateIndex>,
        transitions: Vec<Transition>,
    ) -> Self {
        debug_assert!(initial < states.len());
        debug_assert!(finals.iter().all(|&q| q < states.len()));
        debug_assert!(transitions.iter().all(|t| {
            t.source < states.len() && t.target < states.len() && t.symbol < alphabet.size()
        }));
        Self {
            states,
            alphabet,
            initial,
            finals,
            transitions,
        }
    }

    /// Number of distinct states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Iterates over the declared states in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter()
    }

    /// Iterates over the indices of all states.
    pub fn state_indices(&self) -> std::ops::Range<StateIndex> {
        0..self.size()
    }

    /// Returns the state at position `index`, if there is one.
    pub fn state(&self, index: StateIndex) -> Option<&State> {
        self.states.get_index(index)
    }

    /// Looks up the position of the state with the given name.
    pub fn state_position(&self, name: &str) -> Option<StateIndex> {
        self.states.get_index_of(name)
    }

    /// The alphabet of the automaton.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The unique initial state.
    pub fn initial(&self) -> StateIndex {
        self.initial
    }

    /// Returns `true` if `state` is accepting.
    pub fn is_final(&self, state: StateIndex) -> bool {
        self.finals.contains(&state)
    }

    /// Iterates over the accepting states in increasing index order.
    pub fn finals(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.finals.iter().copied().sorted()
    }

    /// The transitions in the order in which they were given.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    fn state_name(&self, index: StateIndex) -> &str {
        self.state(index).map(State::as_str).unwrap_or("?")
    }

    fn symbol_name(&self, index: SymbolIndex) -> &str {
        self.alphabet.get(index).map(Symbol::as_str).unwrap_or("?")
    }

    /// Gives a human readable representation `source>symbol>target` of the given transition.
    pub fn show_transition(&self, transition: &Transition) -> String {
        format!(
            "{}>{}>{}",
            self.state_name(transition.source),
            self.symbol_name(transition.symbol),
            self.state_name(transition.target)
        )
    }
}

impl Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "states: [{}]", self.states.iter().join(","))?;
        writeln!(f, "alphabet: [{}]", self.alphabet.symbols().join(","))?;
        writeln!(f, "initial: {}", self.state_name(self.initial))?;
        writeln!(
            f,
            "final: [{}]",
            self.finals().map(|q| self.state_name(q)).join(",")
        )?;
        write!(
            f,
            "transitions: [{}]",
            self.transitions
                .iter()
                .map(|t| self.show_transition(t))
                .join(",")
        )
    }
}
