use std::fmt::Display;

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use crate::math::Set;

/// The fatal conditions that can be encountered while reading or validating an automaton.
/// At most one of them is ever produced, as processing stops at the first.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum FsaError {
    /// A state was referenced that is not among the declared states.
    #[error("E1: A state '{0}' is not in the set of states")]
    UndefinedState(String),
    /// Some states are not connected to the initial state, even when ignoring the direction
    /// of transitions.
    #[error("E2: Some states are disjoint")]
    DisjointStates,
    /// A transition uses a symbol that is not part of the alphabet.
    #[error("E3: A transition '{0}' is not represented in the alphabet")]
    UndefinedSymbol(String),
    /// The list of initial states is empty.
    #[error("E4: Initial state is not defined")]
    NoInitialState,
    /// The input does not follow the grammar.
    #[error("E5: Input file is malformed")]
    MalformedInput,
}

/// Non-fatal findings. Their order corresponds to their numbering.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Warning {
    /// No accepting state was declared.
    NoAcceptingState,
    /// Some state cannot be reached from the initial state.
    UnreachableStates,
    /// Some state has more than one successor on the same symbol.
    Nondeterministic,
}

impl Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::NoAcceptingState => write!(f, "W1: Accepting state is not defined"),
            Warning::UnreachableStates => {
                write!(f, "W2: Some states are not reachable from the initial state")
            }
            Warning::Nondeterministic => write!(f, "W3: FSA is nondeterministic"),
        }
    }
}

/// Collects the warnings raised while an automaton is parsed and validated. Raising the
/// same warning repeatedly has the same effect as raising it once.
///
/// Fatal conditions are not stored here, they travel as the `Err` side of a [`Result`]
/// and end processing immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    warnings: Set<Warning>,
}

impl Diagnostics {
    /// Records `warning`.
    pub fn warn(&mut self, warning: Warning) {
        if self.warnings.insert(warning) {
            debug!("raised warning {warning:?}");
        }
    }

    /// Returns `true` if `warning` has been raised.
    pub fn contains(&self, warning: Warning) -> bool {
        self.warnings.contains(&warning)
    }

    /// Returns `true` if no warning has been raised.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of distinct warnings.
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// The raised warnings, ordered by their number.
    pub fn warnings(&self) -> impl Iterator<Item = Warning> + '_ {
        self.warnings.iter().copied().sorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_are_deduplicated_and_ordered() {
        let mut diagnostics = Diagnostics::default();
        assert!(diagnostics.is_empty());

        diagnostics.warn(Warning::Nondeterministic);
        diagnostics.warn(Warning::NoAcceptingState);
        diagnostics.warn(Warning::Nondeterministic);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.contains(Warning::Nondeterministic));
        assert!(!diagnostics.contains(Warning::UnreachableStates));
        assert_eq!(
            diagnostics.warnings().collect::<Vec<_>>(),
            vec![Warning::NoAcceptingState, Warning::Nondeterministic]
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            FsaError::UndefinedState("q9".into()).to_string(),
            "E1: A state 'q9' is not in the set of states"
        );
        assert_eq!(
            FsaError::UndefinedSymbol("z".into()).to_string(),
            "E3: A transition 'z' is not represented in the alphabet"
        );
        assert_eq!(
            FsaError::MalformedInput.to_string(),
            "E5: Input file is malformed"
        );
        assert_eq!(
            Warning::UnreachableStates.to_string(),
            "W2: Some states are not reachable from the initial state"
        );
    }
}
