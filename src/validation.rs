use std::fmt::Display;

use tracing::{debug, trace};

use crate::{
    automaton::Automaton,
    diagnostics::{Diagnostics, FsaError, Warning},
    transition_system::{DirectedGraph, Successors, UndirectedGraph},
};

/// Whether an automaton is complete, which means it is deterministic and every state has
/// exactly one transition on every symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Completeness {
    #[allow(missing_docs)]
    Complete,
    #[allow(missing_docs)]
    Incomplete,
}

impl Display for Completeness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Completeness::Complete => write!(f, "FSA is complete"),
            Completeness::Incomplete => write!(f, "FSA is incomplete"),
        }
    }
}

/// The outcome of a successful validation: the classification together with every warning
/// that was raised along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    completeness: Completeness,
    diagnostics: Diagnostics,
}

impl Report {
    /// The classification of the automaton.
    pub fn completeness(&self) -> Completeness {
        self.completeness
    }

    /// Shorthand for checking whether the automaton is [`Completeness::Complete`].
    pub fn is_complete(&self) -> bool {
        self.completeness == Completeness::Complete
    }

    /// The accumulated warnings.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Returns `true` if `warning` was raised.
    pub fn has_warning(&self, warning: Warning) -> bool {
        self.diagnostics.contains(warning)
    }
}

/// Runs the structural checks on an [`Automaton`]. The directed and undirected graphs are
/// built once on construction and shared by all checks.
#[derive(Debug, Clone)]
pub struct Validator<'a> {
    automaton: &'a Automaton,
    directed: DirectedGraph,
    undirected: UndirectedGraph,
}

impl<'a> Validator<'a> {
    /// Builds the graphs of `automaton`.
    pub fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            directed: DirectedGraph::from_automaton(automaton),
            undirected: UndirectedGraph::from_automaton(automaton),
        }
    }

    /// The transition relation.
    pub fn directed(&self) -> &DirectedGraph {
        &self.directed
    }

    /// The symmetric adjacency.
    pub fn undirected(&self) -> &UndirectedGraph {
        &self.undirected
    }

    /// Raises [`Warning::UnreachableStates`] if some state cannot be reached from the
    /// initial state by following transitions.
    pub fn check_reachability(&self, diagnostics: &mut Diagnostics) {
        let reached = self.directed.reachable_from(self.automaton.initial()).count();
        trace!("reached {reached} of {} states", self.automaton.size());
        if reached < self.automaton.size() {
            diagnostics.warn(Warning::UnreachableStates);
        }
    }

    /// Fails with [`FsaError::DisjointStates`] if some state is not connected to the initial
    /// state, even when the direction of transitions is ignored.
    pub fn check_disjointness(&self) -> Result<(), FsaError> {
        let connected = self
            .undirected
            .reachable_from(self.automaton.initial())
            .count();
        trace!(
            "{connected} of {} states are connected to the initial state",
            self.automaton.size()
        );
        if connected < self.automaton.size() {
            return Err(FsaError::DisjointStates);
        }
        Ok(())
    }

    /// Returns whether the automaton is deterministic, raising [`Warning::Nondeterministic`]
    /// if it is not.
    pub fn check_determinism(&self, diagnostics: &mut Diagnostics) -> bool {
        let mut deterministic = true;
        for (q, a, targets) in self.directed.entries() {
            if targets.len() > 1 {
                debug!("state {q} has {} successors on symbol {a}", targets.len());
                deterministic = false;
            }
        }
        if !deterministic {
            diagnostics.warn(Warning::Nondeterministic);
        }
        deterministic
    }

    /// Classifies the automaton. It is complete if it is `deterministic` and no pair of
    /// state and symbol lacks a transition.
    pub fn check_completeness(&self, deterministic: bool) -> Completeness {
        let mut complete = deterministic;
        for (q, a, targets) in self.directed.entries() {
            if targets.is_empty() {
                trace!("state {q} has no transition on symbol {a}");
                complete = false;
            }
        }
        if complete {
            Completeness::Complete
        } else {
            Completeness::Incomplete
        }
    }

    /// Runs all checks in order. Warnings raised before a fatal error remain in
    /// `diagnostics`, but no report is produced in that case.
    pub fn run(&self, mut diagnostics: Diagnostics) -> Result<Report, FsaError> {
        self.check_reachability(&mut diagnostics);
        self.check_disjointness()?;
        let deterministic = self.check_determinism(&mut diagnostics);
        let completeness = self.check_completeness(deterministic);
        debug!("automaton is {completeness:?} with {} warnings", diagnostics.len());
        Ok(Report {
            completeness,
            diagnostics,
        })
    }
}

/// Validates `automaton`, continuing from the warnings that were raised while it was parsed.
pub fn validate(automaton: &Automaton, diagnostics: Diagnostics) -> Result<Report, FsaError> {
    Validator::new(automaton).run(diagnostics)
}
