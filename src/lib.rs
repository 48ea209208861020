//! Library for validating textual descriptions of finite-state automata.
//!
//! An automaton is described by five lines that declare its states, its alphabet, the initial
//! state, the accepting states and the transitions (see [`parser`] for the grammar). Checking
//! such a description happens in three steps, data only ever flows forward:
//!
//! - [`parser::parse`] turns the lines into an [`Automaton`], whose states and symbols are
//!   validated names that can only be created by the parser. Syntactic problems and references
//!   to undeclared states or symbols end processing with an [`FsaError`].
//! - From the automaton, [`transition_system::DirectedGraph`] (the transition relation, keyed by
//!   state and symbol) and [`transition_system::UndirectedGraph`] (symmetric adjacency, used for
//!   connectivity) are derived.
//! - [`validation::Validator`] checks reachability, weak connectivity, determinism and
//!   completeness on these graphs and yields a [`Report`].
//!
//! Warnings are collected in a [`Diagnostics`] along the way. The outcome is either a report,
//! which classifies the automaton as complete or incomplete and carries the warnings, or a
//! single error. [`check`] runs all steps at once.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use fsa_validator::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{Alphabet, Symbol, SymbolIndex},
        automaton::{Automaton, State, StateIndex, Transition},
        check,
        diagnostics::{Diagnostics, FsaError, Warning},
        math,
        parser::parse,
        transition_system::{DirectedGraph, Successors, UndirectedGraph},
        validation::{validate, Completeness, Report, Validator},
    };
}

/// Type aliases for the collections used throughout the crate.
pub mod math;

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;

/// Defines states, transitions and the automaton they make up.
pub mod automaton;
pub use automaton::Automaton;

/// Errors and warnings.
pub mod diagnostics;
pub use diagnostics::{Diagnostics, FsaError, Warning};

pub mod parser;

/// The graphs that are derived from an automaton and the traversals on them.
pub mod transition_system;

/// The checks that classify an automaton.
pub mod validation;
pub use validation::Report;

pub mod shell;

/// Parses the five lines of an automaton description and validates the resulting automaton.
///
/// ```
/// use fsa_validator::prelude::*;
///
/// let report = check([
///     "states=[a,b]",
///     "alpha=[x]",
///     "init.st=[a]",
///     "fin.st=[b]",
///     "trans=[a>x>b,b>x>b]",
/// ])
/// .unwrap();
/// assert!(report.is_complete());
/// ```
pub fn check<I, S>(lines: I) -> Result<Report, FsaError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut diagnostics = Diagnostics::default();
    let automaton = parser::parse(lines, &mut diagnostics)?;
    validation::validate(&automaton, diagnostics)
}
