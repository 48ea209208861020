//! Reads an [`Automaton`] from its five line textual description
//!
//! ```text
//! states=[s1,s2,...]
//! alpha=[a1,a2,...]
//! init.st=[s]
//! fin.st=[s1,s2,...]
//! trans=[s1>a1>s2,s3>a2>s4,...]
//! ```
//!
//! Lines are processed in this order and the first violation ends parsing with the
//! corresponding [`FsaError`]. Empty list entries are skipped.

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    alphabet::{Alphabet, Symbol, SymbolIndex},
    automaton::{Automaton, State, StateIndex, Transition},
    diagnostics::{Diagnostics, FsaError, Warning},
    math::{OrderedSet, Set},
};

/// Number of lines an automaton description consists of.
pub const LINE_COUNT: usize = 5;

const ENTRY_SEPARATOR: char = ',';
const FIELD_SEPARATOR: char = '>';

/// The lines of an automaton description, in the order in which they must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `states=[...]`
    States,
    /// `alpha=[...]`
    Alphabet,
    /// `init.st=[...]`
    Initial,
    /// `fin.st=[...]`
    Final,
    /// `trans=[...]`
    Transitions,
}

impl Section {
    /// The text that a line of this section has to start with.
    pub fn prefix(&self) -> &'static str {
        match self {
            Section::States => "states=[",
            Section::Alphabet => "alpha=[",
            Section::Initial => "init.st=[",
            Section::Final => "fin.st=[",
            Section::Transitions => "trans=[",
        }
    }
}

fn malformed(section: Section, reason: impl std::fmt::Display) -> FsaError {
    debug!("malformed {section:?} line: {reason}");
    FsaError::MalformedInput
}

/// Strips the prefix and closing bracket of `line` and splits its body into the non-empty
/// entries.
fn entries(line: &str, section: Section) -> Result<impl Iterator<Item = &str>, FsaError> {
    line.strip_prefix(section.prefix())
        .and_then(|rest| rest.strip_suffix(']'))
        .map(|body| body.split(ENTRY_SEPARATOR).filter(|entry| !entry.is_empty()))
        .ok_or_else(|| {
            malformed(
                section,
                format!("expected `{}...]`, got `{line}`", section.prefix()),
            )
        })
}

fn state_position(states: &OrderedSet<State>, name: &str) -> Result<StateIndex, FsaError> {
    states
        .get_index_of(name)
        .ok_or_else(|| FsaError::UndefinedState(name.to_string()))
}

fn symbol_position(alphabet: &Alphabet, name: &str) -> Result<SymbolIndex, FsaError> {
    alphabet
        .position(name)
        .ok_or_else(|| FsaError::UndefinedSymbol(name.to_string()))
}

fn parse_states(line: &str) -> Result<OrderedSet<State>, FsaError> {
    entries(line, Section::States)?
        .map(|name| {
            State::try_new(name)
                .ok_or_else(|| malformed(Section::States, format!("invalid state name `{name}`")))
        })
        .collect()
}

fn parse_alphabet(line: &str) -> Result<Alphabet, FsaError> {
    entries(line, Section::Alphabet)?
        .map(|name| {
            Symbol::try_new(name)
                .ok_or_else(|| malformed(Section::Alphabet, format!("invalid symbol `{name}`")))
        })
        .collect()
}

/// Resolves every entry of the line against `states`, duplicates are collapsed.
fn parse_state_list(
    line: &str,
    section: Section,
    states: &OrderedSet<State>,
) -> Result<Vec<StateIndex>, FsaError> {
    let positions = entries(line, section)?
        .map(|name| state_position(states, name))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(positions.into_iter().unique().collect())
}

fn parse_initial(line: &str, states: &OrderedSet<State>) -> Result<StateIndex, FsaError> {
    let initial = parse_state_list(line, Section::Initial, states)?;
    match initial[..] {
        [] => Err(FsaError::NoInitialState),
        [q] => Ok(q),
        _ => Err(malformed(
            Section::Initial,
            format!("expected one initial state, got {}", initial.len()),
        )),
    }
}

fn parse_finals(
    line: &str,
    states: &OrderedSet<State>,
    diagnostics: &mut Diagnostics,
) -> Result<Set<StateIndex>, FsaError> {
    let finals: Set<_> = parse_state_list(line, Section::Final, states)?
        .into_iter()
        .collect();
    if finals.is_empty() {
        diagnostics.warn(Warning::NoAcceptingState);
    }
    Ok(finals)
}

fn parse_transition(
    entry: &str,
    states: &OrderedSet<State>,
    alphabet: &Alphabet,
) -> Result<Transition, FsaError> {
    let fields = entry.split(FIELD_SEPARATOR).collect_vec();
    let [source, symbol, target] = fields[..] else {
        return Err(malformed(
            Section::Transitions,
            format!("`{entry}` does not consist of three fields"),
        ));
    };

    let source = state_position(states, source)?;
    let symbol = symbol_position(alphabet, symbol)?;
    let target = state_position(states, target)?;
    Ok(Transition::new(source, symbol, target))
}

fn parse_transitions(
    line: &str,
    states: &OrderedSet<State>,
    alphabet: &Alphabet,
) -> Result<Vec<Transition>, FsaError> {
    entries(line, Section::Transitions)?
        .map(|entry| parse_transition(entry, states, alphabet))
        .collect()
}

/// Parses an automaton from exactly [`LINE_COUNT`] lines. Warnings that are discovered while
/// parsing are recorded in `diagnostics`.
pub fn parse<I, S>(lines: I, diagnostics: &mut Diagnostics) -> Result<Automaton, FsaError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();
    let mut next_line = |section: Section| {
        lines
            .next()
            .ok_or_else(|| malformed(section, "line is missing"))
    };

    let states = parse_states(next_line(Section::States)?.as_ref())?;
    trace!("parsed {} states", states.len());
    let alphabet = parse_alphabet(next_line(Section::Alphabet)?.as_ref())?;
    trace!("parsed alphabet of size {}", alphabet.size());
    let initial = parse_initial(next_line(Section::Initial)?.as_ref(), &states)?;
    let finals = parse_finals(next_line(Section::Final)?.as_ref(), &states, diagnostics)?;
    trace!("parsed {} final states", finals.len());
    let transitions =
        parse_transitions(next_line(Section::Transitions)?.as_ref(), &states, &alphabet)?;
    trace!("parsed {} transitions", transitions.len());

    if lines.next().is_some() {
        debug!("input has more than {LINE_COUNT} lines");
        return Err(FsaError::MalformedInput);
    }

    Ok(Automaton::from_parts(
        states,
        alphabet,
        initial,
        finals,
        transitions,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines<'a>(
        states: &'a str,
        alpha: &'a str,
        init: &'a str,
        fin: &'a str,
        trans: &'a str,
    ) -> [String; 5] {
        [
            format!("states=[{states}]"),
            format!("alpha=[{alpha}]"),
            format!("init.st=[{init}]"),
            format!("fin.st=[{fin}]"),
            format!("trans=[{trans}]"),
        ]
    }

    fn parse_err(input: [String; 5]) -> FsaError {
        parse(input, &mut Diagnostics::default()).unwrap_err()
    }

    #[test_log::test]
    fn parses_well_formed_input() {
        let mut diagnostics = Diagnostics::default();
        let aut = parse(
            lines("a,b,c", "x,y_1", "a", "c", "a>x>b,b>y_1>c,c>x>c"),
            &mut diagnostics,
        )
        .unwrap();

        assert!(diagnostics.is_empty());
        assert_eq!(aut.states().map(State::as_str).collect_vec(), ["a", "b", "c"]);
        assert_eq!(
            aut.alphabet().symbols().map(Symbol::as_str).collect_vec(),
            ["x", "y_1"]
        );
        assert_eq!(aut.initial(), 0);
        assert_eq!(aut.finals().collect_vec(), [2]);
        assert_eq!(
            aut.transitions(),
            [
                Transition::new(0, 0, 1),
                Transition::new(1, 1, 2),
                Transition::new(2, 0, 2)
            ]
        );
    }

    #[test]
    fn empty_entries_are_skipped() {
        let aut = parse(
            lines(",a,,b,", ",x", "a,", "", ",a>x>b,"),
            &mut Diagnostics::default(),
        )
        .unwrap();
        assert_eq!(aut.size(), 2);
        assert_eq!(aut.alphabet().size(), 1);
        assert_eq!(aut.transitions().len(), 1);
    }

    #[test]
    fn duplicate_declarations_collapse() {
        let aut = parse(
            lines("a,b,a", "x,x", "a,a", "b,b", "a>x>b,a>x>b"),
            &mut Diagnostics::default(),
        )
        .unwrap();
        assert_eq!(aut.size(), 2);
        assert_eq!(aut.alphabet().size(), 1);
        assert_eq!(aut.initial(), 0);
        assert_eq!(aut.finals().collect_vec(), [1]);
    }

    #[test]
    fn missing_final_states_warns() {
        let mut diagnostics = Diagnostics::default();
        parse(lines("a", "x", "a", "", "a>x>a"), &mut diagnostics).unwrap();
        assert!(diagnostics.contains(Warning::NoAcceptingState));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn line_shape() {
        let mut input = lines("a", "x", "a", "a", "");
        input[0] = "state=[a]".to_string();
        assert_eq!(parse_err(input), FsaError::MalformedInput);

        let mut input = lines("a", "x", "a", "a", "");
        input[1] = "alpha=[x".to_string();
        assert_eq!(parse_err(input), FsaError::MalformedInput);

        let mut input = lines("a", "x", "a", "a", "");
        input[4] = " trans=[]".to_string();
        assert_eq!(parse_err(input), FsaError::MalformedInput);

        let mut input = lines("a", "x", "a", "a", "");
        input[3] = "fin.st=[a] ".to_string();
        assert_eq!(parse_err(input), FsaError::MalformedInput);
    }

    #[test]
    fn invalid_names() {
        assert_eq!(
            parse_err(lines("a,B", "x", "a", "a", "")),
            FsaError::MalformedInput
        );
        assert_eq!(
            parse_err(lines("a_b", "x", "a_b", "", "")),
            FsaError::MalformedInput
        );
        assert_eq!(
            parse_err(lines("a", "x y", "a", "", "")),
            FsaError::MalformedInput
        );
        assert_eq!(
            parse_err(lines("a", "x-y", "a", "", "")),
            FsaError::MalformedInput
        );
    }

    #[test]
    fn initial_state() {
        assert_eq!(
            parse_err(lines("a", "x", "", "a", "")),
            FsaError::NoInitialState
        );
        assert_eq!(
            parse_err(lines("a,b", "x", "a,b", "a", "")),
            FsaError::MalformedInput
        );
        assert_eq!(
            parse_err(lines("a,b", "x", "c", "a", "")),
            FsaError::UndefinedState("c".into())
        );
        // entries are resolved before they are counted
        assert_eq!(
            parse_err(lines("a,b", "x", "a,b,c", "a", "")),
            FsaError::UndefinedState("c".into())
        );
    }

    #[test]
    fn undefined_final_state() {
        assert_eq!(
            parse_err(lines("a,b", "x", "a", "b,q", "")),
            FsaError::UndefinedState("q".into())
        );
    }

    #[test]
    fn transitions() {
        assert_eq!(
            parse_err(lines("a,b", "x", "a", "b", "a>x")),
            FsaError::MalformedInput
        );
        assert_eq!(
            parse_err(lines("a,b", "x", "a", "b", "a>x>b>a")),
            FsaError::MalformedInput
        );
        assert_eq!(
            parse_err(lines("a,b", "x", "a", "b", "a>x>")),
            FsaError::UndefinedState("".into())
        );
        assert_eq!(
            parse_err(lines("a,b", "x", "a", "b", "a>z>b")),
            FsaError::UndefinedSymbol("z".into())
        );
        assert_eq!(
            parse_err(lines("a,b", "x", "a", "b", "c>x>b")),
            FsaError::UndefinedState("c".into())
        );
        assert_eq!(
            parse_err(lines("a,b", "x", "a", "b", "a>x>c")),
            FsaError::UndefinedState("c".into())
        );
        // fields are checked source, symbol, target
        assert_eq!(
            parse_err(lines("a,b", "x", "a", "b", "c>z>d")),
            FsaError::UndefinedState("c".into())
        );
        assert_eq!(
            parse_err(lines("a,b", "x", "a", "b", "a>z>d")),
            FsaError::UndefinedSymbol("z".into())
        );
    }

    #[test]
    fn empty_transition_fields_are_undefined_names() {
        assert_eq!(
            parse_err(lines("a,b", "x", "a", "b", "a>>b")),
            FsaError::UndefinedSymbol("".into())
        );
        assert_eq!(
            parse_err(lines("a,b", "x", "a", "b", ">x>b")),
            FsaError::UndefinedState("".into())
        );
        assert_eq!(
            parse_err(lines("a,b", "x", "a", "b", ">>")),
            FsaError::UndefinedState("".into())
        );
    }

    #[test]
    fn first_violation_in_document_order_wins() {
        assert_eq!(
            parse_err(lines("a", "x", "", "q", "a>z>a")),
            FsaError::NoInitialState
        );
        assert_eq!(
            parse_err(lines("a", "x", "a", "q", "a>z>a")),
            FsaError::UndefinedState("q".into())
        );
        assert_eq!(
            parse_err(lines("a", "x", "a", "a", "a>x>a,a>z>a,q>x>a")),
            FsaError::UndefinedSymbol("z".into())
        );
    }

    #[test]
    fn line_count() {
        let input = lines("a", "x", "a", "a", "");
        assert_eq!(
            parse(&input[..4], &mut Diagnostics::default()).unwrap_err(),
            FsaError::MalformedInput
        );

        let mut extended = input.to_vec();
        extended.push(String::new());
        assert_eq!(
            parse(extended, &mut Diagnostics::default()).unwrap_err(),
            FsaError::MalformedInput
        );
    }

    #[test]
    fn missing_line_after_earlier_error() {
        // the undefined state on the third line is found before the missing fifth line
        let input = lines("a", "x", "b", "a", "");
        assert_eq!(
            parse(&input[..3], &mut Diagnostics::default()).unwrap_err(),
            FsaError::UndefinedState("b".into())
        );
    }
}
