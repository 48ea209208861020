use std::fmt::{Debug, Display};

use crate::math::OrderedSet;

/// Position of a [`Symbol`] within the [`Alphabet`] that declared it.
pub type SymbolIndex = usize;

/// A symbol of an automaton's alphabet. Symbol names are non-empty and consist only of
/// lowercase ASCII letters, digits and underscores.
///
/// Values of this type can only be obtained through [`Symbol::try_new`], so every
/// `Symbol` in circulation is known to be well formed.
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Returns `true` if `c` may appear in a symbol name.
    pub fn is_name_char(c: char) -> bool {
        matches!(c, 'a'..='z' | '0'..='9' | '_')
    }

    /// Attempts to create a symbol with the given name, returns `None` if the name is empty
    /// or contains a character that is not allowed.
    pub fn try_new(name: &str) -> Option<Self> {
        if !name.is_empty() && name.chars().all(Self::is_name_char) {
            Some(Self(name.to_string()))
        } else {
            None
        }
    }

    /// The name of the symbol.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.0)
    }
}

/// The alphabet of an automaton, a collection of [`Symbol`]s in the order in which they
/// were declared. Declaring a symbol twice has no effect.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Alphabet(OrderedSet<Symbol>);

impl Alphabet {
    /// Number of distinct symbols.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no symbol was declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up the position of the symbol with the given name.
    pub fn position(&self, name: &str) -> Option<SymbolIndex> {
        self.0.get_index_of(name)
    }

    /// Returns the symbol at position `index`, if there is one.
    pub fn get(&self, index: SymbolIndex) -> Option<&Symbol> {
        self.0.get_index(index)
    }

    /// Iterates over the symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.0.iter()
    }

    /// Iterates over the indices of all symbols.
    pub fn indices(&self) -> std::ops::Range<SymbolIndex> {
        0..self.size()
    }
}

impl std::borrow::Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromIterator<Symbol> for Alphabet {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
