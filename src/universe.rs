//! The fixed set of variable names an engine accepts.

use indexmap::IndexSet;
use serde::Serialize;

use crate::{ast::tokens::RESERVED_WORDS, lexer};

/// Ordered set of distinct variable names, fixed at construction.
///
/// An empty universe is valid: the language then accepts no identifiers at
/// all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableUniverse {
    names: IndexSet<String>,
}

impl VariableUniverse {
    /// Builds a universe from names in the given order; repeated names keep
    /// their first position.
    ///
    /// Names that the lexer can never produce as a variable (keywords, or
    /// text that is not a single word) are kept but logged, since no source
    /// text will ever reference them.
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_lang::VariableUniverse;
    ///
    /// let universe = VariableUniverse::new(["foo", "bar", "foo"]);
    /// assert_eq!(universe.len(), 2);
    /// assert!(universe.contains("bar"));
    /// ```
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: IndexSet<String> = names.into_iter().map(Into::into).collect();

        for name in &names {
            if RESERVED_WORDS.contains(&name.as_str()) {
                log::warn!("variable '{}' is a reserved word and can never be referenced", name);
            } else if !lexer::is_word(name) {
                log::warn!("variable '{}' is not a single word and can never be referenced", name);
            }
        }

        VariableUniverse { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Names in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in ascending, case-sensitive order.
    pub fn sorted(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort();
        names
    }
}

impl<S: Into<String>> FromIterator<S> for VariableUniverse {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        VariableUniverse::new(iter)
    }
}
