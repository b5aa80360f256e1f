//! Prefix completion of variable names over raw, possibly unfinished text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::universe::VariableUniverse;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// The token being typed at the end of `partial`; empty when `partial` is
/// empty or ends in whitespace.
fn last_token(partial: &str) -> &str {
    WHITESPACE_RUN.split(partial).last().unwrap_or("")
}

/// Names from `universe` that could complete the last whitespace-delimited
/// token of `partial`, sorted ascending.
///
/// Matching is a case-insensitive prefix test; names are returned with
/// their original case. The text is never parsed, so it need not be a valid
/// expression.
///
/// # Examples
///
/// ```
/// use sieve_lang::{VariableUniverse, completion::suggest};
///
/// let universe = VariableUniverse::new(["foo", "fo2", "bar"]);
/// assert_eq!(suggest("1 = fo", &universe), vec!["fo2", "foo"]);
/// assert_eq!(suggest("", &universe), vec!["bar", "fo2", "foo"]);
/// ```
pub fn suggest(partial: &str, universe: &VariableUniverse) -> Vec<String> {
    let token = last_token(partial).to_lowercase();

    let mut matches: Vec<String> = universe
        .iter()
        .filter(|name| name.to_lowercase().starts_with(&token))
        .map(str::to_string)
        .collect();
    matches.sort();

    log::debug!("{} completion(s) for {:?}", matches.len(), token);
    matches
}
