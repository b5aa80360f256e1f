//! # Sieve Predicate Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for Sieve, a small
//! language of boolean comparisons over typed literals and named variables.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer, and token kinds
//!   reported by syntax errors
//! - **[operators]** - Comparison and boolean operators
//! - **[expressions]** - Literals, comparisons, predicates and combinations
//!
//! ## Quick Start
//!
//! ```text
//! age >= 18 and (country = "NL" or not verified = false)
//! ```
//!
//! ## Core Concepts
//!
//! ### Comparisons
//!
//! Every leaf of a tree is a comparison between two literals, each of which
//! is `null`, a boolean, an integer, a float, a quoted string, or the name of
//! a variable known to the engine:
//!
//! ```text
//! price > 100
//! name != 'guest'
//! deleted_at = null
//! ```
//!
//! ### Combinations
//!
//! Comparisons (optionally prefixed by `not`) are chained with `and` / `or`.
//! `and` binds tighter than `or`; both are left-associative. Parentheses
//! group a sub-combination:
//!
//! ```text
//! a = 1 or a = 2 and a = 3      // a = 1 or (a = 2 and a = 3)
//! (a = 1 or a = 2) and a = 3
//! ```
//!
//! ### Null
//!
//! `null` only ever compares with `=` / `!=`; ordering a `null` is an error
//! at evaluation time. The SQL generator renders those comparisons with
//! `is` / `is not`.
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{Combination, Comparison, Expression, Literal, Node, Predicate};
pub use operators::{BoolOp, ComparisonOp};
pub use tokens::{Spanned, Token, TokenKind};
