use std::fmt;

use serde::Serialize;

use crate::{
    ast::{BoolOp, ComparisonOp},
    codegen::{SourcePrinter, SurfaceDialect},
};

/// A typed primitive value or variable reference inside a tree.
///
/// `Int` and `Float` are distinct even when numerically equal; the
/// evaluator compares them numerically.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Literal {
    /// `null`
    Null,

    /// `true` / `false`
    Bool(bool),

    /// Integer literal
    ///
    /// # Example
    /// ```text
    /// -42
    /// ```
    Int(i64),

    /// Float literal
    ///
    /// # Example
    /// ```text
    /// 0.5
    /// ```
    Float(f64),

    /// String literal, with escapes already resolved
    Str(String),

    /// Variable reference. The parser only produces names that belong to
    /// the engine's variable universe.
    Ident(String),
}

impl Literal {
    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }
}

/// `left op right`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub left: Literal,
    pub op: ComparisonOp,
    pub right: Literal,
}

impl Comparison {
    pub fn new(left: Literal, op: ComparisonOp, right: Literal) -> Self {
        Comparison { left, op, right }
    }

    /// Whether either side is the `null` literal.
    pub fn involves_null(&self) -> bool {
        self.left.is_null() || self.right.is_null()
    }
}

/// A single, optionally negated comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Predicate {
    pub negated: bool,
    pub comparison: Comparison,
}

/// One operand of a combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Predicate(Predicate),

    /// A parenthesized sub-expression
    Group(Combination),
}

/// `node (op node)*`: N nodes joined by N - 1 boolean operators.
///
/// The first node is held apart from the rest so that an empty combination
/// cannot be constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combination {
    pub first: Box<Node>,
    pub rest: Vec<(BoolOp, Node)>,
}

/// Root of a parsed tree.
pub type Expression = Combination;

impl Combination {
    pub fn single(node: Node) -> Self {
        Combination {
            first: Box::new(node),
            rest: Vec::new(),
        }
    }

    /// Number of top-level nodes, never zero.
    pub fn node_count(&self) -> usize {
        self.rest.len() + 1
    }

    /// Nodes in source order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        std::iter::once(self.first.as_ref()).chain(self.rest.iter().map(|(_, node)| node))
    }

    /// Boolean operators in source order.
    pub fn operators(&self) -> impl Iterator<Item = BoolOp> + '_ {
        self.rest.iter().map(|(op, _)| *op)
    }

    /// Variable names referenced anywhere in the tree, in order of first
    /// appearance.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_identifiers(self, &mut names);
        names
    }
}

fn collect_identifiers<'a>(combination: &'a Combination, names: &mut Vec<&'a str>) {
    for node in combination.nodes() {
        match node {
            Node::Predicate(predicate) => {
                let comparison = &predicate.comparison;
                for literal in [&comparison.left, &comparison.right] {
                    if let Literal::Ident(name) = literal
                        && !names.contains(&name.as_str())
                    {
                        names.push(name.as_str());
                    }
                }
            }
            Node::Group(inner) => collect_identifiers(inner, names),
        }
    }
}

/// Prints the tree back in the language's own syntax; the output re-parses
/// to an equal tree.
impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&SourcePrinter::new(SurfaceDialect).print(self))
    }
}
