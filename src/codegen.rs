//! Source generation for target languages.
//!
//! One syntax-directed printer, [`SourcePrinter`], walks the tree; a
//! [`Dialect`] decides how each literal and operator is spelled. Three
//! dialects ship with the crate:
//!
//! - [`HostDialect`] - a Python boolean expression
//! - [`SqlDialect`] - a SQL `WHERE` clause fragment
//! - [`SurfaceDialect`] - the predicate language itself (used by `Display`)
//!
//! Generation never fails and never evaluates anything.
//!
//! # Examples
//!
//! ```
//! use sieve_lang::Engine;
//! use sieve_lang::codegen::{SourcePrinter, SqlDialect};
//!
//! let engine = Engine::new(["owner"]);
//! let expr = engine.parse("owner = null or owner != 'it''s me'").unwrap();
//!
//! assert_eq!(
//!     SourcePrinter::new(SqlDialect).print(&expr),
//!     "owner is null or owner <> 'it''s me'"
//! );
//! ```

use crate::ast::{BoolOp, Combination, Comparison, ComparisonOp, Literal, Node};

/// Per-node spelling rules for a target language.
pub trait Dialect {
    fn null(&self) -> &'static str;

    fn boolean(&self, value: bool) -> &'static str;

    /// A quoted, escaped string literal.
    fn string(&self, value: &str) -> String;

    /// `null_operand` is set when either side of the comparison is the
    /// `null` literal.
    fn comparison_op(&self, op: ComparisonOp, null_operand: bool) -> &'static str;

    fn bool_op(&self, op: BoolOp) -> &'static str {
        op.keyword()
    }

    fn negation(&self) -> &'static str {
        "not"
    }
}

/// Python.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostDialect;

impl Dialect for HostDialect {
    fn null(&self) -> &'static str {
        "None"
    }

    fn boolean(&self, value: bool) -> &'static str {
        if value { "True" } else { "False" }
    }

    fn string(&self, value: &str) -> String {
        format!("\"{}\"", escape_backslashed(value))
    }

    fn comparison_op(&self, op: ComparisonOp, _null_operand: bool) -> &'static str {
        match op {
            ComparisonOp::Eq => "==",
            other => other.symbol(),
        }
    }
}

/// SQL, lowercase keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlDialect;

impl Dialect for SqlDialect {
    fn null(&self) -> &'static str {
        "null"
    }

    fn boolean(&self, value: bool) -> &'static str {
        if value { "true" } else { "false" }
    }

    fn string(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    fn comparison_op(&self, op: ComparisonOp, null_operand: bool) -> &'static str {
        match (op, null_operand) {
            (ComparisonOp::Eq, true) => "is",
            (ComparisonOp::Ne, true) => "is not",
            (ComparisonOp::Eq, false) => "=",
            (ComparisonOp::Ne, false) => "<>",
            (other, _) => other.symbol(),
        }
    }
}

/// The predicate language's own canonical syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceDialect;

impl Dialect for SurfaceDialect {
    fn null(&self) -> &'static str {
        "null"
    }

    fn boolean(&self, value: bool) -> &'static str {
        if value { "true" } else { "false" }
    }

    fn string(&self, value: &str) -> String {
        format!("\"{}\"", escape_backslashed(value))
    }

    fn comparison_op(&self, op: ComparisonOp, _null_operand: bool) -> &'static str {
        op.symbol()
    }
}

fn escape_backslashed(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '"' => vec!['\\', '"'],
            '\\' => vec!['\\', '\\'],
            '\n' => vec!['\\', 'n'],
            '\r' => vec!['\\', 'r'],
            '\t' => vec!['\\', 't'],
            c => vec![c],
        })
        .collect()
}

/// Floats always carry a decimal point so they read back as floats.
fn format_float(n: f64) -> String {
    let text = n.to_string();
    if n.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// Renders trees through a [`Dialect`].
pub struct SourcePrinter<D> {
    dialect: D,
}

impl<D: Dialect> SourcePrinter<D> {
    pub fn new(dialect: D) -> Self {
        SourcePrinter { dialect }
    }

    /// Renders a whole expression; the top level is not parenthesized.
    pub fn print(&self, expr: &Combination) -> String {
        let mut out = String::new();
        self.print_combination(expr, &mut out);
        out
    }

    fn print_combination(&self, combination: &Combination, out: &mut String) {
        self.print_node(&combination.first, out);
        for (op, node) in &combination.rest {
            out.push(' ');
            out.push_str(self.dialect.bool_op(*op));
            out.push(' ');
            self.print_node(node, out);
        }
    }

    fn print_node(&self, node: &Node, out: &mut String) {
        match node {
            Node::Predicate(predicate) if predicate.negated => {
                out.push_str(self.dialect.negation());
                out.push_str(" (");
                self.print_comparison(&predicate.comparison, out);
                out.push(')');
            }
            Node::Predicate(predicate) => self.print_comparison(&predicate.comparison, out),
            Node::Group(inner) => {
                out.push('(');
                self.print_combination(inner, out);
                out.push(')');
            }
        }
    }

    fn print_comparison(&self, comparison: &Comparison, out: &mut String) {
        self.print_literal(&comparison.left, out);
        out.push(' ');
        out.push_str(
            self.dialect
                .comparison_op(comparison.op, comparison.involves_null()),
        );
        out.push(' ');
        self.print_literal(&comparison.right, out);
    }

    fn print_literal(&self, literal: &Literal, out: &mut String) {
        match literal {
            Literal::Null => out.push_str(self.dialect.null()),
            Literal::Bool(b) => out.push_str(self.dialect.boolean(*b)),
            Literal::Int(n) => out.push_str(&n.to_string()),
            Literal::Float(n) => out.push_str(&format_float(*n)),
            Literal::Str(s) => out.push_str(&self.dialect.string(s)),
            Literal::Ident(name) => out.push_str(name),
        }
    }
}

/// Renders `expr` as a Python boolean expression.
pub fn to_host_lang(expr: &Combination) -> String {
    SourcePrinter::new(HostDialect).print(expr)
}

/// Renders `expr` as a SQL `WHERE` clause fragment.
pub fn to_sql(expr: &Combination) -> String {
    SourcePrinter::new(SqlDialect).print(expr)
}
