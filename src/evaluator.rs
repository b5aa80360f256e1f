use std::{
    borrow::Cow,
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    ast::{BoolOp, Combination, Comparison, ComparisonOp, Expression, Literal, Node, Predicate},
    value::{Value, ValueKind},
};

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A referenced variable has no value in the bindings
    #[error("unbound variable '{0}'")]
    UnboundVariable(String),

    /// Ordering operator applied to values that cannot be ordered, or to
    /// values of two different kinds
    #[error("cannot compare {left_kind} {op} {right_kind}")]
    Uncomparable {
        left_kind: ValueKind,
        right_kind: ValueKind,
        op: ComparisonOp,
    },
}

/// Variable lookup for evaluation.
pub trait Bindings {
    fn lookup(&self, name: &str) -> Option<&Value>;
}

impl<S: BuildHasher> Bindings for HashMap<String, Value, S> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Bindings for BTreeMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<B: Bindings + ?Sized> Bindings for &B {
    fn lookup(&self, name: &str) -> Option<&Value> {
        (**self).lookup(name)
    }
}

/// Evaluates trees against one set of bindings.
///
/// # Examples
///
/// ```
/// use sieve_lang::{Engine, Evaluator, Value};
/// use std::collections::HashMap;
///
/// let engine = Engine::new(["price"]);
/// let expr = engine.parse("price > 50").unwrap();
///
/// let mut bindings = HashMap::new();
/// bindings.insert("price".to_string(), Value::Integer(100));
///
/// let evaluator = Evaluator::new(&bindings);
/// assert!(evaluator.eval_expression(&expr).unwrap());
/// ```
pub struct Evaluator<'b, B: ?Sized> {
    bindings: &'b B,
}

impl<'b, B: Bindings + ?Sized> Evaluator<'b, B> {
    pub fn new(bindings: &'b B) -> Self {
        Evaluator { bindings }
    }

    pub fn eval_expression(&self, expr: &Expression) -> Result<bool, EvalError> {
        let result = self.eval_combination(expr)?;
        log::debug!("evaluated `{}` to {}", expr, result);
        Ok(result)
    }

    /// Evaluates every node left to right, then reduces the flat sequence:
    /// all `and`s first, leftmost first, then all `or`s.
    fn eval_combination(&self, combination: &Combination) -> Result<bool, EvalError> {
        let first = self.eval_node(&combination.first)?;
        let rest = combination
            .rest
            .iter()
            .map(|(op, node)| Ok((*op, self.eval_node(node)?)))
            .collect::<Result<Vec<_>, EvalError>>()?;

        Ok(reduce(first, &rest))
    }

    fn eval_node(&self, node: &Node) -> Result<bool, EvalError> {
        match node {
            Node::Predicate(predicate) => self.eval_predicate(predicate),
            Node::Group(inner) => self.eval_combination(inner),
        }
    }

    fn eval_predicate(&self, predicate: &Predicate) -> Result<bool, EvalError> {
        let result = self.eval_comparison(&predicate.comparison)?;
        Ok(result != predicate.negated)
    }

    fn eval_comparison(&self, comparison: &Comparison) -> Result<bool, EvalError> {
        let left = self.resolve(&comparison.left)?;
        let right = self.resolve(&comparison.right)?;
        compare(comparison.op, &left, &right)
    }

    fn resolve<'a>(&'a self, literal: &'a Literal) -> Result<Cow<'a, Value>, EvalError> {
        Ok(match literal {
            Literal::Null => Cow::Owned(Value::Null),
            Literal::Bool(b) => Cow::Owned(Value::Boolean(*b)),
            Literal::Int(n) => Cow::Owned(Value::Integer(*n)),
            Literal::Float(n) => Cow::Owned(Value::Float(*n)),
            Literal::Str(s) => Cow::Owned(Value::String(s.clone())),
            Literal::Ident(name) => Cow::Borrowed(
                self.bindings
                    .lookup(name)
                    .ok_or_else(|| EvalError::UnboundVariable(name.clone()))?,
            ),
        })
    }
}

/// Collapses `b0 op0 b1 op1 ... bn`.
///
/// Equivalent to repeatedly replacing the leftmost `bi and bi+1` by its
/// conjunction until no `and` remains, then doing the same for `or`. Each
/// entry of `disjuncts` is a maximal `and`-run, already collapsed.
fn reduce(first: bool, rest: &[(BoolOp, bool)]) -> bool {
    let mut disjuncts = vec![first];

    for &(op, value) in rest {
        match op {
            BoolOp::And => {
                if let Some(last) = disjuncts.last_mut() {
                    *last = *last && value;
                }
            }
            BoolOp::Or => disjuncts.push(value),
        }
    }

    log::trace!("reduced and-runs to {:?}", disjuncts);
    disjuncts.into_iter().fold(false, |acc, value| acc || value)
}

/// Applies a comparison operator to two runtime values.
///
/// `=` and `!=` never fail: values of different kinds are unequal, integers
/// and floats compare numerically, and `null` equals only `null`. Ordering
/// operators accept two numbers or two strings.
pub fn compare(op: ComparisonOp, left: &Value, right: &Value) -> Result<bool, EvalError> {
    match op {
        ComparisonOp::Eq => Ok(values_equal(left, right)),
        ComparisonOp::Ne => Ok(!values_equal(left, right)),
        _ => {
            let ordering = match (left, right) {
                (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
                (a, b) if a.is_numeric() && b.is_numeric() => numeric_cmp(a, b),
                (a, b) => {
                    return Err(EvalError::Uncomparable {
                        left_kind: a.kind(),
                        right_kind: b.kind(),
                        op,
                    });
                }
            };
            // NaN orders with nothing
            Ok(ordering.is_some_and(|o| op.holds(o)))
        }
    }
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (a, b) if a.is_numeric() && b.is_numeric() => numeric_cmp(a, b) == Some(Ordering::Equal),
        _ => false,
    }
}

fn numeric_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Integer(a), Value::Float(b)) => mixed_cmp(*a, *b),
        (Value::Float(a), Value::Integer(b)) => mixed_cmp(*b, *a).map(Ordering::reverse),
        _ => None,
    }
}

/// Compares an integer with a float exactly where decimal range allows.
fn mixed_cmp(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    match Decimal::from_f64_retain(float) {
        Some(fd) => Some(Decimal::from(int).cmp(&fd)),
        None => (int as f64).partial_cmp(&float),
    }
}
