use crate::{
    ast::Expression,
    codegen,
    completion,
    evaluator::{Bindings, EvalError, Evaluator},
    lexer::Lexer,
    parser::{Parser, SyntaxError},
    universe::VariableUniverse,
};

/// Entry point tying one variable universe to every operation.
///
/// The engine holds no mutable state after construction; it can be shared
/// freely between threads.
///
/// # Examples
///
/// ```
/// use sieve_lang::{Engine, Value};
/// use std::collections::HashMap;
///
/// let engine = Engine::new(["age", "country"]);
/// let expr = engine.parse("age >= 18 and not country = 'NL'").unwrap();
///
/// let bindings = HashMap::from([
///     ("age".to_string(), Value::Integer(30)),
///     ("country".to_string(), Value::from("BE")),
/// ]);
/// assert!(engine.evaluate(&expr, &bindings).unwrap());
///
/// assert_eq!(
///     engine.to_sql(&expr),
///     "age >= 18 and not (country = 'NL')"
/// );
/// assert_eq!(
///     engine.to_host_lang(&expr),
///     "age >= 18 and not (country == \"NL\")"
/// );
/// assert_eq!(engine.suggest("age >= 18 and co"), vec!["country"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    universe: VariableUniverse,
}

impl Engine {
    pub fn new<I, S>(variable_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_universe(VariableUniverse::new(variable_names))
    }

    pub fn with_universe(universe: VariableUniverse) -> Self {
        Engine { universe }
    }

    pub fn universe(&self) -> &VariableUniverse {
        &self.universe
    }

    /// Parses `source` in full.
    pub fn parse(&self, source: &str) -> Result<Expression, SyntaxError> {
        let mut parser = Parser::new(Lexer::new(source), &self.universe);
        match parser.parse() {
            Ok(expr) => {
                log::debug!("parsed {:?} into {} top-level node(s)", source, expr.node_count());
                Ok(expr)
            }
            Err(e) => {
                log::debug!("failed to parse {:?}: {}", source, e);
                Err(e)
            }
        }
    }

    pub fn evaluate<B: Bindings + ?Sized>(
        &self,
        expr: &Expression,
        bindings: &B,
    ) -> Result<bool, EvalError> {
        Evaluator::new(bindings).eval_expression(expr)
    }

    /// Renders `expr` as a Python boolean expression.
    pub fn to_host_lang(&self, expr: &Expression) -> String {
        codegen::to_host_lang(expr)
    }

    /// Renders `expr` as a SQL `WHERE` clause fragment.
    pub fn to_sql(&self, expr: &Expression) -> String {
        codegen::to_sql(expr)
    }

    /// Completion candidates for the last token of `partial`.
    pub fn suggest(&self, partial: &str) -> Vec<String> {
        completion::suggest(partial, &self.universe)
    }
}
