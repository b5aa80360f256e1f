//! Parse and evaluate sieve expressions

use std::collections::HashMap;

use super::{CliError, bindings_from_json};
use crate::{Engine, Value};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The expression to check
    pub expression: String,
    /// Declared variable names
    pub variables: Vec<String>,
    /// JSON object of bindings; its keys are declared as variables too
    pub bindings: Option<String>,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug, Clone, PartialEq)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Expression evaluated to this value
    Evaluated(bool),
}

/// Engine whose universe is `variables` followed by any binding names not
/// already declared, in sorted order.
pub(crate) fn engine_for(variables: &[String], bindings: &HashMap<String, Value>) -> Engine {
    let mut extra: Vec<&String> = bindings
        .keys()
        .filter(|k| !variables.contains(*k))
        .collect();
    extra.sort();

    Engine::new(variables.iter().chain(extra).cloned())
}

/// Execute a sieve check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let bindings = match &options.bindings {
        Some(json) => bindings_from_json(json)?,
        None => HashMap::new(),
    };

    let engine = engine_for(&options.variables, &bindings);
    let expr = engine.parse(&options.expression)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let result = engine.evaluate(&expr, &bindings)?;
    Ok(CheckResult::Evaluated(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(expression: &str, variables: &[&str], bindings: Option<&str>) -> CheckOptions {
        CheckOptions {
            expression: expression.to_string(),
            variables: variables.iter().map(|v| v.to_string()).collect(),
            bindings: bindings.map(str::to_string),
            syntax_only: false,
        }
    }

    #[test]
    fn test_binding_keys_are_declared() {
        let result = execute_check(&options("a > 1", &[], Some(r#"{"a": 2}"#))).unwrap();
        assert_eq!(result, CheckResult::Evaluated(true));
    }

    #[test]
    fn test_syntax_only_skips_evaluation() {
        let mut opts = options("a > 1", &["a"], None);
        opts.syntax_only = true;
        assert_eq!(execute_check(&opts).unwrap(), CheckResult::SyntaxValid);
    }

    #[test]
    fn test_unbound_declared_variable() {
        let err = execute_check(&options("a > 1", &["a"], None)).unwrap_err();
        assert_eq!(err.to_string(), "Evaluation error: unbound variable 'a'");
    }
}
