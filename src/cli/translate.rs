//! Translate expressions to other languages, and complete variable names

use std::collections::HashMap;

use super::{CliError, check::engine_for};

/// Output of the translate command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// SQL `WHERE` clause fragment
    Sql,
    /// Python expression
    Host,
    /// The parsed tree as JSON
    Ast { pretty: bool },
}

/// Parse `expression` and render it for `target`.
pub fn execute_translate(
    expression: &str,
    variables: &[String],
    target: Target,
) -> Result<String, CliError> {
    let engine = engine_for(variables, &HashMap::new());
    let expr = engine.parse(expression)?;

    let output = match target {
        Target::Sql => engine.to_sql(&expr),
        Target::Host => engine.to_host_lang(&expr),
        Target::Ast { pretty: true } => serde_json::to_string_pretty(&expr)?,
        Target::Ast { pretty: false } => serde_json::to_string(&expr)?,
    };
    Ok(output)
}

/// Completion candidates for the last token of `partial`.
pub fn execute_suggest(partial: &str, variables: &[String]) -> Vec<String> {
    engine_for(variables, &HashMap::new()).suggest(partial)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_translate_sql() {
        let sql = execute_translate("a = null", &vars(&["a"]), Target::Sql).unwrap();
        assert_eq!(sql, "a is null");
    }

    #[test]
    fn test_translate_ast() {
        let json = execute_translate("a = 1", &vars(&["a"]), Target::Ast { pretty: false }).unwrap();
        let tree: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(tree["rest"], serde_json::json!([]));
        assert_eq!(
            tree["first"]["predicate"]["comparison"]["left"],
            serde_json::json!({"kind": "ident", "value": "a"})
        );
    }

    #[test]
    fn test_translate_rejects_unknown_variable() {
        assert!(matches!(
            execute_translate("b = 1", &vars(&["a"]), Target::Host),
            Err(CliError::Syntax(_))
        ));
    }

    #[test]
    fn test_suggest() {
        assert_eq!(
            execute_suggest("x = Fo", &vars(&["foo", "Fab", "bar"])),
            vars(&["Fab", "foo"])
        );
    }
}
