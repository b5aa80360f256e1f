use rstest::rstest;
use sieve_lang::{ComparisonOp, Engine, EvalError, Value, ValueKind};
use std::collections::{BTreeMap, HashMap};

fn engine() -> Engine {
    Engine::new(["a", "b", "name", "price", "missing"])
}

fn bindings(pairs: Vec<(&str, Value)>) -> HashMap<String, Value> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn eval_with(source: &str, env: &HashMap<String, Value>) -> Result<bool, EvalError> {
    let engine = engine();
    let expr = engine.parse(source).unwrap();
    engine.evaluate(&expr, env)
}

fn eval(source: &str) -> Result<bool, EvalError> {
    eval_with(source, &HashMap::new())
}

// ============================================================================
// Literal Comparisons
// ============================================================================

#[rstest]
#[case("1 = 1", true)]
#[case("1 = 2", false)]
#[case("1 != 2", true)]
#[case("1 = 1.0", true)]
#[case("1.0 != 1", false)]
#[case("-1 < 0", true)]
#[case("2 <= 2.0", true)]
#[case("2.5 > 2", true)]
#[case("3 >= 4", false)]
#[case("'abc' < 'abd'", true)]
#[case("'B' < 'a'", true)]
#[case("'a' = \"a\"", true)]
#[case("'' < 'a'", true)]
#[case("true = true", true)]
#[case("true != false", true)]
#[case("'1' = 1", false)]
#[case("'1' != 1", true)]
#[case("true = 1", false)]
fn test_literal_comparisons(#[case] source: &str, #[case] expected: bool) {
    assert_eq!(eval(source).unwrap(), expected, "{}", source);
}

// ============================================================================
// Null Semantics
// ============================================================================

#[rstest]
#[case("null = null", true)]
#[case("null != null", false)]
#[case("null = 0", false)]
#[case("null != 0", true)]
#[case("'' = null", false)]
#[case("false = null", false)]
#[case("null != 'x'", true)]
fn test_null_equality(#[case] source: &str, #[case] expected: bool) {
    assert_eq!(eval(source).unwrap(), expected, "{}", source);
}

#[rstest]
#[case("null < 1", ComparisonOp::Lt)]
#[case("1 >= null", ComparisonOp::Ge)]
#[case("null <= null", ComparisonOp::Le)]
fn test_null_ordering_fails(#[case] source: &str, #[case] op: ComparisonOp) {
    let err = eval(source).unwrap_err();
    assert!(
        matches!(err, EvalError::Uncomparable { op: o, .. } if o == op),
        "{:?}",
        err
    );
}

#[test]
fn test_bound_null() {
    let env = bindings(vec![("a", Value::Null)]);
    assert!(eval_with("a = null", &env).unwrap());
    assert!(!eval_with("a != null", &env).unwrap());
}

// ============================================================================
// Ordering Errors
// ============================================================================

#[test]
fn test_string_vs_number_ordering() {
    assert_eq!(
        eval("'a' < 1"),
        Err(EvalError::Uncomparable {
            left_kind: ValueKind::String,
            right_kind: ValueKind::Integer,
            op: ComparisonOp::Lt,
        })
    );
}

#[test]
fn test_boolean_ordering() {
    assert_eq!(
        eval("true > false"),
        Err(EvalError::Uncomparable {
            left_kind: ValueKind::Boolean,
            right_kind: ValueKind::Boolean,
            op: ComparisonOp::Gt,
        })
    );
}

#[test]
fn test_uncomparable_message() {
    let err = eval("null < 1.5").unwrap_err();
    assert_eq!(err.to_string(), "cannot compare null < float");
}

// ============================================================================
// Variables
// ============================================================================

#[test]
fn test_variable_lookup() {
    let env = bindings(vec![
        ("price", Value::Float(19.99)),
        ("name", Value::from("widget")),
    ]);
    assert!(eval_with("price < 20 and name = 'widget'", &env).unwrap());
    assert!(!eval_with("price > 20", &env).unwrap());
}

#[test]
fn test_variable_against_variable() {
    let env = bindings(vec![("a", Value::Integer(3)), ("b", Value::Float(3.0))]);
    assert!(eval_with("a = b", &env).unwrap());
    assert!(eval_with("a >= b", &env).unwrap());
}

#[test]
fn test_unbound_variable() {
    let engine = Engine::new(["foo"]);
    let expr = engine.parse("foo = 1").unwrap();
    assert_eq!(
        engine.evaluate(&expr, &HashMap::new()),
        Err(EvalError::UnboundVariable("foo".to_string()))
    );
}

#[test]
fn test_unbound_variable_message() {
    let err = eval("missing = 1").unwrap_err();
    assert_eq!(err.to_string(), "unbound variable 'missing'");
}

#[test]
fn test_every_operand_is_evaluated() {
    // No short-circuit: the unbound variable on the right still fails
    let env = bindings(vec![("a", Value::Integer(1))]);
    assert_eq!(
        eval_with("a = 1 or missing = 1", &env),
        Err(EvalError::UnboundVariable("missing".into()))
    );
    assert_eq!(
        eval_with("a = 2 and missing = 1", &env),
        Err(EvalError::UnboundVariable("missing".into()))
    );
}

#[test]
fn test_first_error_wins() {
    let env = bindings(vec![("a", Value::Null)]);
    assert_eq!(
        eval_with("missing = 1 or a < 1", &env),
        Err(EvalError::UnboundVariable("missing".into()))
    );
    assert!(matches!(
        eval_with("a < 1 or missing = 1", &env),
        Err(EvalError::Uncomparable { .. })
    ));
}

#[test]
fn test_btree_bindings() {
    let engine = engine();
    let expr = engine.parse("a > 1").unwrap();
    let env: BTreeMap<String, Value> = [("a".to_string(), Value::Integer(2))].into();
    assert!(engine.evaluate(&expr, &env).unwrap());
}

#[test]
fn test_extra_bindings_are_ignored() {
    let env = bindings(vec![("a", Value::Integer(1)), ("zzz", Value::Null)]);
    assert!(eval_with("a = 1", &env).unwrap());
}

// ============================================================================
// Negation, Precedence, and Grouping
// ============================================================================

#[rstest]
#[case("not 1 > 1", true)]
#[case("not 1 = 1", false)]
#[case("not (1 = 1)", false)]
#[case("not null = null", false)]
#[case("not 1 = 1 or 2 = 2", true)]
fn test_negation(#[case] source: &str, #[case] expected: bool) {
    assert_eq!(eval(source).unwrap(), expected, "{}", source);
}

#[rstest]
#[case("1 = 1 or 1 = 2 and 1 = 3", true)]
#[case("(1 = 1 or 1 = 2) and 1 = 3", false)]
#[case("1 = 2 and 1 = 3 or 1 = 1", true)]
#[case("1 = 1 and 1 = 2 or 1 = 3 and 1 = 1", false)]
#[case("1 = 1 and (1 = 2 or 1 = 3) or 2 = 2", true)]
#[case("1 = 2 or 1 = 2 or 1 = 2 or 1 = 1", true)]
#[case("1 = 1 and 1 = 1 and 1 = 1 and 1 = 2", false)]
#[case("((((1 = 1))))", true)]
fn test_precedence(#[case] source: &str, #[case] expected: bool) {
    assert_eq!(eval(source).unwrap(), expected, "{}", source);
}

#[test]
fn test_and_binds_tighter_for_all_values() {
    for value in -1..=4 {
        let env = bindings(vec![("a", Value::Integer(value))]);
        assert_eq!(
            eval_with("a = 1 or a = 2 and a = 3", &env).unwrap(),
            eval_with("a = 1 or (a = 2 and a = 3)", &env).unwrap(),
            "a = {}",
            value
        );
    }
}

#[test]
fn test_grouping_changes_result() {
    let env = bindings(vec![("a", Value::Integer(1))]);
    assert!(eval_with("a = 1 or a = 2 and a = 3", &env).unwrap());
    assert!(!eval_with("(a = 1 or a = 2) and a = 3", &env).unwrap());
}
