// tests/language_properties.rs
//
// End-to-end behaviour of the language through the public `Engine` API.

use pretty_assertions::assert_eq;
use sieve_lang::{Engine, EvalError, SyntaxError, Value};
use std::collections::HashMap;

fn no_bindings() -> HashMap<String, Value> {
    HashMap::new()
}

#[test]
fn generated_sql_parses_back_unchanged() {
    let engine = Engine::new(["a", "b", "c"]);
    let sources = [
        "a = 1 or a = 2 and a = 3",
        "not a = null and (b <= -2.5 or c != 'it''s')",
        "((a = b)) or not (c > 0)",
        "true = false or null != a",
    ];
    for source in sources {
        let expr = engine.parse(source).unwrap();
        assert_eq!(engine.parse(&engine.to_sql(&expr)).unwrap(), expr, "{}", source);
    }
}

#[test]
fn generated_host_code_parses_back_unchanged() {
    let engine = Engine::new(["a", "b", "c"]);
    let sources = [
        "a = 1 or a = 2 and a = 3",
        "not a = null and (b <= -2.5 or c != 'say \"hi\"')",
        "((a = b)) or not (c > 0.0)",
        "true = false or null != a",
    ];
    for source in sources {
        let expr = engine.parse(source).unwrap();
        assert_eq!(
            engine.parse(&engine.to_host_lang(&expr)).unwrap(),
            expr,
            "{}",
            source
        );
    }
}

#[test]
fn and_binds_tighter_than_or() {
    let engine = Engine::new(["a"]);
    let flat = engine.parse("a=1 or a=2 and a=3").unwrap();
    let explicit = engine.parse("a=1 or (a=2 and a=3)").unwrap();
    let regrouped = engine.parse("(a=1 or a=2) and a=3").unwrap();

    let mut differs = false;
    for value in [0, 1, 2, 3] {
        let bindings = HashMap::from([("a".to_string(), Value::Integer(value))]);
        let result = engine.evaluate(&flat, &bindings).unwrap();
        assert_eq!(result, engine.evaluate(&explicit, &bindings).unwrap());
        differs |= result != engine.evaluate(&regrouped, &bindings).unwrap();
    }
    assert!(differs);
}

#[test]
fn null_equals_null() {
    let engine = Engine::new(Vec::<String>::new());
    let expr = engine.parse("null = null").unwrap();

    assert_eq!(engine.to_sql(&expr), "null is null");
    assert_eq!(engine.to_host_lang(&expr), "None == None");
    assert_eq!(engine.evaluate(&expr, &no_bindings()), Ok(true));
}

#[test]
fn negation_of_false_comparison() {
    let engine = Engine::new(Vec::<String>::new());
    let expr = engine.parse("not 1 > 1").unwrap();
    assert_eq!(engine.evaluate(&expr, &no_bindings()), Ok(true));
}

#[test]
fn embedded_apostrophe_survives_both_quote_styles() {
    let engine = Engine::new(Vec::<String>::new());
    for source in [
        "\"a o'clock\" = \"a o'clock\"",
        "'a o''clock' = 'a o''clock'",
    ] {
        let expr = engine.parse(source).unwrap();
        assert_eq!(engine.evaluate(&expr, &no_bindings()), Ok(true));
        assert_eq!(engine.to_sql(&expr), "'a o''clock' = 'a o''clock'");
    }
}

#[test]
fn missing_binding_is_reported_by_name() {
    let engine = Engine::new(["foo"]);
    let expr = engine.parse("foo = 1").unwrap();
    assert_eq!(
        engine.evaluate(&expr, &no_bindings()),
        Err(EvalError::UnboundVariable("foo".to_string()))
    );
}

#[test]
fn suggestions_are_sorted() {
    let engine = Engine::new(["foo", "fo2", "bar"]);
    assert_eq!(engine.suggest("1 = fo"), vec!["fo2", "foo"]);
    assert_eq!(engine.suggest(""), vec!["bar", "fo2", "foo"]);
}

#[test]
fn unknown_identifier_is_a_syntax_error() {
    let engine = Engine::new(["foo"]);
    let err: SyntaxError = engine.parse("abc = 1").unwrap_err();
    assert_eq!(err.position, 0);
    assert!(err.to_string().contains("unknown variable 'abc'"));
}

#[test]
fn reserved_words_never_become_identifiers() {
    let engine = Engine::new(["not", "null", "None", "x"]);
    assert!(engine.parse("x = null").is_ok());
    assert!(engine.parse("not = 1").is_err());
    // `null` is still the literal, not the variable
    let expr = engine.parse("null = 1").unwrap();
    assert!(expr.identifiers().is_empty());
}

#[test]
fn engines_are_independent() {
    let left = Engine::new(["a"]);
    let right = Engine::new(["b"]);
    assert!(left.parse("a = 1").is_ok());
    assert!(left.parse("b = 1").is_err());
    assert!(right.parse("b = 1").is_ok());
    assert!(right.parse("a = 1").is_err());
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(Engine::new(["a"]));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || {
                let expr = engine.parse("a = 2").unwrap();
                let bindings = HashMap::from([("a".to_string(), Value::Integer(i))]);
                engine.evaluate(&expr, &bindings).unwrap()
            })
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![false, false, true, false]);
}

#[test]
fn ast_serializes_to_json() {
    let engine = Engine::new(["a"]);
    let expr = engine.parse("not a = 'x'").unwrap();
    let json = serde_json::to_value(&expr).unwrap();
    assert_eq!(json["first"]["predicate"]["negated"], serde_json::json!(true));
    assert_eq!(
        json["first"]["predicate"]["comparison"]["right"],
        serde_json::json!({"kind": "str", "value": "x"})
    );
}
