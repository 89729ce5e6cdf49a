//! Rule evaluator tests
//!
//! Exercise `TransformEngine` directly with single rules, covering literal
//! and path dispatch, Missing handling and capture scoping.

use rulemorph_client::captures::Captures;
use rulemorph_client::config::{MissingPolicy, TransformConfig};
use rulemorph_client::error::TransformError;
use rulemorph_client::evaluator::TransformEngine;
use rulemorph_client::null_semantics::Resolved;
use rulemorph_client::rule::Rule;
use serde_json::json;

fn engine() -> TransformEngine {
    TransformEngine::default()
}

#[test]
fn test_root_path_returns_document() {
    let doc = json!({"a": [1, {"b": null}], "c": "text"});
    assert_eq!(
        engine().evaluate_value(&json!("$"), &doc),
        Ok(Resolved::Present(doc.clone()))
    );
}

#[test]
fn test_literal_never_consults_document() {
    assert_eq!(
        engine().evaluate_value(&json!("hello"), &json!({})),
        Ok(json!("hello").into())
    );
    assert_eq!(
        engine().evaluate_value(&json!("fallback"), &json!({"fallback": 1})),
        Ok(json!("fallback").into())
    );
}

#[test]
fn test_path_miss_has_no_literal_fallback() {
    assert_eq!(
        engine().evaluate_value(&json!("$.missing"), &json!({})),
        Ok(Resolved::Missing)
    );
}

#[test]
fn test_explicit_null_is_not_missing() {
    assert_eq!(
        engine().evaluate_value(&json!("$.a"), &json!({"a": null})),
        Ok(Resolved::Present(json!(null)))
    );
}

#[test]
fn test_mapping_evaluation_is_deterministic() {
    let rule = Rule::compile(&json!({"x": "$.a", "y": {"z": "$.b.0"}, "k": "lit"}))
        .expect("compiles");
    let doc = json!({"a": 1, "b": ["first"]});
    let captures = Captures::new();

    let first = engine().evaluate(&rule, &doc, &captures).expect("evaluates");
    let second = engine().evaluate(&rule, &doc, &captures).expect("evaluates");

    assert_eq!(first, second);
    assert_eq!(first, json!({"x": 1, "y": {"z": "first"}, "k": "lit"}).into());
}

#[test]
fn test_captures_substitute_in_literals_and_paths() {
    let captures: Captures = [(":row", json!(1)), (":name", json!("n"))]
        .into_iter()
        .collect();
    let doc = json!({"list": ["a", "b"], "n": "named"});
    let engine = engine();

    let literal = Rule::compile(&json!(":row")).expect("compiles");
    assert_eq!(engine.evaluate(&literal, &doc, &captures), Ok(json!(1).into()));

    let path = Rule::compile(&json!("$.list.:row")).expect("compiles");
    assert_eq!(engine.evaluate(&path, &doc, &captures), Ok(json!("b").into()));

    let keyed = Rule::compile(&json!("$.:name")).expect("compiles");
    assert_eq!(engine.evaluate(&keyed, &doc, &captures), Ok(json!("named").into()));

    let unbound = Rule::compile(&json!("$.list.:other")).expect("compiles");
    assert_eq!(engine.evaluate(&unbound, &doc, &captures), Ok(Resolved::Missing));
}

#[test]
fn test_resolved_values_are_substituted() {
    let captures: Captures = [(":x", json!("bound"))].into_iter().collect();
    let doc = json!({"v": [":x", ":y", "plain"]});
    let rule = Rule::compile(&json!("$.v")).expect("compiles");

    assert_eq!(
        engine().evaluate(&rule, &doc, &captures),
        Ok(json!(["bound", null, "plain"]).into())
    );
}

#[test]
fn test_each_at_root_resolves_against_root() {
    let doc = json!({"items": [{"n": 1}, {"n": 2}], "label": "L"});
    let rule = Rule::compile(&json!({
        "$each": "$.items",
        "n": "$.n",
        "all": {"$each": "$.items", "m": "$.n"}
    }))
    .expect("compiles");

    let output = engine()
        .evaluate_document(&rule, &doc, &Captures::new())
        .expect("evaluates");

    assert_eq!(
        output,
        json!([
            {"n": 1, "all": [{"m": 1}, {"m": 2}]},
            {"n": 2, "all": [{"m": 1}, {"m": 2}]}
        ])
    );
}

#[test]
fn test_omit_policy_inside_repeating_body() {
    let engine = TransformEngine::new(TransformConfig::default().with_missing(MissingPolicy::Omit))
        .expect("valid config");
    let output = engine
        .transform(
            &json!({"items": [{"a": 1}, {"b": 2}]}),
            &json!({"out": {"$each": "$.items", "a": "$.a", "b": "$.b"}}),
        )
        .expect("valid rules");

    assert_eq!(output, json!({"out": [{"a": 1}, {"b": 2}]}));
}

#[test]
fn test_engine_rejects_invalid_config() {
    let err = TransformEngine::new(TransformConfig::default().with_max_depth(0)).unwrap_err();
    assert!(matches!(err, TransformError::Config(_)));
}

#[test]
fn test_duplicate_keys_last_wins() {
    let output = engine()
        .transform(
            &json!({"people": [{"team": "a", "n": 1}, {"team": "b", "n": 2}, {"team": "a", "n": 3}]}),
            &json!({"by_team": {"$each": "$.people", "$key": "$.team", "n": "$.n"}}),
        )
        .expect("valid rules");

    assert_eq!(output, json!({"by_team": {"a": {"n": 3}, "b": {"n": 2}}}));
}

#[test]
fn test_key_substituted_like_other_entries() {
    // the outer capture is itself a reference to the inner variable
    let output = engine()
        .transform(
            &json!({"outer": {":b": 1}, "inner": {"k": 1}}),
            &json!({"out": {
                "$each": "$.outer.:a",
                "inner": {"$each": "$.inner.:b", "$key": ":a", "label": ":a"}
            }}),
        )
        .expect("valid rules");

    assert_eq!(output, json!({"out": [{"inner": {"k": {"label": "k"}}}]}));
}
