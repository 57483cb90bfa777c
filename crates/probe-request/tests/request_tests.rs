//! Request model tests — form decoding, context construction, defaults.

use std::collections::HashMap;

use probe_request::{Meta, RequestContext, form, meta};

fn meta_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────
// Form decoding
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn decode_simple_pairs() {
    let fields = form::decode(b"name=ferris&lang=rust");
    assert_eq!(fields.len(), 2);
    assert_eq!(fields["name"], "ferris");
    assert_eq!(fields["lang"], "rust");
}

#[test]
fn decode_percent_sequences_and_plus() {
    let fields = form::decode(b"a%20key=hello+world&path=%2Fusr%2Fbin");
    assert_eq!(fields["a key"], "hello world");
    assert_eq!(fields["path"], "/usr/bin");
}

#[test]
fn decode_duplicate_keys_last_wins() {
    let fields = form::decode(b"a=1&b=x&a=2");
    assert_eq!(fields.len(), 2);
    assert_eq!(fields["a"], "2");
}

#[test]
fn decode_pair_without_equals_keeps_empty_value() {
    let fields = form::decode(b"flag&key=value");
    assert_eq!(fields["flag"], "");
    assert_eq!(fields["key"], "value");
}

#[test]
fn decode_empty_input() {
    assert!(form::decode(b"").is_empty());
}

#[test]
fn decode_invalid_utf8_is_lossy() {
    // %FF is not valid UTF-8; decoding substitutes U+FFFD rather than failing.
    let fields = form::decode(b"k=%FF");
    assert_eq!(fields["k"], "\u{FFFD}");
}

#[test]
fn form_content_type_detection() {
    assert!(form::is_form_content_type(None));
    assert!(form::is_form_content_type(Some("application/x-www-form-urlencoded")));
    assert!(form::is_form_content_type(Some(
        "application/x-www-form-urlencoded; charset=UTF-8"
    )));
    assert!(form::is_form_content_type(Some(
        "APPLICATION/X-WWW-FORM-URLENCODED"
    )));
    assert!(!form::is_form_content_type(Some("application/json")));
    assert!(!form::is_form_content_type(Some("multipart/form-data; boundary=x")));
}

// ─────────────────────────────────────────────────────────────────────────
// Meta-variables
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn known_meta_variables() {
    assert!(meta::is_meta_variable("SERVER_NAME"));
    assert!(meta::is_meta_variable("QUERY_STRING"));
    assert!(meta::is_meta_variable("HTTP_USER_AGENT"));
    assert!(!meta::is_meta_variable("HOME"));
    assert!(!meta::is_meta_variable(""));
}

// ─────────────────────────────────────────────────────────────────────────
// RequestContext
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn query_params_decoded_from_query_string() {
    let ctx = RequestContext::from_parts(meta_map(&[(Meta::QUERY_STRING, "a=1&b=2")]), b"");
    assert_eq!(ctx.query_params().len(), 2);
    assert_eq!(ctx.query_params()["b"], "2");
    assert!(ctx.form_fields().is_empty());
}

#[test]
fn missing_query_string_yields_empty_map() {
    let ctx = RequestContext::from_parts(HashMap::new(), b"");
    assert!(ctx.query_params().is_empty());
}

#[test]
fn form_fields_decoded_from_body() {
    let ctx = RequestContext::from_parts(
        meta_map(&[(Meta::CONTENT_TYPE, "application/x-www-form-urlencoded")]),
        b"comment=hi&a=1&a=2",
    );
    assert_eq!(ctx.form_fields().len(), 2);
    assert_eq!(ctx.form_fields()["comment"], "hi");
    assert_eq!(ctx.form_fields()["a"], "2");
}

#[test]
fn non_form_content_type_skips_body() {
    let ctx = RequestContext::from_parts(
        meta_map(&[(Meta::CONTENT_TYPE, "application/json")]),
        br#"{"not": "a form"}"#,
    );
    assert!(ctx.form_fields().is_empty());
}

#[test]
fn meta_lookup_and_defaults() {
    let ctx = RequestContext::from_parts(
        meta_map(&[(Meta::SERVER_NAME, "localhost"), (Meta::PATH_INFO, "")]),
        b"",
    );
    assert_eq!(ctx.meta(Meta::SERVER_NAME), Some("localhost"));
    assert_eq!(ctx.meta_or(Meta::REMOTE_ADDR, "Unknown"), "Unknown");
    // Present-but-empty is not substituted.
    assert_eq!(ctx.meta_or(Meta::PATH_INFO, "None"), "");
}

#[test]
fn context_serializes_for_diagnostics() {
    let ctx = RequestContext::from_parts(meta_map(&[(Meta::QUERY_STRING, "x=1")]), b"");
    let json = serde_json::to_value(&ctx).unwrap();
    assert_eq!(json["queryParams"]["x"], "1");
    assert_eq!(json["meta"]["QUERY_STRING"], "x=1");
    assert!(json["formFields"].as_object().unwrap().is_empty());
}
