//! `application/x-www-form-urlencoded` decoding.
//!
//! Used for both the query string and the request body. Decoding is
//! permissive: this is a diagnostic echo tool, so there is nothing to
//! reject — whatever the server passed through gets decoded and shown.

use std::collections::BTreeMap;

/// Decode an urlencoded byte string into a key-unique map.
///
/// Percent sequences and `+` are decoded, invalid UTF-8 decodes lossily,
/// and a pair without `=` keeps an empty value. Duplicate keys keep the
/// last value.
pub fn decode(input: &[u8]) -> BTreeMap<String, String> {
    form_urlencoded::parse(input)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Whether a CONTENT_TYPE value denotes an urlencoded form body.
///
/// An absent type is accepted (older servers omit it for simple POSTs), as
/// are parameters after the media type (`; charset=...`).
pub fn is_form_content_type(content_type: Option<&str>) -> bool {
    match content_type {
        None => true,
        Some(value) => value
            .split(';')
            .next()
            .is_some_and(|t| t.trim().eq_ignore_ascii_case("application/x-www-form-urlencoded")),
    }
}
