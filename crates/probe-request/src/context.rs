//! The per-request context passed to every page renderer.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::form;
use crate::meta::Meta;

/// Immutable snapshot of one incoming request.
///
/// Built once per request by the gateway (or the offline harness) from the
/// CGI environment and the raw body, then passed by reference into the page
/// renderers and discarded after the response is written. The decoded
/// parameter maps are `BTreeMap`s, so iteration order is deterministic
/// (sorted by key) and repeated renders of the same context are
/// byte-identical.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// CGI meta-variables exactly as the server passed them.
    meta: HashMap<String, String>,
    /// Decoded query-string parameters (duplicate keys keep the last value).
    query_params: BTreeMap<String, String>,
    /// Decoded form-body fields (duplicate keys keep the last value).
    form_fields: BTreeMap<String, String>,
}

impl RequestContext {
    /// Build a context from the meta-variable map and the raw request body.
    ///
    /// The query string is decoded from `QUERY_STRING`. The body is decoded
    /// only when `CONTENT_TYPE` is absent or urlencoded; anything else
    /// (multipart, JSON, ...) yields an empty field map.
    pub fn from_parts(meta: HashMap<String, String>, body: &[u8]) -> Self {
        let query_params = meta
            .get(Meta::QUERY_STRING)
            .map(|qs| form::decode(qs.as_bytes()))
            .unwrap_or_default();

        let content_type = meta.get(Meta::CONTENT_TYPE).map(String::as_str);
        let form_fields = if form::is_form_content_type(content_type) {
            form::decode(body)
        } else {
            tracing::debug!(?content_type, "skipping body decode for non-form content type");
            BTreeMap::new()
        };

        Self {
            meta,
            query_params,
            form_fields,
        }
    }

    /// Look up a meta-variable. An empty value counts as present.
    pub fn meta(&self, name: &str) -> Option<&str> {
        self.meta.get(name).map(String::as_str)
    }

    /// Look up a meta-variable, substituting `default` when absent.
    pub fn meta_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.meta(name).unwrap_or(default)
    }

    /// Decoded query-string parameters.
    pub fn query_params(&self) -> &BTreeMap<String, String> {
        &self.query_params
    }

    /// Decoded form-body fields.
    pub fn form_fields(&self) -> &BTreeMap<String, String> {
        &self.form_fields
    }
}
