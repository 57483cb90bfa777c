//! CGI meta-variable name constants.
//!
//! Each constant is the exact environment variable name a CGI-speaking web
//! server sets before executing the probe process.

/// Well-known CGI meta-variable names, grouped by what they describe.
pub struct Meta;

impl Meta {
    // ── Request ─────────────────────────────────────────────────────────
    pub const REQUEST_METHOD: &str = "REQUEST_METHOD";
    pub const REQUEST_URI: &str = "REQUEST_URI";
    pub const QUERY_STRING: &str = "QUERY_STRING";
    pub const PATH_INFO: &str = "PATH_INFO";
    pub const PATH_TRANSLATED: &str = "PATH_TRANSLATED";
    pub const SCRIPT_NAME: &str = "SCRIPT_NAME";
    pub const SCRIPT_FILENAME: &str = "SCRIPT_FILENAME";

    // ── Server ──────────────────────────────────────────────────────────
    pub const SERVER_NAME: &str = "SERVER_NAME";
    pub const SERVER_PROTOCOL: &str = "SERVER_PROTOCOL";
    pub const SERVER_SOFTWARE: &str = "SERVER_SOFTWARE";
    pub const GATEWAY_INTERFACE: &str = "GATEWAY_INTERFACE";
    pub const DOCUMENT_ROOT: &str = "DOCUMENT_ROOT";

    // ── Client ──────────────────────────────────────────────────────────
    pub const REMOTE_ADDR: &str = "REMOTE_ADDR";

    // ── Body ────────────────────────────────────────────────────────────
    pub const CONTENT_TYPE: &str = "CONTENT_TYPE";
    pub const CONTENT_LENGTH: &str = "CONTENT_LENGTH";
}

/// Every well-known meta-variable, for diagnostics and filtering.
pub const KNOWN_META: &[&str] = &[
    Meta::REQUEST_METHOD,
    Meta::REQUEST_URI,
    Meta::QUERY_STRING,
    Meta::PATH_INFO,
    Meta::PATH_TRANSLATED,
    Meta::SCRIPT_NAME,
    Meta::SCRIPT_FILENAME,
    Meta::SERVER_NAME,
    Meta::SERVER_PROTOCOL,
    Meta::SERVER_SOFTWARE,
    Meta::GATEWAY_INTERFACE,
    Meta::DOCUMENT_ROOT,
    Meta::REMOTE_ADDR,
    Meta::CONTENT_TYPE,
    Meta::CONTENT_LENGTH,
];

/// Whether `name` is a variable a CGI server is expected to set.
///
/// Request headers are forwarded with an `HTTP_` prefix and count as well.
pub fn is_meta_variable(name: &str) -> bool {
    name.starts_with("HTTP_") || KNOWN_META.contains(&name)
}
