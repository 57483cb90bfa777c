//! Server/request info page.

use std::fmt::Write;

use probe_request::{Meta, RequestContext};

use crate::Page;

/// Fixed five-field summary of the request environment.
///
/// Values are emitted verbatim, without HTML-escaping, unlike the other
/// pages. The asymmetry is deliberate, kept as observable behavior, and
/// pinned by a test.
pub struct InfoPage;

/// Label, meta-variable, and placeholder for each reported field, in
/// display order.
const FIELDS: &[(&str, &str, &str)] = &[
    ("Server Name", Meta::SERVER_NAME, "Unknown"),
    ("Request Method", Meta::REQUEST_METHOD, "Unknown"),
    ("Script Name", Meta::SCRIPT_NAME, "Unknown"),
    ("Query String", Meta::QUERY_STRING, "None"),
    ("Remote Address", Meta::REMOTE_ADDR, "Unknown"),
];

impl Page for InfoPage {
    fn title(&self) -> &str {
        "CGI Info"
    }

    fn render_body(&self, ctx: &RequestContext, out: &mut String) {
        out.push_str("<h1>CGI Test</h1>\n");
        out.push_str("<h2>Request Information:</h2>\n");
        out.push_str("<ul>\n");
        for (label, name, placeholder) in FIELDS {
            let _ = writeln!(out, "<li>{label}: {}</li>", ctx.meta_or(name, placeholder));
        }
        out.push_str("</ul>\n");
    }
}
