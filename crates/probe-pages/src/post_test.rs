//! Form-body echo page.

use std::fmt::Write;

use probe_request::RequestContext;

use crate::Page;
use crate::html::escape;

/// Lists every decoded form-body field as an `<li>` item.
///
/// Same shape as [`crate::GetParamsPage`], sourced from the body fields
/// instead of the query string.
pub struct PostTestPage;

impl Page for PostTestPage {
    fn title(&self) -> &str {
        "POST Test"
    }

    fn render_body(&self, ctx: &RequestContext, out: &mut String) {
        out.push_str("<h1>POST Data Test</h1>\n");
        out.push_str("<h2>POST Data Received:</h2>\n");
        out.push_str("<ul>\n");
        for (key, value) in ctx.form_fields() {
            let _ = writeln!(out, "<li><strong>{}:</strong> {}</li>", escape(key), escape(value));
        }
        out.push_str("</ul>\n");
    }
}
