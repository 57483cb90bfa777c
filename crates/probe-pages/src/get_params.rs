//! Query-string echo page.

use std::fmt::Write;

use probe_request::RequestContext;

use crate::Page;
use crate::html::escape;

/// Lists every decoded query-string parameter as an `<li>` item.
///
/// An empty query string yields an empty list. Keys and values are both
/// escaped.
pub struct GetParamsPage;

impl Page for GetParamsPage {
    fn title(&self) -> &str {
        "GET Parameters"
    }

    fn render_body(&self, ctx: &RequestContext, out: &mut String) {
        out.push_str("<h1>GET Parameters Test</h1>\n");
        out.push_str("<h2>Parameters Received:</h2>\n");
        out.push_str("<ul>\n");
        for (key, value) in ctx.query_params() {
            let _ = writeln!(out, "<li><strong>{}:</strong> {}</li>", escape(key), escape(value));
        }
        out.push_str("</ul>\n");
    }
}
