//! PATH_INFO echo page.

use std::fmt::Write;

use probe_request::{Meta, RequestContext};

use crate::Page;
use crate::html::escape;

/// Shows how the server split the request path: PATH_INFO, SCRIPT_NAME and
/// REQUEST_URI as three paragraphs, each escaped.
pub struct PathInfoPage;

impl Page for PathInfoPage {
    fn title(&self) -> &str {
        "PATH_INFO Test"
    }

    fn render_body(&self, ctx: &RequestContext, out: &mut String) {
        out.push_str("<h1>PATH_INFO Test</h1>\n");

        let fields = [
            ("PATH_INFO", ctx.meta_or(Meta::PATH_INFO, "None")),
            ("SCRIPT_NAME", ctx.meta_or(Meta::SCRIPT_NAME, "Unknown")),
            ("REQUEST_URI", ctx.meta_or(Meta::REQUEST_URI, "Unknown")),
        ];
        for (label, value) in fields {
            let _ = writeln!(out, "<p><strong>{label}:</strong> {}</p>", escape(value));
        }
    }
}
