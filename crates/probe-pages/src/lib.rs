//! The CGI probe pages.
//!
//! Each page is a single-shot, stateless transform from a
//! [`RequestContext`] to an HTML document: one invocation, one output, no
//! transitions. Pages never fail — a missing field renders as a
//! placeholder — and never read ambient process state.

pub mod get_params;
pub mod html;
pub mod info;
pub mod path_info;
pub mod post_test;

use probe_request::RequestContext;

pub use get_params::GetParamsPage;
pub use info::InfoPage;
pub use path_info::PathInfoPage;
pub use post_test::PostTestPage;

/// Trait implemented by all probe pages.
pub trait Page {
    /// The document title.
    fn title(&self) -> &str;

    /// Append the page body (everything inside `<body>`) to `out`.
    fn render_body(&self, ctx: &RequestContext, out: &mut String);
}

/// Render the full HTML document for `page`.
pub fn render(page: &dyn Page, ctx: &RequestContext) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html><head><title>");
    out.push_str(&html::escape(page.title()));
    out.push_str("</title></head>\n");
    out.push_str("<body>\n");
    page.render_body(ctx, &mut out);
    out.push_str("</body></html>\n");
    out
}
