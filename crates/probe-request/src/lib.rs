//! Request model for the CGI probe pages.
//!
//! A probe process handles exactly one request. The hosting web server
//! passes request metadata through CGI meta-variables (environment) and the
//! request body through stdin; this crate turns those into an immutable
//! [`RequestContext`] that each page renderer receives as an explicit
//! parameter. Nothing here reads ambient process state, so the pages can be
//! exercised without a server in front.

pub mod context;
pub mod error;
pub mod form;
pub mod meta;

pub use context::RequestContext;
pub use error::RequestError;
pub use meta::Meta;
