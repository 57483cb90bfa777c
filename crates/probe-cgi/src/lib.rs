//! CGI gateway — turns the process environment and stdin into a
//! [`probe_request::RequestContext`] and writes the page response to stdout.
//!
//! A CGI server starts one process per request, passes request metadata in
//! environment variables and the body on stdin, and reads the response from
//! stdout. Everything here is single-shot: build one context, render one
//! page, exit. Concurrent requests are separate processes that share
//! nothing.

pub mod gateway;
pub mod logging;

pub use gateway::{GatewayConfig, read_context, read_context_from, render_response, respond, run};
