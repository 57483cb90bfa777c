//! Reading the request and writing the response.

use std::collections::HashMap;

use probe_pages::Page;
use probe_request::{Meta, RequestContext, RequestError};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tracing::debug;

/// Default cap on the request body, in bytes.
pub const DEFAULT_MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Environment variable overriding the body cap.
pub const MAX_BODY_ENV: &str = "CGI_PROBE_MAX_BODY";

/// Gateway settings.
///
/// A CGI process has no command line of its own, so the only configuration
/// channel is the environment.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Upper bound on the request body read from stdin.
    pub max_body_bytes: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl GatewayConfig {
    /// Build from the process environment, falling back to the default on
    /// anything absent or unparsable.
    pub fn from_env() -> Self {
        let max_body_bytes = std::env::var(MAX_BODY_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);
        Self { max_body_bytes }
    }
}

/// Read the request for this process: meta-variables from the environment,
/// body from stdin.
pub async fn read_context(config: &GatewayConfig) -> Result<RequestContext, RequestError> {
    let meta: HashMap<String, String> = std::env::vars().collect();
    read_context_from(meta, tokio::io::stdin(), config).await
}

/// Read the request from an explicit meta map and body reader.
///
/// The body is read only when CONTENT_LENGTH is set: CGI servers declare the
/// body size up front, and reading stdin to EOF without one would block on
/// servers that keep the pipe open.
pub async fn read_context_from<R>(
    meta: HashMap<String, String>,
    body: R,
    config: &GatewayConfig,
) -> Result<RequestContext, RequestError>
where
    R: AsyncRead + Unpin,
{
    let declared = match meta.get(Meta::CONTENT_LENGTH) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| RequestError::InvalidContentLength(raw.clone()))?,
        None => 0,
    };

    if declared > config.max_body_bytes {
        return Err(RequestError::BodyTooLarge {
            declared,
            limit: config.max_body_bytes,
        });
    }

    let mut buf = Vec::with_capacity(declared as usize);
    if declared > 0 {
        // Tolerate a short body; decode whatever arrived.
        body.take(declared).read_to_end(&mut buf).await?;
        debug!(declared, received = buf.len(), "read request body");
    }

    Ok(RequestContext::from_parts(meta, &buf))
}

/// The full CGI response for `page`: header block, blank line, document.
pub fn render_response(page: &dyn Page, ctx: &RequestContext) -> String {
    let mut response = String::from("Content-type: text/html\r\n\r\n");
    response.push_str(&probe_pages::render(page, ctx));
    response
}

/// Write the response for `page` to stdout and flush.
pub async fn respond(page: &dyn Page, ctx: &RequestContext) -> Result<(), RequestError> {
    let response = render_response(page, ctx);
    let mut stdout = tokio::io::stdout();
    stdout.write_all(response.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

/// One whole CGI invocation: read the request, respond with `page`.
pub async fn run(page: &dyn Page) -> Result<(), RequestError> {
    let config = GatewayConfig::from_env();
    let ctx = read_context(&config).await?;
    respond(page, &ctx).await
}
