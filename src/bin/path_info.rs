//! CGI program: echo how the server split the request path.

use probe_cgi::gateway;
use probe_pages::PathInfoPage;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    probe_cgi::logging::init();
    gateway::run(&PathInfoPage).await?;
    Ok(())
}
