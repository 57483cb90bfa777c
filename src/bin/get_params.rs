//! CGI program: echo the query-string parameters.

use probe_cgi::gateway;
use probe_pages::GetParamsPage;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    probe_cgi::logging::init();
    gateway::run(&GetParamsPage).await?;
    Ok(())
}
