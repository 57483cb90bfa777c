//! CGI program: echo the server/request environment summary.

use probe_cgi::gateway;
use probe_pages::InfoPage;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    probe_cgi::logging::init();
    gateway::run(&InfoPage).await?;
    Ok(())
}
