//! cgi-probe — offline harness for the CGI probe pages.
//!
//! Renders any of the four pages from a synthetic request built on the
//! command line, without a web server in front:
//!
//!   cgi-probe get-params --query 'name=ferris&lang=rust'
//!   cgi-probe info --meta SERVER_NAME=localhost --meta REQUEST_METHOD=GET
//!   cgi-probe post-test --body 'comment=hi'
//!   cgi-probe path-info --meta PATH_INFO=/extra --context-json

use std::collections::HashMap;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use probe_cgi::gateway;
use probe_pages::{GetParamsPage, InfoPage, Page, PathInfoPage, PostTestPage};
use probe_request::{Meta, RequestContext};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cgi-probe", about = "Render the CGI probe pages from a synthetic request")]
struct Cli {
    #[command(subcommand)]
    page: PageCommand,

    /// Query string, undecoded, as it would appear in the URL
    #[arg(long, global = true)]
    query: Option<String>,

    /// Request body (urlencoded form data)
    #[arg(long, global = true)]
    body: Option<String>,

    /// Extra meta-variable, repeatable (KEY=VALUE)
    #[arg(long = "meta", value_name = "KEY=VALUE", global = true)]
    meta: Vec<String>,

    /// Print the parsed request context as JSON instead of the page
    #[arg(long, global = true)]
    context_json: bool,

    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum PageCommand {
    /// Query-string echo page
    GetParams,
    /// Five-field server/request info page
    Info,
    /// PATH_INFO / SCRIPT_NAME / REQUEST_URI page
    PathInfo,
    /// Form-body echo page
    PostTest,
}

fn parse_meta_pairs(pairs: &[String]) -> Result<HashMap<String, String>> {
    let mut meta = HashMap::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                meta.insert(key.to_string(), value.to_string());
            }
            _ => bail!("--meta expects KEY=VALUE, got {pair:?}"),
        }
    }
    Ok(meta)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    // Assemble the synthetic meta map. Explicit --meta entries win over the
    // convenience flags.
    let mut meta = parse_meta_pairs(&cli.meta)?;
    if let Some(query) = &cli.query {
        meta.entry(Meta::QUERY_STRING.to_string())
            .or_insert_with(|| query.clone());
    }
    let body = cli.body.clone().unwrap_or_default();
    if !body.is_empty() {
        meta.entry(Meta::REQUEST_METHOD.to_string())
            .or_insert_with(|| "POST".to_string());
        meta.entry(Meta::CONTENT_LENGTH.to_string())
            .or_insert_with(|| body.len().to_string());
    }

    let ctx = RequestContext::from_parts(meta, body.as_bytes());

    if cli.context_json {
        println!("{}", serde_json::to_string_pretty(&ctx)?);
        return Ok(());
    }

    let page: &dyn Page = match cli.page {
        PageCommand::GetParams => &GetParamsPage,
        PageCommand::Info => &InfoPage,
        PageCommand::PathInfo => &PathInfoPage,
        PageCommand::PostTest => &PostTestPage,
    };

    print!("{}", gateway::render_response(page, &ctx));
    Ok(())
}
