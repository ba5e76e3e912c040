//! vsd - command-line interface to the Nuage VSD REST APIs.
//!
//! Connection options come from flags or `VSD_*` environment variables;
//! each invocation authenticates (or replays a cached API key), runs one
//! subcommand and exits. Any failure prints `Error: ...` and exits 1.

mod cli;
mod commands;
mod output;
mod utils;

use std::io;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vsdcli_core::{Config, VsdClient};

use cli::Cli;
use commands::Ctx;

/// Logging goes to stderr so table and JSON output stay pipeable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn connection_config(cli: &Cli) -> Result<Config> {
    let api_url = cli
        .vsd_api_url
        .clone()
        .context("Missing option --vsd-api-url (Env: VSD_API_URL)")?;
    let username = cli
        .vsd_username
        .clone()
        .context("Missing option --vsd-username (Env: VSD_USERNAME)")?;
    let enterprise = cli
        .vsd_enterprise
        .clone()
        .context("Missing option --vsd-enterprise (Env: VSD_ENTERPRISE)")?;
    let version = cli
        .vsd_api_version
        .clone()
        .context("Missing option --vsd-api-version (Env: VSD_API_VERSION)")?;
    let password = match cli.vsd_password.clone() {
        Some(password) => password,
        None => rpassword::prompt_password("VSD Password: ")
            .context("Missing option --vsd-password (Env: VSD_PASSWORD)")?,
    };
    if cli.vsd_https_proxy.is_some() && cli.vsd_http_proxy.is_none() {
        bail!(
            "https proxy can be omitted when http proxy is given, but not the opposite"
        );
    }

    Ok(Config {
        api_url,
        version,
        username,
        password,
        enterprise,
        disable_proxy: cli.vsd_disable_proxy,
        http_proxy: cli.vsd_http_proxy.clone(),
        https_proxy: cli.vsd_https_proxy.clone(),
        debug: cli.debug,
        force_auth: cli.force_auth,
        cache_dir: None,
    })
}

async fn run(cli: Cli) -> Result<()> {
    let config = connection_config(&cli)?;
    let client = VsdClient::new(config)?;
    let mut ctx = Ctx {
        client,
        show_only: cli.show_only.clone(),
    };
    cli.command.run(&mut ctx).await
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
