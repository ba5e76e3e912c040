//! Resource subcommands, one module per family, mirroring the API's
//! resource groups. Every command is a thin mapping from flags to a REST
//! path plus either a list table or a Field/Value dump.

pub mod dhcp;
pub mod domain;
pub mod enterprise;
pub mod free_api;
pub mod gateway;
pub mod license;
pub mod me;
pub mod metadata;
pub mod policy;
pub mod route;
pub mod subnet;
pub mod user;
pub mod vm;
pub mod vport;
pub mod vsp;

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::Value;

use vsdcli_core::VsdClient;

use crate::output;
use crate::utils;

/// Per-invocation state threaded through every command.
pub struct Ctx {
    pub client: VsdClient,
    /// Global `--show-only`: print a single field instead of the table.
    pub show_only: Option<String>,
}

impl Ctx {
    fn show_only(&self) -> Option<&str> {
        self.show_only.as_deref()
    }
}

#[derive(Args)]
pub struct IdArg {
    /// Object ID
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Args)]
pub struct KeyValueUpdateArgs {
    /// Object ID
    #[arg(value_name = "ID")]
    pub id: String,
    /// Attribute to set, as key:value. Can be repeated.
    #[arg(long = "key-value", value_name = "key:value")]
    pub key_value: Vec<String>,
}

/// GET one object and print it.
async fn show_object(ctx: &mut Ctx, path: &str, exclude: &[&str]) -> Result<()> {
    let reply = ctx.client.get(path, None).await?;
    let object = first(&reply, path)?;
    output::print_object(object, ctx.show_only(), exclude);
    Ok(())
}

/// PUT the key:value pairs, then re-fetch and print the updated object.
async fn update_object(
    ctx: &mut Ctx,
    path: &str,
    key_values: &[String],
    exclude: &[&str],
) -> Result<()> {
    let params = utils::key_value_params(key_values)?;
    ctx.client.put(path, &params).await?;
    show_object(ctx, path, exclude).await
}

/// POST a create request and print the resulting object.
async fn create_object(ctx: &mut Ctx, path: &str, params: &Value, exclude: &[&str]) -> Result<()> {
    let reply = ctx.client.post(path, params).await?;
    let object = first(&reply, path)?;
    output::print_object(object, ctx.show_only(), exclude);
    Ok(())
}

fn first<'a>(reply: &'a [Value], what: &str) -> Result<&'a Value> {
    reply
        .first()
        .with_context(|| format!("Empty reply from VSD for {what}"))
}

/// Interactive guard used by the destructive commands that prompt in the
/// original tool; `--yes` skips it for scripting.
fn confirm(yes: bool) -> Result<()> {
    if yes {
        return Ok(());
    }
    print!("Are you sure ? [y/N]: ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    if answer.trim().eq_ignore_ascii_case("y") {
        Ok(())
    } else {
        bail!("Aborted");
    }
}
