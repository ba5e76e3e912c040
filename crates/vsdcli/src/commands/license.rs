//! License commands.

use anyhow::Result;
use chrono::DateTime;
use clap::Args;
use prettytable::{row, Table};
use serde_json::json;

use super::{confirm, create_object, first, Ctx};
use crate::output::cell;

pub async fn list(ctx: &mut Ctx) -> Result<()> {
    let result = ctx.client.get("licenses", None).await?;
    let mut table = Table::new();
    table.set_titles(row![
        "License id",
        "Compagny",
        "Max NICs",
        "Max VMs",
        "Version",
        "Expiration"
    ]);
    for line in &result {
        let version = format!(
            "{}R{}",
            cell(line, "productVersion"),
            cell(line, "majorRelease")
        );
        let expiration = line["expirationDate"]
            .as_i64()
            .and_then(|ms| DateTime::from_timestamp(ms / 1000, 0))
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| cell(line, "expirationDate"));
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "company"),
            cell(line, "allowedNICsCount"),
            cell(line, "allowedVMsCount"),
            version,
            expiration
        ]);
    }
    table.printstd();
    Ok(())
}

#[derive(Args)]
pub struct LicenseShowArgs {
    /// License ID
    #[arg(value_name = "license-id")]
    pub id: String,
    /// Show license code in BASE64
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub async fn show(ctx: &mut Ctx, args: LicenseShowArgs) -> Result<()> {
    let path = format!("licenses/{}", args.id);
    let reply = ctx.client.get(&path, None).await?;
    let object = first(&reply, &path)?;
    crate::output::print_object(object, ctx.show_only(), &["license"]);
    if args.verbose >= 1 {
        println!("License: {}", cell(object, "license"));
    }
    Ok(())
}

#[derive(Args)]
pub struct LicenseCreateArgs {
    /// License blob
    #[arg(value_name = "license (Base64)")]
    pub license: String,
}

pub async fn create(ctx: &mut Ctx, args: LicenseCreateArgs) -> Result<()> {
    create_object(
        ctx,
        "licenses",
        &json!({"license": args.license}),
        &["license"],
    )
    .await
}

#[derive(Args)]
pub struct LicenseDeleteArgs {
    /// License ID
    #[arg(value_name = "license ID")]
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub async fn delete(ctx: &mut Ctx, args: LicenseDeleteArgs) -> Result<()> {
    confirm(args.yes)?;
    ctx.client.delete(&format!("licenses/{}", args.id)).await?;
    Ok(())
}
