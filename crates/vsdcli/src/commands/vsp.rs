//! VSP platform and VSD component commands.

use anyhow::Result;
use clap::Args;
use prettytable::{row, Table};

use super::{first, show_object, Ctx, IdArg};
use crate::output::{cell, print_object};

#[derive(Args)]
pub struct VspListArgs {
    /// Filter for productVersion, name, description, location,
    /// lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn vsp_list(ctx: &mut Ctx, args: VspListArgs) -> Result<()> {
    let result = ctx.client.get("vsps", args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "Name", "Description", "Version"]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "name"),
            cell(line, "description"),
            cell(line, "productVersion")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn vsp_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("vsps/{}", args.id), &[]).await
}

#[derive(Args)]
pub struct VsdListArgs {
    /// VSP ID
    #[arg(value_name = "vsp ID")]
    pub vsp_id: String,
    /// Filter for address, managementIP, name, location, description,
    /// productVersion, status, lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn vsd_list(ctx: &mut Ctx, args: VsdListArgs) -> Result<()> {
    let path = format!("vsps/{}/vsds", args.vsp_id);
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "Name", "Description", "Status", "Mode"]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "name"),
            cell(line, "description"),
            cell(line, "status"),
            cell(line, "mode")
        ]);
    }
    table.printstd();
    Ok(())
}

#[derive(Args)]
pub struct VsdShowArgs {
    /// VSD ID
    #[arg(value_name = "vsd ID")]
    pub id: String,
    /// Show disk informations
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub async fn vsd_show(ctx: &mut Ctx, args: VsdShowArgs) -> Result<()> {
    let path = format!("vsds/{}", args.id);
    let reply = ctx.client.get(&path, None).await?;
    let object = first(&reply, &path)?;
    print_object(object, ctx.show_only(), &["disks"]);
    if args.verbose >= 1 {
        println!("Disks :");
        println!("{}", cell(object, "disks"));
    }
    Ok(())
}

pub async fn vsd_component_list(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    let path = format!("vsds/{}/components", args.id);
    let result = ctx.client.get(&path, None).await?;
    let mut table = Table::new();
    table.set_titles(row![
        "ID",
        "Name",
        "Description",
        "Status",
        "Address",
        "Version",
        "type"
    ]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "name"),
            cell(line, "description"),
            cell(line, "status"),
            cell(line, "address"),
            cell(line, "productVersion"),
            cell(line, "type")
        ]);
    }
    table.printstd();
    Ok(())
}
