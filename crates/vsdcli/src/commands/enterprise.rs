//! Enterprise commands.

use anyhow::Result;
use clap::Args;
use prettytable::{row, Table};
use serde_json::json;

use super::{confirm, create_object, show_object, update_object, Ctx, IdArg, KeyValueUpdateArgs};
use crate::output::cell;

#[derive(Args)]
pub struct EnterpriseListArgs {
    /// Filter for name, description, lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn list(ctx: &mut Ctx, args: EnterpriseListArgs) -> Result<()> {
    let result = ctx
        .client
        .get("enterprises", args.filter.as_deref())
        .await?;
    let mut table = Table::new();
    table.set_titles(row!["Enterprise ID", "Name"]);
    for line in &result {
        table.add_row(row![cell(line, "ID"), cell(line, "name")]);
    }
    table.printstd();
    Ok(())
}

pub async fn show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("enterprises/{}", args.id), &["APIKey"]).await
}

#[derive(Args)]
pub struct EnterpriseCreateArgs {
    /// Enterprise name
    #[arg(value_name = "name")]
    pub name: String,
}

pub async fn create(ctx: &mut Ctx, args: EnterpriseCreateArgs) -> Result<()> {
    create_object(ctx, "enterprises", &json!({"name": args.name}), &[]).await
}

pub async fn update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(
        ctx,
        &format!("enterprises/{}", args.id),
        &args.key_value,
        &[],
    )
    .await
}

#[derive(Args)]
pub struct EnterpriseDeleteArgs {
    /// Enterprise ID
    #[arg(value_name = "enterprise ID")]
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub async fn delete(ctx: &mut Ctx, args: EnterpriseDeleteArgs) -> Result<()> {
    confirm(args.yes)?;
    ctx.client
        .delete(&format!("enterprises/{}?responseChoice=1", args.id))
        .await?;
    Ok(())
}
