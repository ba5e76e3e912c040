//! Ingress and egress ACL template commands.
//!
//! ACL template updates and deletions need `?responseChoice=1` to bypass
//! the server-side confirmation round-trip.

use anyhow::Result;
use clap::Args;
use prettytable::{row, Table};
use serde_json::json;

use super::{create_object, show_object, Ctx, IdArg, KeyValueUpdateArgs};
use crate::output::cell;
use crate::utils::check_id;

/// The four entities an ACL template can hang off.
#[derive(Args)]
pub struct AclParentArgs {
    #[arg(long = "l2domaintemplate-id", value_name = "id")]
    pub l2domaintemplate_id: Option<String>,
    #[arg(long = "domaintemplate-id", value_name = "id")]
    pub domaintemplate_id: Option<String>,
    #[arg(long = "domain-id", value_name = "id")]
    pub domain_id: Option<String>,
    #[arg(long = "l2domain-id", value_name = "id")]
    pub l2domain_id: Option<String>,
}

impl AclParentArgs {
    fn scope(&self) -> Result<(String, String)> {
        check_id(&[
            ("l2domaintemplate", self.l2domaintemplate_id.as_deref()),
            ("domaintemplate", self.domaintemplate_id.as_deref()),
            ("domain", self.domain_id.as_deref()),
            ("l2domain", self.l2domain_id.as_deref()),
        ])
    }
}

#[derive(Args)]
pub struct AclListArgs {
    #[command(flatten)]
    pub parent: AclParentArgs,
    /// Filter for name, description, active, defaultAllowIP,
    /// defaultAllowNonIP, lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

#[derive(Args)]
pub struct AclCreateArgs {
    /// Template name
    #[arg(value_name = "name")]
    pub name: String,
    #[command(flatten)]
    pub parent: AclParentArgs,
}

pub async fn egress_list(ctx: &mut Ctx, args: AclListArgs) -> Result<()> {
    let (kind, id) = args.parent.scope()?;
    let path = format!("{kind}s/{id}/egressacltemplates");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row![
        "ID",
        "name",
        "active",
        "defaultAllowIP",
        "defaultAllowNonIP"
    ]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "name"),
            cell(line, "active"),
            cell(line, "defaultAllowIP"),
            cell(line, "defaultAllowNonIP")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn egress_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("egressacltemplates/{}", args.id), &[]).await
}

pub async fn egress_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    let params = crate::utils::key_value_params(&args.key_value)?;
    ctx.client
        .put(
            &format!("egressacltemplates/{}?responseChoice=1", args.id),
            &params,
        )
        .await?;
    show_object(ctx, &format!("egressacltemplates/{}", args.id), &[]).await
}

pub async fn egress_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client
        .delete(&format!("egressacltemplates/{}?responseChoice=1", args.id))
        .await?;
    Ok(())
}

pub async fn egress_create(ctx: &mut Ctx, args: AclCreateArgs) -> Result<()> {
    let (kind, id) = args.parent.scope()?;
    let path = format!("{kind}s/{id}/egressacltemplates");
    create_object(ctx, &path, &json!({"name": args.name}), &[]).await
}

pub async fn ingress_list(ctx: &mut Ctx, args: AclListArgs) -> Result<()> {
    let (kind, id) = args.parent.scope()?;
    let path = format!("{kind}s/{id}/ingressacltemplates");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row![
        "ID",
        "name",
        "active",
        "defaultAllowIP",
        "defaultAllowNonIP",
        "allowL2AddressSpoof"
    ]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "name"),
            cell(line, "active"),
            cell(line, "defaultAllowIP"),
            cell(line, "defaultAllowNonIP"),
            cell(line, "allowL2AddressSpoof")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn ingress_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("ingressacltemplates/{}", args.id), &[]).await
}

pub async fn ingress_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    let params = crate::utils::key_value_params(&args.key_value)?;
    ctx.client
        .put(
            &format!("ingressacltemplates/{}?responseChoice=1", args.id),
            &params,
        )
        .await?;
    show_object(ctx, &format!("ingressacltemplates/{}", args.id), &[]).await
}

pub async fn ingress_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client
        .delete(&format!("ingressacltemplates/{}?responseChoice=1", args.id))
        .await?;
    Ok(())
}

pub async fn ingress_create(ctx: &mut Ctx, args: AclCreateArgs) -> Result<()> {
    let (kind, id) = args.parent.scope()?;
    let path = format!("{kind}s/{id}/ingressacltemplates");
    create_object(ctx, &path, &json!({"name": args.name}), &[]).await
}
