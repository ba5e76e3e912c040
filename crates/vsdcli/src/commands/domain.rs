//! Domain template, domain and zone commands.

use anyhow::Result;
use clap::Args;
use prettytable::{row, Table};
use serde_json::json;

use super::{create_object, show_object, update_object, Ctx, IdArg, KeyValueUpdateArgs};
use crate::output::cell;
use crate::utils::check_id_optional;

#[derive(Args)]
pub struct DomaintemplateListArgs {
    /// Enterprise ID
    #[arg(long = "enterprise-id", value_name = "enterprise ID")]
    pub enterprise_id: String,
    /// Filter for name, description, lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn domaintemplate_list(ctx: &mut Ctx, args: DomaintemplateListArgs) -> Result<()> {
    let path = format!("enterprises/{}/domaintemplates", args.enterprise_id);
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["Domain Template ID", "Name"]);
    for line in &result {
        table.add_row(row![cell(line, "ID"), cell(line, "name")]);
    }
    table.printstd();
    Ok(())
}

pub async fn domaintemplate_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("domaintemplates/{}", args.id), &[]).await
}

#[derive(Args)]
pub struct DomaintemplateCreateArgs {
    /// Template name
    #[arg(value_name = "name")]
    pub name: String,
    /// Enterprise ID
    #[arg(long = "enterprise-id", value_name = "enterprise ID")]
    pub enterprise_id: String,
}

pub async fn domaintemplate_create(ctx: &mut Ctx, args: DomaintemplateCreateArgs) -> Result<()> {
    let path = format!("enterprises/{}/domaintemplates", args.enterprise_id);
    create_object(ctx, &path, &json!({"name": args.name}), &[]).await
}

pub async fn domaintemplate_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(
        ctx,
        &format!("domaintemplates/{}", args.id),
        &args.key_value,
        &[],
    )
    .await
}

pub async fn domaintemplate_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client
        .delete(&format!("domaintemplates/{}", args.id))
        .await?;
    Ok(())
}

#[derive(Args)]
pub struct DomainListArgs {
    #[arg(long = "domaintemplate-id", value_name = "id")]
    pub domaintemplate_id: Option<String>,
    #[arg(long = "enterprise-id", value_name = "id")]
    pub enterprise_id: Option<String>,
    /// Filter for serviceID, name, description, customerID, labelID,
    /// lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn domain_list(ctx: &mut Ctx, args: DomainListArgs) -> Result<()> {
    let scope = check_id_optional(&[
        ("domaintemplate", args.domaintemplate_id.as_deref()),
        ("enterprise", args.enterprise_id.as_deref()),
    ])?;
    let path = match scope {
        Some((kind, id)) => format!("{kind}s/{id}/domains"),
        None => "domains".to_string(),
    };
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["Domain ID", "Name", "Description", "RT / RD"]);
    for line in &result {
        let rt_rd = format!(
            "{} / {}",
            cell(line, "routeTarget"),
            cell(line, "routeDistinguisher")
        );
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "name"),
            cell(line, "description"),
            rt_rd
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn domain_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("domains/{}", args.id), &[]).await
}

#[derive(Args)]
pub struct DomainCreateArgs {
    /// Domain name
    #[arg(value_name = "name")]
    pub name: String,
    /// Enterprise ID
    #[arg(long = "enterprise-id", value_name = "enterprise ID")]
    pub enterprise_id: String,
    /// Domain template ID
    #[arg(long = "template-id", value_name = "template ID")]
    pub template_id: String,
    /// Route distinguisher
    #[arg(long, value_name = "route distinguisher")]
    pub rd: Option<String>,
    /// Route target
    #[arg(long, value_name = "route target")]
    pub rt: Option<String>,
}

pub async fn domain_create(ctx: &mut Ctx, args: DomainCreateArgs) -> Result<()> {
    let mut params = json!({
        "name": args.name,
        "templateID": args.template_id,
    });
    if let Some(rt) = args.rt {
        params["routeTarget"] = json!(rt);
    }
    if let Some(rd) = args.rd {
        params["routeDistinguisher"] = json!(rd);
    }
    let path = format!("enterprises/{}/domains", args.enterprise_id);
    create_object(ctx, &path, &params, &[]).await
}

pub async fn domain_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(ctx, &format!("domains/{}", args.id), &args.key_value, &[]).await
}

pub async fn domain_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client.delete(&format!("domains/{}", args.id)).await?;
    Ok(())
}

#[derive(Args)]
pub struct ZoneListArgs {
    #[arg(long = "domain-id", value_name = "domain ID")]
    pub domain_id: Option<String>,
    /// Filter for name, description, address, netmask, IPType,
    /// numberOfHostsInSubnets, publicZone, lastUpdatedDate, creationDate,
    /// externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn zone_list(ctx: &mut Ctx, args: ZoneListArgs) -> Result<()> {
    let path = match args.domain_id {
        Some(domain_id) => format!("domains/{domain_id}/zones"),
        None => "zones".to_string(),
    };
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["Zone ID", "Name"]);
    for line in &result {
        table.add_row(row![cell(line, "ID"), cell(line, "name")]);
    }
    table.printstd();
    Ok(())
}

pub async fn zone_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("zones/{}", args.id), &[]).await
}

#[derive(Args)]
pub struct ZoneCreateArgs {
    /// Zone name
    #[arg(value_name = "name")]
    pub name: String,
    /// Domain ID
    #[arg(long = "domain-id", value_name = "domain ID")]
    pub domain_id: String,
}

pub async fn zone_create(ctx: &mut Ctx, args: ZoneCreateArgs) -> Result<()> {
    let path = format!("domains/{}/zones", args.domain_id);
    create_object(ctx, &path, &json!({"name": args.name}), &[]).await
}

pub async fn zone_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client.delete(&format!("zones/{}", args.id)).await?;
    Ok(())
}
