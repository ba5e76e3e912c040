//! Subnet, shared network, L2 domain and floating IP commands.

use anyhow::Result;
use clap::Args;
use prettytable::{row, Table};
use serde_json::{json, Value};

use super::{create_object, show_object, update_object, Ctx, IdArg, KeyValueUpdateArgs};
use crate::output::cell;
use crate::utils::{check_id, netmask_to_length};

/// `address/length` for rows carrying address + netmask fields.
fn cidr(line: &Value) -> String {
    match line.get("address").and_then(Value::as_str) {
        Some(address) => match netmask_to_length(&cell(line, "netmask")) {
            Ok(length) => format!("{address}/{length}"),
            Err(_) => address.to_string(),
        },
        None => "None".to_string(),
    }
}

#[derive(Args)]
pub struct SubnetListArgs {
    #[arg(long = "zone-id", value_name = "id")]
    pub zone_id: Option<String>,
    #[arg(long = "domain-id", value_name = "id")]
    pub domain_id: Option<String>,
    #[arg(long = "app-id", value_name = "id")]
    pub app_id: Option<String>,
    #[arg(long = "subnettemplate-id", value_name = "id")]
    pub subnettemplate_id: Option<String>,
    /// Filter for address, netmask, IPType, name, gateway, description,
    /// serviceID, splitSubnet, proxyARP, enableMulticast, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn subnet_list(ctx: &mut Ctx, args: SubnetListArgs) -> Result<()> {
    let (kind, id) = check_id(&[
        ("zone", args.zone_id.as_deref()),
        ("domain", args.domain_id.as_deref()),
        ("app", args.app_id.as_deref()),
        ("subnettemplate", args.subnettemplate_id.as_deref()),
    ])?;
    let path = format!("{kind}s/{id}/subnets");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row![
        "Subnet ID",
        "Name",
        "Address",
        "Gateway",
        "RT / RD",
        "External ID"
    ]);
    for line in &result {
        let rt_rd = format!(
            "{} / {}",
            cell(line, "routeTarget"),
            cell(line, "routeDistinguisher")
        );
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "name"),
            cidr(line),
            cell(line, "gateway"),
            rt_rd,
            cell(line, "externalID")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn subnet_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("subnets/{}", args.id), &[]).await
}

#[derive(Args)]
pub struct SubnetCreateArgs {
    /// Subnet name
    #[arg(value_name = "name")]
    pub name: String,
    /// Zone ID
    #[arg(long = "zone-id", value_name = "zone ID")]
    pub zone_id: String,
    /// Network address
    #[arg(long, value_name = "address")]
    pub address: String,
    /// Netmask in dotted form
    #[arg(long, value_name = "netmask")]
    pub netmask: String,
    /// Gateway address
    #[arg(long, value_name = "gateway")]
    pub gateway: Option<String>,
    /// Route distinguisher
    #[arg(long, value_name = "route distinguisher")]
    pub rd: Option<String>,
    /// Route target
    #[arg(long, value_name = "route target")]
    pub rt: Option<String>,
}

pub async fn subnet_create(ctx: &mut Ctx, args: SubnetCreateArgs) -> Result<()> {
    let mut params = json!({
        "name": args.name,
        "address": args.address,
        "netmask": args.netmask,
    });
    if let Some(gateway) = args.gateway {
        params["gateway"] = json!(gateway);
    }
    if let Some(rt) = args.rt {
        params["routeTarget"] = json!(rt);
    }
    if let Some(rd) = args.rd {
        params["routeDistinguisher"] = json!(rd);
    }
    let path = format!("zones/{}/subnets", args.zone_id);
    create_object(ctx, &path, &params, &[]).await
}

pub async fn subnet_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(ctx, &format!("subnets/{}", args.id), &args.key_value, &[]).await
}

pub async fn subnet_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client.delete(&format!("subnets/{}", args.id)).await?;
    Ok(())
}

#[derive(Args)]
pub struct SharedNetworkListArgs {
    /// Filter for name, description, address, netmask, gateway, type,
    /// domainRouteDistinguisher, domainRouteTarget, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn shared_network_list(ctx: &mut Ctx, args: SharedNetworkListArgs) -> Result<()> {
    let result = ctx
        .client
        .get("sharednetworkresources", args.filter.as_deref())
        .await?;
    let mut table = Table::new();
    table.set_titles(row![
        "ID",
        "Name",
        "Description",
        "Type",
        "Address",
        "Gateway",
        "RT / RD"
    ]);
    for line in &result {
        let rt_rd = format!(
            "{} / {}",
            cell(line, "domainRouteTarget"),
            cell(line, "domainRouteDistinguisher")
        );
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "name"),
            cell(line, "description"),
            cell(line, "type"),
            cidr(line),
            cell(line, "gateway"),
            rt_rd
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn shared_network_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("sharednetworkresources/{}", args.id), &[]).await
}

#[derive(Args)]
pub struct L2domainListArgs {
    #[arg(long = "l2domaintemplate-id", value_name = "id")]
    pub l2domaintemplate_id: Option<String>,
    #[arg(long = "enterprise-id", value_name = "id")]
    pub enterprise_id: Option<String>,
    /// Filter for description, name, serviceID, lastUpdatedDate,
    /// creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn l2domain_list(ctx: &mut Ctx, args: L2domainListArgs) -> Result<()> {
    let (kind, id) = check_id(&[
        ("l2domaintemplate", args.l2domaintemplate_id.as_deref()),
        ("enterprise", args.enterprise_id.as_deref()),
    ])?;
    let path = format!("{kind}s/{id}/l2domains");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["L2 Domain ID", "Name", "Description", "RT / RD"]);
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

pub async fn l2domain_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("l2domains/{}", args.id), &[]).await
}

#[derive(Args)]
pub struct L2domainCreateArgs {
    /// L2 domain name
    #[arg(value_name = "name")]
    pub name: String,
    /// Enterprise ID
    #[arg(long = "enterprise-id", value_name = "enterprise ID")]
    pub enterprise_id: String,
    /// L2 domain template ID
    #[arg(long = "template-id", value_name = "template ID")]
    pub template_id: String,
    /// Route distinguisher
    #[arg(long, value_name = "route distinguisher")]
    pub rd: Option<String>,
    /// Route target
    #[arg(long, value_name = "route target")]
    pub rt: Option<String>,
}

pub async fn l2domain_create(ctx: &mut Ctx, args: L2domainCreateArgs) -> Result<()> {
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
    let path = format!("enterprises/{}/l2domains", args.enterprise_id);
    create_object(ctx, &path, &params, &[]).await
}

pub async fn l2domain_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(ctx, &format!("l2domains/{}", args.id), &args.key_value, &[]).await
}

pub async fn l2domain_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client.delete(&format!("l2domains/{}", args.id)).await?;
    Ok(())
}

#[derive(Args)]
pub struct FloatingipListArgs {
    /// Domain ID
    #[arg(value_name = "domain ID")]
    pub id: String,
    /// Filter for assigned, lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn floatingip_list(ctx: &mut Ctx, args: FloatingipListArgs) -> Result<()> {
    let path = format!("domains/{}/floatingips", args.id);
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "address", "assigned", "externalID"]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "address"),
            cell(line, "assigned"),
            cell(line, "externalID")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn floatingip_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("floatingips/{}", args.id), &[]).await
}
