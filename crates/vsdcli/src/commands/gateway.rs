//! Gateway, port, VLAN and gateway redundancy group commands.

use anyhow::Result;
use clap::{Args, ValueEnum};
use prettytable::{row, Table};
use serde_json::json;

use super::{create_object, show_object, update_object, Ctx, IdArg, KeyValueUpdateArgs};
use crate::output::cell;
use crate::utils::check_id;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Personality {
    #[value(name = "VSG")]
    Vsg,
    #[value(name = "VSA")]
    Vsa,
    #[value(name = "VRSG")]
    Vrsg,
    #[value(name = "DC7X50")]
    Dc7x50,
    #[value(name = "NSG")]
    Nsg,
    #[value(name = "HARDWARE_VTEP")]
    HardwareVtep,
    #[value(name = "OTHER")]
    Other,
}

impl Personality {
    fn as_str(self) -> &'static str {
        match self {
            Personality::Vsg => "VSG",
            Personality::Vsa => "VSA",
            Personality::Vrsg => "VRSG",
            Personality::Dc7x50 => "DC7X50",
            Personality::Nsg => "NSG",
            Personality::HardwareVtep => "HARDWARE_VTEP",
            Personality::Other => "OTHER",
        }
    }
}

#[derive(Args)]
pub struct GatewayCreateArgs {
    /// Gateway name
    #[arg(value_name = "name")]
    pub name: String,
    #[arg(long = "system-id", value_name = "system ID")]
    pub system_id: String,
    #[arg(long, value_enum, value_name = "personality")]
    pub personality: Personality,
    /// Create inside this enterprise instead of the CSP root
    #[arg(long = "enterprise-id", value_name = "enterprise ID")]
    pub enterprise_id: Option<String>,
}

pub async fn create(ctx: &mut Ctx, args: GatewayCreateArgs) -> Result<()> {
    let params = json!({
        "systemID": args.system_id,
        "name": args.name,
        "personality": args.personality.as_str(),
    });
    let path = match args.enterprise_id {
        Some(enterprise_id) => format!("enterprises/{enterprise_id}/gateways"),
        None => "gateways".to_string(),
    };
    create_object(ctx, &path, &params, &[]).await
}

pub async fn delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client.delete(&format!("gateways/{}", args.id)).await?;
    Ok(())
}

#[derive(Args)]
pub struct GatewayListArgs {
    #[arg(long = "enterprise-id", value_name = "ID")]
    pub enterprise_id: Option<String>,
    #[arg(long = "redundancygroup-id", value_name = "ID")]
    pub redundancygroup_id: Option<String>,
    /// Filter for pending, systemID, name, description, personality,
    /// lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn list(ctx: &mut Ctx, args: GatewayListArgs) -> Result<()> {
    let path = if let Some(enterprise_id) = args.enterprise_id {
        format!("enterprises/{enterprise_id}/gateways")
    } else if let Some(redundancygroup_id) = args.redundancygroup_id {
        format!("redundancygroups/{redundancygroup_id}/gateways")
    } else {
        "gateways".to_string()
    };
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row![
        "ID",
        "System ID",
        "Name",
        "Description",
        "Pending",
        "Redundancy Group ID",
        "Personality"
    ]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "systemID"),
            cell(line, "name"),
            cell(line, "description"),
            cell(line, "pending"),
            cell(line, "redundancyGroupID"),
            cell(line, "personality")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("gateways/{}", args.id), &[]).await
}

pub async fn update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(ctx, &format!("gateways/{}", args.id), &args.key_value, &[]).await
}

#[derive(Args)]
pub struct PortListArgs {
    #[arg(long = "redundancygroup-id", value_name = "id")]
    pub redundancygroup_id: Option<String>,
    #[arg(long = "gateway-id", value_name = "id")]
    pub gateway_id: Option<String>,
    #[arg(long = "autodiscoveredgateway-id", value_name = "id")]
    pub autodiscoveredgateway_id: Option<String>,
    /// Filter for name, description, physicalName, portType, userMnemonic,
    /// useUserMnemonic, VLANRange, lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn port_list(ctx: &mut Ctx, args: PortListArgs) -> Result<()> {
    let (kind, id) = check_id(&[
        ("redundancygroup", args.redundancygroup_id.as_deref()),
        ("gateway", args.gateway_id.as_deref()),
        (
            "autodiscoveredgateway",
            args.autodiscoveredgateway_id.as_deref(),
        ),
    ])?;
    let path = format!("{kind}s/{id}/ports");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "name", "physicalName", "Type"]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "name"),
            cell(line, "physicalName"),
            cell(line, "portType")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn port_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("ports/{}", args.id), &[]).await
}

pub async fn port_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(ctx, &format!("ports/{}", args.id), &args.key_value, &[]).await
}

#[derive(Args)]
pub struct VlanListArgs {
    #[arg(long = "port-id", value_name = "id")]
    pub port_id: String,
    /// Filter for value, userMnemonic, useUserMnemonic, description,
    /// lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn vlan_list(ctx: &mut Ctx, args: VlanListArgs) -> Result<()> {
    let path = format!("ports/{}/vlans", args.port_id);
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "name", "value", "userMnemonic"]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "description"),
            cell(line, "value"),
            cell(line, "userMnemonic")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn vlan_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("vlans/{}", args.id), &[]).await
}

#[derive(Args)]
pub struct VlanCreateArgs {
    #[arg(long = "port-id", value_name = "id")]
    pub port_id: String,
    /// VLAN number
    #[arg(long, value_name = "vlan number")]
    pub vlan: u32,
    /// User mnemonic
    #[arg(long, value_name = "user Mnemonic")]
    pub mnemonic: Option<String>,
    #[arg(long, value_name = "description")]
    pub description: Option<String>,
}

pub async fn vlan_create(ctx: &mut Ctx, args: VlanCreateArgs) -> Result<()> {
    let mut params = json!({"value": args.vlan});
    if let Some(mnemonic) = args.mnemonic {
        params["userMnemonic"] = json!(mnemonic);
        params["useUserMnemonic"] = json!(true);
    }
    if let Some(description) = args.description {
        params["description"] = json!(description);
    }
    let path = format!("ports/{}/vlans", args.port_id);
    create_object(ctx, &path, &params, &[]).await
}

pub async fn vlan_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(ctx, &format!("vlans/{}", args.id), &args.key_value, &[]).await
}

pub async fn vlan_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client.delete(&format!("vlans/{}", args.id)).await?;
    Ok(())
}

#[derive(Args)]
pub struct RedundancyGroupListArgs {
    #[arg(long = "enterprise-id", value_name = "ID")]
    pub enterprise_id: Option<String>,
    /// Filter for vtep, name, description, personality, ID, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn redundancygroup_list(ctx: &mut Ctx, args: RedundancyGroupListArgs) -> Result<()> {
    let path = match args.enterprise_id {
        Some(enterprise_id) => format!("enterprises/{enterprise_id}/redundancygroups"),
        None => "redundancygroups".to_string(),
    };
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row![
        "ID",
        "Redundant Gateway Status",
        "Name",
        "Description",
        "Personality",
        "gatewayPeer1Name",
        "gatewayPeer2Name"
    ]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "redundantGatewayStatus"),
            cell(line, "name"),
            cell(line, "description"),
            cell(line, "personality"),
            cell(line, "gatewayPeer1Name"),
            cell(line, "gatewayPeer2Name")
        ]);
    }
    table.printstd();
    Ok(())
}

#[derive(Args)]
pub struct RedundancyGroupCreateArgs {
    /// Group name
    #[arg(value_name = "name")]
    pub name: String,
    #[arg(long = "enterprise-id", value_name = "enterprise ID")]
    pub enterprise_id: Option<String>,
    #[arg(long = "gateway-peer1-id", value_name = "gateway peer1 ID")]
    pub gateway_peer1_id: String,
    #[arg(long = "gateway-peer2-id", value_name = "gateway peer2 ID")]
    pub gateway_peer2_id: String,
}

pub async fn redundancygroup_create(ctx: &mut Ctx, args: RedundancyGroupCreateArgs) -> Result<()> {
    let params = json!({
        "name": args.name,
        "gatewayPeer1ID": args.gateway_peer1_id,
        "gatewayPeer2ID": args.gateway_peer2_id,
    });
    let path = match args.enterprise_id {
        Some(enterprise_id) => format!("enterprises/{enterprise_id}/redundancygroups"),
        None => "redundancygroups".to_string(),
    };
    create_object(ctx, &path, &params, &[]).await
}

pub async fn redundancygroup_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("redundancygroups/{}", args.id), &[]).await
}

pub async fn redundancygroup_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client
        .delete(&format!("redundancygroups/{}", args.id))
        .await?;
    Ok(())
}

pub async fn redundancygroup_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(
        ctx,
        &format!("redundancygroups/{}", args.id),
        &args.key_value,
        &[],
    )
    .await
}
