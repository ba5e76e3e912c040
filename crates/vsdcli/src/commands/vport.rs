//! vPort, vPort tag, bridge interface, trunk and virtual IP commands.

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use prettytable::{row, Table};
use serde_json::json;

use super::{create_object, first, show_object, update_object, Ctx, IdArg, KeyValueUpdateArgs};
use crate::output::cell;
use crate::utils::check_id;

#[derive(Args)]
pub struct VporttagListArgs {
    #[arg(long = "bridgeinterface-id", value_name = "id")]
    pub bridgeinterface_id: Option<String>,
    #[arg(long = "hostinterface-id", value_name = "id")]
    pub hostinterface_id: Option<String>,
    #[arg(long = "vport-id", value_name = "id")]
    pub vport_id: Option<String>,
    #[arg(long = "domain-id", value_name = "id")]
    pub domain_id: Option<String>,
    #[arg(long = "l2domain-id", value_name = "id")]
    pub l2domain_id: Option<String>,
    #[arg(long = "vminterface-id", value_name = "id")]
    pub vminterface_id: Option<String>,
    /// Filter for lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn vporttag_list(ctx: &mut Ctx, args: VporttagListArgs) -> Result<()> {
    let (kind, id) = check_id(&[
        ("bridgeinterface", args.bridgeinterface_id.as_deref()),
        ("hostinterface", args.hostinterface_id.as_deref()),
        ("vport", args.vport_id.as_deref()),
        ("domain", args.domain_id.as_deref()),
        ("l2domain", args.l2domain_id.as_deref()),
        ("vminterface", args.vminterface_id.as_deref()),
    ])?;
    let path = format!("{kind}s/{id}/vporttags");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "Description", "Name", "endPoint Type"]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "description"),
            cell(line, "name"),
            cell(line, "endPointType")
        ]);
    }
    table.printstd();
    Ok(())
}

#[derive(Args)]
pub struct VportListArgs {
    #[arg(long = "domain-id", value_name = "id")]
    pub domain_id: Option<String>,
    #[arg(long = "floatingip-id", value_name = "id")]
    pub floatingip_id: Option<String>,
    #[arg(long = "vrs-id", value_name = "id")]
    pub vrs_id: Option<String>,
    #[arg(long = "l2domain-id", value_name = "id")]
    pub l2domain_id: Option<String>,
    #[arg(long = "vporttag-id", value_name = "id")]
    pub vporttag_id: Option<String>,
    #[arg(long = "subnet-id", value_name = "id")]
    pub subnet_id: Option<String>,
    #[arg(long = "trunk-id", value_name = "id")]
    pub trunk_id: Option<String>,
    /// Filter for name, type, lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn vport_list(ctx: &mut Ctx, args: VportListArgs) -> Result<()> {
    let (kind, id) = check_id(&[
        ("domain", args.domain_id.as_deref()),
        ("floatingip", args.floatingip_id.as_deref()),
        ("vrs", args.vrs_id.as_deref()),
        ("l2domain", args.l2domain_id.as_deref()),
        ("vporttag", args.vporttag_id.as_deref()),
        ("subnet", args.subnet_id.as_deref()),
        ("trunk", args.trunk_id.as_deref()),
    ])?;
    let path = format!("{kind}s/{id}/vports");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    if kind == "trunk" {
        // trunk members carry their role and segmentation VLAN
        table.set_titles(row!["ID", "name", "active", "type", "Trunk role", "Vlan"]);
        for line in &result {
            table.add_row(row![
                cell(line, "ID"),
                cell(line, "name"),
                cell(line, "active"),
                cell(line, "type"),
                cell(line, "trunkRole"),
                cell(line, "segmentationID")
            ]);
        }
    } else {
        table.set_titles(row!["ID", "name", "active", "type"]);
        for line in &result {
            table.add_row(row![
                cell(line, "ID"),
                cell(line, "name"),
                cell(line, "active"),
                cell(line, "type")
            ]);
        }
    }
    table.printstd();
    Ok(())
}

pub async fn vport_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("vports/{}", args.id), &[]).await
}

pub async fn vport_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(ctx, &format!("vports/{}", args.id), &args.key_value, &[]).await
}

pub async fn vport_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client.delete(&format!("vports/{}", args.id)).await?;
    Ok(())
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VportType {
    #[value(name = "VM")]
    Vm,
    #[value(name = "HOST")]
    Host,
    #[value(name = "BRIDGE")]
    Bridge,
}

impl VportType {
    fn as_str(self) -> &'static str {
        match self {
            VportType::Vm => "VM",
            VportType::Host => "HOST",
            VportType::Bridge => "BRIDGE",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AddressSpoofing {
    #[value(name = "ENABLED")]
    Enabled,
    #[value(name = "DISABLED")]
    Disabled,
    #[value(name = "INHERITED")]
    Inherited,
}

impl AddressSpoofing {
    fn as_str(self) -> &'static str {
        match self {
            AddressSpoofing::Enabled => "ENABLED",
            AddressSpoofing::Disabled => "DISABLED",
            AddressSpoofing::Inherited => "INHERITED",
        }
    }
}

#[derive(Args)]
pub struct VportCreateArgs {
    /// vPort name
    #[arg(value_name = "name")]
    pub name: String,
    #[arg(long = "type", value_enum)]
    pub vport_type: VportType,
    /// Create the vPort active
    #[arg(long, conflicts_with = "no_active")]
    pub active: bool,
    /// Create the vPort inactive
    #[arg(long = "no-active")]
    pub no_active: bool,
    #[arg(long = "address-spoofing", value_enum)]
    pub address_spoofing: AddressSpoofing,
    /// Required for BRIDGE and HOST creation
    #[arg(long = "vlan-id", value_name = "id")]
    pub vlan_id: Option<String>,
    #[arg(long = "subnet-id", value_name = "id")]
    pub subnet_id: Option<String>,
    #[arg(long = "l2domain-id", value_name = "id")]
    pub l2domain_id: Option<String>,
}

pub async fn vport_create(ctx: &mut Ctx, args: VportCreateArgs) -> Result<()> {
    let active = match (args.active, args.no_active) {
        (true, false) => true,
        (false, true) => false,
        _ => bail!("Specify either --active or --no-active"),
    };
    let (kind, id) = check_id(&[
        ("subnet", args.subnet_id.as_deref()),
        ("l2domain", args.l2domain_id.as_deref()),
    ])?;
    let mut params = json!({
        "name": args.name,
        "type": args.vport_type.as_str(),
        "active": active,
        "addressSpoofing": args.address_spoofing.as_str(),
    });
    if let Some(vlan_id) = args.vlan_id {
        params["VLANID"] = json!(vlan_id);
    }
    let path = format!("{kind}s/{id}/vports");
    create_object(ctx, &path, &params, &[]).await
}

pub async fn bridgeinterface_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("bridgeinterfaces/{}", args.id), &[]).await
}

pub async fn bridgeinterface_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(
        ctx,
        &format!("bridgeinterfaces/{}", args.id),
        &args.key_value,
        &[],
    )
    .await
}

pub async fn bridgeinterface_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client
        .delete(&format!("bridgeinterfaces/{}", args.id))
        .await?;
    Ok(())
}

#[derive(Args)]
pub struct BridgeinterfaceCreateArgs {
    /// Interface name
    #[arg(value_name = "name")]
    pub name: String,
    #[arg(long = "vport-id", value_name = "ID")]
    pub vport_id: String,
}

pub async fn bridgeinterface_create(ctx: &mut Ctx, args: BridgeinterfaceCreateArgs) -> Result<()> {
    let path = format!("vports/{}/bridgeinterfaces", args.vport_id);
    create_object(ctx, &path, &json!({"name": args.name}), &[]).await
}

#[derive(Args)]
pub struct BridgeinterfaceListArgs {
    #[arg(long = "domain-id", value_name = "id")]
    pub domain_id: Option<String>,
    #[arg(long = "l2domain-id", value_name = "id")]
    pub l2domain_id: Option<String>,
    #[arg(long = "vport-id", value_name = "id")]
    pub vport_id: Option<String>,
    /// Filter for name, type, lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn bridgeinterface_list(ctx: &mut Ctx, args: BridgeinterfaceListArgs) -> Result<()> {
    let (kind, id) = check_id(&[
        ("domain", args.domain_id.as_deref()),
        ("l2domain", args.l2domain_id.as_deref()),
        ("vport", args.vport_id.as_deref()),
    ])?;
    let path = format!("{kind}s/{id}/bridgeinterfaces");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "name", "VPortID"]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "name"),
            cell(line, "VPortID")
        ]);
    }
    table.printstd();
    Ok(())
}

#[derive(Args)]
pub struct TrunkListArgs {
    #[arg(long = "enterprise-id", value_name = "id")]
    pub enterprise_id: Option<String>,
    #[arg(long = "vport-id", value_name = "id")]
    pub vport_id: Option<String>,
    /// Filter for name or externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn trunk_list(ctx: &mut Ctx, args: TrunkListArgs) -> Result<()> {
    let (kind, id) = check_id(&[
        ("enterprise", args.enterprise_id.as_deref()),
        ("vport", args.vport_id.as_deref()),
    ])?;
    let path = format!("{kind}s/{id}/trunks");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "name", "associatedVPortID"]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "name"),
            cell(line, "associatedVPortID")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn trunk_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("trunks/{}", args.id), &[]).await
}

#[derive(Args)]
pub struct TrunkCreateArgs {
    /// Trunk name
    #[arg(value_name = "name")]
    pub name: String,
    /// Parent vPort of the trunk
    #[arg(long = "vport-id", value_name = "ID")]
    pub vport_id: String,
    /// If omitted, extracted from the vport's parent chain
    #[arg(long = "enterprise-id", value_name = "ID")]
    pub enterprise_id: Option<String>,
}

pub async fn trunk_create(ctx: &mut Ctx, args: TrunkCreateArgs) -> Result<()> {
    let enterprise_id = match args.enterprise_id {
        Some(enterprise_id) => enterprise_id,
        None => {
            // walk vport -> (domain | l2domain) -> enterprise
            let vport_path = format!("vports/{}", args.vport_id);
            let reply = ctx.client.get(&vport_path, None).await?;
            let vport = first(&reply, &vport_path)?.clone();
            let (parent_kind, parent_id) = if vport["parentType"] == "subnet" {
                ("domain", cell(&vport, "domainID"))
            } else {
                ("l2domain", cell(&vport, "parentID"))
            };
            let parent_path = format!("{parent_kind}s/{parent_id}");
            let reply = ctx.client.get(&parent_path, None).await?;
            cell(first(&reply, &parent_path)?, "parentID")
        }
    };
    let params = json!({
        "name": args.name,
        "associatedVPortID": args.vport_id,
    });
    let path = format!("enterprises/{enterprise_id}/trunks");
    create_object(ctx, &path, &params, &[]).await
}

#[derive(Args)]
pub struct TrunkDeleteArgs {
    /// Trunk ID
    #[arg(value_name = "ID")]
    pub id: String,
    /// Force deletion even there is sub-vport
    #[arg(long)]
    pub force: bool,
}

pub async fn trunk_delete(ctx: &mut Ctx, args: TrunkDeleteArgs) -> Result<()> {
    let path = format!("trunks/{}", args.id);
    if args.force {
        ctx.client.delete(&format!("{path}?responseChoice=1")).await?;
        return Ok(());
    }
    let vports = ctx
        .client
        .get(&format!("trunks/{}/vports", args.id), None)
        .await?;
    let sub_ports = vports
        .iter()
        .filter(|vport| vport["trunkRole"] == "SUB_PORT")
        .count();
    if sub_ports > 0 {
        bail!("There is {sub_ports} sub-port attached. Use --force to delete");
    }
    ctx.client.delete(&path).await?;
    Ok(())
}

#[derive(Args)]
pub struct VirtualipListArgs {
    #[arg(long = "redirectiontargets-id", value_name = "id")]
    pub redirectiontargets_id: Option<String>,
    #[arg(long = "vport-id", value_name = "id")]
    pub vport_id: Option<String>,
    #[arg(long = "subnet-id", value_name = "id")]
    pub subnet_id: Option<String>,
    /// Filter for virtualIP, externalID or IP type (IPV4 or 6)
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn virtualip_list(ctx: &mut Ctx, args: VirtualipListArgs) -> Result<()> {
    let (kind, id) = check_id(&[
        ("redirectiontarget", args.redirectiontargets_id.as_deref()),
        ("vport", args.vport_id.as_deref()),
        ("subnet", args.subnet_id.as_deref()),
    ])?;
    let path = format!("{kind}s/{id}/virtualips");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "Virtual IP", "MAC", "Parent type", "Parent ID"]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "virtualIP"),
            cell(line, "MAC"),
            cell(line, "parentType"),
            cell(line, "parentID")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn virtualip_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("virtualips/{}", args.id), &[]).await
}

pub async fn virtualip_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client
        .delete(&format!("virtualips/{}", args.id))
        .await?;
    Ok(())
}

#[derive(Args)]
pub struct VirtualipCreateArgs {
    #[arg(long = "vport-id", value_name = "ID")]
    pub vport_id: String,
    #[arg(long, value_name = "IP")]
    pub virtualip: String,
    /// Get the MAC address from the VM interface belonging to this vport
    #[arg(long = "mac-from-vm")]
    pub mac_from_vm: bool,
    /// Incompatible with --mac-from-vm
    #[arg(long, value_name = "mac")]
    pub mac: Option<String>,
}

pub async fn virtualip_create(ctx: &mut Ctx, args: VirtualipCreateArgs) -> Result<()> {
    let mut params = json!({"virtualIP": args.virtualip});
    if args.mac_from_vm {
        if args.mac.is_some() {
            bail!("When you activate mac-from-vm, do not use the mac option");
        }
        let path = format!("vports/{}/vminterfaces", args.vport_id);
        let reply = ctx.client.get(&path, None).await?;
        let interface = first(&reply, &path)?;
        if let Some(mac) = interface.get("MAC").and_then(|m| m.as_str()) {
            params["MAC"] = json!(mac);
        }
    }
    if let Some(mac) = args.mac {
        params["MAC"] = json!(mac);
    }
    let path = format!("vports/{}/virtualips", args.vport_id);
    create_object(ctx, &path, &params, &[]).await
}

pub async fn virtualip_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(
        ctx,
        &format!("virtualips/{}", args.id),
        &args.key_value,
        &[],
    )
    .await
}
