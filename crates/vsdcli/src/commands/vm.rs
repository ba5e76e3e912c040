//! VM and VM interface commands.

use anyhow::Result;
use clap::Args;
use prettytable::{row, Table};

use super::{show_object, update_object, Ctx, IdArg, KeyValueUpdateArgs};
use crate::output::cell;
use crate::utils::check_id_optional;

#[derive(Args)]
pub struct VmListArgs {
    #[arg(long = "egressacltemplate-id", value_name = "id")]
    pub egressacltemplate_id: Option<String>,
    #[arg(long = "enterprise-id", value_name = "id")]
    pub enterprise_id: Option<String>,
    #[arg(long = "ingressacltemplate-id", value_name = "id")]
    pub ingressacltemplate_id: Option<String>,
    #[arg(long = "vrs-id", value_name = "id")]
    pub vrs_id: Option<String>,
    #[arg(long = "vport-id", value_name = "id")]
    pub vport_id: Option<String>,
    #[arg(long = "zone-id", value_name = "id")]
    pub zone_id: Option<String>,
    #[arg(long = "l2domain-id", value_name = "id")]
    pub l2domain_id: Option<String>,
    #[arg(long = "app-id", value_name = "id")]
    pub app_id: Option<String>,
    #[arg(long = "domain-id", value_name = "id")]
    pub domain_id: Option<String>,
    #[arg(long = "user-id", value_name = "id")]
    pub user_id: Option<String>,
    #[arg(long = "subnet-id", value_name = "id")]
    pub subnet_id: Option<String>,
    /// Filter for UUID, name, status, reasonType, hypervisorIP,
    /// lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn vm_list(ctx: &mut Ctx, args: VmListArgs) -> Result<()> {
    let scope = check_id_optional(&[
        ("egressacltemplate", args.egressacltemplate_id.as_deref()),
        ("enterprise", args.enterprise_id.as_deref()),
        ("ingressacltemplate", args.ingressacltemplate_id.as_deref()),
        ("vrs", args.vrs_id.as_deref()),
        ("vport", args.vport_id.as_deref()),
        ("zone", args.zone_id.as_deref()),
        ("l2domain", args.l2domain_id.as_deref()),
        ("app", args.app_id.as_deref()),
        ("domain", args.domain_id.as_deref()),
        ("user", args.user_id.as_deref()),
        ("subnet", args.subnet_id.as_deref()),
    ])?;
    let path = match scope {
        Some((kind, id)) => format!("{kind}s/{id}/vms"),
        None => "vms".to_string(),
    };
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row![
        "ID",
        "Vm UUID",
        "Name",
        "Status",
        "Hypervisor IP",
        "Reason Type"
    ]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "UUID"),
            cell(line, "name"),
            cell(line, "status"),
            cell(line, "hypervisorIP"),
            cell(line, "reasonType")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn vm_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(
        ctx,
        &format!("vms/{}", args.id),
        &["interfaces", "resyncInfo"],
    )
    .await
}

pub async fn vm_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client.delete(&format!("vms/{}", args.id)).await?;
    Ok(())
}

#[derive(Args)]
pub struct VminterfaceListArgs {
    #[arg(long = "subnet-id", value_name = "id")]
    pub subnet_id: Option<String>,
    #[arg(long = "zone-id", value_name = "id")]
    pub zone_id: Option<String>,
    #[arg(long = "vm-id", value_name = "id")]
    pub vm_id: Option<String>,
    #[arg(long = "vport-id", value_name = "id")]
    pub vport_id: Option<String>,
    #[arg(long = "domain-id", value_name = "id")]
    pub domain_id: Option<String>,
    /// Filter for name, IPAddress, MAC, lastUpdatedDate, creationDate,
    /// externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn vminterface_list(ctx: &mut Ctx, args: VminterfaceListArgs) -> Result<()> {
    let scope = check_id_optional(&[
        ("subnet", args.subnet_id.as_deref()),
        ("zone", args.zone_id.as_deref()),
        ("vm", args.vm_id.as_deref()),
        ("vport", args.vport_id.as_deref()),
        ("domain", args.domain_id.as_deref()),
    ])?;
    let path = match scope {
        Some((kind, id)) => format!("{kind}s/{id}/vminterfaces"),
        None => "vminterfaces".to_string(),
    };
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row![
        "ID",
        "VM UUID",
        "IP Address",
        "Netmask",
        "Floating IP",
        "MAC"
    ]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "VMUUID"),
            cell(line, "IPAddress"),
            cell(line, "netmask"),
            cell(line, "associatedFloatingIPAddress"),
            cell(line, "MAC")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn vminterface_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("vminterfaces/{}", args.id), &[]).await
}

pub async fn vminterface_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(
        ctx,
        &format!("vminterfaces/{}", args.id),
        &args.key_value,
        &[],
    )
    .await
}
