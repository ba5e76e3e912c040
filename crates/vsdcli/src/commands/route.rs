//! Static route commands.

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use prettytable::{row, Table};
use serde_json::{json, Value};

use super::{create_object, show_object, Ctx, IdArg, KeyValueUpdateArgs};
use crate::output::cell;
use crate::utils::{check_id, check_id_optional, key_value_params, length_to_netmask, netmask_to_length};

#[derive(Args)]
pub struct StaticrouteListArgs {
    #[arg(long = "containerinterface-id", value_name = "id")]
    pub containerinterface_id: Option<String>,
    #[arg(long = "sharednetworkresource-id", value_name = "id")]
    pub sharednetworkresource_id: Option<String>,
    #[arg(long = "vminterface-id", value_name = "id")]
    pub vminterface_id: Option<String>,
    #[arg(long = "domain-id", value_name = "id")]
    pub domain_id: Option<String>,
    #[arg(long = "l2domain-id", value_name = "id")]
    pub l2domain_id: Option<String>,
    #[arg(long = "hostinterface-id", value_name = "id")]
    pub hostinterface_id: Option<String>,
    #[arg(long = "aggregateddomain-id", value_name = "id")]
    pub aggregateddomain_id: Option<String>,
    /// Filter for address, BFDEnabled, blackHoleEnabled, externalID, IPType,
    /// IPv6Address, netmask, nextHopIP, routeDistinguisher
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn list(ctx: &mut Ctx, args: StaticrouteListArgs) -> Result<()> {
    let scope = check_id_optional(&[
        ("containerinterface", args.containerinterface_id.as_deref()),
        (
            "sharednetworkresource",
            args.sharednetworkresource_id.as_deref(),
        ),
        ("vminterface", args.vminterface_id.as_deref()),
        ("domain", args.domain_id.as_deref()),
        ("l2domain", args.l2domain_id.as_deref()),
        ("hostinterface", args.hostinterface_id.as_deref()),
        ("aggregateddomain", args.aggregateddomain_id.as_deref()),
    ])?;
    let path = match scope {
        Some((kind, id)) => format!("{kind}s/{id}/staticroutes"),
        None => "staticroutes".to_string(),
    };
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "Subnet", "Next hop"]);
    for line in &result {
        let subnet = if line["IPType"] == "IPV4" {
            match netmask_to_length(&cell(line, "netmask")) {
                Ok(length) => format!("{}/{length}", cell(line, "address")),
                Err(_) => cell(line, "address"),
            }
        } else {
            cell(line, "IPv6Address")
        };
        table.add_row(row![cell(line, "ID"), subnet, cell(line, "nextHopIp")]);
    }
    table.printstd();
    Ok(())
}

pub async fn show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("staticroutes/{}", args.id), &[]).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IpType {
    #[value(name = "IPV4")]
    Ipv4,
    #[value(name = "IPV6")]
    Ipv6,
}

#[derive(Args)]
pub struct StaticrouteCreateArgs {
    #[arg(
        long = "sharednetworkresource-id",
        value_name = "Shared network resource ID"
    )]
    pub sharednetworkresource_id: Option<String>,
    #[arg(long = "domain-id", value_name = "Domain id")]
    pub domain_id: Option<String>,
    #[arg(long = "l2domain-id", value_name = "L2 Domain id")]
    pub l2domain_id: Option<String>,
    #[arg(long = "aggregateddomain-id", value_name = "Aggregated domain id")]
    pub aggregateddomain_id: Option<String>,
    /// Destination network
    #[arg(long, value_name = "address IPv4 or IPv6")]
    pub address: String,
    /// Mask must be length for IPv6
    #[arg(long, value_name = "netmask or mask length")]
    pub mask: String,
    /// Next hop
    #[arg(long, value_name = "gateway IPv4 or IPv6")]
    pub gateway: String,
    /// Default : IPV4
    #[arg(long = "ip-type", value_enum, default_value = "IPV4")]
    pub ip_type: IpType,
    /// Active BFD for this route
    #[arg(long = "bfd-enabled")]
    pub bfd_enabled: bool,
}

pub async fn create(ctx: &mut Ctx, args: StaticrouteCreateArgs) -> Result<()> {
    let (kind, id) = check_id(&[
        (
            "sharednetworkresource",
            args.sharednetworkresource_id.as_deref(),
        ),
        ("domain", args.domain_id.as_deref()),
        ("l2domain", args.l2domain_id.as_deref()),
        ("aggregateddomain", args.aggregateddomain_id.as_deref()),
    ])?;

    let mask_is_length = args.mask.parse::<u32>().is_ok();
    let mut params: Value;
    if args.ip_type == IpType::Ipv6 {
        if !mask_is_length {
            bail!("For IPv6 mask must be a length");
        }
        params = json!({
            "IPv6Address": format!("{}/{}", args.address, args.mask),
            "nextHopIp": args.gateway,
        });
    } else {
        let netmask = if mask_is_length {
            length_to_netmask(args.mask.parse()?)?
        } else {
            args.mask.clone()
        };
        params = json!({
            "address": args.address,
            "netmask": netmask,
            "nextHopIp": args.gateway,
        });
    }
    if args.bfd_enabled {
        params["BFDEnabled"] = json!(true);
    }

    let path = format!("{kind}s/{id}/staticroutes?responseChoice=1");
    create_object(ctx, &path, &params, &[]).await
}

pub async fn update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    let params = key_value_params(&args.key_value)?;
    ctx.client
        .put(
            &format!("staticroutes/{}?responseChoice=1", args.id),
            &params,
        )
        .await?;
    show_object(ctx, &format!("staticroutes/{}", args.id), &[]).await
}

pub async fn delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client
        .delete(&format!("staticroutes/{}?responseChoice=1", args.id))
        .await?;
    Ok(())
}
