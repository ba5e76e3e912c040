//! DHCP option commands, including the classless-static-route codec.
//!
//! Static routes ride in DHCP options 121 (`79`) and 249 (`f9`), both
//! encoded per RFC 3442: a mask length, the significant bytes of the
//! destination, then the four gateway bytes. The route commands keep the
//! two options in sync so Windows and non-Windows clients see the same
//! routes.

use anyhow::{bail, Result};
use clap::Args;
use prettytable::{row, Table};
use serde_json::{json, Value};

use super::{create_object, show_object, Ctx, IdArg};
use crate::output::cell;
use crate::utils::check_id;

const ROUTE_OPTION_TYPES: [&str; 2] = ["79", "f9"];
const GATEWAY_OPTION_TYPE: &str = "03";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhcpRoute {
    pub subnet: String,
    pub mask: u32,
    pub gateway: String,
}

/// A decoded route plus the option types it was found in.
#[derive(Debug, Clone)]
struct RouteEntry {
    route: DhcpRoute,
    options: Vec<&'static str>,
}

/// Decode hex octet pairs into a dotted quad, zero-filled on the right.
fn decode_ip(data: &str) -> Result<String> {
    let mut octets = Vec::new();
    let mut rest = data;
    while !rest.is_empty() {
        if rest.len() < 2 {
            bail!("Truncated DHCP option value: {data}");
        }
        let (pair, tail) = rest.split_at(2);
        octets.push(
            u8::from_str_radix(pair, 16)
                .map_err(|_| anyhow::anyhow!("Invalid DHCP option value: {data}"))?
                .to_string(),
        );
        rest = tail;
    }
    while octets.len() < 4 {
        octets.push("0".to_string());
    }
    Ok(octets.join("."))
}

/// Encode an IP; with a mask, prefix the mask length and keep only the
/// significant bytes (RFC 3442 destination descriptor).
fn encode_ip(ip: &str, mask: Option<u32>) -> Result<String> {
    if mask == Some(0) {
        return Ok("00".to_string());
    }
    let byte_count = match mask {
        Some(mask) => (mask - 1) / 8 + 1,
        None => 4,
    };
    let mut data = match mask {
        Some(mask) => format!("{mask:02x}"),
        None => String::new(),
    };
    let mut octets = ip.split('.');
    for _ in 0..byte_count {
        let octet: u8 = octets
            .next()
            .and_then(|o| o.parse().ok())
            .ok_or_else(|| anyhow::anyhow!("Invalid IP address: {ip}"))?;
        data.push_str(&format!("{octet:02x}"));
    }
    Ok(data)
}

fn decode_route(data: &str) -> Result<Vec<DhcpRoute>> {
    let mut routes = Vec::new();
    let mut rest = data;
    while !rest.is_empty() {
        if rest.len() < 2 {
            bail!("Truncated DHCP route data: {data}");
        }
        let (mask_hex, tail) = rest.split_at(2);
        let mask = u32::from_str_radix(mask_hex, 16)
            .map_err(|_| anyhow::anyhow!("Invalid DHCP route data: {data}"))?;
        rest = tail;
        let subnet = if mask == 0 {
            "0.0.0.0".to_string()
        } else {
            let bytes = ((mask - 1) / 8 + 1) as usize;
            if rest.len() < 2 * bytes {
                bail!("Truncated DHCP route data: {data}");
            }
            let (subnet_hex, tail) = rest.split_at(2 * bytes);
            rest = tail;
            decode_ip(subnet_hex)?
        };
        if rest.len() < 8 {
            bail!("Truncated DHCP route data: {data}");
        }
        let (gateway_hex, tail) = rest.split_at(8);
        rest = tail;
        routes.push(DhcpRoute {
            subnet,
            mask,
            gateway: decode_ip(gateway_hex)?,
        });
    }
    Ok(routes)
}

fn encode_route(routes: &[DhcpRoute]) -> Result<String> {
    let mut data = String::new();
    // the original encoder drains its list from the tail; preserved so
    // payloads stay byte-identical
    for route in routes.iter().rev() {
        data.push_str(&encode_ip(&route.subnet, Some(route.mask))?);
        data.push_str(&encode_ip(&route.gateway, None)?);
    }
    Ok(data)
}

/// Merge the routes found in options `79` and `f9`, remembering which
/// option(s) each route came from.
fn decode_dhcp_data(options: &[Value]) -> Result<Vec<RouteEntry>> {
    let mut entries: Vec<RouteEntry> = Vec::new();
    for option_type in ROUTE_OPTION_TYPES {
        let values: Vec<&Value> = options
            .iter()
            .filter(|o| o["type"] == option_type)
            .collect();
        if values.len() > 1 {
            bail!("Abnormal count of DHCP option {option_type}");
        }
        if let Some(option) = values.first() {
            let data = option["value"].as_str().unwrap_or_default();
            for route in decode_route(data)? {
                match entries.iter_mut().find(|e| e.route == route) {
                    Some(entry) => entry.options.push(option_type),
                    None => entries.push(RouteEntry {
                        route,
                        options: vec![option_type],
                    }),
                }
            }
        }
    }
    Ok(entries)
}

fn route_params(routes: &[DhcpRoute]) -> Result<Value> {
    let encoded = encode_route(routes)?;
    let length = format!("{:02x}", encoded.len() / 2);
    Ok(json!({"value": encoded, "length": length}))
}

/// Entities that can carry DHCP options.
#[derive(Args)]
pub struct DhcpOptionParentArgs {
    #[arg(long = "vminterface-id", value_name = "id")]
    pub vminterface_id: Option<String>,
    #[arg(long = "hostinterface-id", value_name = "id")]
    pub hostinterface_id: Option<String>,
    #[arg(long = "bridgeinterface-id", value_name = "id")]
    pub bridgeinterface_id: Option<String>,
    #[arg(long = "sharednetworkresource-id", value_name = "id")]
    pub sharednetworkresource_id: Option<String>,
    #[arg(long = "subnet-id", value_name = "id")]
    pub subnet_id: Option<String>,
    #[arg(long = "l2domain-id", value_name = "id")]
    pub l2domain_id: Option<String>,
    #[arg(long = "domain-id", value_name = "id")]
    pub domain_id: Option<String>,
    #[arg(long = "zone-id", value_name = "id")]
    pub zone_id: Option<String>,
}

impl DhcpOptionParentArgs {
    fn scope(&self) -> Result<(String, String)> {
        check_id(&[
            ("vminterface", self.vminterface_id.as_deref()),
            ("hostinterface", self.hostinterface_id.as_deref()),
            ("bridgeinterface", self.bridgeinterface_id.as_deref()),
            (
                "sharednetworkresource",
                self.sharednetworkresource_id.as_deref(),
            ),
            ("subnet", self.subnet_id.as_deref()),
            ("l2domain", self.l2domain_id.as_deref()),
            ("domain", self.domain_id.as_deref()),
            ("zone", self.zone_id.as_deref()),
        ])
    }
}

/// Entities the route-level commands operate on (interfaces and networks;
/// domains and zones hold options but not client routes).
#[derive(Args)]
pub struct DhcpRouteParentArgs {
    #[arg(long = "vminterface-id", value_name = "id")]
    pub vminterface_id: Option<String>,
    #[arg(long = "hostinterface-id", value_name = "id")]
    pub hostinterface_id: Option<String>,
    #[arg(long = "bridgeinterface-id", value_name = "id")]
    pub bridgeinterface_id: Option<String>,
    #[arg(long = "sharednetworkresource-id", value_name = "id")]
    pub sharednetworkresource_id: Option<String>,
    #[arg(long = "subnet-id", value_name = "id")]
    pub subnet_id: Option<String>,
    #[arg(long = "l2domain-id", value_name = "id")]
    pub l2domain_id: Option<String>,
}

impl DhcpRouteParentArgs {
    fn scope(&self) -> Result<(String, String)> {
        check_id(&[
            ("vminterface", self.vminterface_id.as_deref()),
            ("hostinterface", self.hostinterface_id.as_deref()),
            ("bridgeinterface", self.bridgeinterface_id.as_deref()),
            (
                "sharednetworkresource",
                self.sharednetworkresource_id.as_deref(),
            ),
            ("subnet", self.subnet_id.as_deref()),
            ("l2domain", self.l2domain_id.as_deref()),
        ])
    }
}

#[derive(Args)]
pub struct DhcpOptionListArgs {
    #[command(flatten)]
    pub parent: DhcpOptionParentArgs,
    /// Filter for type, length, value, lastUpdatedDate, creationDate,
    /// externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn option_list(ctx: &mut Ctx, args: DhcpOptionListArgs) -> Result<()> {
    let (kind, id) = args.parent.scope()?;
    let path = format!("{kind}s/{id}/dhcpoptions");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "Type", "Value", "Length"]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "type"),
            cell(line, "value"),
            cell(line, "length")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn option_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("dhcpoptions/{}", args.id), &[]).await
}

pub async fn option_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client
        .delete(&format!("dhcpoptions/{}", args.id))
        .await?;
    Ok(())
}

#[derive(Args)]
pub struct DhcpOptionAddArgs {
    #[arg(long = "sharednetworkresource-id", value_name = "id")]
    pub sharednetworkresource_id: Option<String>,
    #[arg(long = "subnet-id", value_name = "id")]
    pub subnet_id: Option<String>,
    #[arg(long = "l2domain-id", value_name = "id")]
    pub l2domain_id: Option<String>,
    #[arg(long = "domain-id", value_name = "id")]
    pub domain_id: Option<String>,
    #[arg(long = "zone-id", value_name = "id")]
    pub zone_id: Option<String>,
    /// Option value, hex encoded
    #[arg(long, value_name = "dhcp value")]
    pub value: String,
    /// Option type, hex encoded
    #[arg(long = "type", value_name = "dhcp type")]
    pub option_type: String,
    /// Value length in bytes, hex encoded
    #[arg(long, value_name = "dhcp length")]
    pub length: String,
}

pub async fn option_add(ctx: &mut Ctx, args: DhcpOptionAddArgs) -> Result<()> {
    let (kind, id) = check_id(&[
        (
            "sharednetworkresource",
            args.sharednetworkresource_id.as_deref(),
        ),
        ("subnet", args.subnet_id.as_deref()),
        ("l2domain", args.l2domain_id.as_deref()),
        ("domain", args.domain_id.as_deref()),
        ("zone", args.zone_id.as_deref()),
    ])?;
    let params = json!({
        "value": args.value,
        "type": args.option_type,
        "length": args.length,
    });
    let path = format!("{kind}s/{id}/dhcpoptions");
    create_object(ctx, &path, &params, &[]).await
}

#[derive(Args)]
pub struct DhcpRouteListArgs {
    #[command(flatten)]
    pub parent: DhcpRouteParentArgs,
    /// Filter for type, length, value, lastUpdatedDate, creationDate,
    /// externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn route_list(ctx: &mut Ctx, args: DhcpRouteListArgs) -> Result<()> {
    let (kind, id) = args.parent.scope()?;
    let path = format!("{kind}s/{id}/dhcpoptions");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let entries = decode_dhcp_data(&result)?;
    let mut table = Table::new();
    table.set_titles(row!["Subnet", "Gateway", "option"]);
    for entry in &entries {
        table.add_row(row![
            format!("{}/{}", entry.route.subnet, entry.route.mask),
            entry.route.gateway,
            entry.options.join(", ")
        ]);
    }
    table.printstd();
    Ok(())
}

#[derive(Args)]
pub struct DhcpRouteEditArgs {
    #[command(flatten)]
    pub parent: DhcpRouteParentArgs,
    /// Destination network
    #[arg(long)]
    pub subnet: String,
    /// Destination mask length
    #[arg(long)]
    pub mask: u32,
    /// Route gateway
    #[arg(long)]
    pub gateway: String,
}

/// Add the route to both route options, creating whichever option does not
/// exist yet.
pub async fn route_add(ctx: &mut Ctx, args: DhcpRouteEditArgs) -> Result<()> {
    let (kind, id) = args.parent.scope()?;
    let path = format!("{kind}s/{id}/dhcpoptions");
    let options = ctx.client.get(&path, None).await?;

    let mut routes: Vec<DhcpRoute> = decode_dhcp_data(&options)?
        .into_iter()
        .map(|entry| entry.route)
        .collect();
    routes.push(DhcpRoute {
        subnet: args.subnet,
        mask: args.mask,
        gateway: args.gateway,
    });
    let mut params = route_params(&routes)?;

    let mut updated_types = Vec::new();
    for option in &options {
        if let Some(option_type) = option["type"].as_str() {
            if ROUTE_OPTION_TYPES.contains(&option_type) {
                updated_types.push(option_type.to_string());
                ctx.client
                    .put(&format!("dhcpoptions/{}", cell(option, "ID")), &params)
                    .await?;
            }
        }
    }
    for option_type in ROUTE_OPTION_TYPES {
        if !updated_types.iter().any(|t| t == option_type) {
            params["type"] = json!(option_type);
            ctx.client.post(&path, &params).await?;
        }
    }
    Ok(())
}

/// Remove the route from both options; dropping the last route deletes the
/// options outright.
pub async fn route_delete(ctx: &mut Ctx, args: DhcpRouteEditArgs) -> Result<()> {
    let (kind, id) = args.parent.scope()?;
    let path = format!("{kind}s/{id}/dhcpoptions");
    let options = ctx.client.get(&path, None).await?;

    let routes: Vec<DhcpRoute> = decode_dhcp_data(&options)?
        .into_iter()
        .map(|entry| entry.route)
        .collect();
    if routes.is_empty() {
        bail!("No route to delete");
    }
    let to_remove = DhcpRoute {
        subnet: args.subnet,
        mask: args.mask,
        gateway: args.gateway,
    };
    let kept: Vec<DhcpRoute> = routes.iter().filter(|r| **r != to_remove).cloned().collect();
    if kept.len() == routes.len() {
        bail!("Route not present: unable to remove it");
    }

    let route_options: Vec<&Value> = options
        .iter()
        .filter(|o| {
            o["type"]
                .as_str()
                .is_some_and(|t| ROUTE_OPTION_TYPES.contains(&t))
        })
        .collect();
    if kept.is_empty() {
        for option in route_options {
            ctx.client
                .delete(&format!("dhcpoptions/{}", cell(option, "ID")))
                .await?;
        }
    } else {
        let params = route_params(&kept)?;
        for option in route_options {
            ctx.client
                .put(&format!("dhcpoptions/{}", cell(option, "ID")), &params)
                .await?;
        }
    }
    Ok(())
}

#[derive(Args)]
pub struct DhcpGatewayShowArgs {
    #[command(flatten)]
    pub parent: DhcpRouteParentArgs,
    /// Filter for type, length, value, lastUpdatedDate, creationDate,
    /// externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn gateway_show(ctx: &mut Ctx, args: DhcpGatewayShowArgs) -> Result<()> {
    let (kind, id) = args.parent.scope()?;
    let path = format!("{kind}s/{id}/dhcpoptions");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut gateway = "None".to_string();
    for option in &result {
        if option["type"] == GATEWAY_OPTION_TYPE {
            gateway = decode_ip(option["value"].as_str().unwrap_or_default())?;
        }
    }
    let mut table = Table::new();
    table.set_titles(row!["Gateway"]);
    table.add_row(row![gateway]);
    table.printstd();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(subnet: &str, mask: u32, gateway: &str) -> DhcpRoute {
        DhcpRoute {
            subnet: subnet.to_string(),
            mask,
            gateway: gateway.to_string(),
        }
    }

    #[test]
    fn ip_decoding_pads_missing_octets() {
        assert_eq!(decode_ip("ac100a").unwrap(), "172.16.10.0");
        assert_eq!(decode_ip("0a000001").unwrap(), "10.0.0.1");
        assert_eq!(decode_ip("").unwrap(), "0.0.0.0");
        assert!(decode_ip("zz").is_err());
        assert!(decode_ip("abc").is_err());
    }

    #[test]
    fn ip_encoding_keeps_only_significant_bytes() {
        assert_eq!(encode_ip("172.16.10.0", Some(24)).unwrap(), "18ac100a");
        assert_eq!(encode_ip("172.16.0.0", Some(16)).unwrap(), "10ac10");
        assert_eq!(encode_ip("0.0.0.0", Some(0)).unwrap(), "00");
        assert_eq!(encode_ip("10.0.0.1", None).unwrap(), "0a000001");
    }

    #[test]
    fn route_codec_round_trips() {
        let routes = vec![
            route("172.16.10.0", 24, "10.0.0.1"),
            route("192.168.0.0", 16, "10.0.0.254"),
        ];
        let encoded = encode_route(&routes).unwrap();
        // encoded tail-first, so the second route leads
        assert_eq!(encoded, "10c0a80a0000fe18ac100a0a000001");
        let mut decoded = decode_route(&encoded).unwrap();
        decoded.reverse();
        assert_eq!(decoded, routes);
    }

    #[test]
    fn default_route_decodes_without_subnet_bytes() {
        let decoded = decode_route("000a000001").unwrap();
        assert_eq!(decoded, vec![route("0.0.0.0", 0, "10.0.0.1")]);
    }

    #[test]
    fn merges_routes_from_both_option_types() {
        let shared = encode_route(&[route("172.16.10.0", 24, "10.0.0.1")]).unwrap();
        let only_79 = encode_route(&[
            route("172.16.10.0", 24, "10.0.0.1"),
            route("192.168.0.0", 16, "10.0.0.254"),
        ])
        .unwrap();
        let options = vec![
            serde_json::json!({"ID": "a", "type": "79", "value": only_79}),
            serde_json::json!({"ID": "b", "type": "f9", "value": shared}),
        ];
        let entries = decode_dhcp_data(&options).unwrap();
        assert_eq!(entries.len(), 2);
        let both = entries
            .iter()
            .find(|e| e.route == route("172.16.10.0", 24, "10.0.0.1"))
            .unwrap();
        assert_eq!(both.options, vec!["79", "f9"]);
        let single = entries
            .iter()
            .find(|e| e.route == route("192.168.0.0", 16, "10.0.0.254"))
            .unwrap();
        assert_eq!(single.options, vec!["79"]);
    }

    #[test]
    fn duplicate_route_options_are_rejected() {
        let value = encode_route(&[route("172.16.10.0", 24, "10.0.0.1")]).unwrap();
        let options = vec![
            serde_json::json!({"ID": "a", "type": "79", "value": value}),
            serde_json::json!({"ID": "b", "type": "79", "value": value}),
        ];
        assert!(decode_dhcp_data(&options).is_err());
    }
}
