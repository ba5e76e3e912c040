//! Command-line definition: global connection options (with their `VSD_*`
//! environment fallbacks) and the flat subcommand set.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    dhcp, domain, enterprise, free_api, gateway, license, me, metadata, policy, route, subnet,
    user, vm, vport, vsp, Ctx, IdArg, KeyValueUpdateArgs,
};

#[derive(Parser)]
#[command(
    name = "vsd",
    version,
    about = "Command-line interface to the VSD APIs"
)]
pub struct Cli {
    /// VSD url http(s)://hostname:port/nuage/api (Env: VSD_API_URL)
    #[arg(long, env = "VSD_API_URL", value_name = "url", global = true)]
    pub vsd_api_url: Option<String>,
    /// VSD Authentication username (Env: VSD_USERNAME)
    #[arg(long, env = "VSD_USERNAME", value_name = "username", global = true)]
    pub vsd_username: Option<String>,
    /// VSD Authentication password (Env: VSD_PASSWORD); prompted when absent
    #[arg(
        long,
        env = "VSD_PASSWORD",
        value_name = "password",
        hide_env_values = true,
        global = true
    )]
    pub vsd_password: Option<String>,
    /// VSD Authentication enterprise (Env: VSD_ENTERPRISE)
    #[arg(long, env = "VSD_ENTERPRISE", value_name = "enterprise", global = true)]
    pub vsd_enterprise: Option<String>,
    /// VSD API version (Env: VSD_API_VERSION)
    #[arg(
        long,
        env = "VSD_API_VERSION",
        value_name = "api version",
        global = true
    )]
    pub vsd_api_version: Option<String>,
    /// Disable proxy if defined via env http(s)_proxy (Env: VSD_DISABLE_PROXY)
    #[arg(long, env = "VSD_DISABLE_PROXY", global = true)]
    pub vsd_disable_proxy: bool,
    /// Use this proxy to reach the vsd and override env http(s)_proxy
    /// (Env: VSD_HTTP_PROXY)
    #[arg(
        long,
        env = "VSD_HTTP_PROXY",
        value_name = "127.0.0.1:3128",
        global = true
    )]
    pub vsd_http_proxy: Option<String>,
    /// Use this proxy to reach the vsd and override env https_proxy. If
    /// omitted, https proxy will be set with the given http-proxy
    /// (Env: VSD_HTTPS_PROXY)
    #[arg(
        long,
        env = "VSD_HTTPS_PROXY",
        value_name = "127.0.0.1:3128",
        global = true
    )]
    pub vsd_https_proxy: Option<String>,
    /// Show only the value for a given key (usable for show and create
    /// command)
    #[arg(long, value_name = "key", global = true)]
    pub show_only: Option<String>,
    /// Active debug for request and response
    #[arg(long, global = true)]
    pub debug: bool,
    /// Do not use existing APIkey. Replay authentication
    #[arg(long, global = true)]
    pub force_auth: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show my own user information
    MeShow(me::MeShowArgs),
    /// Build your own API call (with headers and data)
    FreeApi(free_api::FreeApiArgs),

    /// Show all license within the VSD
    LicenseList,
    /// Show license detail for a given license id
    LicenseShow(license::LicenseShowArgs),
    /// Add a license to the VSD
    LicenseCreate(license::LicenseCreateArgs),
    /// Delete a given license
    LicenseDelete(license::LicenseDeleteArgs),

    /// Show all enterprise within the VSD
    EnterpriseList(enterprise::EnterpriseListArgs),
    /// Show information for a given enterprise id
    EnterpriseShow(IdArg),
    /// Add an enterprise to the VSD
    EnterpriseCreate(enterprise::EnterpriseCreateArgs),
    /// Update key/value for a given enterprise
    EnterpriseUpdate(KeyValueUpdateArgs),
    /// Delete a given enterprise
    EnterpriseDelete(enterprise::EnterpriseDeleteArgs),

    /// Show all domaintemplate for a given enterprise id
    DomaintemplateList(domain::DomaintemplateListArgs),
    /// Show information for a given domaintemplate id
    DomaintemplateShow(IdArg),
    /// Add an domaintemplate to the VSD for an given enterprise
    DomaintemplateCreate(domain::DomaintemplateCreateArgs),
    /// Update key/value for a given domaintemplate
    DomaintemplateUpdate(KeyValueUpdateArgs),
    /// Delete a given domaintemplate
    DomaintemplateDelete(IdArg),

    /// List domain for optional enterprise or domaintemplate id
    DomainList(domain::DomainListArgs),
    /// Show information for a given domain id
    DomainShow(IdArg),
    /// Add an domain to the VSD for an given enterprise
    DomainCreate(domain::DomainCreateArgs),
    /// Update key/value for a given domain
    DomainUpdate(KeyValueUpdateArgs),
    /// Delete a given domain
    DomainDelete(IdArg),

    /// Show zone for optional domain id
    ZoneList(domain::ZoneListArgs),
    /// Show information for a given zone id
    ZoneShow(IdArg),
    /// Add a zone to the VSD for an given domain
    ZoneCreate(domain::ZoneCreateArgs),
    /// Delete a given zone
    ZoneDelete(IdArg),

    /// List subnets for a given zone, app, subnettemplate, or domain id
    SubnetList(subnet::SubnetListArgs),
    /// Show information for a given subnet id
    SubnetShow(IdArg),
    /// Add a subnet to the VSD for an given zone
    SubnetCreate(subnet::SubnetCreateArgs),
    /// Update key/value for a given subnet
    SubnetUpdate(KeyValueUpdateArgs),
    /// Delete a given subnet
    SubnetDelete(IdArg),

    /// List all shared network resource
    SharedNetworkList(subnet::SharedNetworkListArgs),
    /// Show information for a given shared-network ID
    SharedNetworkShow(IdArg),

    /// List L2 domain for a given enterprise or l2 domain template
    L2domainList(subnet::L2domainListArgs),
    /// Show information for a given l2 domain id
    L2domainShow(IdArg),
    /// Add an l2 domain to the VSD for an given enterprise
    L2domainCreate(subnet::L2domainCreateArgs),
    /// Update key/value for a given l2 domain
    L2domainUpdate(KeyValueUpdateArgs),
    /// Delete a given l2 domain
    L2domainDelete(IdArg),

    /// List floating IP for a given domain ID
    FloatingipList(subnet::FloatingipListArgs),
    /// Show information for a given floating IP id
    FloatingipShow(IdArg),

    /// List users for a given enterprise or group id
    UserList(user::UserListArgs),
    /// Show information for a given user id
    UserShow(IdArg),
    /// Add a user to the VSD
    UserCreate(user::UserCreateArgs),
    /// Update key/value for a given user
    UserUpdate(KeyValueUpdateArgs),
    /// Delete a given user
    UserDelete(IdArg),

    /// List groups for a given enterprise id or that an user belongs to
    GroupList(user::GroupListArgs),
    /// Show information for a given group id
    GroupShow(IdArg),
    /// Add a group to the VSD
    GroupCreate(user::GroupCreateArgs),
    /// Update key/value for a given group
    GroupUpdate(KeyValueUpdateArgs),
    /// Delete a given group
    GroupDelete(IdArg),
    /// Add a user to a given group
    GroupAddUser(user::GroupUserArgs),
    /// Delete a user from a given group
    GroupDelUser(user::GroupUserArgs),

    /// List all permissions for a given entity
    PermissionList(user::PermissionListArgs),
    /// Show information for a given permission id
    PermissionShow(IdArg),
    /// Add permission for a given element (Domain, Zone, L2Domain, etc...)
    AddPermission(user::AddPermissionArgs),

    /// Add a gateway to the VSD
    GatewayCreate(gateway::GatewayCreateArgs),
    /// Delete a given gateway
    GatewayDelete(IdArg),
    /// List gateways for a given enterprise or redundancy group id
    GatewayList(gateway::GatewayListArgs),
    /// Show information for a given gateway ID
    GatewayShow(IdArg),
    /// Update key/value for a given gateway
    GatewayUpdate(KeyValueUpdateArgs),

    /// List all port for a given redundancygroup, gateway or
    /// autodiscoveredgateway
    PortList(gateway::PortListArgs),
    /// Show information for a given port id
    PortShow(IdArg),
    /// Update key/value for a given port
    PortUpdate(KeyValueUpdateArgs),

    /// List all vlan for a given port
    VlanList(gateway::VlanListArgs),
    /// Show information for a given vlan id
    VlanShow(IdArg),
    /// Add vlan for a given port
    VlanCreate(gateway::VlanCreateArgs),
    /// Update key/value for a given vlan
    VlanUpdate(KeyValueUpdateArgs),
    /// Delete a given vlan
    VlanDelete(IdArg),

    /// List all gateway redundant groups
    GatewayredundancygroupList(gateway::RedundancyGroupListArgs),
    /// Create a gateway redundant group
    GatewayredundancygroupCreate(gateway::RedundancyGroupCreateArgs),
    /// Show information for a given gateway redundant group id
    GatewayredundancygroupShow(IdArg),
    /// Delete a given gateway redundant group
    GatewayredundancygroupDelete(IdArg),
    /// Update key/value for a given gateway redundant group
    GatewayredundancygroupUpdate(KeyValueUpdateArgs),

    /// List all vPort tag
    VporttagList(vport::VporttagListArgs),
    /// List all vports for a given domain, l2domain, floatingip, vrs,
    /// vporttag, subnet or trunk
    VportList(vport::VportListArgs),
    /// Show information for a given vport id
    VportShow(IdArg),
    /// Update key/value for a given vport
    VportUpdate(KeyValueUpdateArgs),
    /// Delete a given vport
    VportDelete(IdArg),
    /// Add an vport to a given subnet or l2domain
    VportCreate(vport::VportCreateArgs),

    /// List all bridge interface for a given domain, l2domain or vport
    BridgeinterfaceList(vport::BridgeinterfaceListArgs),
    /// Show information for a given bridgeinterface id
    BridgeinterfaceShow(IdArg),
    /// Update key/value for a given bridgeinterface
    BridgeinterfaceUpdate(KeyValueUpdateArgs),
    /// Delete a given bridgeinterface
    BridgeinterfaceDelete(IdArg),
    /// Add an bridge interface to a given vport
    BridgeinterfaceCreate(vport::BridgeinterfaceCreateArgs),

    /// List all trunk in enterprise or attach to a vport
    TrunkList(vport::TrunkListArgs),
    /// Show information for a given trunk id
    TrunkShow(IdArg),
    /// Add a trunk on a given vport
    TrunkCreate(vport::TrunkCreateArgs),
    /// Delete a given trunk
    TrunkDelete(vport::TrunkDeleteArgs),

    /// List all virtual IP associated to a vport, a redirection target or a
    /// subnet
    VirtualipList(vport::VirtualipListArgs),
    /// Show information for a given virtual ip id
    VirtualipShow(IdArg),
    /// Delete a given virtual ip
    VirtualipDelete(IdArg),
    /// Add a virtual ip to a given vport
    VirtualipCreate(vport::VirtualipCreateArgs),
    /// Update key/value for a given virtualip
    VirtualipUpdate(KeyValueUpdateArgs),

    /// List statics route
    StaticrouteList(route::StaticrouteListArgs),
    /// Show information for a given static route id
    StaticrouteShow(IdArg),
    /// Create route for domain, l2domain, shared network or aggregate domain
    StaticrouteCreate(route::StaticrouteCreateArgs),
    /// Update key/value for a given static route
    StaticrouteUpdate(KeyValueUpdateArgs),
    /// Delete a given static route
    StaticrouteDelete(IdArg),

    /// List all metadata associated to any entity
    MetadataList(metadata::MetadataListArgs),
    /// Show information for a given metadata id
    MetadataShow(metadata::MetadataShowArgs),
    /// Create a metadata for a given entity ID
    MetadataCreate(metadata::MetadataCreateArgs),
    /// Update key/value for a given metadata
    MetadataUpdate(metadata::MetadataUpdateArgs),
    /// Add single or multiple tag to an existing metadata
    MetadataAddTag(metadata::MetadataTagEditArgs),
    /// Remove single or multiple tag from an existing metadata
    MetadataRemoveTag(metadata::MetadataTagEditArgs),
    /// Delete a given metadata
    MetadataDelete(IdArg),

    /// Show all metadata tags for a given enterprise or metadata
    MetadatatagList(metadata::MetadatatagListArgs),
    /// Show information for a given metadata tag id
    MetadatatagShow(IdArg),
    /// Add an metadatatag to a given enterprise
    MetadatatagCreate(metadata::MetadatatagCreateArgs),
    /// Delete a given metadatatag
    MetadatatagDelete(IdArg),
    /// Update key/value for a given metadatatag
    MetadatatagUpdate(KeyValueUpdateArgs),

    /// List all egress acl template for a given l2domaintemplate,
    /// domaintemplate, domain or l2domain
    EgressacltemplateList(policy::AclListArgs),
    /// Show information for a given egressacltemplate id
    EgressacltemplateShow(IdArg),
    /// Update key/value for a given egressacltemplate
    EgressacltemplateUpdate(KeyValueUpdateArgs),
    /// Delete a given egressacltemplate
    EgressacltemplateDelete(IdArg),
    /// Add an Egress ACL template to a given domain, l2domain,
    /// domaintemplate or l2domaintemplate
    EgressacltemplateCreate(policy::AclCreateArgs),

    /// List all ingress acl template for a given l2domaintemplate,
    /// domaintemplate, domain or l2domain
    IngressacltemplateList(policy::AclListArgs),
    /// Show information for a given ingressacltemplate id
    IngressacltemplateShow(IdArg),
    /// Update key/value for a given ingressacltemplate
    IngressacltemplateUpdate(KeyValueUpdateArgs),
    /// Delete a given ingressacltemplate
    IngressacltemplateDelete(IdArg),
    /// Add an Ingress ACL template to a given domain, l2domain,
    /// domaintemplate or l2domaintemplate
    IngressacltemplateCreate(policy::AclCreateArgs),

    /// List all dhcp option for a given entity
    DhcpOptionList(dhcp::DhcpOptionListArgs),
    /// Show information for a given dhcp option id
    DhcpOptionShow(IdArg),
    /// Delete a given dhcp option ID
    DhcpOptionDelete(IdArg),
    /// Add a dhcpoption (type, value, length) for a given entity
    DhcpOptionAdd(dhcp::DhcpOptionAddArgs),
    /// List all routes in dhcp option for a given entity
    DhcpRouteList(dhcp::DhcpRouteListArgs),
    /// Add route in dhcp option for a given entity
    DhcpRouteAdd(dhcp::DhcpRouteEditArgs),
    /// Remove route in dhcp option for a given entity
    DhcpRouteDelete(dhcp::DhcpRouteEditArgs),
    /// Show gateway in dhcp option for a given entity
    DhcpGatewayShow(dhcp::DhcpGatewayShowArgs),

    /// List all VMs
    VmList(vm::VmListArgs),
    /// Show information for a given VM ID
    VmShow(IdArg),
    /// Delete VM for a given ID
    VmDelete(IdArg),
    /// List VM interfaces
    VminterfaceList(vm::VminterfaceListArgs),
    /// Show information for a given VM interface ID
    VminterfaceShow(IdArg),
    /// Update key/value for a given vminterface
    VminterfaceUpdate(KeyValueUpdateArgs),

    /// List all vsp
    VspList(vsp::VspListArgs),
    /// Show information for a given vsp ID
    VspShow(IdArg),
    /// List all vsd for a given vsp
    VsdList(vsp::VsdListArgs),
    /// Show information for a given VSD ID
    VsdShow(vsp::VsdShowArgs),
    /// List components for a given VSD ID
    VsdComponentList(IdArg),
}

impl Command {
    pub async fn run(self, ctx: &mut Ctx) -> Result<()> {
        match self {
            Command::MeShow(args) => me::show(ctx, args).await,
            Command::FreeApi(args) => free_api::run(ctx, args).await,

            Command::LicenseList => license::list(ctx).await,
            Command::LicenseShow(args) => license::show(ctx, args).await,
            Command::LicenseCreate(args) => license::create(ctx, args).await,
            Command::LicenseDelete(args) => license::delete(ctx, args).await,

            Command::EnterpriseList(args) => enterprise::list(ctx, args).await,
            Command::EnterpriseShow(args) => enterprise::show(ctx, args).await,
            Command::EnterpriseCreate(args) => enterprise::create(ctx, args).await,
            Command::EnterpriseUpdate(args) => enterprise::update(ctx, args).await,
            Command::EnterpriseDelete(args) => enterprise::delete(ctx, args).await,

            Command::DomaintemplateList(args) => domain::domaintemplate_list(ctx, args).await,
            Command::DomaintemplateShow(args) => domain::domaintemplate_show(ctx, args).await,
            Command::DomaintemplateCreate(args) => domain::domaintemplate_create(ctx, args).await,
            Command::DomaintemplateUpdate(args) => domain::domaintemplate_update(ctx, args).await,
            Command::DomaintemplateDelete(args) => domain::domaintemplate_delete(ctx, args).await,

            Command::DomainList(args) => domain::domain_list(ctx, args).await,
            Command::DomainShow(args) => domain::domain_show(ctx, args).await,
            Command::DomainCreate(args) => domain::domain_create(ctx, args).await,
            Command::DomainUpdate(args) => domain::domain_update(ctx, args).await,
            Command::DomainDelete(args) => domain::domain_delete(ctx, args).await,

            Command::ZoneList(args) => domain::zone_list(ctx, args).await,
            Command::ZoneShow(args) => domain::zone_show(ctx, args).await,
            Command::ZoneCreate(args) => domain::zone_create(ctx, args).await,
            Command::ZoneDelete(args) => domain::zone_delete(ctx, args).await,

            Command::SubnetList(args) => subnet::subnet_list(ctx, args).await,
            Command::SubnetShow(args) => subnet::subnet_show(ctx, args).await,
            Command::SubnetCreate(args) => subnet::subnet_create(ctx, args).await,
            Command::SubnetUpdate(args) => subnet::subnet_update(ctx, args).await,
            Command::SubnetDelete(args) => subnet::subnet_delete(ctx, args).await,

            Command::SharedNetworkList(args) => subnet::shared_network_list(ctx, args).await,
            Command::SharedNetworkShow(args) => subnet::shared_network_show(ctx, args).await,

            Command::L2domainList(args) => subnet::l2domain_list(ctx, args).await,
            Command::L2domainShow(args) => subnet::l2domain_show(ctx, args).await,
            Command::L2domainCreate(args) => subnet::l2domain_create(ctx, args).await,
            Command::L2domainUpdate(args) => subnet::l2domain_update(ctx, args).await,
            Command::L2domainDelete(args) => subnet::l2domain_delete(ctx, args).await,

            Command::FloatingipList(args) => subnet::floatingip_list(ctx, args).await,
            Command::FloatingipShow(args) => subnet::floatingip_show(ctx, args).await,

            Command::UserList(args) => user::user_list(ctx, args).await,
            Command::UserShow(args) => user::user_show(ctx, args).await,
            Command::UserCreate(args) => user::user_create(ctx, args).await,
            Command::UserUpdate(args) => user::user_update(ctx, args).await,
            Command::UserDelete(args) => user::user_delete(ctx, args).await,

            Command::GroupList(args) => user::group_list(ctx, args).await,
            Command::GroupShow(args) => user::group_show(ctx, args).await,
            Command::GroupCreate(args) => user::group_create(ctx, args).await,
            Command::GroupUpdate(args) => user::group_update(ctx, args).await,
            Command::GroupDelete(args) => user::group_delete(ctx, args).await,
            Command::GroupAddUser(args) => user::group_add_user(ctx, args).await,
            Command::GroupDelUser(args) => user::group_del_user(ctx, args).await,

            Command::PermissionList(args) => user::permission_list(ctx, args).await,
            Command::PermissionShow(args) => user::permission_show(ctx, args).await,
            Command::AddPermission(args) => user::add_permission(ctx, args).await,

            Command::GatewayCreate(args) => gateway::create(ctx, args).await,
            Command::GatewayDelete(args) => gateway::delete(ctx, args).await,
            Command::GatewayList(args) => gateway::list(ctx, args).await,
            Command::GatewayShow(args) => gateway::show(ctx, args).await,
            Command::GatewayUpdate(args) => gateway::update(ctx, args).await,

            Command::PortList(args) => gateway::port_list(ctx, args).await,
            Command::PortShow(args) => gateway::port_show(ctx, args).await,
            Command::PortUpdate(args) => gateway::port_update(ctx, args).await,

            Command::VlanList(args) => gateway::vlan_list(ctx, args).await,
            Command::VlanShow(args) => gateway::vlan_show(ctx, args).await,
            Command::VlanCreate(args) => gateway::vlan_create(ctx, args).await,
            Command::VlanUpdate(args) => gateway::vlan_update(ctx, args).await,
            Command::VlanDelete(args) => gateway::vlan_delete(ctx, args).await,

            Command::GatewayredundancygroupList(args) => {
                gateway::redundancygroup_list(ctx, args).await
            }
            Command::GatewayredundancygroupCreate(args) => {
                gateway::redundancygroup_create(ctx, args).await
            }
            Command::GatewayredundancygroupShow(args) => {
                gateway::redundancygroup_show(ctx, args).await
            }
            Command::GatewayredundancygroupDelete(args) => {
                gateway::redundancygroup_delete(ctx, args).await
            }
            Command::GatewayredundancygroupUpdate(args) => {
                gateway::redundancygroup_update(ctx, args).await
            }

            Command::VporttagList(args) => vport::vporttag_list(ctx, args).await,
            Command::VportList(args) => vport::vport_list(ctx, args).await,
            Command::VportShow(args) => vport::vport_show(ctx, args).await,
            Command::VportUpdate(args) => vport::vport_update(ctx, args).await,
            Command::VportDelete(args) => vport::vport_delete(ctx, args).await,
            Command::VportCreate(args) => vport::vport_create(ctx, args).await,

            Command::BridgeinterfaceList(args) => vport::bridgeinterface_list(ctx, args).await,
            Command::BridgeinterfaceShow(args) => vport::bridgeinterface_show(ctx, args).await,
            Command::BridgeinterfaceUpdate(args) => vport::bridgeinterface_update(ctx, args).await,
            Command::BridgeinterfaceDelete(args) => vport::bridgeinterface_delete(ctx, args).await,
            Command::BridgeinterfaceCreate(args) => vport::bridgeinterface_create(ctx, args).await,

            Command::TrunkList(args) => vport::trunk_list(ctx, args).await,
            Command::TrunkShow(args) => vport::trunk_show(ctx, args).await,
            Command::TrunkCreate(args) => vport::trunk_create(ctx, args).await,
            Command::TrunkDelete(args) => vport::trunk_delete(ctx, args).await,

            Command::VirtualipList(args) => vport::virtualip_list(ctx, args).await,
            Command::VirtualipShow(args) => vport::virtualip_show(ctx, args).await,
            Command::VirtualipDelete(args) => vport::virtualip_delete(ctx, args).await,
            Command::VirtualipCreate(args) => vport::virtualip_create(ctx, args).await,
            Command::VirtualipUpdate(args) => vport::virtualip_update(ctx, args).await,

            Command::StaticrouteList(args) => route::list(ctx, args).await,
            Command::StaticrouteShow(args) => route::show(ctx, args).await,
            Command::StaticrouteCreate(args) => route::create(ctx, args).await,
            Command::StaticrouteUpdate(args) => route::update(ctx, args).await,
            Command::StaticrouteDelete(args) => route::delete(ctx, args).await,

            Command::MetadataList(args) => metadata::list(ctx, args).await,
            Command::MetadataShow(args) => metadata::show(ctx, args).await,
            Command::MetadataCreate(args) => metadata::create(ctx, args).await,
            Command::MetadataUpdate(args) => metadata::update(ctx, args).await,
            Command::MetadataAddTag(args) => metadata::add_tag(ctx, args).await,
            Command::MetadataRemoveTag(args) => metadata::remove_tag(ctx, args).await,
            Command::MetadataDelete(args) => metadata::delete(ctx, args).await,

            Command::MetadatatagList(args) => metadata::tag_list(ctx, args).await,
            Command::MetadatatagShow(args) => metadata::tag_show(ctx, args).await,
            Command::MetadatatagCreate(args) => metadata::tag_create(ctx, args).await,
            Command::MetadatatagDelete(args) => metadata::tag_delete(ctx, args).await,
            Command::MetadatatagUpdate(args) => metadata::tag_update(ctx, args).await,

            Command::EgressacltemplateList(args) => policy::egress_list(ctx, args).await,
            Command::EgressacltemplateShow(args) => policy::egress_show(ctx, args).await,
            Command::EgressacltemplateUpdate(args) => policy::egress_update(ctx, args).await,
            Command::EgressacltemplateDelete(args) => policy::egress_delete(ctx, args).await,
            Command::EgressacltemplateCreate(args) => policy::egress_create(ctx, args).await,

            Command::IngressacltemplateList(args) => policy::ingress_list(ctx, args).await,
            Command::IngressacltemplateShow(args) => policy::ingress_show(ctx, args).await,
            Command::IngressacltemplateUpdate(args) => policy::ingress_update(ctx, args).await,
            Command::IngressacltemplateDelete(args) => policy::ingress_delete(ctx, args).await,
            Command::IngressacltemplateCreate(args) => policy::ingress_create(ctx, args).await,

            Command::DhcpOptionList(args) => dhcp::option_list(ctx, args).await,
            Command::DhcpOptionShow(args) => dhcp::option_show(ctx, args).await,
            Command::DhcpOptionDelete(args) => dhcp::option_delete(ctx, args).await,
            Command::DhcpOptionAdd(args) => dhcp::option_add(ctx, args).await,
            Command::DhcpRouteList(args) => dhcp::route_list(ctx, args).await,
            Command::DhcpRouteAdd(args) => dhcp::route_add(ctx, args).await,
            Command::DhcpRouteDelete(args) => dhcp::route_delete(ctx, args).await,
            Command::DhcpGatewayShow(args) => dhcp::gateway_show(ctx, args).await,

            Command::VmList(args) => vm::vm_list(ctx, args).await,
            Command::VmShow(args) => vm::vm_show(ctx, args).await,
            Command::VmDelete(args) => vm::vm_delete(ctx, args).await,
            Command::VminterfaceList(args) => vm::vminterface_list(ctx, args).await,
            Command::VminterfaceShow(args) => vm::vminterface_show(ctx, args).await,
            Command::VminterfaceUpdate(args) => vm::vminterface_update(ctx, args).await,

            Command::VspList(args) => vsp::vsp_list(ctx, args).await,
            Command::VspShow(args) => vsp::vsp_show(ctx, args).await,
            Command::VsdList(args) => vsp::vsd_list(ctx, args).await,
            Command::VsdShow(args) => vsp::vsd_show(ctx, args).await,
            Command::VsdComponentList(args) => vsp::vsd_component_list(ctx, args).await,
        }
    }
}
