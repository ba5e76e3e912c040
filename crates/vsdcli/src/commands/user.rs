//! User, group and permission commands.

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use prettytable::{row, Table};
use serde_json::{json, Value};
use sha1::{Digest, Sha1};

use super::{create_object, show_object, update_object, Ctx, IdArg, KeyValueUpdateArgs};
use crate::output::cell;
use crate::utils::check_id;

#[derive(Args)]
pub struct UserListArgs {
    #[arg(long = "enterprise-id", value_name = "id")]
    pub enterprise_id: Option<String>,
    #[arg(long = "group-id", value_name = "id")]
    pub group_id: Option<String>,
    /// Filter for firstName, lastName, userName, email, lastUpdatedDate,
    /// creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn user_list(ctx: &mut Ctx, args: UserListArgs) -> Result<()> {
    let (kind, id) = check_id(&[
        ("enterprise", args.enterprise_id.as_deref()),
        ("group", args.group_id.as_deref()),
    ])?;
    let path = format!("{kind}s/{id}/users");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "User name", "First name", "Last name", "Email"]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "userName"),
            cell(line, "firstName"),
            cell(line, "lastName"),
            cell(line, "email")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn user_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("users/{}", args.id), &[]).await
}

#[derive(Args)]
pub struct UserCreateArgs {
    /// Login name
    #[arg(value_name = "username")]
    pub username: String,
    #[arg(long, value_name = "lastname")]
    pub lastname: String,
    #[arg(long, value_name = "firstname")]
    pub firstname: String,
    #[arg(long, value_name = "email")]
    pub email: String,
    /// Password; sent as its SHA-1 hexdigest, as the API expects
    #[arg(long, value_name = "password")]
    pub password: String,
    #[arg(long = "enterprise-id", value_name = "enterprise ID")]
    pub enterprise_id: String,
}

pub async fn user_create(ctx: &mut Ctx, args: UserCreateArgs) -> Result<()> {
    let digest = format!("{:x}", Sha1::digest(args.password.as_bytes()));
    let params = json!({
        "userName": args.username,
        "firstName": args.firstname,
        "lastName": args.lastname,
        "email": args.email,
        "password": digest,
    });
    let path = format!("enterprises/{}/users", args.enterprise_id);
    create_object(ctx, &path, &params, &[]).await
}

pub async fn user_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(ctx, &format!("users/{}", args.id), &args.key_value, &[]).await
}

pub async fn user_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client.delete(&format!("users/{}", args.id)).await?;
    Ok(())
}

#[derive(Args)]
pub struct GroupListArgs {
    #[arg(long = "enterprise-id", value_name = "id")]
    pub enterprise_id: Option<String>,
    #[arg(long = "user-id", value_name = "id")]
    pub user_id: Option<String>,
    /// Filter for name, description, role, private, lastUpdatedDate,
    /// creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn group_list(ctx: &mut Ctx, args: GroupListArgs) -> Result<()> {
    let (kind, id) = check_id(&[
        ("enterprise", args.enterprise_id.as_deref()),
        ("user", args.user_id.as_deref()),
    ])?;
    let path = format!("{kind}s/{id}/groups");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "Name", "Description", "Role", "Private"]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "name"),
            cell(line, "description"),
            cell(line, "role"),
            cell(line, "private")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn group_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("groups/{}", args.id), &[]).await
}

#[derive(Args)]
pub struct GroupCreateArgs {
    /// Group name
    #[arg(value_name = "Group name")]
    pub name: String,
    #[arg(long = "enterprise-id", value_name = "enterprise ID")]
    pub enterprise_id: String,
    #[arg(long, value_name = "description")]
    pub description: Option<String>,
    /// Restrict the group to its members
    #[arg(long)]
    pub private: bool,
}

pub async fn group_create(ctx: &mut Ctx, args: GroupCreateArgs) -> Result<()> {
    let mut params = json!({"name": args.name});
    if let Some(description) = args.description {
        params["description"] = json!(description);
    }
    if args.private {
        params["private"] = json!(true);
    }
    let path = format!("enterprises/{}/groups", args.enterprise_id);
    create_object(ctx, &path, &params, &[]).await
}

pub async fn group_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    update_object(ctx, &format!("groups/{}", args.id), &args.key_value, &[]).await
}

pub async fn group_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client.delete(&format!("groups/{}", args.id)).await?;
    Ok(())
}

#[derive(Args)]
pub struct GroupUserArgs {
    /// Group ID
    #[arg(value_name = "group ID")]
    pub group_id: String,
    /// User ID
    #[arg(long = "user-id", value_name = "user ID")]
    pub user_id: String,
}

/// Membership is replaced wholesale: fetch the current user list, edit it,
/// PUT the full ID array back.
pub async fn group_add_user(ctx: &mut Ctx, args: GroupUserArgs) -> Result<()> {
    let path = format!("groups/{}/users", args.group_id);
    let users = ctx.client.get(&path, None).await?;
    let mut ids: Vec<Value> = users.iter().filter_map(|u| u.get("ID").cloned()).collect();
    ids.push(json!(args.user_id));
    ctx.client.put(&path, &Value::Array(ids)).await?;
    Ok(())
}

pub async fn group_del_user(ctx: &mut Ctx, args: GroupUserArgs) -> Result<()> {
    let path = format!("groups/{}/users", args.group_id);
    let users = ctx.client.get(&path, None).await?;
    let ids: Vec<Value> = users
        .iter()
        .filter_map(|u| u.get("ID").cloned())
        .filter(|id| id.as_str() != Some(args.user_id.as_str()))
        .collect();
    if ids.len() == users.len() {
        bail!("User not present in the group");
    }
    ctx.client.put(&path, &Value::Array(ids)).await?;
    Ok(())
}

/// The entities a permission can be scoped to; shared by `permission-list`
/// and `add-permission`.
#[derive(Args)]
pub struct PermissionScopeArgs {
    #[arg(long = "zone-id", value_name = "id")]
    pub zone_id: Option<String>,
    #[arg(long = "domaintemplate-id", value_name = "id")]
    pub domaintemplate_id: Option<String>,
    #[arg(long = "redundancygroup-id", value_name = "id")]
    pub redundancygroup_id: Option<String>,
    #[arg(long = "gateway-id", value_name = "id")]
    pub gateway_id: Option<String>,
    #[arg(long = "vlan-id", value_name = "id")]
    pub vlan_id: Option<String>,
    #[arg(long = "domain-id", value_name = "id")]
    pub domain_id: Option<String>,
    #[arg(long = "service-id", value_name = "id")]
    pub service_id: Option<String>,
    #[arg(long = "port-id", value_name = "id")]
    pub port_id: Option<String>,
    #[arg(long = "l2domain-id", value_name = "id")]
    pub l2domain_id: Option<String>,
    #[arg(long = "l2domaintemplate-id", value_name = "id")]
    pub l2domaintemplate_id: Option<String>,
}

impl PermissionScopeArgs {
    fn scope(&self) -> Result<(String, String)> {
        check_id(&[
            ("zone", self.zone_id.as_deref()),
            ("domaintemplate", self.domaintemplate_id.as_deref()),
            ("redundancygroup", self.redundancygroup_id.as_deref()),
            ("gateway", self.gateway_id.as_deref()),
            ("vlan", self.vlan_id.as_deref()),
            ("domain", self.domain_id.as_deref()),
            ("service", self.service_id.as_deref()),
            ("port", self.port_id.as_deref()),
            ("l2domain", self.l2domain_id.as_deref()),
            ("l2domaintemplate", self.l2domaintemplate_id.as_deref()),
        ])
    }
}

#[derive(Args)]
pub struct PermissionListArgs {
    #[command(flatten)]
    pub scope: PermissionScopeArgs,
    /// Filter for name, lastUpdatedDate, creationDate, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn permission_list(ctx: &mut Ctx, args: PermissionListArgs) -> Result<()> {
    let (kind, id) = args.scope.scope()?;
    let path = format!("{kind}s/{id}/permissions");
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    let mut table = Table::new();
    table.set_titles(row!["ID", "Action", "Entity ID", "Entity type", "Entity name"]);
    for line in &result {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "permittedAction"),
            cell(line, "permittedEntityID"),
            cell(line, "permittedEntityType"),
            cell(line, "permittedEntityName")
        ]);
    }
    table.printstd();
    Ok(())
}

pub async fn permission_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("permissions/{}", args.id), &[]).await
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PermittedAction {
    #[value(name = "USE")]
    Use,
    #[value(name = "EXTEND")]
    Extend,
    #[value(name = "READ")]
    Read,
    #[value(name = "INSTANTIATE")]
    Instantiate,
}

impl PermittedAction {
    fn as_str(self) -> &'static str {
        match self {
            PermittedAction::Use => "USE",
            PermittedAction::Extend => "EXTEND",
            PermittedAction::Read => "READ",
            PermittedAction::Instantiate => "INSTANTIATE",
        }
    }
}

#[derive(Args)]
pub struct AddPermissionArgs {
    /// Group or user to grant the permission to
    #[arg(value_name = "group or user ID")]
    pub entity_id: String,
    /// Default : USE
    #[arg(long, value_enum, default_value = "USE")]
    pub action: PermittedAction,
    #[command(flatten)]
    pub scope: PermissionScopeArgs,
}

pub async fn add_permission(ctx: &mut Ctx, args: AddPermissionArgs) -> Result<()> {
    let (kind, id) = args.scope.scope()?;
    let params = json!({
        "permittedEntityID": args.entity_id,
        "permittedAction": args.action.as_str(),
    });
    ctx.client
        .post(&format!("{kind}s/{id}/permissions"), &params)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_digest_matches_known_sha1() {
        let digest = format!("{:x}", Sha1::digest(b"password"));
        assert_eq!(digest, "5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8");
    }
}
