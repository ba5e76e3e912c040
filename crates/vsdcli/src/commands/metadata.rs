//! Metadata and metadata tag commands.
//!
//! Metadata carries an opaque `blob` that is excluded from table output;
//! `--global` switches every path from `metadatas` to `globalmetadatas`.

use anyhow::{bail, Result};
use clap::Args;
use prettytable::{row, Table};
use serde_json::{json, Value};

use super::{create_object, first, show_object, Ctx, IdArg, KeyValueUpdateArgs};
use crate::output::{cell, print_object};
use crate::utils::key_value_params;

fn metadata_path(id: &str, is_global: bool) -> String {
    if is_global {
        format!("globalmetadatas/{id}")
    } else {
        format!("metadatas/{id}")
    }
}

fn tag_table(tags: &[Value]) {
    let mut table = Table::new();
    table.set_titles(row!["ID", "name", "description"]);
    for line in tags {
        table.add_row(row![
            cell(line, "ID"),
            cell(line, "name"),
            cell(line, "description")
        ]);
    }
    table.printstd();
}

#[derive(Args)]
pub struct MetadataListArgs {
    /// Can be any entity in VSD
    #[arg(long, value_name = "name")]
    pub entity: String,
    /// ID of the entity
    #[arg(long, value_name = "ID")]
    pub id: String,
    /// Show global metadata instead of local
    #[arg(long = "global")]
    pub is_global: bool,
    /// Filter for name, description, blob, global,
    /// networkNotificationDisabled, ID, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn list(ctx: &mut Ctx, args: MetadataListArgs) -> Result<()> {
    let collection = if args.is_global {
        "globalmetadatas"
    } else {
        "metadatas"
    };
    let path = format!("{}s/{}/{collection}", args.entity, args.id);
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    tag_table(&result);
    Ok(())
}

#[derive(Args)]
pub struct MetadataShowArgs {
    /// Metadata ID
    #[arg(value_name = "Metadata ID")]
    pub id: String,
    /// Show data content only. Preemptive option on list-tag
    #[arg(long)]
    pub data: bool,
    /// Show global metadata instead of local
    #[arg(long = "global")]
    pub is_global: bool,
    /// List tag for this metadata
    #[arg(long = "list-tag")]
    pub list_tag: bool,
}

pub async fn show(ctx: &mut Ctx, args: MetadataShowArgs) -> Result<()> {
    let path = metadata_path(&args.id, args.is_global);
    let reply = ctx.client.get(&path, None).await?;
    let object = first(&reply, &path)?.clone();
    if args.data {
        println!("{}", cell(&object, "blob"));
        return Ok(());
    }
    if !args.list_tag {
        print_object(&object, ctx.show_only(), &["blob"]);
        return Ok(());
    }
    let mut tags = Vec::new();
    if let Some(tag_ids) = object["metadataTagIDs"].as_array() {
        for tag_id in tag_ids {
            let tag_path = format!("metadatatags/{}", tag_id.as_str().unwrap_or_default());
            let reply = ctx.client.get(&tag_path, None).await?;
            tags.push(first(&reply, &tag_path)?.clone());
        }
    }
    tag_table(&tags);
    Ok(())
}

#[derive(Args)]
pub struct MetadataCreateArgs {
    /// Metadata name
    #[arg(value_name = "name")]
    pub name: String,
    /// Can be any entity in VSD
    #[arg(long, value_name = "name")]
    pub entity: String,
    /// ID of the entity
    #[arg(long, value_name = "ID")]
    pub id: String,
    /// tag's ID to add. Can be repeated
    #[arg(long, value_name = "ID")]
    pub tag: Vec<String>,
    /// Metadata that describes about the entity attached to it.
    #[arg(long)]
    pub data: String,
}

pub async fn create(ctx: &mut Ctx, args: MetadataCreateArgs) -> Result<()> {
    let mut params = json!({
        "name": args.name,
        "blob": args.data,
    });
    if !args.tag.is_empty() {
        params["metadataTagIDs"] = json!(args.tag);
    }
    let path = format!("{}s/{}/metadatas", args.entity, args.id);
    create_object(ctx, &path, &params, &["blob"]).await
}

#[derive(Args)]
pub struct MetadataUpdateArgs {
    /// Metadata ID
    #[arg(value_name = "metadata ID")]
    pub id: String,
    /// Attribute to set, as key:value. Can be repeated.
    #[arg(long = "key-value", value_name = "key:value")]
    pub key_value: Vec<String>,
    /// Update global metadata instead of local
    #[arg(long = "global")]
    pub is_global: bool,
}

pub async fn update(ctx: &mut Ctx, args: MetadataUpdateArgs) -> Result<()> {
    let path = metadata_path(&args.id, args.is_global);
    let params = key_value_params(&args.key_value)?;
    ctx.client.put(&path, &params).await?;
    show_object(ctx, &path, &["blob"]).await
}

#[derive(Args)]
pub struct MetadataTagEditArgs {
    /// Metadata ID
    #[arg(value_name = "metadata ID")]
    pub id: String,
    /// tag's ID to add or remove. Can be repeated
    #[arg(long, value_name = "ID", required = true)]
    pub tag: Vec<String>,
    /// Update global metadata instead of local
    #[arg(long = "global")]
    pub is_global: bool,
}

async fn current_tags(ctx: &mut Ctx, path: &str) -> Result<Vec<String>> {
    let reply = ctx.client.get(path, None).await?;
    let object = first(&reply, path)?;
    Ok(object["metadataTagIDs"]
        .as_array()
        .map(|ids| {
            ids.iter()
                .filter_map(|id| id.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default())
}

pub async fn add_tag(ctx: &mut Ctx, args: MetadataTagEditArgs) -> Result<()> {
    let path = metadata_path(&args.id, args.is_global);
    let mut tags = current_tags(ctx, &path).await?;
    tags.extend(args.tag.iter().cloned());
    ctx.client
        .put(&path, &json!({"metadataTagIDs": tags}))
        .await?;
    show_object(ctx, &path, &["blob"]).await
}

pub async fn remove_tag(ctx: &mut Ctx, args: MetadataTagEditArgs) -> Result<()> {
    let path = metadata_path(&args.id, args.is_global);
    let existing = current_tags(ctx, &path).await?;
    if existing.is_empty() {
        bail!("There is no tag for metadata {}", args.id);
    }
    let kept: Vec<String> = existing
        .iter()
        .filter(|tag| !args.tag.contains(tag))
        .cloned()
        .collect();
    if kept.len() == existing.len() {
        bail!("None of given tag exists in metadata {}", args.id);
    }
    ctx.client
        .put(&path, &json!({"metadataTagIDs": kept}))
        .await?;
    show_object(ctx, &path, &["blob"]).await
}

pub async fn delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client.delete(&format!("metadatas/{}", args.id)).await?;
    Ok(())
}

#[derive(Args)]
pub struct MetadatatagListArgs {
    #[arg(long = "enterprise-id", value_name = "ID")]
    pub enterprise_id: Option<String>,
    #[arg(long = "metadata-id", value_name = "ID")]
    pub metadata_id: Option<String>,
    /// Filter for name, description, associatedExternalServiceID,
    /// autoCreated, ID, externalID
    #[arg(long, value_name = "filter")]
    pub filter: Option<String>,
}

pub async fn tag_list(ctx: &mut Ctx, args: MetadatatagListArgs) -> Result<()> {
    let path = if let Some(enterprise_id) = args.enterprise_id {
        format!("enterprises/{enterprise_id}/metadatatags")
    } else if let Some(metadata_id) = args.metadata_id {
        format!("metadatas/{metadata_id}/metadatatags")
    } else {
        "metadatatags".to_string()
    };
    let result = ctx.client.get(&path, args.filter.as_deref()).await?;
    tag_table(&result);
    Ok(())
}

pub async fn tag_show(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    show_object(ctx, &format!("metadatatags/{}", args.id), &[]).await
}

#[derive(Args)]
pub struct MetadatatagCreateArgs {
    /// Tag name
    #[arg(value_name = "name")]
    pub name: String,
    /// CSPROOT can create DC associated tag if enterprise id is not specified
    #[arg(long = "enterprise-id", value_name = "ID")]
    pub enterprise_id: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

pub async fn tag_create(ctx: &mut Ctx, args: MetadatatagCreateArgs) -> Result<()> {
    let path = match args.enterprise_id {
        Some(enterprise_id) => format!("enterprises/{enterprise_id}/metadatatags"),
        None => "metadatatags".to_string(),
    };
    let params = json!({
        "name": args.name,
        "description": args.description,
    });
    create_object(ctx, &path, &params, &[]).await
}

pub async fn tag_delete(ctx: &mut Ctx, args: IdArg) -> Result<()> {
    ctx.client
        .delete(&format!("metadatatags/{}", args.id))
        .await?;
    Ok(())
}

pub async fn tag_update(ctx: &mut Ctx, args: KeyValueUpdateArgs) -> Result<()> {
    let path = format!("metadatatags/{}", args.id);
    let params = key_value_params(&args.key_value)?;
    ctx.client.put(&path, &params).await?;
    show_object(ctx, &path, &[]).await
}
