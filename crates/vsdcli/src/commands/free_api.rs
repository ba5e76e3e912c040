//! `free-api` - build your own API call against any resource path.

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use serde_json::Value;

use vsdcli_core::{Body, Verb};

use super::Ctx;
use crate::utils;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HttpVerb {
    #[value(name = "GET")]
    Get,
    #[value(name = "POST")]
    Post,
    #[value(name = "PUT")]
    Put,
    #[value(name = "DELETE")]
    Delete,
}

impl From<HttpVerb> for Verb {
    fn from(verb: HttpVerb) -> Self {
        match verb {
            HttpVerb::Get => Verb::Get,
            HttpVerb::Post => Verb::Post,
            HttpVerb::Put => Verb::Put,
            HttpVerb::Delete => Verb::Delete,
        }
    }
}

#[derive(Args)]
pub struct FreeApiArgs {
    /// Resource path below the versioned API base
    #[arg(value_name = "resource")]
    pub resource: String,
    /// Default : GET
    #[arg(long, value_enum, default_value = "GET")]
    pub verb: HttpVerb,
    /// Add header to the request. Can be repeated.
    #[arg(long = "header", value_name = "name:value")]
    pub header: Vec<String>,
    /// Specify body in key/value pair. Can be repeated. Incompatible with --body.
    #[arg(long = "key-value", value_name = "key:value")]
    pub key_value: Vec<String>,
    /// Specify body of the request in json format. Incompatible with --key-value.
    #[arg(long, value_name = "data json")]
    pub body: Option<String>,
}

pub async fn run(ctx: &mut Ctx, args: FreeApiArgs) -> Result<()> {
    if !args.key_value.is_empty() && args.body.is_some() {
        bail!("Use body or key-value");
    }
    let headers = utils::header_pairs(&args.header)?;
    let params = utils::key_value_params(&args.key_value)?;

    let body = match args.body.as_deref() {
        Some(raw) => {
            if serde_json::from_str::<Value>(raw).is_err() {
                bail!("Body could not be decoded as JSON");
            }
            // validated above, but transmitted exactly as given
            Some(Body::Raw(raw))
        }
        None if !args.key_value.is_empty() => Some(Body::Json(&params)),
        None => None,
    };

    let result = ctx
        .client
        .request(args.verb.into(), &args.resource, body, None, &headers)
        .await?;
    println!("{}", serde_json::to_string_pretty(&Value::Array(result))?);
    Ok(())
}
