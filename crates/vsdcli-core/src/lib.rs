//! Core library for vsdcli - session, authentication and pagination logic
//! for the Nuage VSD REST API.
//!
//! The CLI frontend maps subcommands onto the generic verb methods exposed
//! by [`VsdClient`]; everything resource-specific (paths, table columns)
//! stays out of this crate. Resource objects are passed through as opaque
//! [`serde_json::Value`]s.

pub mod api;
pub mod auth;
pub mod config;

pub use api::{Body, Verb, VsdClient, VsdError};
pub use auth::{ApiKeyCache, ApiKeyRecord};
pub use config::Config;
