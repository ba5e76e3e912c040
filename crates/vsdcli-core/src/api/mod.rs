//! HTTP session client for the VSD REST API.
//!
//! [`VsdClient`] owns the authentication state (see [`crate::auth`]) and
//! exposes the four generic verbs the CLI commands are built on. GET
//! transparently aggregates paginated responses.

pub mod client;
pub mod error;

pub use client::{Body, Verb, VsdClient};
pub use error::VsdError;
