//! Credential caching for VSD API keys.
//!
//! An API key obtained from `GET me` is persisted to disk together with its
//! server-side expiry and the time it was fetched, so that consecutive CLI
//! invocations can skip the authentication round-trip while the key is
//! still usable.

pub mod session;

pub use session::{ApiKeyCache, ApiKeyRecord};
