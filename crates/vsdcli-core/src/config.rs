//! Connection configuration for a VSD API session.
//!
//! Collects everything the CLI's global options and `VSD_*` environment
//! variables describe: endpoint, credentials, organization scope, proxy
//! settings and the debug/force-auth toggles.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Proxy};

/// HTTP request timeout in seconds.
/// VSD answers fast or not at all; there is no retry, so fail quickly.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Per-user directory holding the credential-cache files.
const CACHE_DIR_NAME: &str = ".vsd";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// API root, e.g. `https://vsd.example.com:8443/nuage/api`.
    pub api_url: String,
    /// API version segment, e.g. `5_0`.
    pub version: String,
    pub username: String,
    pub password: String,
    /// Organization scope sent as `X-Nuage-Organization` on every request.
    pub enterprise: String,
    /// Ignore any proxy from the process environment.
    pub disable_proxy: bool,
    pub http_proxy: Option<String>,
    pub https_proxy: Option<String>,
    /// Echo requests and responses to the operator.
    pub debug: bool,
    /// Skip the credential cache and re-authenticate unconditionally.
    pub force_auth: bool,
    /// Overrides the default `~/.vsd` cache directory.
    pub cache_dir: Option<PathBuf>,
}

impl Config {
    /// Versioned API base, always with a single trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}/v{}/", self.api_url.trim_end_matches('/'), self.version)
    }

    /// Full URL for a resource path, tolerating a leading slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path.trim_start_matches('/'))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.cache_dir {
            return Ok(dir.clone());
        }
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(CACHE_DIR_NAME))
    }

    /// Credential-cache file for this (host, username, enterprise) profile.
    ///
    /// Keying by profile keeps tokens for different accounts or VSDs from
    /// clobbering each other.
    pub fn cache_file(&self) -> Result<PathBuf> {
        let host = host_of(&self.api_url);
        let profile = sanitize(&format!(
            "{}-{}-{}",
            host, self.username, self.enterprise
        ));
        Ok(self.cache_dir()?.join(format!("{profile}.json")))
    }

    /// Build the HTTP client: short timeout, no TLS verification (VSD
    /// installs routinely run self-signed certificates), proxies as
    /// configured.
    pub fn http_client(&self) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .danger_accept_invalid_certs(true);
        if self.disable_proxy {
            builder = builder.no_proxy();
        } else if let Some(ref http) = self.http_proxy {
            builder = builder.proxy(Proxy::http(with_scheme(http))?);
            let https = self.https_proxy.as_deref().unwrap_or(http);
            builder = builder.proxy(Proxy::https(with_scheme(https))?);
        }
        builder.build().context("Failed to build HTTP client")
    }
}

fn host_of(api_url: &str) -> &str {
    let rest = api_url
        .strip_prefix("https://")
        .or_else(|| api_url.strip_prefix("http://"))
        .unwrap_or(api_url);
    rest.split('/').next().unwrap_or(rest)
}

fn sanitize(profile: &str) -> String {
    profile
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Proxies are usually given as bare `host:port`; reqwest wants a URL.
fn with_scheme(proxy: &str) -> String {
    if proxy.contains("://") {
        proxy.to_string()
    } else {
        format!("http://{proxy}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_url: &str) -> Config {
        Config {
            api_url: api_url.to_string(),
            version: "5_0".to_string(),
            username: "csproot".to_string(),
            enterprise: "csp".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn base_url_joins_single_slash() {
        let cfg = config("https://vsd.example.com:8443/nuage/api");
        assert_eq!(
            cfg.base_url(),
            "https://vsd.example.com:8443/nuage/api/v5_0/"
        );
        // trailing slash on the configured URL must not double up
        let cfg = config("https://vsd.example.com:8443/nuage/api/");
        assert_eq!(
            cfg.endpoint("/enterprises"),
            "https://vsd.example.com:8443/nuage/api/v5_0/enterprises"
        );
    }

    #[test]
    fn cache_file_is_keyed_by_profile() {
        let mut a = config("https://vsd-a.example.com:8443/nuage/api");
        let mut b = config("https://vsd-b.example.com:8443/nuage/api");
        a.cache_dir = Some(PathBuf::from("/tmp/vsd-test"));
        b.cache_dir = Some(PathBuf::from("/tmp/vsd-test"));
        let file_a = a.cache_file().unwrap();
        let file_b = b.cache_file().unwrap();
        assert_ne!(file_a, file_b);
        assert_eq!(
            file_a.file_name().unwrap().to_str().unwrap(),
            "vsd_a_example_com_8443_csproot_csp.json"
        );
    }
}
