//! The VSD session client.
//!
//! One [`VsdClient`] lives for one CLI invocation. Every verb call first
//! ensures a valid API key (replayed from the on-disk cache when possible,
//! fetched from `GET me` otherwise), then executes with a header set
//! computed fresh for that request - nothing mutable is shared between
//! calls, so a filter or page header can never leak into an unrelated
//! request.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::api::error::VsdError;
use crate::auth::{ApiKeyCache, ApiKeyRecord};
use crate::config::Config;

const ORGANIZATION: HeaderName = HeaderName::from_static("x-nuage-organization");
const FILTER: HeaderName = HeaderName::from_static("x-nuage-filter");
const PAGE: HeaderName = HeaderName::from_static("x-nuage-page");
const PAGE_SIZE: HeaderName = HeaderName::from_static("x-nuage-pagesize");
const COUNT: HeaderName = HeaderName::from_static("x-nuage-count");

/// VSD's non-standard authorization scheme.
const AUTH_SCHEME: &str = "XREST";

/// The "who am I" endpoint doubles as the authentication endpoint.
const ME: &str = "me";

/// The four operations the API supports. `free-api` parses its `--verb`
/// into this enum; there is no string-keyed dispatch anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

/// Request payload for POST/PUT.
pub enum Body<'a> {
    /// Parameters serialized to JSON. Arrays are legal - group membership
    /// is updated by PUTting a bare list of user IDs.
    Json(&'a Value),
    /// A pre-serialized payload, transmitted byte-for-byte. Used for
    /// blobs that are already encoded, never re-serialized.
    Raw(&'a str),
}

struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

pub struct VsdClient {
    http: Client,
    config: Config,
    cache: ApiKeyCache,
    /// Key installed for this invocation; replaces the password in the
    /// Authorization value once set.
    api_key: Option<String>,
}

impl VsdClient {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = config.http_client()?;
        let cache = ApiKeyCache::new(config.cache_file()?);
        Ok(Self {
            http,
            config,
            cache,
            api_key: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Guarantee the next request carries a currently-valid API key.
    ///
    /// Policy, in order: an already-installed key is kept (one auth call at
    /// most per invocation); `--force-auth` or a missing record forces
    /// authentication; so do an expired record and one older than the
    /// refresh window. Otherwise the cached key is replayed with no HTTP
    /// traffic at all.
    pub async fn authenticate(&mut self) -> Result<(), VsdError> {
        if self.api_key.is_some() {
            return Ok(());
        }
        if !self.config.force_auth {
            if let Some(record) = self.cache.load() {
                if record.is_reusable() {
                    debug!(path = %self.cache.path().display(), "reusing cached API key");
                    self.api_key = Some(record.api_key);
                    return Ok(());
                }
            }
        }

        debug!("requesting a new API key");
        let reply = self.fetch_me().await?;
        let identity = reply
            .first()
            .and_then(|value| serde_json::from_value::<Identity>(value.clone()).ok())
            .ok_or_else(|| {
                VsdError::UnknownApi("authentication reply carries no APIKey".to_string())
            })?;
        let record = ApiKeyRecord::new(identity.api_key, identity.api_key_expiry);
        self.cache
            .save(&record)
            .map_err(|err| VsdError::Cache(err.to_string()))?;
        self.api_key = Some(record.api_key);
        Ok(())
    }

    /// `GET me` with whatever credential is current. Does not authenticate
    /// first; the response itself carries the APIKey.
    pub async fn me(&self) -> Result<Vec<Value>, VsdError> {
        self.fetch_me().await
    }

    pub async fn get(&mut self, path: &str, filter: Option<&str>) -> Result<Vec<Value>, VsdError> {
        self.request(Verb::Get, path, None, filter, &[]).await
    }

    pub async fn post(&mut self, path: &str, params: &Value) -> Result<Vec<Value>, VsdError> {
        self.request(Verb::Post, path, Some(Body::Json(params)), None, &[])
            .await
    }

    pub async fn put(&mut self, path: &str, params: &Value) -> Result<Vec<Value>, VsdError> {
        self.request(Verb::Put, path, Some(Body::Json(params)), None, &[])
            .await
    }

    pub async fn delete(&mut self, path: &str) -> Result<Vec<Value>, VsdError> {
        self.request(Verb::Delete, path, None, None, &[]).await
    }

    /// Generic entry point; the named verbs above and `free-api` all land
    /// here. Extra headers override the computed set.
    pub async fn request(
        &mut self,
        verb: Verb,
        path: &str,
        body: Option<Body<'_>>,
        filter: Option<&str>,
        extra_headers: &[(String, String)],
    ) -> Result<Vec<Value>, VsdError> {
        self.authenticate().await?;
        if verb == Verb::Get {
            self.paged_get(path, filter, extra_headers).await
        } else {
            let raw = self
                .execute(verb, path, body.as_ref(), None, filter, extra_headers)
                .await?;
            validate(raw)
        }
    }

    async fn fetch_me(&self) -> Result<Vec<Value>, VsdError> {
        let raw = self.execute(Verb::Get, ME, None, None, None, &[]).await?;
        validate(raw)
    }

    /// Aggregate every page of a collection. The server signals the last
    /// page arithmetically: once `pageSize * (pageIndex + 1)` reaches the
    /// total count - or any of the three counters is missing - we stop.
    async fn paged_get(
        &self,
        path: &str,
        filter: Option<&str>,
        extra_headers: &[(String, String)],
    ) -> Result<Vec<Value>, VsdError> {
        let mut objects = Vec::new();
        let mut page: u64 = 0;
        loop {
            let raw = self
                .execute(Verb::Get, path, None, Some(page), filter, extra_headers)
                .await?;
            let last = is_last_page(&raw.headers);
            objects.extend(validate(raw)?);
            if last {
                return Ok(objects);
            }
            page += 1;
        }
    }

    async fn execute(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&Body<'_>>,
        page: Option<u64>,
        filter: Option<&str>,
        extra_headers: &[(String, String)],
    ) -> Result<RawResponse, VsdError> {
        let url = self.config.endpoint(path);
        let headers = self.request_headers(page, filter, extra_headers)?;
        if self.config.debug {
            echo_request(verb, &url, &headers, body);
        }

        let mut request = self.http.request(verb.method(), &url).headers(headers);
        request = match body {
            Some(Body::Json(value)) => request.json(value),
            Some(Body::Raw(payload)) => request.body(payload.to_string()),
            None => request,
        };
        let response = request.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        if self.config.debug {
            echo_response(status, &headers, &body);
        }
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Headers for one request, computed from scratch every time.
    fn request_headers(
        &self,
        page: Option<u64>,
        filter: Option<&str>,
        extra_headers: &[(String, String)],
    ) -> Result<HeaderMap, VsdError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ORGANIZATION, HeaderValue::from_str(&self.config.enterprise)?);
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&self.credential())?);
        if let Some(filter) = filter {
            headers.insert(FILTER, HeaderValue::from_str(filter)?);
        }
        if let Some(page) = page {
            headers.insert(PAGE, HeaderValue::from_str(&page.to_string())?);
        }
        for (name, value) in extra_headers {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            headers.insert(name, HeaderValue::from_str(value)?);
        }
        Ok(headers)
    }

    /// `XREST base64(user:secret)` - the password until authentication has
    /// installed an API key, the key afterwards.
    fn credential(&self) -> String {
        let secret = self.api_key.as_deref().unwrap_or(&self.config.password);
        let token = URL_SAFE.encode(format!("{}:{}", self.config.username, secret));
        format!("{AUTH_SCHEME} {token}")
    }
}

#[derive(Deserialize)]
struct Identity {
    #[serde(rename = "APIKey")]
    api_key: String,
    #[serde(rename = "APIKeyExpiry")]
    api_key_expiry: i64,
}

fn header_u64(headers: &HeaderMap, name: &HeaderName) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.parse().ok()
}

fn is_last_page(headers: &HeaderMap) -> bool {
    match (
        header_u64(headers, &PAGE_SIZE),
        header_u64(headers, &PAGE),
        header_u64(headers, &COUNT),
    ) {
        (Some(size), Some(index), Some(count)) => size * (index + 1) >= count,
        _ => true,
    }
}

/// Uniform response validation: 401 is an authentication failure wherever
/// it appears, other non-2xx statuses surface the server's error
/// description, an empty body is an empty result list.
fn validate(raw: RawResponse) -> Result<Vec<Value>, VsdError> {
    if raw.status == StatusCode::UNAUTHORIZED {
        return Err(VsdError::AuthenticationFailed);
    }
    if !raw.status.is_success() {
        return Err(VsdError::from_error_body(&raw.body));
    }
    if raw.body.is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(&raw.body) {
        Ok(Value::Array(objects)) => Ok(objects),
        Ok(other) => Ok(vec![other]),
        Err(_) => Err(VsdError::UnknownApi(raw.body)),
    }
}

fn echo_request(verb: Verb, url: &str, headers: &HeaderMap, body: Option<&Body<'_>>) {
    eprintln!("#####################################################");
    eprintln!("# Request");
    eprintln!("# Method: {}", verb.as_str());
    eprintln!("# URL: {url}");
    echo_headers(headers);
    let parameters = match body {
        Some(Body::Json(value)) => value.to_string(),
        Some(Body::Raw(payload)) => payload.to_string(),
        None => "None".to_string(),
    };
    eprintln!("# Parameters: {parameters}");
    eprintln!("#####################################################");
}

fn echo_response(status: StatusCode, headers: &HeaderMap, body: &str) {
    eprintln!("# Response");
    eprintln!("# Status code: {status}");
    echo_headers(headers);
    eprintln!("# Body: {body}");
    eprintln!("#####################################################");
    eprintln!();
}

fn echo_headers(headers: &HeaderMap) {
    eprintln!("# Headers:");
    for (name, value) in headers {
        eprintln!("#    {}: {}", name, value.to_str().unwrap_or("<binary>"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const API_KEY: &str = "02a99c64-a09a-46d7";

    fn test_config(server_uri: &str, cache_dir: &TempDir) -> Config {
        Config {
            api_url: format!("{server_uri}/nuage/api"),
            version: "5_0".to_string(),
            username: "test".to_string(),
            password: "test".to_string(),
            enterprise: "csp".to_string(),
            cache_dir: Some(cache_dir.path().to_path_buf()),
            ..Config::default()
        }
    }

    fn client(server: &MockServer, cache_dir: &TempDir) -> VsdClient {
        VsdClient::new(test_config(&server.uri(), cache_dir)).unwrap()
    }

    fn xrest(username: &str, secret: &str) -> String {
        format!("XREST {}", URL_SAFE.encode(format!("{username}:{secret}")))
    }

    fn me_reply(api_key: &str) -> serde_json::Value {
        json!([{
            "firstName": "csproot",
            "enterpriseName": "CSP",
            "APIKey": api_key,
            "APIKeyExpiry": (Utc::now().timestamp() + 100) * 1000,
        }])
    }

    async fn mount_me(server: &MockServer, api_key: &str, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/me"))
            .and(header("Authorization", xrest("test", "test").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(me_reply(api_key)))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    fn cached_record(cache: &ApiKeyCache) -> ApiKeyRecord {
        cache.load().expect("credential cache file should exist")
    }

    #[tokio::test]
    async fn authenticates_then_requests_with_api_key() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/enterprises"))
            .and(header("Authorization", xrest("test", API_KEY).as_str()))
            .and(header("X-Nuage-Organization", "csp"))
            .and(header("X-Nuage-Page", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"ID": "e1"}])))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        let result = client.get("enterprises", None).await.unwrap();
        assert_eq!(result, vec![json!({"ID": "e1"})]);

        let record = cached_record(&client.cache);
        assert_eq!(record.api_key, API_KEY);
        assert!(record.is_reusable());
    }

    #[tokio::test]
    async fn reuses_cached_key_with_no_auth_call() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 0).await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/enterprises"))
            .and(header("Authorization", xrest("test", "cached-key").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        client
            .cache
            .save(&ApiKeyRecord::new(
                "cached-key".to_string(),
                (Utc::now().timestamp() + 3600) * 1000,
            ))
            .unwrap();

        client.get("enterprises", None).await.unwrap();
    }

    #[tokio::test]
    async fn expired_cached_key_triggers_one_auth_call() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/enterprises"))
            .and(header("Authorization", xrest("test", API_KEY).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        client
            .cache
            .save(&ApiKeyRecord::new(
                "expired-key".to_string(),
                (Utc::now().timestamp() - 10) * 1000,
            ))
            .unwrap();

        client.get("enterprises", None).await.unwrap();

        // cache overwritten with the fresh key
        assert_eq!(cached_record(&client.cache).api_key, API_KEY);
    }

    #[tokio::test]
    async fn stale_cached_key_triggers_auth_even_before_expiry() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/enterprises"))
            .and(header("Authorization", xrest("test", API_KEY).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        let stale = ApiKeyRecord {
            api_key: "stale-key".to_string(),
            expiry_ms: (Utc::now().timestamp() + 3600) * 1000,
            created_secs: Utc::now().timestamp() - 301,
        };
        client.cache.save(&stale).unwrap();

        client.get("enterprises", None).await.unwrap();
        assert_eq!(cached_record(&client.cache).api_key, API_KEY);
    }

    #[tokio::test]
    async fn force_auth_ignores_valid_cache() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/enterprises"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let mut config = test_config(&server.uri(), &cache_dir);
        config.force_auth = true;
        let mut client = VsdClient::new(config).unwrap();
        client
            .cache
            .save(&ApiKeyRecord::new(
                "still-valid".to_string(),
                (Utc::now().timestamp() + 3600) * 1000,
            ))
            .unwrap();

        client.get("enterprises", None).await.unwrap();
    }

    #[tokio::test]
    async fn get_aggregates_all_pages_in_order() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;

        let pages: [&[&str]; 3] = [&["a", "b"], &["c", "d"], &["e"]];
        for (index, names) in pages.iter().enumerate() {
            let objects: Vec<_> = names.iter().map(|name| json!({"name": name})).collect();
            Mock::given(method("GET"))
                .and(path("/nuage/api/v5_0/domains"))
                .and(header("X-Nuage-Page", index.to_string().as_str()))
                .respond_with(
                    ResponseTemplate::new(200)
                        .insert_header("X-Nuage-Page", index.to_string().as_str())
                        .insert_header("X-Nuage-PageSize", "2")
                        .insert_header("X-Nuage-Count", "5")
                        .set_body_json(objects),
                )
                .expect(1)
                .mount(&server)
                .await;
        }

        let mut client = client(&server, &cache_dir);
        let result = client.get("domains", None).await.unwrap();
        let names: Vec<_> = result.iter().map(|o| o["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["a", "b", "c", "d", "e"]);
    }

    #[tokio::test]
    async fn missing_pagination_headers_stop_after_one_request() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/domains"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"ID": "d1"}, {"ID": "d2"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        assert_eq!(client.get("domains", None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn empty_collection_is_one_request_and_no_objects() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/domains"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Nuage-Page", "0")
                    .insert_header("X-Nuage-PageSize", "30")
                    .insert_header("X-Nuage-Count", "0")
                    .set_body_json(json!([])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        assert!(client.get("domains", None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_body_is_an_empty_result() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;
        Mock::given(method("DELETE"))
            .and(path("/nuage/api/v5_0/domains/d1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        assert!(client.delete("domains/d1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unauthorized_mid_pagination_is_fatal() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/domains"))
            .and(header("X-Nuage-Page", "0"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Nuage-Page", "0")
                    .insert_header("X-Nuage-PageSize", "1")
                    .insert_header("X-Nuage-Count", "3")
                    .set_body_json(json!([{"ID": "d1"}])),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/domains"))
            .and(header("X-Nuage-Page", "1"))
            .respond_with(ResponseTemplate::new(401).set_body_string("<html>JBoss</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        let err = client.get("domains", None).await.unwrap_err();
        assert!(matches!(err, VsdError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn filter_is_sent_as_header() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/enterprises"))
            .and(header("X-Nuage-Filter", "name == 'acme'"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        client
            .get("enterprises", Some("name == 'acme'"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn error_description_is_extracted() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;
        Mock::given(method("POST"))
            .and(path("/nuage/api/v5_0/enterprises"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "errors": [{"property": "name", "descriptions": [
                    {"title": "Duplicate object", "description": "Object already exists."}
                ]}],
                "internalErrorCode": 2002
            })))
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        let err = client
            .post("enterprises", &json!({"name": "nulab-1"}))
            .await
            .unwrap_err();
        match err {
            VsdError::Api(message) => assert_eq!(message, "Object already exists."),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparsable_error_body_is_surfaced_raw() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/enterprises"))
            .respond_with(
                ResponseTemplate::new(500).set_body_string("<html>JBoss Web/7.0.17</html>"),
            )
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        let err = client.get("enterprises", None).await.unwrap_err();
        match err {
            VsdError::UnknownApi(body) => assert!(body.contains("JBoss Web/7.0.17")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn raw_body_is_transmitted_unmodified() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;
        // whitespace that any re-encoding would normalize away
        let payload = "{\"type\": \"f9\",   \"value\": \"18ac100a0a000001\"}";
        Mock::given(method("POST"))
            .and(path("/nuage/api/v5_0/subnets/s1/dhcpoptions"))
            .and(body_string(payload))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([{"ID": "o1"}])))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        client
            .request(
                Verb::Post,
                "subnets/s1/dhcpoptions",
                Some(Body::Raw(payload)),
                None,
                &[],
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn extra_headers_override_computed_ones() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/enterprises"))
            .and(header("X-Nuage-Organization", "other-org"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        client
            .request(
                Verb::Get,
                "enterprises",
                None,
                None,
                &[("X-Nuage-Organization".to_string(), "other-org".to_string())],
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn enterprise_round_trip() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        mount_me(&server, API_KEY, 1).await;

        let acme = json!({"ID": "abc", "name": "acme"});
        Mock::given(method("POST"))
            .and(path("/nuage/api/v5_0/enterprises"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([acme])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/enterprises/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([acme])))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/nuage/api/v5_0/enterprises/abc"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/enterprises/abc"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"property": "", "descriptions": [
                    {"title": "Object not found", "description": "Cannot find object with ID"}
                ]}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        let created = client
            .post("enterprises", &json!({"name": "acme"}))
            .await
            .unwrap();
        assert_eq!(created[0], acme);

        let fetched = client.get("enterprises/abc", None).await.unwrap();
        assert_eq!(fetched[0], acme);

        client.delete("enterprises/abc").await.unwrap();

        let err = client.get("enterprises/abc", None).await.unwrap_err();
        match err {
            VsdError::Api(message) => assert_eq!(message, "Cannot find object with ID"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn authentication_failure_on_me_is_fatal() {
        let server = MockServer::start().await;
        let cache_dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/nuage/api/v5_0/me"))
            .respond_with(ResponseTemplate::new(401).set_body_string("<html>JBoss</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = client(&server, &cache_dir);
        let err = client.get("enterprises", None).await.unwrap_err();
        assert!(matches!(err, VsdError::AuthenticationFailed));
    }
}
