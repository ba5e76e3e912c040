use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A cached key is replayed for at most this long, even when the
/// server-side expiry has not passed. VSD can invalidate keys early; a
/// periodic forced refresh keeps a single stale key from wedging the CLI.
const REFRESH_WINDOW_SECS: i64 = 300;

/// One authenticated session's API key, as persisted on disk.
///
/// Field names mirror the VSD `me` payload: `APIKeyExpiry` is epoch
/// milliseconds (server clock), `APIKeyCreation` is epoch seconds (local
/// clock at fetch time).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    #[serde(rename = "APIKey")]
    pub api_key: String,
    #[serde(rename = "APIKeyExpiry")]
    pub expiry_ms: i64,
    #[serde(rename = "APIKeyCreation")]
    pub created_secs: i64,
}

impl ApiKeyRecord {
    pub fn new(api_key: String, expiry_ms: i64) -> Self {
        Self {
            api_key,
            expiry_ms,
            created_secs: Utc::now().timestamp(),
        }
    }

    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.expiry_ms / 1000 <= now_secs
    }

    pub fn is_stale_at(&self, now_secs: i64) -> bool {
        self.created_secs + REFRESH_WINDOW_SECS < now_secs
    }

    /// Whether the key can be replayed instead of re-authenticating.
    pub fn is_reusable(&self) -> bool {
        let now = Utc::now().timestamp();
        !self.is_expired_at(now) && !self.is_stale_at(now)
    }
}

/// On-disk store holding exactly one [`ApiKeyRecord`].
///
/// The path is per (host, username, enterprise) profile, see
/// [`crate::Config::cache_file`]. Reads never fail the caller: a missing or
/// unreadable record simply forces re-authentication.
pub struct ApiKeyCache {
    path: PathBuf,
}

impl ApiKeyCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Option<ApiKeyRecord> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!(path = %self.path.display(), %err, "Discarding unreadable credential cache");
                None
            }
        }
    }

    pub fn save(&self, record: &ApiKeyRecord) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(record)?;
        std::fs::write(&self.path, contents)
    }

    pub fn clear(&self) -> std::io::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(expiry_ms: i64, created_secs: i64) -> ApiKeyRecord {
        ApiKeyRecord {
            api_key: "02a99c64-a09a-46d7".to_string(),
            expiry_ms,
            created_secs,
        }
    }

    #[test]
    fn fresh_record_is_reusable() {
        let now = Utc::now().timestamp();
        assert!(record((now + 3600) * 1000, now).is_reusable());
    }

    #[test]
    fn expired_record_is_not_reusable() {
        let now = Utc::now().timestamp();
        assert!(record(now * 1000, now).is_expired_at(now));
        assert!(!record((now - 10) * 1000, now).is_reusable());
    }

    #[test]
    fn stale_record_is_not_reusable_even_before_expiry() {
        let now = Utc::now().timestamp();
        let stale = record((now + 3600) * 1000, now - REFRESH_WINDOW_SECS - 1);
        assert!(!stale.is_expired_at(now));
        assert!(stale.is_stale_at(now));
        assert!(!stale.is_reusable());
    }

    #[test]
    fn record_at_window_boundary_is_still_fresh() {
        let now = Utc::now().timestamp();
        // creation + 300 == now is not yet past the window
        assert!(!record((now + 3600) * 1000, now - REFRESH_WINDOW_SECS).is_stale_at(now));
    }

    #[test]
    fn round_trips_through_disk_with_wire_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ApiKeyCache::new(dir.path().join("profile.json"));
        assert!(cache.load().is_none());

        let rec = record(1_500_000_000_000, 1_400_000_000);
        cache.save(&rec).unwrap();

        let raw = std::fs::read_to_string(cache.path()).unwrap();
        assert!(raw.contains("\"APIKey\""));
        assert!(raw.contains("\"APIKeyExpiry\""));
        assert!(raw.contains("\"APIKeyCreation\""));

        let loaded = cache.load().unwrap();
        assert_eq!(loaded.api_key, rec.api_key);
        assert_eq!(loaded.expiry_ms, rec.expiry_ms);

        cache.clear().unwrap();
        assert!(cache.load().is_none());
    }

    #[test]
    fn garbage_on_disk_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ApiKeyCache::new(dir.path().join("profile.json"));
        std::fs::write(cache.path(), "not json").unwrap();
        assert!(cache.load().is_none());
    }
}
