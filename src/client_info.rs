//! Cached SSO client registration.
//!
//! The OIDC client registered with AWS SSO, plus the last device authorization and
//! access token obtained with it, is kept in a JSON file so later runs can skip
//! registration. Absence of that file is the normal first-run state and is
//! reported as [`Error::NotFound`], distinct from every other failure.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{
    error::{Error, Result},
    files,
};

const DIR_MODE: u32 = 0o700;
const FILE_MODE: u32 = 0o600;

/// Returns `~/.aws/sso/cache/access-token.json` for the current user.
pub fn default_client_information_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| {
            home.join(".aws")
                .join("sso")
                .join("cache")
                .join("access-token.json")
        })
        .ok_or(Error::HomeDirNotFound)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClientInformation {
    pub access_token_expires_at: Option<DateTime<Utc>>,
    pub access_token: String,
    pub client_id: String,
    pub client_secret: String,
    /// Unix seconds, as returned by client registration.
    pub client_secret_expires_at: i64,
    pub device_code: String,
    pub verification_uri_complete: String,
    pub start_url: String,
}

impl ClientInformation {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// A missing expiry counts as expired.
    pub fn is_access_token_expired(&self, now: DateTime<Utc>) -> bool {
        self.access_token_expires_at
            .is_none_or(|expires_at| expires_at <= now)
    }

    pub fn is_client_secret_expired(&self, now: DateTime<Utc>) -> bool {
        self.client_secret_expires_at <= now.timestamp()
    }

    pub fn load(path: &Path) -> Result<Self> {
        read_client_information(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_struct(self, path)
    }
}

/// Serializes `payload` as one-space indented JSON into `dest`.
///
/// The parent directory is created owner-only if missing, and the file is
/// written owner read/write.
pub fn write_struct<T: Serialize + ?Sized>(payload: &T, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        files::ensure_dir(parent, DIR_MODE)?;
    }

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    payload.serialize(&mut ser).map_err(|source| Error::Json {
        path: dest.to_path_buf(),
        source,
    })?;

    debug!("Writing {} bytes to {}", buf.len(), dest.display());
    files::write_private(dest, &buf, FILE_MODE)
}

/// Reads the client information cached at `path`.
///
/// # Errors
///
/// * [`Error::NotFound`] - nothing is cached at `path` yet; callers should treat
///   this as a first run and fall back to [`ClientInformation::default`]
/// * [`Error::Io`] - the file exists but could not be read
/// * [`Error::Json`] - the file is not valid client information
pub fn read_client_information(path: &Path) -> Result<ClientInformation> {
    if !files::exists(path)? {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use tempfile::TempDir;

    use super::*;

    fn sample() -> ClientInformation {
        ClientInformation {
            access_token_expires_at: Some(Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()),
            access_token: "aoaAAAAA-token".into(),
            client_id: "client-123".into(),
            client_secret: "s3cr3t".into(),
            client_secret_expires_at: 1_800_000_000,
            device_code: "device-abc".into(),
            verification_uri_complete: "https://device.sso.eu-west-1.amazonaws.com/?user_code=ABCD-EFGH".into(),
            start_url: "https://example.awsapps.com/start".into(),
        }
    }

    #[test]
    fn save_then_load_is_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sso").join("cache").join("access-token.json");

        sample().save(&path).unwrap();
        assert_eq!(ClientInformation::load(&path).unwrap(), sample());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("access-token.json");

        let err = read_client_information(&path).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("access-token.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_client_information(&path).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn json_uses_one_space_indent_and_pascal_case() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("info.json");

        let info = ClientInformation {
            client_id: "abc".into(),
            ..Default::default()
        };
        write_struct(&info, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n \"AccessTokenExpiresAt\": null,\n"));
        assert!(text.contains("\n \"ClientId\": \"abc\",\n"));
    }

    #[test]
    fn write_struct_accepts_any_serializable_payload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("payload.json");

        let payload = serde_json::json!({ "region": "eu-west-1", "accounts": [1, 2] });
        write_struct(&payload, &path).unwrap();

        let back: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn write_struct_reports_write_failure() {
        let dir = TempDir::new().unwrap();

        let err = write_struct(&sample(), dir.path()).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }

    #[test]
    fn unreadable_entry_is_an_io_error() {
        let dir = TempDir::new().unwrap();

        let err = read_client_information(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn partial_record_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("access-token.json");
        fs::write(&path, r#"{"ClientId": "only-id"}"#).unwrap();

        let info = read_client_information(&path).unwrap();
        assert_eq!(info.client_id, "only-id");
        assert!(info.access_token.is_empty());
        assert!(!info.is_empty());
    }

    #[test]
    fn expiry_checks() {
        let info = sample();
        let before = Utc.with_ymd_and_hms(2026, 10, 16, 11, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 1).unwrap();

        assert!(!info.is_access_token_expired(before));
        assert!(info.is_access_token_expired(after));
        assert!(!info.is_client_secret_expired(before));
        assert!(ClientInformation::default().is_access_token_expired(before));
        assert!(ClientInformation::default().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn cache_dir_and_file_are_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let cache = dir.path().join("cache");
        let path = cache.join("access-token.json");
        sample().save(&path).unwrap();

        let file_mode = fs::metadata(&path).unwrap().permissions().mode();
        let dir_mode = fs::metadata(&cache).unwrap().permissions().mode();
        assert_eq!(file_mode & 0o777, 0o600);
        assert_eq!(dir_mode & 0o077, 0);
    }
}
