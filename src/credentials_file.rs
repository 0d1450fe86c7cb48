//! AWS Credentials File Writer
//!
//! Writes rendered stanzas to the shared AWS credentials file, normally
//! `~/.aws/credentials`. Every write replaces the whole file: the credentials file
//! always holds exactly the one profile most recently written, and any profiles
//! that were there before are dropped.
//!
//! The file holds live session credentials, so it is created and kept at `0600`.
//! Missing parent directories are created with `0755`, the usual mode for `~/.aws`,
//! rather than owner-only: `~/.aws` is shared with the AWS CLI config file, and
//! only the credentials file itself is restricted to the owner.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{
    credentials::{self, RoleCredentials},
    error::{Error, Result},
    files,
};

const DIR_MODE: u32 = 0o755;
const FILE_MODE: u32 = 0o600;

/// Returns `~/.aws/credentials` for the current user.
pub fn default_credentials_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".aws").join("credentials"))
        .ok_or(Error::HomeDirNotFound)
}

/// Handle on the credentials file at a fixed, resolved path.
///
/// The path is resolved once when the handle is built and reused for every write.
#[derive(Debug, Clone)]
pub struct CredentialsFile {
    path: PathBuf,
}

impl CredentialsFile {
    /// Creates a handle for `path`, or for `~/.aws/credentials` when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirNotFound`] if no path is given and the home
    /// directory cannot be determined.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => default_credentials_path()?,
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the credentials file content with `content`.
    ///
    /// Creates the parent directory chain and the file itself when they do not
    /// exist yet, then overwrites the full content.
    ///
    /// # Errors
    ///
    /// * [`Error::Stat`] - existence of the file could not be determined
    /// * [`Error::CreateDir`] - the parent directory could not be created
    /// * [`Error::Write`] - the file could not be created or written
    pub fn write(&self, content: &str) -> Result<()> {
        if !files::exists(&self.path)? {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                files::ensure_dir(parent, DIR_MODE)?;
            }
            debug!("Creating credentials file {}", self.path.display());
        }

        files::write_private(&self.path, content.as_bytes(), FILE_MODE)
    }

    /// Renders static role credentials and writes them as the only profile.
    pub fn write_persisted_credentials(&self, creds: &RoleCredentials) -> Result<()> {
        let stanza = credentials::render_persisted_credentials(creds)?;
        self.write(&stanza)?;
        info!(
            "Wrote credentials for profile [{}] to {}",
            creds.profile,
            self.path.display()
        );
        Ok(())
    }

    /// Writes a profile whose credentials come from `go-aws-sso assume`.
    pub fn write_credential_process(
        &self,
        account_id: &str,
        role_name: &str,
        profile: &str,
        region: &str,
    ) -> Result<()> {
        let stanza = credentials::render_credential_process(account_id, role_name, profile, region)?;
        self.write(&stanza)?;
        info!(
            "Wrote credential_process profile [{profile}] for {account_id}/{role_name} to {}",
            self.path.display()
        );
        Ok(())
    }
}
