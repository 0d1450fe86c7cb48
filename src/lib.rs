//! Local file handling for AWS single-sign-on credential tooling.
//!
//! Renders credentials-file stanzas (static role credentials, or a
//! `credential_process` entry that re-invokes `go-aws-sso assume`), writes them to
//! the shared AWS credentials file, and persists the cached SSO client
//! registration as JSON.
//!
//! Every operation returns [`Result`]; deciding whether a failure ends the process
//! is left to the caller. The one expected failure is [`Error::NotFound`] when no
//! client information has been cached yet.

pub mod client_info;
pub mod credentials;
pub mod credentials_file;
pub mod error;
pub mod files;
pub mod template;

pub use client_info::{ClientInformation, read_client_information, write_struct};
pub use credentials::{RoleCredentials, render_credential_process, render_persisted_credentials};
pub use credentials_file::CredentialsFile;
pub use error::{Error, Result};
