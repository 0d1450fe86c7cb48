//! AWS SSO credentials file helper
//!
//! Thin command-line front end over the `aws_sso_files` library:
//! 1. Parses command-line arguments and environment configuration
//! 2. Resolves the credentials file and client cache paths once
//! 3. Runs the requested subcommand
//!
//! Any error returned by the library ends the run with a non-zero exit code. A
//! missing client cache is reported, not treated as a failure.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use log::{info, warn};

use aws_sso_files::{
    ClientInformation, CredentialsFile, RoleCredentials, client_info, read_client_information,
};

mod cli;

use cli::{Args, Command};

fn main() -> Result<()> {
    let Args {
        credentials_path,
        client_info_path,
        verbose,
        command,
    } = Args::parse();

    // INFO by default, DEBUG with --verbose. RUST_LOG still takes precedence.
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    match command {
        Command::Persist {
            profile,
            region,
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            let file = CredentialsFile::new(credentials_path)?;
            let creds = RoleCredentials::new(
                profile,
                region,
                access_key_id,
                secret_access_key,
                session_token,
            );
            file.write_persisted_credentials(&creds)
                .context("Failed to write AWS credentials file")?;
        }
        Command::CredentialProcess {
            account_id,
            role_name,
            profile,
            region,
        } => {
            let file = CredentialsFile::new(credentials_path)?;
            file.write_credential_process(&account_id, &role_name, &profile, &region)
                .context("Failed to write AWS credentials file")?;
        }
        Command::ClientInfo => {
            let path = match client_info_path {
                Some(path) => path,
                None => client_info::default_client_information_path()?,
            };
            show_client_info(&path)?;
        }
    }

    Ok(())
}

fn show_client_info(path: &std::path::Path) -> Result<()> {
    let info = match read_client_information(path) {
        Ok(info) => info,
        Err(e) if e.is_not_found() => {
            warn!("No client information cached at {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to read client information"),
    };

    report(&info, path);
    Ok(())
}

fn report(info: &ClientInformation, path: &std::path::Path) {
    let now = Utc::now();

    info!("Client information: {}", path.display());
    info!("Start URL: {}", info.start_url);
    info!("Client ID: {}", info.client_id);
    info!(
        "Client secret: {}",
        if info.is_client_secret_expired(now) {
            "expired"
        } else {
            "valid"
        }
    );
    match info.access_token_expires_at {
        Some(at) if !info.is_access_token_expired(now) => info!("Access token valid until {at}"),
        Some(at) => info!("Access token expired at {at}"),
        None => info!("No access token cached"),
    }
}
