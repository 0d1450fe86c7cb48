//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// AWS SSO credentials file helper.
///
/// Writes a single profile to the AWS credentials file, either with static role
/// credentials or as a `credential_process` entry, and inspects the cached SSO
/// client registration.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Path to AWS credentials file [default: ~/.aws/credentials]
    #[arg(short, long, global = true, env = "AWS_SHARED_CREDENTIALS_FILE")]
    pub credentials_path: Option<PathBuf>,

    /// Path to the cached SSO client information [default: ~/.aws/sso/cache/access-token.json]
    #[arg(long, global = true)]
    pub client_info_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write static role credentials as the only profile in the credentials file
    Persist {
        /// Profile name of the written stanza
        #[arg(short, long, default_value = "default")]
        profile: String,

        /// AWS region of the written stanza
        #[arg(short, long, env = "AWS_REGION")]
        region: String,

        /// Access key id of the role credentials
        #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
        access_key_id: String,

        /// Secret access key of the role credentials
        #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
        secret_access_key: String,

        /// Session token of the role credentials
        #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
        session_token: String,
    },

    /// Write a profile that obtains credentials via `go-aws-sso assume`
    CredentialProcess {
        /// AWS account id of the role
        #[arg(short = 'a', long)]
        account_id: String,

        /// Name of the role to assume
        #[arg(short = 'n', long)]
        role_name: String,

        /// Profile name of the written stanza
        #[arg(short, long, default_value = "default")]
        profile: String,

        /// AWS region of the written stanza
        #[arg(short, long, env = "AWS_REGION")]
        region: String,
    },

    /// Show the state of the cached SSO client information
    ClientInfo,
}
