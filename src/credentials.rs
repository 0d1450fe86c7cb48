use std::fmt;

use crate::{
    error::{Error, Result},
    template,
};

/// Program the `credential_process` stanza hands control back to.
pub const CREDENTIAL_PROCESS_COMMAND: &str = "go-aws-sso";

const PERSISTED_CREDENTIALS_TEMPLATE: &str = "[{{profile}}]
aws_access_key_id = {{access_key_id}}
aws_secret_access_key = {{secret_access_key}}
aws_session_token = {{session_token}}
output = json
region = {{region}}
";

// Must stay parseable by the `assume` subcommand: `-a <account> -n <role>`.
const CREDENTIAL_PROCESS_TEMPLATE: &str = "[{{profile}}]
credential_process = {{command}} assume -a {{account_id}} -n {{role_name}}
region = {{region}}
";

/// Short-lived role credentials together with the profile they are written to.
#[derive(Clone, PartialEq, Eq)]
pub struct RoleCredentials {
    pub profile: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

impl RoleCredentials {
    pub fn new(
        profile: impl Into<String>,
        region: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Self {
        Self {
            profile: profile.into(),
            region: region.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: session_token.into(),
        }
    }

    /// Builds credentials from the optional fields of an upstream role credentials response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the first absent value.
    pub fn try_new(
        profile: impl Into<String>,
        region: impl Into<String>,
        access_key_id: Option<&str>,
        secret_access_key: Option<&str>,
        session_token: Option<&str>,
    ) -> Result<Self> {
        Ok(Self::new(
            profile,
            region,
            access_key_id.ok_or(Error::MissingField("access key id"))?,
            secret_access_key.ok_or(Error::MissingField("secret access key"))?,
            session_token.ok_or(Error::MissingField("session token"))?,
        ))
    }
}

impl fmt::Debug for RoleCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleCredentials")
            .field("profile", &self.profile)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .finish_non_exhaustive()
    }
}

/// Renders a credentials-file stanza holding static role credentials.
pub fn render_persisted_credentials(credentials: &RoleCredentials) -> Result<String> {
    Ok(template::render(
        PERSISTED_CREDENTIALS_TEMPLATE,
        &[
            ("profile", credentials.profile.as_str()),
            ("region", credentials.region.as_str()),
            ("access_key_id", credentials.access_key_id.as_str()),
            ("secret_access_key", credentials.secret_access_key.as_str()),
            ("session_token", credentials.session_token.as_str()),
        ],
    )?)
}

/// Renders a credentials-file stanza that delegates to `go-aws-sso assume`.
///
/// ```
/// use aws_sso_files::credentials::render_credential_process;
///
/// let stanza = render_credential_process("111111111111", "AdminRole", "dev", "eu-west-1")?;
/// assert_eq!(
///     stanza,
///     "[dev]\ncredential_process = go-aws-sso assume -a 111111111111 -n AdminRole\nregion = eu-west-1\n"
/// );
/// # Ok::<(), aws_sso_files::Error>(())
/// ```
pub fn render_credential_process(
    account_id: &str,
    role_name: &str,
    profile: &str,
    region: &str,
) -> Result<String> {
    Ok(template::render(
        CREDENTIAL_PROCESS_TEMPLATE,
        &[
            ("profile", profile),
            ("region", region),
            ("command", CREDENTIAL_PROCESS_COMMAND),
            ("account_id", account_id),
            ("role_name", role_name),
        ],
    )?)
}
