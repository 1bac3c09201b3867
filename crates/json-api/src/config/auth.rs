//! Auth Config

use clap::Args;

/// Access token verification settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Key used to digest and verify access tokens
    #[arg(long, env = "AUTH_TOKEN_KEY", hide_env_values = true)]
    pub auth_token_key: String,
}
