//! Process configuration, resolved from CLI flags with environment fallback.

use clap::Parser;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

/// Organization the gateway talks to when none is configured.
pub const DEFAULT_ORGANIZATION_URL: &str = "https://ryanrodemoyer.visualstudio.com";

/// REST API version appended to every upstream request.
pub const DEFAULT_API_VERSION: &str = "5.1";

#[derive(Parser, Clone)]
#[command(name = "devops-graph")]
#[command(about = "GraphQL gateway over the Azure DevOps REST API", long_about = None)]
pub struct Config {
    /// Personal access token used for upstream basic auth
    #[arg(long, env = "PAT", hide_env_values = true)]
    pub token: String,

    /// Organization base URL
    #[arg(long, env = "ADO_ORGANIZATION_URL", default_value = DEFAULT_ORGANIZATION_URL)]
    pub organization_url: String,

    /// Value of the `api-version` query parameter
    #[arg(long, env = "ADO_API_VERSION", default_value = DEFAULT_API_VERSION)]
    pub api_version: String,

    /// Address the HTTP server binds to
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:4000")]
    pub listen: SocketAddr,

    /// Timeout for each upstream request, in seconds (unset = no timeout)
    #[arg(long, env = "ADO_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,
}

impl Config {
    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("organization_url", &self.organization_url)
            .field("api_version", &self.api_version)
            .field("listen", &self.listen)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .finish()
    }
}
