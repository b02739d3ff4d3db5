use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

/// a.root-servers.net
pub const DEFAULT_ROOT_SERVER: IpAddr = IpAddr::V4(Ipv4Addr::new(198, 41, 0, 4));

/// What to do when a delegation names several name servers and no glue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NsFallback {
    /// Resolve only the first NS hostname; if that fails the step fails.
    #[default]
    FirstOnly,
    /// Try each NS hostname in section order until one leads to an answer.
    InOrder,
}

impl std::str::FromStr for NsFallback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first-only" | "first" => Ok(NsFallback::FirstOnly),
            "in-order" | "all" => Ok(NsFallback::InOrder),
            other => Err(format!(
                "unknown NS fallback policy '{}' (expected first-only or in-order)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// Restart point for top-level lookups, alias targets and NS hostnames.
    #[serde(default = "default_root_server")]
    pub root_server: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-hop deadline; not cumulative across the walk.
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    #[serde(default = "default_max_depth")]
    pub max_depth: u8,

    #[serde(default = "default_true")]
    pub tcp_fallback: bool,

    #[serde(default)]
    pub ns_fallback: NsFallback,
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    pub fn with_root(mut self, root_server: IpAddr) -> Self {
        self.root_server = root_server;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            port: default_port(),
            query_timeout_secs: default_query_timeout_secs(),
            max_depth: default_max_depth(),
            tcp_fallback: true,
            ns_fallback: NsFallback::default(),
        }
    }
}

fn default_root_server() -> IpAddr {
    DEFAULT_ROOT_SERVER
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout_secs() -> u64 {
    3
}

fn default_max_depth() -> u8 {
    20
}

fn default_true() -> bool {
    true
}
