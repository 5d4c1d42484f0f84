//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
///
/// Selected at runtime via `MCP_TRANSPORT` (`stdio` | `http` | `both`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    Stdio,

    /// Streamable HTTP transport.
    Http(HttpConfig),

    /// Both transports running concurrently against one session.
    Both(HttpConfig),
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for the MCP protocol endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Allowed `Origin` header values. `["*"]` accepts any origin.
    #[serde(default = "default_origins")]
    pub allowed_origins: Vec<String>,

    /// Allowed `Host` header values (port part ignored).
    #[serde(default = "default_hosts")]
    pub allowed_hosts: Vec<String>,

    /// Reject requests whose Host/Origin is not allow-listed.
    /// Defaults to enabled; disable only for local debugging.
    #[serde(default = "default_dns_rebinding_protection")]
    pub dns_rebinding_protection: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_rpc_path() -> String {
    "/mcp".to_string()
}

fn default_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_hosts() -> Vec<String> {
    vec!["127.0.0.1".to_string(), "localhost".to_string()]
}

fn default_dns_rebinding_protection() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::Stdio
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            rpc_path: default_rpc_path(),
            allowed_origins: default_origins(),
            allowed_hosts: default_hosts(),
            dns_rebinding_protection: default_dns_rebinding_protection(),
        }
    }
}

impl HttpConfig {
    /// Whether any origin is accepted.
    pub fn origins_wildcarded(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Load HTTP settings from environment variables.
    fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(port) = std::env::var("MCP_HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
        {
            config.port = port;
        }
        if let Ok(host) = std::env::var("MCP_HTTP_HOST") {
            config.host = host;
        }
        if let Ok(path) = std::env::var("MCP_HTTP_PATH") {
            config.rpc_path = path;
        }
        if let Ok(origins) = std::env::var("MCP_ALLOWED_ORIGINS") {
            config.allowed_origins = split_list(&origins);
        }
        if let Ok(hosts) = std::env::var("MCP_ALLOWED_HOSTS") {
            config.allowed_hosts = split_list(&hosts);
        }
        if let Ok(flag) = std::env::var("MCP_DNS_REBINDING_PROTECTION") {
            config.dns_rebinding_protection = flag.to_lowercase() != "false" && flag != "0";
        }

        config
    }
}

/// Split a comma-separated env value, dropping empty entries.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl TransportConfig {
    /// Create a STDIO transport config.
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Create an HTTP transport config.
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            "http" => Self::Http(HttpConfig::from_env()),
            "both" => Self::Both(HttpConfig::from_env()),
            _ => Self::Stdio,
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
            Self::Both(cfg) => format!(
                "STDIO + HTTP on {}:{}{}",
                cfg.host, cfg.port, cfg.rpc_path
            ),
        }
    }

    /// Check if this transport carries protocol traffic over stdio.
    pub fn uses_stdio(&self) -> bool {
        matches!(self, Self::Stdio | Self::Both(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_is_stdio() {
        assert!(matches!(TransportConfig::default(), TransportConfig::Stdio));
    }

    #[test]
    fn test_http_defaults() {
        let cfg = HttpConfig::default();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.rpc_path, "/mcp");
        assert!(cfg.origins_wildcarded());
        assert!(cfg.dns_rebinding_protection);
        assert!(cfg.allowed_hosts.contains(&"localhost".to_string()));
    }

    #[test]
    fn test_split_list_trims_and_drops_empty() {
        assert_eq!(
            split_list("https://a.example, https://b.example ,"),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_transport_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "both");
            std::env::set_var("MCP_HTTP_PORT", "9000");
            std::env::set_var("MCP_ALLOWED_ORIGINS", "https://app.example");
        }
        let config = TransportConfig::from_env();
        match config {
            TransportConfig::Both(cfg) => {
                assert_eq!(cfg.port, 9000);
                assert!(!cfg.origins_wildcarded());
                assert_eq!(cfg.allowed_origins, vec!["https://app.example"]);
            }
            other => panic!("expected Both, got {other:?}"),
        }
        unsafe {
            std::env::remove_var("MCP_TRANSPORT");
            std::env::remove_var("MCP_HTTP_PORT");
            std::env::remove_var("MCP_ALLOWED_ORIGINS");
        }
    }
}
