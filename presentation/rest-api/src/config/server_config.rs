use std::env;

const DEFAULT_IP: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0")
    /// - SERVICE_PORT: Port to bind (default: 8000)
    ///
    /// An unparseable port falls back to the default with a warning.
    pub fn from_env() -> Self {
        Self::parse(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn parse(ip: Option<String>, port: Option<String>) -> Self {
        let port = port.map_or(DEFAULT_PORT, |raw| {
            raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "SERVICE_PORT is not a valid port, using {DEFAULT_PORT}");
                DEFAULT_PORT
            })
        });

        Self {
            ip: ip.unwrap_or_else(|| DEFAULT_IP.to_string()),
            port,
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
