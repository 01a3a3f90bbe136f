use anyhow::Context;
use session_client::SessionConfig;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Externally supplied inputs: listen address, traded symbol, and the
/// FIX endpoint the login handler dials.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub listen_addr: SocketAddr,
    pub symbol: String,
    pub fix: SessionConfig,
}

impl GatewayConfig {
    /// Read configuration from the environment, with defaults matching
    /// the development setup (AAPL book, FIX server on localhost:8888).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let listen_addr = env::var("GATEWAY_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("GATEWAY_ADDR must be a socket address")?;
        let symbol = env::var("SYMBOL").unwrap_or_else(|_| "AAPL".to_string());

        let fix_host = env::var("FIX_HOST").unwrap_or_else(|_| "localhost".to_string());
        let fix_port = env::var("FIX_PORT")
            .unwrap_or_else(|_| "8888".to_string())
            .parse()
            .context("FIX_PORT must be a port number")?;
        let fix_timeout_ms = env::var("FIX_TIMEOUT_MS")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .context("FIX_TIMEOUT_MS must be milliseconds")?;

        Ok(Self {
            listen_addr,
            symbol,
            fix: SessionConfig::new(fix_host, fix_port)
                .with_timeout(Duration::from_millis(fix_timeout_ms)),
        })
    }
}
