//! Where the booking API listens.

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};

/// Listening address of the booking API, `0.0.0.0:8000` unless configured.
///
/// ```
/// # use ubs_axum::config::AxumConfig;
/// assert_eq!(AxumConfig::default().bind_address.port(), 8000);
///
/// let local: AxumConfig = serde_json::from_str(r#"{ "bind_address": "127.0.0.1:3000" }"#).unwrap();
/// assert!(local.bind_address.ip().is_loopback());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AxumConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000))
}

impl Default for AxumConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}
