//! Bind address resolution.
//!
//! Turns the configured host/port pair into an ordered list of candidate
//! socket addresses for the listener to try. Resolution is
//! address-family-agnostic: with no host configured, the wildcard
//! addresses for IPv6 and IPv4 are offered in that order.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use tokio::net::lookup_host;

#[derive(Debug)]
pub enum ResolveError {
    InvalidPort(String),
    Lookup(std::io::Error),
    NoAddresses,
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::InvalidPort(port) => {
                write!(f, "'{}' is not a valid port number", port)
            }
            ResolveError::Lookup(e) => write!(f, "name lookup failed: {}", e),
            ResolveError::NoAddresses => write!(f, "name lookup returned no addresses"),
        }
    }
}

impl std::error::Error for ResolveError {}

pub async fn resolve(host: Option<&str>, port: &str) -> Result<Vec<SocketAddr>, ResolveError> {
    let port: u16 = port
        .parse()
        .map_err(|_| ResolveError::InvalidPort(port.to_string()))?;

    match host {
        Some(host) => {
            let addrs: Vec<SocketAddr> = lookup_host((host, port))
                .await
                .map_err(ResolveError::Lookup)?
                .collect();

            if addrs.is_empty() {
                return Err(ResolveError::NoAddresses);
            }
            Ok(addrs)
        }
        None => Ok(vec![
            SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), port),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
        ]),
    }
}
