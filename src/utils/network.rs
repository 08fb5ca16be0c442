use anyhow::{Context, Result};
use std::net::{SocketAddr, TcpListener, ToSocketAddrs};
use tracing::warn;

/// Ports tried after the configured one before giving up.
const PORT_SEARCH_SPAN: u16 = 100;

/// Resolves the configured host (IP or name) and port.
pub fn resolve_addr(host: &str, port: u16) -> Result<SocketAddr> {
    (host, port)
        .to_socket_addrs()
        .with_context(|| format!("invalid listen host {:?}", host))?
        .next()
        .with_context(|| format!("host {:?} resolved to no address", host))
}

pub fn is_addr_available(addr: SocketAddr) -> bool {
    TcpListener::bind(addr).is_ok()
}

/// First bindable port in `preferred..=preferred + span` on the same IP.
pub fn first_free_port(addr: SocketAddr, span: u16) -> Option<u16> {
    let last = addr.port().saturating_add(span);
    (addr.port()..=last).find(|&port| is_addr_available(SocketAddr::new(addr.ip(), port)))
}

/// Moves `addr` to a free port when the configured one is taken. Falls back to
/// the original address, which will then fail at bind time.
pub fn with_free_port(addr: SocketAddr) -> SocketAddr {
    match first_free_port(addr, PORT_SEARCH_SPAN) {
        Some(port) if port == addr.port() => addr,
        Some(port) => {
            warn!("Port {} is in use, using {} instead", addr.port(), port);
            SocketAddr::new(addr.ip(), port)
        }
        None => {
            warn!("No free port near {}, keeping it", addr.port());
            addr
        }
    }
}

/// URL a local browser can open for a listen address.
pub fn browser_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://127.0.0.1:{}", addr.port())
    } else {
        format!("http://{}", addr)
    }
}
