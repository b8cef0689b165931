//! Well-known ports of the agreement engine.

/// Wildcard bind address used for the shared multicast listener and the learner.
pub const WILDCARD_HOST: &str = "0.0.0.0";

/// Prefix of the per-host multicast-scoped subdomain.
pub const MCAST_HOST_PREFIX: &str = "mcast.";

/// The fixed set of ports every host uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellKnownPorts {
    pub mcast_src: u16,
    pub mcast_listen: u16,
    pub mcast_reply: u16,
    pub ring: u16,
    pub ucast_listen: u16,
}

impl Default for WellKnownPorts {
    fn default() -> Self {
        Self {
            mcast_src: 23339,
            mcast_listen: 23338,
            mcast_reply: 23337,
            ring: 23336,
            ucast_listen: 23335,
        }
    }
}

/// Format a `host:port` address
pub fn add_port(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// Multicast-scoped name of a host (`mcast.<hostname>`)
pub fn mcast_host(hostname: &str) -> String {
    format!("{}{}", MCAST_HOST_PREFIX, hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_helpers() {
        assert_eq!(add_port("a.example.com", 23336), "a.example.com:23336");
        assert_eq!(mcast_host("a.example.com"), "mcast.a.example.com");
        assert_eq!(add_port(WILDCARD_HOST, 23338), "0.0.0.0:23338");
    }
}
