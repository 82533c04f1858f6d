//! Server Config

use clap::Args;

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Address to listen on
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 8698)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port`, bracketing IPv6 literals.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            return format!("[{}]:{}", self.host, self.port);
        }

        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str) -> ServerRuntimeConfig {
        ServerRuntimeConfig {
            host: host.to_string(),
            port: 8698,
        }
    }

    #[test]
    fn ipv4_host_is_joined_with_port() {
        assert_eq!(config("127.0.0.1").socket_addr(), "127.0.0.1:8698", "ipv4");
    }

    #[test]
    fn ipv6_host_is_bracketed() {
        assert_eq!(config("::1").socket_addr(), "[::1]:8698", "ipv6");
        assert_eq!(config("[::1]").socket_addr(), "[::1]:8698", "already bracketed");
    }
}
