use clap::Parser;
use std::net::{IpAddr, SocketAddr};

/// Command-line / environment configuration for one probe instance.
///
/// Each instance behind the load balancer usually differs only in
/// `SERVER_PORT`, so both flags can be set from the environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "lb-probe", about = "Load-balancer probe service")]
pub struct Config {
    /// Address to bind the HTTP listener on.
    #[arg(long, env = "LB_PROBE_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to bind; also reported by `/api/instance`.
    #[arg(long, env = "SERVER_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
