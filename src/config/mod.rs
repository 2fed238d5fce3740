use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "greet-server")]
#[command(about = "An HTTP server that answers every request with a fixed greeting")]
pub struct CliConfig {
    /// Port to listen on (1-65535)
    #[arg(allow_hyphen_values = true)]
    pub port: String,
}

impl CliConfig {
    /// Checks the raw CLI input and produces the runtime configuration.
    pub fn validated(&self) -> Result<ServerConfig> {
        let port = validation::validate_port("port", &self.port)?;
        Ok(ServerConfig { port })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.validated().map(|_| ())
    }
}

/// Validated greeter configuration. Immutable for the process lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ServerConfig {
    port: u16,
}

impl ServerConfig {
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

impl ConfigProvider for ServerConfig {
    fn port(&self) -> u16 {
        self.port
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "balancer")]
#[command(about = "A round-robin balancer spreading connections across greeter backends")]
pub struct BalancerCli {
    /// Port to listen on (1-65535)
    #[arg(allow_hyphen_values = true)]
    pub port: String,

    /// Backend addresses (host:port), used in round-robin order
    #[arg(required = true)]
    pub backends: Vec<String>,
}

impl BalancerCli {
    pub fn validated(&self) -> Result<BalancerConfig> {
        let port = validation::validate_port("port", &self.port)?;
        for backend in &self.backends {
            validation::validate_non_empty_string("backend", backend)?;
        }
        Ok(BalancerConfig {
            port,
            backends: self.backends.clone(),
        })
    }
}

impl Validate for BalancerCli {
    fn validate(&self) -> Result<()> {
        self.validated().map(|_| ())
    }
}

/// Validated balancer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancerConfig {
    pub port: u16,
    pub backends: Vec<String>,
}
