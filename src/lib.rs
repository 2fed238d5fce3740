pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{BalancerCli, BalancerConfig, CliConfig, ServerConfig};
pub use core::balancer::{Balancer, BoundBalancer, RoundRobin};
pub use core::server::{BoundServer, GreeterServer};
pub use domain::model::Greeting;
pub use utils::error::{GreetError, Result};
