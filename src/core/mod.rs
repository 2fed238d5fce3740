pub mod balancer;
pub mod server;

pub use crate::domain::model::Greeting;
pub use crate::domain::ports::{BackendSelector, ConfigProvider};
pub use crate::utils::error::Result;
