use serde::{Deserialize, Serialize};

/// The constant greeting served to every request. Derived once from the
/// configured port at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    address: String,
}

impl Greeting {
    pub fn new(port: u16) -> Self {
        Self {
            address: format!("http://localhost:{port}/"),
        }
    }

    /// The advertised address, also printed on startup.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The literal response body, identical for every request.
    pub fn body(&self) -> String {
        format!("Hello from {}\n", self.address)
    }
}
