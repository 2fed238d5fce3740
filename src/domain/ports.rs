pub trait ConfigProvider: Send + Sync {
    fn port(&self) -> u16;
}

pub trait BackendSelector: Send {
    /// Returns the next backend address, or None when the pool is empty.
    fn next_backend(&mut self) -> Option<String>;
}
