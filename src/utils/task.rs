use crate::utils::error::Result;
use std::future::Future;

/// Runs a connection task in the background, logging its error instead of
/// propagating it so one bad connection cannot take the accept loop down.
pub fn spawn_and_log_error<F>(fut: F) -> tokio::task::JoinHandle<()>
where
    F: Future<Output = Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = fut.await {
            tracing::error!("connection task failed: {e}");
        }
    })
}
