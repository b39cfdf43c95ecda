//! Throwaway HTTP servers for imitating third-party APIs in tests.

use axum::Router;
use tokio::{net::TcpListener, task::JoinHandle};

use crate::error::TestError;

/// An axum router served on an ephemeral local port.
///
/// The server task is aborted when the value is dropped.
///
/// # Example
///
/// ```rust,ignore
/// let server = MockServer::spawn(
///     Router::new().route("/api/tags", get(|| async { "{}" })),
/// )
/// .await?;
///
/// let url = server.url("/api/tags");
/// ```
pub struct MockServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Binds `127.0.0.1:0` and serves `router` in a background task.
    ///
    /// # Returns
    /// - `Ok(MockServer)` - Running server with its base URL
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn spawn(router: Router) -> Result<Self, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            handle,
        })
    }

    /// Joins `path` onto the server base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Returns an address nothing is listening on.
///
/// Binds an ephemeral port and releases it immediately, so connections to the returned
/// URL are refused.
pub async fn unreachable_url() -> Result<String, TestError> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{}", addr))
}
