//! Host startup and serve errors.

use std::net::SocketAddr;

/// Errors that stop the host process.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable is set but cannot be parsed.
    #[error("invalid {var}: {value:?}")]
    Config { var: &'static str, value: String },

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listen socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
