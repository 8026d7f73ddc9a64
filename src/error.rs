//! Host startup errors.

/// Anything that stops the server from starting or keeps it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held an unusable value.
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// The shipped portfolio content breaks an invariant.
    #[error("portfolio content: {0}")]
    Content(#[from] portfolio_client::content::ContentError),

    /// `[package.metadata.leptos]` could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listener could not bind.
    #[error("bind {addr} failed: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },

    /// The server loop exited with an error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
