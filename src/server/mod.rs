//! Minimal HTTP scaffold.
//!
//! One route (`GET /`) behind a fixed middleware stack: compression, CORS,
//! request logging and pretty-printed JSON.
//!
//! ```rust,no_run
//! use shipnote::config::ServerConfig;
//! use shipnote::server::{create_app, Server};
//!
//! # async fn run() -> shipnote::Result<()> {
//! let config = ServerConfig::default();
//! let app = create_app(&config)?;
//! Server::bind(&config.host, config.port)?.serve(app).await
//! # }
//! ```

mod app;
mod handler;
mod listener;
pub mod middleware;
mod request;
mod response;
mod router;

pub use app::{create_app, App, GREETING};
pub use handler::Handler;
pub use listener::Server;
pub use middleware::Middleware;
pub use request::{Request, RequestHead};
pub use response::{IntoResponse, Response};
pub use router::Router;
