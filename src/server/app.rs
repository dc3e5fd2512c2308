//! The application: routes plus the middleware stack.

use http::StatusCode;
use tracing::debug;

use super::middleware::{Compress, Cors, Logger, Middleware, PrettyJson};
use super::request::Request;
use super::response::Response;
use super::router::Router;
use crate::config::ServerConfig;
use crate::error::Result;

/// Body of `GET /`
pub const GREETING: &str = "Hello from shipnote!";

pub struct App {
    router: Router,
    middleware: Vec<Box<dyn Middleware>>,
}

impl App {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            middleware: Vec::new(),
        }
    }

    /// Append a middleware. The first one added is the outermost.
    pub fn layer(mut self, middleware: impl Middleware) -> Self {
        self.middleware.push(Box::new(middleware));
        self
    }

    /// Run one request through the middleware stack and the router.
    pub async fn handle(&self, req: Request) -> Response {
        let head = req.head().clone();

        let mut entered = 0;
        let mut early = None;
        for middleware in &self.middleware {
            entered += 1;
            if let Some(res) = middleware.on_request(&head) {
                early = Some(res);
                break;
            }
        }

        let mut response = match early {
            Some(res) => res,
            None => match self.router.lookup(&head.method, &head.path) {
                Some(handler) => handler.call(req).await,
                None => {
                    debug!(method = %head.method, path = %head.path, "no route");
                    Response::text("404 Not Found").with_status(StatusCode::NOT_FOUND)
                }
            },
        };

        for middleware in self.middleware[..entered].iter().rev() {
            response = middleware.on_response(&head, response);
        }
        response
    }
}

async fn greet(_req: Request) -> &'static str {
    GREETING
}

/// The scaffold: `GET /` behind compress, CORS, logging and pretty JSON.
pub fn create_app(config: &ServerConfig) -> Result<App> {
    let router = Router::new().get("/", greet)?;

    Ok(App::new(router)
        .layer(Compress::new(config.compression_min_bytes))
        .layer(Cors::from_config(config)?)
        .layer(Logger)
        .layer(PrettyJson))
}
