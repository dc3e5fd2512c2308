//! Radix-tree request router.
//!
//! One tree per HTTP method. Only `GET` routes are registered.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use super::handler::{BoxedHandler, Handler};
use crate::error::{Result, ShipnoteError};

/// The application router. Build it once at startup.
#[derive(Default)]
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a `GET` handler.
    pub fn get(self, path: &str, handler: impl Handler) -> Result<Self> {
        self.on(Method::GET, path, handler)
    }

    /// Register a handler for a method + path pair. Conflicting or
    /// malformed paths are rejected.
    fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Result<Self> {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .map_err(|e| ShipnoteError::server(format!("invalid route `{path}`: {e}")))?;
        Ok(self)
    }

    pub(crate) fn lookup(&self, method: &Method, path: &str) -> Option<BoxedHandler> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        Some(Arc::clone(matched.value))
    }
}
