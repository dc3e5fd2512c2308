//! Cross-origin resource sharing headers and preflight answers.

use http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS,
    ACCESS_CONTROL_REQUEST_METHOD, VARY,
};
use http::{Method, StatusCode};

use super::Middleware;
use crate::config::ServerConfig;
use crate::error::{Result, ShipnoteError};
use crate::server::request::RequestHead;
use crate::server::response::Response;

#[derive(Debug, Clone)]
pub struct Cors {
    allow_origin: HeaderValue,
    allow_methods: HeaderValue,
    max_age: Option<u64>,
}

impl Cors {
    pub fn new(origin: &str, methods: &[String], max_age: Option<u64>) -> Result<Self> {
        let allow_origin = HeaderValue::from_str(origin)
            .map_err(|_| ShipnoteError::config(format!("invalid CORS origin '{}'", origin)))?;
        let joined = methods.join(",");
        let allow_methods = HeaderValue::from_str(&joined)
            .map_err(|_| ShipnoteError::config(format!("invalid CORS methods '{}'", joined)))?;

        Ok(Self {
            allow_origin,
            allow_methods,
            max_age,
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Self::new(&config.cors_origin, &config.cors_methods, config.cors_max_age)
    }

    fn is_wildcard(&self) -> bool {
        self.allow_origin.as_bytes() == b"*"
    }
}

impl Middleware for Cors {
    fn on_request(&self, req: &RequestHead) -> Option<Response> {
        if req.method != Method::OPTIONS || !req.headers.contains_key(ACCESS_CONTROL_REQUEST_METHOD) {
            return None;
        }

        let mut res = Response::status(StatusCode::NO_CONTENT)
            .with_header(ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone());

        if let Some(requested) = req.headers.get(ACCESS_CONTROL_REQUEST_HEADERS) {
            res.headers
                .insert(ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
            res.headers.append(
                VARY,
                HeaderValue::from_static("access-control-request-headers"),
            );
        }
        if let Some(max_age) = self.max_age {
            res.headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from(max_age));
        }

        Some(res)
    }

    fn on_response(&self, _req: &RequestHead, mut res: Response) -> Response {
        res.headers
            .insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        if !self.is_wildcard() {
            res.headers.append(VARY, HeaderValue::from_static("origin"));
        }
        res
    }
}
