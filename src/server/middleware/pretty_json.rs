//! Indented JSON on request (`?pretty`).

use bytes::Bytes;
use serde_json::Value;
use tracing::debug;

use super::Middleware;
use crate::server::request::RequestHead;
use crate::server::response::Response;

const QUERY_KEY: &str = "pretty";

/// Re-serializes JSON bodies with two-space indentation when the query
/// string carries `pretty`.
#[derive(Debug, Clone, Default)]
pub struct PrettyJson;

impl Middleware for PrettyJson {
    fn on_response(&self, req: &RequestHead, mut res: Response) -> Response {
        let is_json = res
            .content_type()
            .is_some_and(|ct| ct.starts_with("application/json"));
        if !is_json || !req.has_query_param(QUERY_KEY) {
            return res;
        }

        let pretty = serde_json::from_slice::<Value>(&res.body)
            .and_then(|value| serde_json::to_vec_pretty(&value));
        match pretty {
            Ok(body) => res.body = Bytes::from(body),
            Err(e) => debug!("body is not valid JSON, left as is: {e}"),
        }
        res
    }
}
