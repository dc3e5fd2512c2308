//! Request logging.

use tracing::info;

use super::Middleware;
use crate::server::request::RequestHead;
use crate::server::response::Response;

/// Logs `<--` on arrival and `-->` with status and latency on the way out.
#[derive(Debug, Clone, Default)]
pub struct Logger;

impl Middleware for Logger {
    fn on_request(&self, req: &RequestHead) -> Option<Response> {
        info!(method = %req.method, path = %req.path, "<--");
        None
    }

    fn on_response(&self, req: &RequestHead, res: Response) -> Response {
        let elapsed_ms = req.received_at.elapsed().as_millis() as u64;
        info!(
            method = %req.method,
            path = %req.path,
            status = res.status.as_u16(),
            elapsed_ms,
            "-->"
        );
        res
    }
}
