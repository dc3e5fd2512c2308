//! Middleware layer.
//!
//! Each middleware sees the request head on the way in and the response on
//! the way out. Request hooks run in registration order; response hooks run
//! in reverse, so the first registered middleware is the outermost one.
//! A request hook may answer on its own (CORS preflight), in which case the
//! router and the remaining request hooks are skipped, but every middleware
//! already entered still gets its response hook.

pub mod compress;
pub mod cors;
pub mod logger;
pub mod pretty_json;

pub use compress::Compress;
pub use cors::Cors;
pub use logger::Logger;
pub use pretty_json::PrettyJson;

use super::request::RequestHead;
use super::response::Response;

pub trait Middleware: Send + Sync + 'static {
    /// Inspect the request. Returning a response answers it directly.
    fn on_request(&self, _req: &RequestHead) -> Option<Response> {
        None
    }

    /// Transform the response on its way out.
    fn on_response(&self, _req: &RequestHead, res: Response) -> Response {
        res
    }
}
