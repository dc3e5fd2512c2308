//! Response body compression (gzip, deflate).

use std::io::Write;

use bytes::Bytes;
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;
use http::header::{HeaderValue, ACCEPT_ENCODING, CONTENT_ENCODING, CONTENT_LENGTH, VARY};
use http::Method;
use tracing::warn;

use super::Middleware;
use crate::server::request::RequestHead;
use crate::server::response::Response;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Gzip,
    Deflate,
}

impl Encoding {
    fn as_str(&self) -> &'static str {
        match self {
            Encoding::Gzip => "gzip",
            Encoding::Deflate => "deflate",
        }
    }
}

/// Pick the encoding to use from an `Accept-Encoding` value.
///
/// gzip is preferred over deflate; codings listed with `q=0` are refused.
pub fn negotiate(accept_encoding: &str) -> Option<Encoding> {
    let accepted: Vec<&str> = accept_encoding
        .split(',')
        .filter_map(|item| {
            let mut parts = item.split(';').map(str::trim);
            let coding = parts.next()?;
            let refused = parts.any(|param| {
                param
                    .strip_prefix("q=")
                    .and_then(|q| q.parse::<f32>().ok())
                    .is_some_and(|q| q == 0.0)
            });
            (!refused && !coding.is_empty()).then_some(coding)
        })
        .collect();

    let accepts = |name: &str| {
        accepted
            .iter()
            .any(|coding| coding.eq_ignore_ascii_case(name) || *coding == "*")
    };

    if accepts("gzip") {
        Some(Encoding::Gzip)
    } else if accepts("deflate") {
        Some(Encoding::Deflate)
    } else {
        None
    }
}

pub fn encode(encoding: Encoding, body: &[u8]) -> std::io::Result<Vec<u8>> {
    let capacity = (body.len() / 2).max(256);
    match encoding {
        Encoding::Gzip => {
            let mut encoder = GzEncoder::new(Vec::with_capacity(capacity), Compression::default());
            encoder.write_all(body)?;
            encoder.finish()
        }
        Encoding::Deflate => {
            let mut encoder = ZlibEncoder::new(Vec::with_capacity(capacity), Compression::default());
            encoder.write_all(body)?;
            encoder.finish()
        }
    }
}

/// Compresses bodies of at least `min_bytes` when the client accepts it.
#[derive(Debug, Clone)]
pub struct Compress {
    min_bytes: usize,
}

impl Compress {
    pub fn new(min_bytes: usize) -> Self {
        Self { min_bytes }
    }
}

impl Middleware for Compress {
    fn on_response(&self, req: &RequestHead, mut res: Response) -> Response {
        if req.method == Method::HEAD
            || res.body.len() < self.min_bytes
            || res.body.is_empty()
            || res.headers.contains_key(CONTENT_ENCODING)
        {
            return res;
        }

        let Some(encoding) = req
            .headers
            .get(ACCEPT_ENCODING)
            .and_then(|v| v.to_str().ok())
            .and_then(negotiate)
        else {
            return res;
        };

        match encode(encoding, &res.body) {
            Ok(compressed) => {
                res.body = Bytes::from(compressed);
                res.headers.remove(CONTENT_LENGTH);
                res.headers
                    .insert(CONTENT_ENCODING, HeaderValue::from_static(encoding.as_str()));
                res.headers
                    .append(VARY, HeaderValue::from_static("accept-encoding"));
                res
            }
            Err(e) => {
                warn!(encoding = encoding.as_str(), "compression failed, sending identity: {e}");
                res
            }
        }
    }
}
