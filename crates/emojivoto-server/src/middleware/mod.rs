//! Middleware stack para el servidor HTTP.
//!
//! - `RequestIdLayer`: genera o propaga X-Request-Id
//! - `LoggingLayer`: logging estructurado de requests

mod logging;
mod request_id;

pub use logging::{LoggingLayer, LoggingMiddleware};
pub use request_id::{REQUEST_ID_HEADER, RequestIdLayer, RequestIdMiddleware};
