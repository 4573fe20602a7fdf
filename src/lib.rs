//! Request-URI interpretation for a minimal HTTP server.
//!
//! Decides whether a request target names static content or a dynamic
//! (`cgi-bin`) resource, maps file extensions to content types and extracts
//! JSONP callback names from query strings. Socket handling, file I/O and
//! handler execution belong to the caller.

pub mod config;
pub mod http;
pub mod logger;
pub mod routing;

pub use http::mime::content_type;
pub use http::query::{extract_callback, CallbackName};
pub use routing::{resolve, ResolvedTarget, RoutePlan, Router, TargetKind};
