//! Request routing dispatch module
//!
//! Runs the full routing decision for one request target: resolve it, pick a
//! Content-Type from the resolved filename and, for dynamic targets, look up
//! the JSONP callback.

use crate::config::Config;
use crate::http::mime::{content_type, extension_of};
use crate::http::query::{extract_callback, CallbackName};
use crate::logger::{self, RouteLogEntry};
use crate::routing::resolver::{resolve, ResolvedTarget};
use hyper::Request;

/// Everything the caller needs to serve one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    pub target: ResolvedTarget,
    /// Extension of the resolved filename, empty when it has none
    pub extension: String,
    pub content_type: &'static str,
    /// Only ever set for dynamic targets
    pub callback: Option<CallbackName>,
}

/// Build the routing decision for a raw request target
pub fn plan(uri: &str, jsonp: bool) -> RoutePlan {
    let target = resolve(uri);
    let extension = extension_of(&target.filename).to_string();
    let content_type = content_type(&extension);
    let callback = if jsonp && target.is_dynamic() {
        extract_callback(&target.query_args)
    } else {
        None
    };

    RoutePlan {
        target,
        extension,
        content_type,
        callback,
    }
}

/// Routing entry point configured from [`Config`]
#[derive(Debug, Clone)]
pub struct Router {
    enable_jsonp: bool,
    access_log: bool,
    access_log_format: String,
}

impl Router {
    pub fn new(config: &Config) -> Self {
        Self {
            enable_jsonp: config.http.enable_jsonp,
            access_log: config.logging.access_log,
            access_log_format: config.logging.access_log_format.clone(),
        }
    }

    /// Route a raw request target
    pub fn route(&self, uri: &str) -> RoutePlan {
        let plan = plan(uri, self.enable_jsonp);
        if self.access_log {
            logger::log_route(&RouteLogEntry::new(uri, &plan), &self.access_log_format);
        }
        plan
    }

    /// Route the target of a parsed request
    ///
    /// Targets without a path (authority form) are routed as `/`.
    pub fn route_request<B>(&self, req: &Request<B>) -> RoutePlan {
        match req.uri().path_and_query() {
            Some(target) => self.route(target.as_str()),
            None => {
                logger::log_warning(&format!(
                    "Request target '{}' has no path, routing as '/'",
                    req.uri()
                ));
                self.route("/")
            }
        }
    }
}
