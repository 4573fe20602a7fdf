//! Routing module
//!
//! Provides the request routing decision:
//! - Static/dynamic classification of the request target
//! - Mapping of the target onto a relative filename and query arguments
//! - Content-Type and JSONP callback lookup for the resolved target

mod resolver;
mod router;

pub use resolver::{
    resolve, ResolvedTarget, TargetKind, DEFAULT_DOCUMENT, DYNAMIC_MARKER, RELATIVE_PREFIX,
};
pub use router::{plan, RoutePlan, Router};
