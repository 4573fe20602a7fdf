//! HTTP protocol layer module
//!
//! Content-type lookup, query string handling and response building, kept free
//! of any routing decision so they can be used on their own.

pub mod html;
pub mod mime;
pub mod query;
pub mod response;

// Re-export commonly used items
pub use html::client_error;
pub use mime::{content_type, extension_of};
pub use query::{extract_callback, jsonp_body, tokens, wrap_jsonp, CallbackName};
pub use response::{build_error_response, build_jsonp_response};
