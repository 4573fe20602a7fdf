//! Decision log format module
//!
//! Supports multiple log formats:
//! - `text` (bracketed one-line summary)
//! - `json` (JSON structured logging)
//! - Custom patterns with variables

use crate::routing::RoutePlan;
use chrono::Local;
use serde::Serialize;
use std::fmt::Write;

/// Decision log entry describing how one request target was routed
#[derive(Debug, Clone, Serialize)]
pub struct RouteLogEntry {
    /// Time the decision was made
    pub time: chrono::DateTime<Local>,
    /// Request target as received
    pub uri: String,
    /// `static` or `dynamic`
    pub kind: &'static str,
    pub filename: String,
    /// Raw query arguments (dynamic targets only)
    pub query_args: String,
    pub content_type: &'static str,
    /// Validated JSONP callback, if any
    pub callback: Option<String>,
}

impl RouteLogEntry {
    /// Create a new entry for a routing decision with current timestamp
    pub fn new(uri: &str, plan: &RoutePlan) -> Self {
        Self {
            time: Local::now(),
            uri: uri.to_string(),
            kind: plan.target.kind.as_str(),
            filename: plan.target.filename.clone(),
            query_args: plan.target.query_args.clone(),
            content_type: plan.content_type,
            callback: plan.callback.as_ref().map(ToString::to_string),
        }
    }

    /// Format the log entry according to the specified format
    pub fn format(&self, format: &str) -> String {
        match format {
            "text" => self.format_text(),
            "json" => self.format_json(),
            custom => self.format_custom(custom),
        }
    }

    /// `[time] [Route] kind uri -> filename (content_type) callback=name`
    fn format_text(&self) -> String {
        let mut line = format!(
            "[{}] [Route] {} {} -> {} ({})",
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.kind,
            self.uri,
            self.filename,
            self.content_type,
        );
        if !self.query_args.is_empty() {
            let _ = write!(line, " args={}", self.query_args);
        }
        if let Some(callback) = &self.callback {
            let _ = write!(line, " callback={callback}");
        }
        line
    }

    /// JSON structured log format
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"error":"failed to serialize route log entry: {e}"}}"#)
        })
    }

    /// Custom format with variable substitution
    ///
    /// Supported variables:
    /// - `$time_local` - Local time in Common Log Format
    /// - `$time_iso8601` - ISO 8601 timestamp
    /// - `$uri` - Request target as received
    /// - `$kind` - `static` or `dynamic`
    /// - `$filename` - Resolved filename
    /// - `$query_args` - Raw query arguments
    /// - `$content_type` - Resolved Content-Type
    /// - `$callback` - JSONP callback name, `-` when absent
    fn format_custom(&self, pattern: &str) -> String {
        pattern
            .replace("$time_local", &self.time.format("%d/%b/%Y:%H:%M:%S %z").to_string())
            .replace("$time_iso8601", &self.time.to_rfc3339())
            .replace("$uri", &self.uri)
            .replace("$kind", self.kind)
            .replace("$filename", &self.filename)
            .replace("$query_args", &self.query_args)
            .replace("$content_type", self.content_type)
            .replace("$callback", self.callback.as_deref().unwrap_or("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::plan;

    fn create_test_entry() -> RouteLogEntry {
        let uri = "/cgi-bin/adder?callback=cb&a=1";
        RouteLogEntry::new(uri, &plan(uri, true))
    }

    #[test]
    fn test_format_text() {
        let log = create_test_entry().format("text");
        assert!(log.contains("[Route] dynamic /cgi-bin/adder?callback=cb&a=1 -> ./cgi-bin/adder"));
        assert!(log.contains("(text/plain)"));
        assert!(log.contains("args=callback=cb&a=1"));
        assert!(log.ends_with("callback=cb"));
    }

    #[test]
    fn test_format_text_static() {
        let entry = RouteLogEntry::new("/", &plan("/", true));
        let log = entry.format("text");
        assert!(log.contains("static / -> ./index.html (text/html)"));
        assert!(!log.contains("args="));
        assert!(!log.contains("callback="));
    }

    #[test]
    fn test_format_json() {
        let log = create_test_entry().format("json");
        let value: serde_json::Value = serde_json::from_str(&log).unwrap();
        assert_eq!(value["kind"], "dynamic");
        assert_eq!(value["filename"], "./cgi-bin/adder");
        assert_eq!(value["query_args"], "callback=cb&a=1");
        assert_eq!(value["callback"], "cb");
    }

    #[test]
    fn test_format_custom() {
        let entry = RouteLogEntry::new("/a.png", &plan("/a.png", true));
        let log = entry.format("$kind $filename $content_type $callback");
        assert_eq!(log, "static ./a.png image/png -");
    }
}
