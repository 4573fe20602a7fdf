//! Logger module
//!
//! Provides logging utilities for the routing layer including:
//! - Startup logging of the loaded configuration
//! - Decision logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::RouteLogEntry;

use crate::config::Config;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_config_loaded(config: &Config) {
    write_info("======================================");
    write_info("Request routing configured");
    write_info(&format!("Log level: {}", config.logging.level));
    write_info(&format!(
        "Decision log: {} ({})",
        if config.logging.access_log { "on" } else { "off" },
        config.logging.access_log_format
    ));
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info(&format!("JSONP callbacks: {}", config.http.enable_jsonp));
    write_info("======================================\n");
}

pub fn log_info(message: &str) {
    write_info(&format!("[INFO] {message}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted decision log entry
pub fn log_route(entry: &RouteLogEntry, format: &str) {
    write_info(&entry.format(format));
}
