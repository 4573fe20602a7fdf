//! Request target resolution
//!
//! Classifies a raw request target as static or dynamic and maps it onto a
//! path relative to the served directory.

/// Any target containing this text is handled as dynamic content
pub const DYNAMIC_MARKER: &str = "cgi-bin";

/// Prefix that makes the resolved filename relative to the working directory
pub const RELATIVE_PREFIX: &str = ".";

/// Document served for targets ending in `/`
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Kind of content a request target names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// A file served from disk as is
    Static,
    /// A resource produced by a server-side handler
    Dynamic,
}

impl TargetKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
        }
    }
}

/// Outcome of resolving a request target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub kind: TargetKind,
    /// Path relative to the served directory, always starting with `.`
    pub filename: String,
    /// Raw text after the first `?` of a dynamic target, empty otherwise
    pub query_args: String,
}

impl ResolvedTarget {
    pub const fn is_dynamic(&self) -> bool {
        matches!(self.kind, TargetKind::Dynamic)
    }
}

/// Resolve a raw request target
///
/// The static/dynamic decision is a plain substring test for `cgi-bin`
/// anywhere in the target, including inside file names. No percent-decoding
/// is done and `..` segments are passed through untouched.
///
/// An empty target is resolved as `/`.
///
/// # Examples
/// ```
/// use netp::routing::resolve;
/// let target = resolve("/cgi-bin/adder?1&2");
/// assert!(target.is_dynamic());
/// assert_eq!(target.filename, "./cgi-bin/adder");
/// assert_eq!(target.query_args, "1&2");
/// ```
pub fn resolve(uri: &str) -> ResolvedTarget {
    let uri = if uri.is_empty() { "/" } else { uri };

    if uri.contains(DYNAMIC_MARKER) {
        resolve_dynamic(uri)
    } else {
        resolve_static(uri)
    }
}

fn resolve_static(uri: &str) -> ResolvedTarget {
    let capacity = RELATIVE_PREFIX.len() + uri.len() + DEFAULT_DOCUMENT.len();
    let mut filename = String::with_capacity(capacity);
    filename.push_str(RELATIVE_PREFIX);
    filename.push_str(uri);
    if uri.ends_with('/') {
        filename.push_str(DEFAULT_DOCUMENT);
    }

    ResolvedTarget {
        kind: TargetKind::Static,
        filename,
        query_args: String::new(),
    }
}

fn resolve_dynamic(uri: &str) -> ResolvedTarget {
    let (path, query_args) = uri.split_once('?').unwrap_or((uri, ""));

    let mut filename = String::with_capacity(RELATIVE_PREFIX.len() + path.len());
    filename.push_str(RELATIVE_PREFIX);
    filename.push_str(path);

    ResolvedTarget {
        kind: TargetKind::Dynamic,
        filename,
        query_args: query_args.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        let target = resolve("/");
        assert_eq!(target.kind, TargetKind::Static);
        assert_eq!(target.filename, "./index.html");
        assert_eq!(target.query_args, "");
    }

    #[test]
    fn test_empty_is_root() {
        assert_eq!(resolve(""), resolve("/"));
    }

    #[test]
    fn test_static_file() {
        let target = resolve("/css/site.css");
        assert!(!target.is_dynamic());
        assert_eq!(target.filename, "./css/site.css");
    }

    #[test]
    fn test_static_directory_gets_default_document() {
        assert_eq!(resolve("/docs/").filename, "./docs/index.html");
    }

    #[test]
    fn test_static_keeps_query_in_filename() {
        let target = resolve("/index.html?v=2");
        assert!(!target.is_dynamic());
        assert_eq!(target.filename, "./index.html?v=2");
        assert_eq!(target.query_args, "");

        let target = resolve("?");
        assert!(!target.is_dynamic());
        assert_eq!(target.filename, ".?");
    }

    #[test]
    fn test_dynamic_with_query() {
        let target = resolve("/cgi-bin/adder?1&2");
        assert!(target.is_dynamic());
        assert_eq!(target.filename, "./cgi-bin/adder");
        assert_eq!(target.query_args, "1&2");
    }

    #[test]
    fn test_dynamic_without_query() {
        let target = resolve("/cgi-bin/adder");
        assert!(target.is_dynamic());
        assert_eq!(target.filename, "./cgi-bin/adder");
        assert_eq!(target.query_args, "");
    }

    #[test]
    fn test_dynamic_splits_at_first_question_mark() {
        let target = resolve("/cgi-bin/q?callback=foo&x=1?y");
        assert_eq!(target.filename, "./cgi-bin/q");
        assert_eq!(target.query_args, "callback=foo&x=1?y");
    }

    #[test]
    fn test_dynamic_empty_tail() {
        let target = resolve("cgi-bin?");
        assert!(target.is_dynamic());
        assert_eq!(target.filename, ".cgi-bin");
        assert_eq!(target.query_args, "");

        let target = resolve("?cgi-bin");
        assert!(target.is_dynamic());
        assert_eq!(target.filename, ".");
        assert_eq!(target.query_args, "cgi-bin");
    }

    #[test]
    fn test_marker_anywhere_is_dynamic() {
        assert!(resolve("/files/my-cgi-bin-notes.txt").is_dynamic());
        assert!(resolve("/index.html?from=cgi-bin").is_dynamic());
        assert!(!resolve("/cgi_bin/adder").is_dynamic());
        assert!(!resolve("/CGI-BIN/adder").is_dynamic());
    }

    #[test]
    fn test_traversal_is_not_filtered() {
        assert_eq!(resolve("/../etc/passwd").filename, "./../etc/passwd");
    }

    #[test]
    fn test_filename_invariant() {
        for uri in ["", "/", "?", "/a", "/cgi-bin", "/cgi-bin/x?y", "x/"] {
            let target = resolve(uri);
            assert!(target.filename.starts_with(RELATIVE_PREFIX), "{uri}");
            if !target.is_dynamic() {
                assert!(target.query_args.is_empty(), "{uri}");
            }
        }
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(TargetKind::Static.as_str(), "static");
        assert_eq!(TargetKind::Dynamic.as_str(), "dynamic");
    }
}
