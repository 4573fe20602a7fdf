//! HTML error page module

/// Signature line shown at the bottom of every error page
const SIGNATURE: &str = "netp web server";

/// Build an HTML error document around a single message
///
/// The message is escaped, so request data can be echoed back safely.
pub fn client_error(message: &str) -> String {
    let mut doc = String::with_capacity(160 + message.len());
    doc.push_str("<html>\r\n");
    doc.push_str("<head>\r\n");
    doc.push_str("<title>WebServer Error</title>\r\n");
    doc.push_str("</head>\r\n");
    doc.push_str("<body bgcolor=\"ffffff\">\r\n");
    doc.push_str("<p>");
    doc.push_str(&escape_html(message));
    doc.push_str("</p>\r\n");
    doc.push_str("<hr><em>");
    doc.push_str(SIGNATURE);
    doc.push_str("</em>\r\n");
    doc.push_str("</body>\r\n");
    doc.push_str("</html>\r\n");
    doc
}

/// Escape the characters that are significant in HTML text and attributes
fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shape() {
        let doc = client_error("Not found");
        assert!(doc.starts_with("<html>\r\n<head>\r\n"));
        assert!(doc.contains("<title>WebServer Error</title>"));
        assert!(doc.contains("<p>Not found</p>\r\n"));
        assert!(doc.ends_with("</body>\r\n</html>\r\n"));
    }

    #[test]
    fn test_message_is_escaped() {
        let doc = client_error("<script>alert('x')</script> & more");
        assert!(!doc.contains("<script>"));
        assert!(doc.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
    }

    #[test]
    fn test_empty_message() {
        assert!(client_error("").contains("<p></p>"));
    }
}
