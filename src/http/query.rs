//! Query string tokenizing and JSONP callback extraction
//!
//! The tokenizer borrows its input and yields slices of it, so a query
//! string can be scanned any number of times by any number of threads.

use std::fmt;

/// Parameter name that requests JSONP wrapping
const CALLBACK_KEY: &str = "callback";

/// Iterator over the non-empty `?`/`&` separated tokens of a query string
#[derive(Debug, Clone)]
pub struct QueryTokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for QueryTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.rest.is_empty() {
                return None;
            }
            let (token, rest) = match self.rest.find(is_delimiter) {
                Some(pos) => (&self.rest[..pos], &self.rest[pos + 1..]),
                None => (self.rest, ""),
            };
            self.rest = rest;
            // Consecutive delimiters produce no token
            if !token.is_empty() {
                return Some(token);
            }
        }
    }
}

const fn is_delimiter(c: char) -> bool {
    matches!(c, '?' | '&')
}

/// Split a query string on `?` and `&`, skipping empty tokens
///
/// # Examples
/// ```
/// use netp::http::query::tokens;
/// let parts: Vec<&str> = tokens("a=1&&b=2?c").collect();
/// assert_eq!(parts, ["a=1", "b=2", "c"]);
/// ```
pub const fn tokens(query: &str) -> QueryTokens<'_> {
    QueryTokens { rest: query }
}

/// A validated JSONP callback name
///
/// Non-empty and made only of ASCII letters, digits, `_` and `.`, so it can
/// be interpolated directly in front of a JSON payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallbackName(String);

impl CallbackName {
    /// Validate a candidate name, rejecting it whole on any bad character
    pub fn parse(candidate: &str) -> Option<Self> {
        if !candidate.is_empty() && candidate.chars().all(is_callback_char) {
            Some(Self(candidate.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CallbackName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallbackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const fn is_callback_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Extract the JSONP callback name from a raw query string
///
/// The first token starting with `callback` is selected and scanning stops
/// there, even if that token carries no usable value. The value is the second
/// non-empty `=`-separated field of the token; repeated `=` collapse and
/// anything after a further `=` is ignored.
///
/// Returns `None` when no callback was requested or when the value contains
/// anything other than ASCII alphanumerics, `_` and `.`.
///
/// # Examples
/// ```
/// use netp::http::query::extract_callback;
/// let cb = extract_callback("callback=myFunc&x=1").unwrap();
/// assert_eq!(cb.as_str(), "myFunc");
/// assert!(extract_callback("callback=bad<script>").is_none());
/// assert!(extract_callback("x=1&y=2").is_none());
/// ```
pub fn extract_callback(query: &str) -> Option<CallbackName> {
    let token = tokens(query).find(|token| token.starts_with(CALLBACK_KEY))?;
    let value = token.split('=').filter(|field| !field.is_empty()).nth(1)?;
    CallbackName::parse(value)
}

/// Wrap a response body in a call to the given callback
pub fn wrap_jsonp(callback: &CallbackName, body: &str) -> String {
    let mut wrapped = String::with_capacity(callback.0.len() + body.len() + 2);
    wrapped.push_str(&callback.0);
    wrapped.push('(');
    wrapped.push_str(body);
    wrapped.push(')');
    wrapped
}

/// Serialize a JSON payload, wrapping it when a callback was requested
pub fn jsonp_body(callback: Option<&CallbackName>, payload: &serde_json::Value) -> String {
    let json = payload.to_string();
    match callback {
        Some(callback) => wrap_jsonp(callback, &json),
        None => json,
    }
}
