// SPDX-License-Identifier: MIT

//! Django CSRF header handling.
//!
//! State-changing requests against the site must carry the `csrftoken`
//! cookie value in the `X-CSRFToken` header. Safe methods never get the
//! header.

use reqwest::Method;
use reqwest::blocking::RequestBuilder;

/// Header Django's middleware checks on unsafe requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Cookie the token is read from.
pub const CSRF_COOKIE: &str = "csrftoken";

/// These HTTP methods do not require CSRF protection.
pub fn is_csrf_safe(method: &Method) -> bool {
    matches!(method.as_str(), "GET" | "HEAD" | "OPTIONS" | "TRACE")
}

/// A CSRF token scoped to one site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Extract the `csrftoken` value from a `Cookie:`-style header string.
    pub fn from_cookies(cookies: &str) -> Option<Self> {
        cookies.split(';').find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name.trim() == CSRF_COOKIE && !value.trim().is_empty())
                .then(|| Self(value.trim().to_string()))
        })
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Attach the token header when the method actually needs protection.
    pub fn attach(&self, method: &Method, builder: RequestBuilder) -> RequestBuilder {
        if is_csrf_safe(method) {
            builder
        } else {
            builder.header(CSRF_HEADER, self.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_methods_are_recognized() {
        for method in [Method::GET, Method::HEAD, Method::OPTIONS, Method::TRACE] {
            assert!(is_csrf_safe(&method), "{method} should be safe");
        }
        for method in [Method::POST, Method::PUT, Method::PATCH, Method::DELETE] {
            assert!(!is_csrf_safe(&method), "{method} should need protection");
        }
    }

    #[test]
    fn token_is_read_from_cookie_string() {
        let token = CsrfToken::from_cookies("sessionid=abc; csrftoken=tok123; theme=dark");
        assert_eq!(token, Some(CsrfToken::new("tok123")));
    }

    #[test]
    fn missing_or_empty_cookie_yields_no_token() {
        assert_eq!(CsrfToken::from_cookies("sessionid=abc"), None);
        assert_eq!(CsrfToken::from_cookies("csrftoken="), None);
        assert_eq!(CsrfToken::from_cookies(""), None);
    }
}
