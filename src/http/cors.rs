//! CORS header injection
//!
//! The front-end makes fetch/XHR calls while being previewed locally, so
//! every response the server produces carries the permissive CORS headers.
//! `apply` runs at the single point where responses are finalized, which
//! means error responses get the headers too.

use hyper::header::{HeaderMap, HeaderValue};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Add the three CORS headers to an outgoing response.
pub fn apply(headers: &mut HeaderMap) {
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injects_exact_literal_values() {
        let mut headers = HeaderMap::new();
        apply(&mut headers);
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "GET, POST, OPTIONS");
        assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
    }

    #[test]
    fn apply_is_idempotent() {
        let mut headers = HeaderMap::new();
        apply(&mut headers);
        apply(&mut headers);
        assert_eq!(
            headers
                .get_all("Access-Control-Allow-Origin")
                .iter()
                .count(),
            1
        );
    }
}
