//! Credential extraction from the Authorization header.
//!
//! Classification only, no verification: the distinction between "no header
//! at all" and "header present but not a Bearer credential" matters, because
//! the former proceeds as anonymous while the latter is rejected outright.

use axum::http::{HeaderMap, header};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// No Authorization header on the request.
    Absent,
    /// Header present but not `Bearer <token>` (case-sensitive, single space).
    Malformed,
    /// The raw token with the `Bearer ` prefix stripped.
    Bearer(String),
}

pub fn from_headers(headers: &HeaderMap) -> Credential {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Credential::Absent;
    };

    let Ok(value) = value.to_str() else {
        return Credential::Malformed;
    };

    match value.strip_prefix("Bearer ") {
        Some(token) => Credential::Bearer(token.to_string()),
        None => Credential::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn no_header_is_absent() {
        assert_eq!(from_headers(&HeaderMap::new()), Credential::Absent);
    }

    #[test]
    fn bearer_prefix_is_stripped() {
        assert_eq!(
            from_headers(&headers_with("Bearer abc.def.ghi")),
            Credential::Bearer("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn wrong_scheme_is_malformed() {
        assert_eq!(from_headers(&headers_with("Basic abc")), Credential::Malformed);
    }

    #[test]
    fn lowercase_bearer_is_malformed() {
        // The prefix is case-sensitive.
        assert_eq!(from_headers(&headers_with("bearer abc")), Credential::Malformed);
    }

    #[test]
    fn bare_scheme_without_token_is_malformed() {
        assert_eq!(from_headers(&headers_with("Bearer")), Credential::Malformed);
    }
}
