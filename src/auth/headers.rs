//! Fixed outbound header sets.

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, AUTHORIZATION, CONNECTION,
    CONTENT_TYPE, ORIGIN, USER_AGENT,
};
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_2) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/65.0.3325.181 Safari/537.36";

const ACCEPT_LANGUAGES: &str = "en;q=1, fr;q=0.9, de;q=0.8, ja;q=0.7, nl;q=0.6, it;q=0.5";

fn shared_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGES));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://robinhood.com"));
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers
}

/// Headers for the unauthenticated login exchange.
pub fn build_auth_headers() -> HeaderMap {
    let mut headers = shared_headers();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers
}

/// Headers for every authenticated API call.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the token contains bytes that are
/// not valid in a header value.
pub fn build_api_headers(access_token: &SecretString) -> Result<HeaderMap> {
    let mut headers = shared_headers();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", access_token.expose_secret()))
        .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_headers_have_no_authorization() {
        let headers = build_auth_headers();
        assert_eq!(headers.get(ACCEPT).unwrap(), "*/*");
        assert_eq!(headers.get(ORIGIN).unwrap(), "https://robinhood.com");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_api_headers_carry_bearer() {
        let headers = build_api_headers(&SecretString::from("abc123".to_string())).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.len(), 8);
    }

    #[test]
    fn test_api_headers_reject_bad_token() {
        let result = build_api_headers(&SecretString::from("bad\ntoken".to_string()));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
