use sha2::{Digest, Sha256};
use url::Url;

use crate::error::InvalidReason;

pub const SHORT_CODE_LEN: usize = 8;

/// Checks that `candidate` is an absolute URL with a scheme and a host.
///
/// The parser repairs inputs such as `http:example.com` for special schemes,
/// so the `//` authority marker is also required in the text itself.
pub fn validate(candidate: &str) -> Result<(), InvalidReason> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return Err(InvalidReason::Empty);
    }
    let url = Url::parse(candidate).map_err(|_| InvalidReason::MalformedUrl)?;
    let has_authority = candidate
        .get(url.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"));
    if has_authority && url.host_str().is_some_and(|host| !host.is_empty()) {
        Ok(())
    } else {
        Err(InvalidReason::MalformedUrl)
    }
}

// short code for the long url: base58 of its sha256, truncated
pub fn encode_long_url(url: &str) -> String {
    let hash = Sha256::digest(url.as_bytes());
    let mut encoded = bs58::encode(hash).into_string();
    encoded.truncate(SHORT_CODE_LEN);
    encoded
}

pub fn valid_short_code(code: &str) -> bool {
    !code.is_empty() && code.len() <= 32 && code.chars().all(|c| c.is_ascii_alphanumeric())
}

/// `<base>/<code>` without doubling the separator.
pub fn join_short_link(base_url: &str, code: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        code.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_are_empty() {
        for candidate in ["", " ", "   ", "\t", "\n \r\n"] {
            assert_eq!(validate(candidate), Err(InvalidReason::Empty), "{candidate:?}");
        }
    }

    #[test]
    fn absolute_urls_are_accepted() {
        for candidate in [
            "http://example.com",
            "https://example.com/path?q=1#frag",
            "https://user:pw@sub.example.co.uk:8443/a/b",
            "ftp://files.example.org/readme.txt",
            "http://127.0.0.1:3000/",
            "  https://padded.example.com  ",
            "HTTPS://UPPER.example.com",
        ] {
            assert_eq!(validate(candidate), Ok(()), "{candidate:?}");
        }
    }

    #[test]
    fn missing_scheme_or_host_is_malformed() {
        for candidate in [
            "example.com",
            "www.example.com/page",
            "/relative/path",
            "http://",
            "https://exa mple.com",
            "mailto:someone@example.com",
            "data:text/plain,hello",
            "not a url",
            "http:example.com",
            "http:/example.com",
            "https:\\\\example.com",
            "https:/\\example.com",
        ] {
            assert_eq!(
                validate(candidate),
                Err(InvalidReason::MalformedUrl),
                "{candidate:?}"
            );
        }
    }

    #[test]
    fn short_code_is_stable_and_valid() {
        let code = encode_long_url("https://example.com");
        assert_eq!(code.len(), SHORT_CODE_LEN);
        assert_eq!(code, encode_long_url("https://example.com"));
        assert_ne!(code, encode_long_url("https://example.org"));
        assert!(valid_short_code(&code));
    }

    #[test]
    fn short_code_rejects_path_tricks() {
        assert!(!valid_short_code(""));
        assert!(!valid_short_code("../etc"));
        assert!(!valid_short_code("abc-123"));
        assert!(!valid_short_code(&"a".repeat(33)));
    }

    #[test]
    fn join_does_not_double_slashes() {
        assert_eq!(join_short_link("https://short.ly", "abc123"), "https://short.ly/abc123");
        assert_eq!(join_short_link("https://short.ly/", "abc123"), "https://short.ly/abc123");
        assert_eq!(join_short_link("https://short.ly/", "/abc123"), "https://short.ly/abc123");
        assert_eq!(join_short_link("http://h:8080/s", "x"), "http://h:8080/s/x");
    }
}
