use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Registry for the PII redaction regex patterns used in log lines.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Email pattern: matches standard email addresses
    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// Base64-like token pattern: matches base64-encoded tokens (≥16 chars)
    pub fn base64_token() -> &'static Regex {
        static BASE64_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9+/]{16,}={0,2}\b").unwrap()
        });
        &BASE64_TOKEN_REGEX
    }

    /// Hex token pattern: matches hexadecimal tokens (≥16 chars)
    pub fn hex_token() -> &'static Regex {
        static HEX_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Fa-f0-9]{16,}\b").unwrap()
        });
        &HEX_TOKEN_REGEX
    }
}

/// Redacts sensitive information from a string.
///
/// - Emails: keeps the first character of the local part and the full domain.
/// - Opaque tokens: replaces base64-like or hex runs (≥16 chars) with
///   `[REDACTED_TOKEN]`.
///
/// Order: emails first, then tokens, to avoid double-processing.
pub fn redact(input: &str) -> String {
    let email_redacted = PiiRegexRegistry::email().replace_all(input, |caps: &regex::Captures| {
        let full_match = &caps[0];
        if let Some(at_pos) = full_match.find('@') {
            let local_part = &full_match[..at_pos];
            let domain = &full_match[at_pos..];

            if local_part.is_empty() {
                domain.to_string()
            } else {
                let first_char = &local_part[..1];
                format!("{first_char}***{domain}")
            }
        } else {
            full_match.to_string()
        }
    });

    let base64_redacted =
        PiiRegexRegistry::base64_token().replace_all(&email_redacted, "[REDACTED_TOKEN]");

    PiiRegexRegistry::hex_token()
        .replace_all(&base64_redacted, "[REDACTED_TOKEN]")
        .to_string()
}

/// A wrapper that automatically redacts sensitive strings when displayed.
pub struct Redacted<'a>(pub &'a str);

impl<'a> fmt::Display for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl<'a> fmt::Debug for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_redaction() {
        assert_eq!(redact("user@example.com"), "u***@example.com");
        assert_eq!(redact("a@test.org"), "a***@test.org");
        assert_eq!(redact("test@sub.example.com"), "t***@sub.example.com");
        assert_eq!(
            redact("Contact user@example.com or admin@test.org"),
            "Contact u***@example.com or a***@test.org"
        );
        assert_eq!(redact("@example.com"), "@example.com");
    }

    #[test]
    fn test_token_redaction() {
        assert_eq!(
            redact("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"),
            "[REDACTED_TOKEN]"
        );
        assert_eq!(
            redact("a1b2c3d4e5f678901234567890123456"),
            "[REDACTED_TOKEN]"
        );
        assert_eq!(redact("short123"), "short123");
    }

    #[test]
    fn test_mixed_content_redaction() {
        assert_eq!(
            redact("User user@example.com has token eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"),
            "User u***@example.com has token [REDACTED_TOKEN]"
        );
    }

    #[test]
    fn test_redacted_wrapper() {
        let redacted = Redacted("user@example.com");
        assert_eq!(format!("{redacted}"), "u***@example.com");
        assert_eq!(format!("{redacted:?}"), "u***@example.com");
    }

    #[test]
    fn test_no_sensitive_data() {
        assert_eq!(redact("Hello world"), "Hello world");
        assert_eq!(redact(""), "");
    }
}
