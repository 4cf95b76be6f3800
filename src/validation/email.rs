//! E-mail address matching.

use regex::Regex;

/// Pattern an e-mail address must match in full.
///
/// The character classes decide where "E-mail address is not valid." starts
/// and stops firing, so changes here are visible to users.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$";

/// Compiled e-mail matcher
#[derive(Debug, Clone)]
pub struct EmailValidator {
    regex: Regex,
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self {
            regex: default_regex(),
        }
    }
}

impl EmailValidator {
    /// Compile a validator from a custom pattern.
    ///
    /// The pattern is wrapped so that it always has to match the whole
    /// address, the way the default pattern's anchors do.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let anchored = format!("^(?:{})$", strip_anchors(pattern));
        Ok(Self {
            regex: Regex::new(&anchored)?,
        })
    }

    /// Check whether `email` is a syntactically valid address
    pub fn is_valid(&self, email: &str) -> bool {
        self.regex.is_match(email)
    }
}

fn default_regex() -> Regex {
    // The builtin pattern is a literal we test below; compilation cannot fail.
    match Regex::new(DEFAULT_EMAIL_PATTERN) {
        Ok(regex) => regex,
        Err(e) => unreachable!("builtin e-mail pattern is invalid: {e}"),
    }
}

fn strip_anchors(pattern: &str) -> &str {
    let pattern = pattern.strip_prefix('^').unwrap_or(pattern);
    match pattern.strip_suffix('$') {
        Some(rest) if !rest.ends_with('\\') => rest,
        _ => pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern_compiles() {
        assert!(Regex::new(DEFAULT_EMAIL_PATTERN).is_ok());
        assert!(EmailValidator::new(DEFAULT_EMAIL_PATTERN).is_ok());
    }

    #[test]
    fn test_valid_addresses() {
        let validator = EmailValidator::default();
        assert!(validator.is_valid("user@example.com"));
        assert!(validator.is_valid("first.last+tag@sub.example.co"));
        assert!(validator.is_valid("A_B%C-D@EXAMPLE.ORG"));
    }

    #[test]
    fn test_invalid_addresses() {
        let validator = EmailValidator::default();
        assert!(!validator.is_valid(""));
        assert!(!validator.is_valid("a@b"));
        assert!(!validator.is_valid("user@example.c"));
        assert!(!validator.is_valid("user example@example.com"));
        assert!(!validator.is_valid("@example.com"));
        assert!(!validator.is_valid("user@example.com "));
        assert!(!validator.is_valid(" user@example.com"));
        assert!(!validator.is_valid("user@example.com\n"));
    }

    #[test]
    fn test_top_level_domain_length_bounds() {
        let validator = EmailValidator::default();
        let longest = format!("u@d.{}", "a".repeat(64));
        let too_long = format!("u@d.{}", "a".repeat(65));
        assert!(validator.is_valid(&longest));
        assert!(!validator.is_valid(&too_long));
    }

    #[test]
    fn test_custom_pattern_is_anchored() {
        let validator = EmailValidator::new(r"[a-z]+@corp\.test").unwrap();
        assert!(validator.is_valid("alice@corp.test"));
        assert!(!validator.is_valid("xx alice@corp.test"));
        assert!(!validator.is_valid("alice@corp.test.evil"));
    }

    #[test]
    fn test_custom_pattern_keeps_escaped_dollar() {
        let validator = EmailValidator::new(r"^a\$").unwrap();
        assert!(validator.is_valid("a$"));
        assert!(!validator.is_valid("a"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        assert!(EmailValidator::new("[unclosed").is_err());
    }
}
