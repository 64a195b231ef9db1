use crate::validate::tlds;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.([A-Za-z0-9_]{2,63})$")
        .expect("email pattern is valid")
});

/// Syntactic email check: `local@domain.tld` shape, with the trailing label
/// matched case-insensitively against the TLD allow-list.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE
        .captures(s)
        .is_some_and(|caps| caps.get(1).is_some_and(|tld| tlds::is_allowed(tld.as_str())))
}

/// At least 8 characters with one lowercase letter, one uppercase letter and
/// one digit; any character outside `[A-Za-z0-9]` rejects the whole string.
pub fn is_valid_password(s: &str) -> bool {
    s.chars().count() >= 8
        && s.chars().all(|c| c.is_ascii_alphanumeric())
        && s.chars().any(|c| c.is_ascii_lowercase())
        && s.chars().any(|c| c.is_ascii_uppercase())
        && s.chars().any(|c| c.is_ascii_digit())
}

/// Letters and whitespace only. Empty input passes; required-ness is the
/// form's concern, not the validator's.
pub fn is_valid_name(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}
