/// Top-level domains the email validator accepts, in lieu of DNS-aware
/// validation. Shared by every screen.
pub const VALID_TLDS: [&str; 21] = [
    "com", "net", "org", "co", "io", "za", "dev", "info", "biz", "me", "gov", "edu", "tv", "us",
    "uk", "ca", "ai", "app", "store", "tech", "xyz",
];

pub fn is_allowed(tld: &str) -> bool {
    VALID_TLDS.iter().any(|t| t.eq_ignore_ascii_case(tld))
}
