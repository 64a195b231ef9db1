use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Identifier of one field within a form, e.g. `EmailAddress`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Borrow<str> for FieldId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for FieldId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for FieldId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Pass/fail rule applied to a field's value on submit, with the fixed
/// message shown when it fails.
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl FieldRule {
    pub fn new(check: fn(&str) -> bool, message: &'static str) -> Self {
        Self { check, message }
    }
}
