//! Shared utilities for the prodcopy codebase

use std::fmt;

/// A string wrapper that masks its contents in Debug/Display output.
/// Keeps API keys out of logs and error messages.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(s: String) -> Self {
        Self(s)
    }

    /// Access the raw secret value (for request headers)
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when there is no usable key (blank or the literal "none")
    pub fn is_absent(&self) -> bool {
        let key = self.0.trim();
        key.is_empty() || key.eq_ignore_ascii_case("none")
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<&str> for SecretString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Strip the line terminator read from an interactive prompt, leaving any
/// other whitespace the operator typed.
pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(line)
}
