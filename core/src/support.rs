//! Raw support codes and their coarse classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-valued support classification.
///
/// Ordered from weakest to strongest so `max`/`min` behave as expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    None,
    Partial,
    Full,
}

impl SupportLevel {
    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportLevel::None => "none",
            SupportLevel::Partial => "partial",
            SupportLevel::Full => "full",
        }
    }
}

impl fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw support code for one (browser, version) pair, e.g. `"y"`, `"a x #2"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportCode(String);

impl SupportCode {
    /// Create a code from its raw text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The code recorded for a pair the dataset has no entry for.
    pub fn absent() -> Self {
        Self(String::new())
    }

    /// Returns true if this is the absent code.
    pub fn is_absent(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Get the raw text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify this code.
    ///
    /// Tokens are whitespace separated; `#n` note references are ignored.
    /// Any partial/polyfill/prefixed/flagged marker wins over `y`, and
    /// anything unrecognized is `None`.
    pub fn level(&self) -> SupportLevel {
        let mut full = false;
        for token in self.0.split_whitespace() {
            if token.starts_with('#') {
                continue;
            }
            match token {
                "a" | "p" | "x" | "d" => return SupportLevel::Partial,
                "y" => full = true,
                _ => {}
            }
        }
        if full {
            SupportLevel::Full
        } else {
            SupportLevel::None
        }
    }
}

impl fmt::Display for SupportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SupportCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for SupportCode {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
