use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdError {
    #[error("bank name cannot be empty")]
    EmptyBankName,

    #[error("option key cannot be empty")]
    EmptyOptionKey,

    #[error("option key `{0}` has surrounding whitespace")]
    UntrimmedOptionKey(String),
}

/// Name of a question bank, e.g. `paper4`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BankName(String);

impl BankName {
    /// Creates a new `BankName`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `IdError::EmptyBankName` if nothing is left after trimming.
    pub fn new(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdError::EmptyBankName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-facing tab label. `paper4` becomes `Paper 4`; other names are shown as-is.
    #[must_use]
    pub fn label(&self) -> String {
        match self.0.strip_prefix("paper") {
            Some(rest) if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) => {
                format!("Paper {rest}")
            }
            _ => self.0.clone(),
        }
    }
}

/// Short identifier of one answer choice within a question (`a`, `b`, ...).
///
/// Keys are stable across shuffles; grading compares keys, never positions.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OptionKey(String);

impl OptionKey {
    /// # Errors
    ///
    /// Returns `IdError` if the key is empty or carries surrounding whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(IdError::EmptyOptionKey);
        }
        if raw.trim() != raw {
            return Err(IdError::UntrimmedOptionKey(raw));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased form used in option labels (`a` -> `A`).
    #[must_use]
    pub fn label(&self) -> String {
        self.0.to_uppercase()
    }
}

impl TryFrom<String> for BankName {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BankName> for String {
    fn from(value: BankName) -> Self {
        value.0
    }
}

impl TryFrom<String> for OptionKey {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OptionKey> for String {
    fn from(value: OptionKey) -> Self {
        value.0
    }
}

impl fmt::Debug for BankName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BankName({})", self.0)
    }
}

impl fmt::Debug for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionKey({})", self.0)
    }
}

impl fmt::Display for BankName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BankName {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for OptionKey {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
