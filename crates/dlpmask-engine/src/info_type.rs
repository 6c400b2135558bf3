//! Info types: named recognizers for sensitive data

mod builtin;

pub use builtin::builtin_info_types;

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Accepts or rejects a raw regex hit
pub type Validator = fn(&str) -> bool;

/// A named category of sensitive data together with its recognition rule
///
/// Patterns are immutable once built. Cloning shares the compiled regex.
#[derive(Clone)]
pub struct InfoTypePattern {
    name: String,
    regex: Arc<Regex>,
    validator: Option<Validator>,
}

impl InfoTypePattern {
    /// Create a pattern from an already compiled regex
    pub fn new(name: impl Into<String>, regex: Regex) -> Self {
        Self {
            name: name.into(),
            regex: Arc::new(regex),
            validator: None,
        }
    }

    /// Attach a validator that filters raw regex hits
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Compile a custom info type from a name and a regex source
    ///
    /// # Errors
    /// - `Error::InvalidPattern` if the regex does not compile
    pub fn custom(name: impl Into<String>, pattern: &str) -> Result<Self> {
        let name = name.into();
        match Regex::new(pattern) {
            Ok(regex) => Ok(Self::new(name, regex)),
            Err(source) => Err(Error::InvalidPattern { name, source }),
        }
    }

    /// Look up a built-in info type by name (e.g. `US_SOCIAL_SECURITY_NUMBER`)
    ///
    /// # Errors
    /// - `Error::UnknownInfoType` if no built-in has that name
    pub fn builtin(name: &str) -> Result<Self> {
        builtin::lookup(name).ok_or_else(|| Error::UnknownInfoType(name.to_string()))
    }

    /// Info type identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    pub(crate) fn accepts(&self, candidate: &str) -> bool {
        self.validator.is_none_or(|validate| validate(candidate))
    }
}

impl fmt::Debug for InfoTypePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoTypePattern")
            .field("name", &self.name)
            .field("pattern", &self.regex.as_str())
            .field("validated", &self.validator.is_some())
            .finish()
    }
}

/// Custom info type as it appears in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomInfoType {
    /// Info type identifier reported on matches
    pub name: String,

    /// Regex source
    pub pattern: String,
}

impl TryFrom<&CustomInfoType> for InfoTypePattern {
    type Error = Error;

    fn try_from(custom: &CustomInfoType) -> Result<Self> {
        Self::custom(custom.name.clone(), &custom.pattern)
    }
}
