//! Participant model
//!
//! A participant is identified by its display name; the name is the key
//! every expense uses to reference payers and beneficiaries.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::{SplitError, SplitResult};

/// A member of the group sharing expenses
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    /// Create a participant, trimming surrounding whitespace
    pub fn new(name: impl AsRef<str>) -> SplitResult<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(SplitError::Validation(
                "Participant name cannot be empty".into(),
            ));
        }
        Ok(Self(name.to_string()))
    }

    /// The participant's display name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Participant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Participant {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Participant {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Participant {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
