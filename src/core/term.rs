//! Academic term labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque label identifying an academic term, e.g. `"Term1"`.
///
/// Terms compare and order by label only.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(String);

impl Term {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Term {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}
