//! Metric identity: a `(scope, name)` value with textual form `scope:name`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{KaizenError, Result};

/// Immutable metric identity.
///
/// Equality, hashing, and ordering are structural over `(scope, name)`:
/// scope is compared first, then name, both by byte-wise string order.
/// Each field is hashed with its own terminator, so `("a", "bc")` and
/// `("ab", "c")` hash independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MetricName {
    scope: String,
    name: String,
}

impl MetricName {
    /// No validation; empty strings are legal.
    pub fn new(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            name: name.into(),
        }
    }

    /// Scope taken from the fully-qualified type name of `T`.
    pub fn for_type<T: ?Sized>(name: impl Into<String>) -> Self {
        Self::new(std::any::type_name::<T>(), name)
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scope, self.name)
    }
}

/// Parses `scope:name`, splitting at the last colon so type paths such as
/// `app::jobs::Worker` stay intact as scopes. Names cannot contain colons.
impl FromStr for MetricName {
    type Err = KaizenError;

    fn from_str(s: &str) -> Result<Self> {
        let (scope, name) = s
            .rsplit_once(':')
            .ok_or_else(|| KaizenError::InvalidName(format!("missing ':' in {s:?}")))?;
        if name.is_empty() {
            return Err(KaizenError::InvalidName(format!("empty name in {s:?}")));
        }
        Ok(Self::new(scope, name))
    }
}

impl TryFrom<String> for MetricName {
    type Error = KaizenError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<MetricName> for String {
    fn from(n: MetricName) -> Self {
        n.to_string()
    }
}
