/*!
 * Process Names
 * Short identifiers stored inline without heap allocation
 */

use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use std::borrow::Borrow;
use std::fmt;

/// Process identifier unique within a workload
///
/// Names like "A" or "worker-3" fit the 23-byte inline buffer, so cloning a
/// name into every metrics record never allocates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ProcName {
    inner: SmartString,
}

impl ProcName {
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Check if the name is stored inline (no heap allocation)
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.inner.is_inline()
    }
}

impl From<&str> for ProcName {
    #[inline]
    fn from(s: &str) -> Self {
        Self { inner: s.into() }
    }
}

impl From<String> for ProcName {
    #[inline]
    fn from(s: String) -> Self {
        Self { inner: s.into() }
    }
}

impl Borrow<str> for ProcName {
    #[inline]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for ProcName {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for ProcName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ProcName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for ProcName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
