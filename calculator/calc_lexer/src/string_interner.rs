//! Shared storage for token text.
//!
//! A calculator session produces the same handful of lexemes over and over
//! (`(`, `)`, `+`, small numbers), so every token holds an interned,
//! reference-counted string instead of its own allocation.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use lazy_static::lazy_static;

/// Set size at which lexemes no token refers to any more are dropped
const PRUNE_AT: usize = 256;

lazy_static! {
    static ref INTERNER: Mutex<HashSet<Arc<str>>> = Mutex::new(HashSet::new());
}

/// A reference-counted, interned string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InternedString(Arc<str>);

impl InternedString {
    /// Create a new interned string
    pub fn new(s: &str) -> Self {
        // Insert and retain leave the set valid, so a poisoned lock is still usable.
        let mut set = INTERNER.lock().unwrap_or_else(PoisonError::into_inner);
        match set.get(s) {
            Some(existing) => InternedString(Arc::clone(existing)),
            None => {
                if set.len() >= PRUNE_AT {
                    // Only the set holds these, every token that used them is gone
                    set.retain(|interned| Arc::strong_count(interned) > 1);
                }
                let arc: Arc<str> = Arc::from(s);
                set.insert(Arc::clone(&arc));
                InternedString(arc)
            }
        }
    }

    #[cfg(test)]
    fn interned_len() -> usize {
        INTERNER.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Get the string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InternedString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for InternedString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for InternedString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for InternedString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::fmt::Display for InternedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for InternedString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
