//! Reaction Keys - order-independent ingredient pairs
//!
//! A key is the two ingredient ids sorted by byte order and joined with `+`.
//! `vinegar + bakingsoda` and `bakingsoda + vinegar` both become
//! `bakingsoda+vinegar`, so the table stores each pair exactly once.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Joins the two ids. Never valid inside an ingredient id.
pub const KEY_SEPARATOR: char = '+';

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReactionKey(String);

impl ReactionKey {
    /// Canonical key for an unordered pair. `None` if either side is absent
    /// or empty.
    pub fn for_pair(a: Option<&str>, b: Option<&str>) -> Option<Self> {
        let a = a.filter(|s| !s.is_empty())?;
        let b = b.filter(|s| !s.is_empty())?;
        let (lo, hi) = if a.as_bytes() <= b.as_bytes() { (a, b) } else { (b, a) };
        Some(Self(format!("{}{}{}", lo, KEY_SEPARATOR, hi)))
    }

    /// Wrap a key read back from storage. Not validated: stale or foreign
    /// keys are kept as-is.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two ingredient ids, lowest first
    pub fn parts(&self) -> Option<(&str, &str)> {
        self.0.split_once(KEY_SEPARATOR)
    }

    /// Both sides name the same ingredient (never indexable)
    pub fn is_self_pair(&self) -> bool {
        matches!(self.parts(), Some((a, b)) if a == b)
    }
}

impl fmt::Display for ReactionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[inline]
pub fn is_valid_ingredient_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(KEY_SEPARATOR)
}
