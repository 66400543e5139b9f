//! Weight tables mapping rule patterns to selection weights.
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::rule::pattern::Pattern;
use crate::rule::subject::Subject;

/// Maps rule patterns to positive integer weights.
///
/// Resolution returns the weight of the most specific matching pattern; ties
/// on specificity resolve to the larger weight, so the result never depends on
/// map iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeightTable {
    entries: HashMap<String, u32>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one pattern entry and returns the table.
    pub fn with_entry(mut self, pattern: impl Into<String>, weight: u32) -> Self {
        self.entries.insert(pattern.into(), weight);
        self
    }

    pub fn insert(&mut self, pattern: impl Into<String>, weight: u32) {
        self.entries.insert(pattern.into(), weight);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the raw `(pattern, weight)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(pattern, weight)| (pattern.as_str(), *weight))
    }

    /// Validates pattern syntax and weight positivity.
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(Error::InvalidConfig("weight table has no entries".into()));
        }
        for (raw, weight) in &self.entries {
            Pattern::parse(raw)?;
            if *weight == 0 {
                return Err(Error::InvalidConfig(format!(
                    "weight for pattern '{raw}' must be > 0"
                )));
            }
        }
        Ok(())
    }

    /// Resolves the table against a subject, returning the weight of the most
    /// specific matching pattern, or `default` when none match.
    ///
    /// Unparseable entries are skipped; [`WeightTable::validate`] rejects them
    /// before tables reach resolution.
    pub fn resolve(&self, subject: &Subject, default: u32) -> u32 {
        let mut best: Option<(i32, u32)> = None;
        for (raw, weight) in &self.entries {
            let Ok(pattern) = Pattern::parse(raw) else {
                continue;
            };
            if !pattern.matches(subject) {
                continue;
            }
            let scored = (pattern.specificity(), *weight);
            if best.is_none_or(|current| scored > current) {
                best = Some(scored);
            }
        }
        best.map_or(default, |(_, weight)| weight)
    }
}

impl FromIterator<(String, u32)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
