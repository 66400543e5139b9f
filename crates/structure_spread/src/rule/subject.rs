//! Subjects that weight tables resolve against.
//!
//! A subject is derived per query from external registry and biome lookups; it
//! is a plain value and nothing in this crate caches it.

/// A concrete namespaced identifier plus the tags it carries.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subject {
    /// Namespaced identifier, e.g. `base:plains`.
    pub id: String,
    /// Tag identifiers carried by the subject, without the `#` prefix.
    pub tags: Vec<String>,
}

impl Subject {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tags: Vec::new(),
        }
    }

    /// Adds one tag and returns the subject.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Replaces the tag set and returns the subject.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// True if the subject carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
