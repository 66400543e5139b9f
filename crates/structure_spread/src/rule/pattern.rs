//! Pattern syntax for weight rules.
//!
//! A pattern addresses either a subject identifier (`namespace:path`) or, with
//! a leading `#`, any tag the subject carries. Both halves may contain `*`
//! wildcards. Parsing yields a borrowing view; nothing pattern-shaped is
//! retained between resolutions.
use crate::error::{Error, Result};
use crate::rule::subject::Subject;

const BASE_SCORE: i32 = 100;
const LITERAL_BONUS: i32 = 10;
const FULL_HALF_BONUS: i32 = 30;
const FRAGMENT_BONUS: i32 = 10;
const WILDCARD_PENALTY: i32 = 5;

/// Parsed view of a single weight-rule pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern<'a> {
    /// True for `#`-prefixed patterns, which match against subject tags.
    pub is_tag: bool,
    /// Namespace half, wildcards included.
    pub namespace: &'a str,
    /// Path half, wildcards included.
    pub path: &'a str,
}

impl<'a> Pattern<'a> {
    /// Parses a pattern, rejecting missing separators and empty halves.
    pub fn parse(raw: &'a str) -> Result<Self> {
        let (is_tag, rest) = match raw.strip_prefix('#') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let Some((namespace, path)) = rest.split_once(':') else {
            return Err(Error::InvalidPattern {
                pattern: raw.to_owned(),
                reason: "missing ':' separator".to_owned(),
            });
        };
        if namespace.is_empty() {
            return Err(Error::InvalidPattern {
                pattern: raw.to_owned(),
                reason: "empty namespace".to_owned(),
            });
        }
        if path.is_empty() {
            return Err(Error::InvalidPattern {
                pattern: raw.to_owned(),
                reason: "empty path".to_owned(),
            });
        }
        if path.contains(':') {
            return Err(Error::InvalidPattern {
                pattern: raw.to_owned(),
                reason: "more than one ':' separator".to_owned(),
            });
        }
        Ok(Self {
            is_tag,
            namespace,
            path,
        })
    }

    /// Tests the pattern against a namespaced identifier.
    pub fn matches_id(&self, id: &str) -> bool {
        let Some((namespace, path)) = id.split_once(':') else {
            return false;
        };
        glob_match(self.namespace, namespace) && glob_match(self.path, path)
    }

    /// Tests the pattern against a subject: the id for literal patterns, any
    /// carried tag for tag patterns.
    pub fn matches(&self, subject: &Subject) -> bool {
        if self.is_tag {
            subject.tags.iter().any(|tag| self.matches_id(tag))
        } else {
            self.matches_id(&subject.id)
        }
    }

    /// Specificity score; the highest-scoring matching pattern wins.
    pub fn specificity(&self) -> i32 {
        let mut score = BASE_SCORE;
        if !self.is_tag {
            score += LITERAL_BONUS;
        }
        score += half_score(self.namespace);
        score += half_score(self.path);
        score -= WILDCARD_PENALTY * (wildcards_in(self.namespace) + wildcards_in(self.path));
        score
    }
}

fn half_score(half: &str) -> i32 {
    if !half.contains('*') {
        FULL_HALF_BONUS
    } else if half.chars().any(|c| c != '*') {
        FRAGMENT_BONUS
    } else {
        0
    }
}

fn wildcards_in(half: &str) -> i32 {
    half.chars().filter(|c| *c == '*').count() as i32
}

/// Glob match supporting `*` wildcards only, with backtracking.
pub(crate) fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern = pattern.as_bytes();
    let text = text.as_bytes();
    let mut p = 0;
    let mut t = 0;
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && pattern[p] == b'*' {
            star = Some((p, t));
            p += 1;
        } else if p < pattern.len() && pattern[p] == text[t] {
            p += 1;
            t += 1;
        } else if let Some((star_p, star_t)) = star {
            p = star_p + 1;
            t = star_t + 1;
            star = Some((star_p, star_t + 1));
        } else {
            return false;
        }
    }
    while p < pattern.len() && pattern[p] == b'*' {
        p += 1;
    }
    p == pattern.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_literal_and_tag_forms() {
        let literal = Pattern::parse("base:village_plains").unwrap();
        assert!(!literal.is_tag);
        assert_eq!(literal.namespace, "base");
        assert_eq!(literal.path, "village_plains");

        let tag = Pattern::parse("#base:is_plains").unwrap();
        assert!(tag.is_tag);
        assert_eq!(tag.namespace, "base");
        assert_eq!(tag.path, "is_plains");
    }

    #[test]
    fn parse_rejects_malformed_patterns() {
        for raw in ["", "no_separator", ":path", "ns:", "#:", "#", "a:b:c"] {
            assert!(
                matches!(Pattern::parse(raw), Err(Error::InvalidPattern { .. })),
                "expected rejection of '{raw}'"
            );
        }
    }

    #[test]
    fn glob_matches_literals_and_stars() {
        assert!(glob_match("stone", "stone"));
        assert!(!glob_match("stone", "stone_brick"));
        assert!(glob_match("*", "anything"));
        assert!(glob_match("*", ""));
        assert!(glob_match("stone_*", "stone_brick"));
        assert!(glob_match("*_brick", "stone_brick"));
        assert!(glob_match("s*k", "stone_brick"));
        assert!(!glob_match("s*k", "stone_bricks"));
        assert!(glob_match("a*b*c", "aXbYbZc"));
        assert!(!glob_match("a*b*c", "aXbYbZ"));
        assert!(!glob_match("", "x"));
        assert!(glob_match("", ""));
    }

    #[test]
    fn matches_id_requires_both_halves() {
        let pattern = Pattern::parse("base:village_*").unwrap();
        assert!(pattern.matches_id("base:village_plains"));
        assert!(!pattern.matches_id("other:village_plains"));
        assert!(!pattern.matches_id("village_plains"));
    }

    #[test]
    fn tag_patterns_match_any_carried_tag() {
        let pattern = Pattern::parse("#base:is_*").unwrap();
        let plains = Subject::new("base:plains").with_tag("base:is_plains");
        let desert = Subject::new("base:desert").with_tag("base:is_desert");
        let bare = Subject::new("base:void");
        assert!(pattern.matches(&plains));
        assert!(pattern.matches(&desert));
        assert!(!pattern.matches(&bare));
    }

    #[test]
    fn literal_patterns_ignore_tags() {
        let pattern = Pattern::parse("base:plains").unwrap();
        let subject = Subject::new("base:desert").with_tag("base:plains");
        assert!(!pattern.matches(&subject));
    }

    #[test]
    fn specificity_ladder_is_strictly_ordered() {
        let scores: Vec<i32> = [
            "ns:path",     // fully literal
            "#ns:path",    // tag, both halves literal
            "ns:stone_*",  // literal namespace, path fragment
            "ns:*",        // exactly one wildcard half
            "#ns:*",       // tag with one wildcard half
            "*:stone_*",   // wildcard namespace, path fragment
            "*:*",         // wildcards in both halves
            "#*:*",        // universal tag wildcard
        ]
        .iter()
        .map(|raw| Pattern::parse(raw).unwrap().specificity())
        .collect();

        assert_eq!(scores, vec![170, 160, 145, 135, 125, 110, 100, 90]);
        for pair in scores.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn extra_wildcards_keep_penalizing() {
        let one = Pattern::parse("ns:a*").unwrap().specificity();
        let two = Pattern::parse("ns:a*b*").unwrap().specificity();
        assert!(one > two);
    }
}
