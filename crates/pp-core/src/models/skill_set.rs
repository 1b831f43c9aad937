//! Ordered unique set of skill names.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Skills keep their insertion order for display while staying unique by
/// exact value. Matching is case-sensitive: "React" and "react" are two
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
    entries: Vec<String>,
    index: HashSet<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skill to the end of the sequence.
    ///
    /// The value is trimmed first. Returns false without modifying the
    /// set when the trimmed value is empty or already present.
    pub fn insert(&mut self, raw: &str) -> bool {
        let value = raw.trim();
        if value.is_empty() || self.index.contains(value) {
            return false;
        }
        self.entries.push(value.to_string());
        self.index.insert(value.to_string());
        true
    }

    /// Remove the exact match. Returns false if the value is absent.
    pub fn remove(&mut self, value: &str) -> bool {
        if !self.index.remove(value) {
            return false;
        }
        self.entries.retain(|entry| entry != value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.index.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<String>> for SkillSet {
    /// Duplicates keep their first occurrence.
    fn from(values: Vec<String>) -> Self {
        let mut set = SkillSet::new();
        for value in &values {
            set.insert(value);
        }
        set
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.entries
    }
}

impl<'a> FromIterator<&'a str> for SkillSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}
