//! Comment mapping: page path to the comments posted on that page.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::submission::{CommentEntry, Submission};

/// Comments grouped by page path. Paths keep the order in which they were
/// first seen and comments keep the order in which they were pushed, so the
/// serialized form mirrors the remote ordering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentMap {
    groups: Vec<(String, Vec<CommentEntry>)>,
    index: HashMap<String, usize>,
}

impl CommentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group every submission under its page path.
    pub fn from_submissions(submissions: &[Submission]) -> Self {
        let mut map = Self::new();
        for submission in submissions {
            map.push(
                submission.data.page_path(),
                CommentEntry::from_submission(&submission.data),
            );
        }
        map
    }

    /// Append to the group for `path`, creating the group on first use.
    pub fn push(&mut self, path: String, entry: CommentEntry) {
        match self.index.get(&path) {
            Some(&i) => self.groups[i].1.push(entry),
            None => {
                self.index.insert(path.clone(), self.groups.len());
                self.groups.push((path, vec![entry]));
            }
        }
    }

    /// Number of distinct paths.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total_comments(&self) -> usize {
        self.groups.iter().map(|(_, entries)| entries.len()).sum()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(path, _)| path.as_str())
    }

    #[cfg(test)]
    pub fn get(&self, path: &str) -> Option<&[CommentEntry]> {
        self.index.get(path).map(|&i| self.groups[i].1.as_slice())
    }

    /// Pretty-printed JSON with 2-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for CommentMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (path, entries) in &self.groups {
            map.serialize_entry(path, entries)?;
        }
        map.end()
    }
}
