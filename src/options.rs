use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepocatOptions {
    pub root: PathBuf,
    pub exclude: Vec<String>,
}
impl Default for RepocatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude: vec![".git".to_string()],
        }
    }
}
#[derive(Debug, Default)]
pub struct RepocatBuilder {
    options: RepocatOptions,
}
impl RepocatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: RepocatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Replaces the exclusion list. Entries match a path when they equal its
    /// final segment or occur anywhere in its relative-path string.
    pub fn exclude(mut self, entries: Vec<String>) -> Self {
        self.options.exclude = entries;
        self
    }
    pub fn exclude_entry(mut self, entry: impl Into<String>) -> Self {
        self.options.exclude.push(entry.into());
        self
    }
    pub fn no_exclusions(mut self) -> Self {
        self.options.exclude.clear();
        self
    }
    pub fn build(self) -> RepocatOptions {
        self.options
    }
}
