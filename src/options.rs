use serde::{Deserialize, Serialize};
use std::path::PathBuf;
pub const DEFAULT_OUTPUT: &str = "projectinfo.txt";
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestOptions {
    pub root: PathBuf,
    pub output_name: String,
    pub sort_entries: bool,
}
impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_name: DEFAULT_OUTPUT.to_string(),
            sort_entries: true,
        }
    }
}
impl ManifestOptions {
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_name)
    }
}
#[derive(Debug, Default)]
pub struct ManifestBuilder {
    options: ManifestOptions,
}
impl ManifestBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ManifestOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output_name(mut self, name: impl Into<String>) -> Self {
        self.options.output_name = name.into();
        self
    }
    pub fn sort_entries(mut self, yes: bool) -> Self {
        self.options.sort_entries = yes;
        self
    }
    pub fn build(self) -> ManifestOptions {
        self.options
    }
}
