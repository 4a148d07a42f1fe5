//! The fixed project layout, expressed as an ordered list of rules.
//!
//! Both the collector and the structure renderer interpret the same list, so
//! the order of the rules is the order of the manifest.

use std::path::PathBuf;

/// A single step of a [`Layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// A literal file in the current scope, titled by its bare name.
    File(String),
    /// A required directory relative to the current scope.
    ///
    /// It becomes the scope of every following rule. When it is missing,
    /// interpretation stops and the rules after it are never applied.
    Enter(PathBuf),
    /// A subdirectory of the current scope whose direct children matching
    /// `pattern` are titled `<dir>/<filename>`. Missing groups are skipped.
    Group { dir: String, pattern: String },
}

/// An ordered sequence of [`Rule`]s resolved against a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rules: Vec<Rule>,
}

impl Layout {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The Gradle/Java layout of a `com.vulcheck` extension project.
    pub fn vulcheck() -> Self {
        let group = |dir: &str| Rule::Group {
            dir: dir.to_string(),
            pattern: "*.java".to_string(),
        };
        Self::new(vec![
            Rule::File("build.gradle.kts".to_string()),
            Rule::Enter(["src", "main", "java", "com", "vulcheck"].iter().collect()),
            Rule::File("Extension.java".to_string()),
            group("poc"),
            group("ui"),
            group("utils"),
        ])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
