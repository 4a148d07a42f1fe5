//! # Projectinfo
//!
//! `projectinfo` collects a fixed Gradle/Java project layout into a single manifest text
//! file: a directory structure diagram followed by the content of every collected file,
//! ready to be handed to a reviewer or a language model.
//!
//! The expected layout is fixed by convention:
//!
//! ```text
//! <root>/build.gradle.kts
//! <root>/src/main/java/com/vulcheck/Extension.java
//! <root>/src/main/java/com/vulcheck/{poc,ui,utils}/*.java
//! ```
//!
//! Missing files are skipped, non-UTF-8 files are decoded as Latin-1, and unreadable files
//! produce an empty section. Each of those conditions is returned as a [`Diagnostic`]
//! rather than aborting the run; only a failure to write the manifest is an error.
//!
//! # Features
//!
//! - `logging` (default): Emits progress and diagnostics via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use projectinfo::{ManifestBuilder, generate};
//!
//! let options = ManifestBuilder::new(".")
//!     .output_name("projectinfo.txt")
//!     .sort_entries(true)
//!     .build();
//!
//! let report = generate(options).expect("Failed to write manifest");
//!
//! println!("Manifest: {}", report.output.display());
//! for diagnostic in &report.diagnostics {
//!     println!("warning: {}", diagnostic);
//! }
//! ```

mod collector;
mod engine;
mod error;
mod layout;
mod options;
pub mod output;
mod reader;
mod tree;
mod types;
mod writer;

pub use collector::collect;
pub use engine::generate;
pub use error::ProjectInfoError;
pub use layout::{Layout, Rule};
pub use options::{DEFAULT_OUTPUT, ManifestBuilder, ManifestOptions};
pub use reader::read_content;
pub use tree::render_structure;
pub use types::{Collection, Diagnostic, FileDescriptor, ManifestReport};
pub use writer::{render_manifest, write_manifest};
