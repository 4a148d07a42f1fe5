use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One file selected for inclusion in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Location of the file, resolved against the base directory.
    pub path: PathBuf,
    /// Display label used in the structure diagram and as the section header.
    ///
    /// Top-level fixed files use their bare name (`build.gradle.kts`), files
    /// found in a tracked subdirectory use `<subdir>/<filename>`.
    pub title: String,
}

/// A non-fatal condition recorded while collecting or reading files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A required directory of the layout is absent; scanning stopped there.
    MissingDirectory { path: PathBuf },
    /// The file was not valid UTF-8 and was decoded as Latin-1 instead.
    EncodingFallback { path: PathBuf },
    /// The file could not be read at all; its content section is empty.
    Unreadable { path: PathBuf, message: String },
    /// An entry of a tracked subdirectory could not be enumerated.
    WalkFailed { path: PathBuf, message: String },
}

impl Diagnostic {
    /// Logs the condition and appends it to `diagnostics`.
    pub(crate) fn record(self, diagnostics: &mut Vec<Diagnostic>) {
        #[cfg(feature = "logging")]
        tracing::warn!("{}", self);
        diagnostics.push(self);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingDirectory { path } => {
                write!(f, "directory {} does not exist", path.display())
            }
            Diagnostic::EncodingFallback { path } => write!(
                f,
                "{} is not valid UTF-8, decoded as Latin-1",
                path.display()
            ),
            Diagnostic::Unreadable { path, message } => {
                write!(f, "cannot read {}: {}", path.display(), message)
            }
            Diagnostic::WalkFailed { path, message } => {
                write!(f, "cannot list {}: {}", path.display(), message)
            }
        }
    }
}

/// Output of a collector pass.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Collection {
    /// Descriptors in layout order.
    pub files: Vec<FileDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The result of a successful manifest run.
#[derive(Debug, Serialize, Deserialize)]
pub struct ManifestReport {
    /// Path of the manifest that was written.
    pub output: PathBuf,
    /// Every file that received a content section, in manifest order.
    pub files: Vec<FileDescriptor>,
    /// Conditions from both collection and reading, in the order they occurred.
    pub diagnostics: Vec<Diagnostic>,
}
