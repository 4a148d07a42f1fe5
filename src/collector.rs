use crate::error::ProjectInfoError;
use crate::layout::{Layout, Rule};
use crate::options::ManifestOptions;
use crate::types::{Collection, Diagnostic, FileDescriptor};
use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
struct GroupWalker {
    dir: PathBuf,
    inner: ignore::Walk,
    matcher: GlobMatcher,
}
impl GroupWalker {
    fn new(dir: &Path, pattern: &str, sort: bool) -> Result<Self, ProjectInfoError> {
        let matcher = Glob::new(pattern)
            .map_err(|e| ProjectInfoError::Pattern(format!("'{}': {}", pattern, e)))?
            .compile_matcher();
        let mut builder = WalkBuilder::new(dir);
        builder
            .standard_filters(false)
            .max_depth(Some(1))
            .follow_links(true);
        if sort {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        Ok(Self {
            dir: dir.to_path_buf(),
            inner: builder.build(),
            matcher,
        })
    }
    fn matching_files(self, diagnostics: &mut Vec<Diagnostic>) -> Vec<(PathBuf, String)> {
        let matcher = self.matcher;
        let mut found = Vec::new();
        for result in self.inner {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    let path = error_path(&e).map(Path::to_path_buf);
                    // Broken entries the pattern would skip anyway stay silent.
                    let relevant = match &path {
                        Some(p) if *p == self.dir => true,
                        Some(p) => p.file_name().is_some_and(|n| matcher.is_match(n)),
                        None => true,
                    };
                    if relevant {
                        Diagnostic::WalkFailed {
                            path: path.unwrap_or_else(|| self.dir.clone()),
                            message: e.to_string(),
                        }
                        .record(diagnostics);
                    }
                    continue;
                }
            };
            if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if matcher.is_match(&name) {
                found.push((entry.into_path(), name));
            }
        }
        found
    }
}
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}
/// Collects the files of the fixed `com.vulcheck` project layout.
pub fn collect(options: &ManifestOptions) -> Result<Collection, ProjectInfoError> {
    collect_layout(&Layout::vulcheck(), options)
}
// A missing `Rule::Enter` directory is reported and ends the pass with
// whatever was collected before it. The manifest itself is never collected.
pub(crate) fn collect_layout(
    layout: &Layout,
    options: &ManifestOptions,
) -> Result<Collection, ProjectInfoError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Collecting project files under {}", options.root.display());
    let manifest = options.output_path();
    let mut collection = Collection::default();
    let mut scope = options.root.clone();
    for rule in layout.rules() {
        match rule {
            Rule::File(name) => {
                let path = scope.join(name);
                if path.is_file() && path != manifest {
                    collection.files.push(FileDescriptor {
                        path,
                        title: name.clone(),
                    });
                }
            }
            Rule::Enter(dir) => {
                scope = scope.join(dir);
                if !scope.is_dir() {
                    Diagnostic::MissingDirectory { path: scope }
                        .record(&mut collection.diagnostics);
                    return Ok(collection);
                }
            }
            Rule::Group { dir, pattern } => {
                let group = scope.join(dir);
                if !group.is_dir() {
                    continue;
                }
                let walker = GroupWalker::new(&group, pattern, options.sort_entries)?;
                for (path, name) in walker.matching_files(&mut collection.diagnostics) {
                    if path == manifest {
                        continue;
                    }
                    collection.files.push(FileDescriptor {
                        path,
                        title: format!("{}/{}", dir, name),
                    });
                }
            }
        }
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Collected {} files", collection.files.len());
    Ok(collection)
}
