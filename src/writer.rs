//! Manifest serialization.
//!
//! A manifest is the structure section followed by one content section per
//! descriptor, in collection order:
//!
//! ```text
//! === 文件: poc/A.java ===
//! class A{}
//!
//! ```

use crate::error::ProjectInfoError;
use crate::layout::Layout;
use crate::options::ManifestOptions;
use crate::reader::read_content;
use crate::tree::render_structure;
use crate::types::{Diagnostic, FileDescriptor};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes the manifest for `files` to `options.output_path()`, replacing any
/// previous one.
///
/// Returns the diagnostics raised while reading the files. Only a failure to
/// create or write the manifest itself is an error.
pub fn write_manifest(
    options: &ManifestOptions,
    files: &[FileDescriptor],
) -> Result<Vec<Diagnostic>, ProjectInfoError> {
    let path = options.output_path();
    #[cfg(feature = "logging")]
    tracing::debug!("Writing manifest to {}", path.display());
    let file = File::create(&path).map_err(|e| ProjectInfoError::io(&path, e))?;
    let mut out = BufWriter::new(file);
    let diagnostics = render_manifest(&mut out, &options.root, &Layout::vulcheck(), files)
        .map_err(|e| ProjectInfoError::io(&path, e))?;
    out.flush().map_err(|e| ProjectInfoError::io(&path, e))?;
    Ok(diagnostics)
}

/// Streams a manifest into `out`, reading each file only when its section is
/// written.
pub fn render_manifest<W: Write>(
    out: &mut W,
    root: &Path,
    layout: &Layout,
    files: &[FileDescriptor],
) -> io::Result<Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();
    out.write_all(render_structure(root, layout, files).as_bytes())?;
    for file in files {
        writeln!(out, "=== 文件: {} ===", file.title)?;
        let content = read_content(&file.path, &mut diagnostics);
        out.write_all(content.as_bytes())?;
        out.write_all(b"\n\n")?;
    }
    Ok(diagnostics)
}
