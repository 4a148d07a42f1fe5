use crate::collector::collect;
use crate::error::ProjectInfoError;
use crate::options::ManifestOptions;
use crate::types::ManifestReport;
use crate::writer::write_manifest;
pub fn generate(options: ManifestOptions) -> Result<ManifestReport, ProjectInfoError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting projectinfo with root: {}", options.root.display());
    if !options.root.is_dir() {
        return Err(ProjectInfoError::InvalidPath(format!(
            "{} is not a directory",
            options.root.display()
        )));
    }
    let collection = collect(&options)?;
    let mut diagnostics = collection.diagnostics;
    diagnostics.extend(write_manifest(&options, &collection.files)?);
    Ok(ManifestReport {
        output: options.output_path(),
        files: collection.files,
        diagnostics,
    })
}
