//! Internal module for rendering the structure section of a manifest.

use crate::layout::{Layout, Rule};
use crate::types::FileDescriptor;
use std::path::{MAIN_SEPARATOR, Path};

/// Header line that opens the structure section.
pub(crate) const STRUCTURE_HEADER: &str = "=== 目录结构 ===";

/// Renders the structure diagram of `layout` under `root`.
///
/// The skeleton always lists the layout's literal files and directories. Group
/// directories list the bare file names of the already-collected descriptors
/// whose title starts with `<dir>/`; the file system is not consulted again.
/// Each nesting level is indented by two spaces, and the section ends with a
/// blank line.
pub fn render_structure(root: &Path, layout: &Layout, files: &[FileDescriptor]) -> String {
    let mut lines = Vec::new();
    lines.push(STRUCTURE_HEADER.to_string());
    let root = root.display().to_string();
    let root = root.strip_suffix(MAIN_SEPARATOR).unwrap_or(root.as_str());
    lines.push(format!("{}/", root));

    let mut depth = 1;
    for rule in layout.rules() {
        match rule {
            Rule::File(name) => lines.push(format!("{}{}", indent(depth), name)),
            Rule::Enter(dir) => {
                for component in dir.components() {
                    let name = component.as_os_str().to_string_lossy();
                    lines.push(format!("{}{}/", indent(depth), name));
                    depth += 1;
                }
            }
            Rule::Group { dir, .. } => {
                lines.push(format!("{}{}/", indent(depth), dir));
                let prefix = format!("{}/", dir);
                for file in files.iter().filter(|f| f.title.starts_with(&prefix)) {
                    let name = file.title.rsplit('/').next().unwrap_or(file.title.as_str());
                    lines.push(format!("{}{}", indent(depth + 1), name));
                }
            }
        }
    }

    let mut out = lines.join("\n");
    out.push_str("\n\n");
    out
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}
