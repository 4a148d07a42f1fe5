use projectinfo::output::{format_report, ReportFormat};
use projectinfo::{generate, Diagnostic, ManifestBuilder, ProjectInfoError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
fn write(path: &Path, content: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
fn sample_project(root: &Path) {
    let pkg = root.join("src/main/java/com/vulcheck");
    write(&root.join("build.gradle.kts"), b"plugins{}");
    write(&pkg.join("Extension.java"), b"class Extension{}");
    write(&pkg.join("poc/A.java"), b"class A{}");
    write(&pkg.join("ui/B.java"), b"class B{}");
    write(&pkg.join("utils/C.java"), b"class C{}");
}
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    sample_project(dir.path());
    let report = generate(ManifestBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(report.output, dir.path().join("projectinfo.txt"));
    assert_eq!(report.files.len(), 5);
    assert!(report.diagnostics.is_empty());
    let manifest = fs::read_to_string(&report.output).unwrap();
    let expected = format!(
        "=== 目录结构 ===\n\
         {}/\n\
         \x20 build.gradle.kts\n\
         \x20 src/\n\
         \x20   main/\n\
         \x20     java/\n\
         \x20       com/\n\
         \x20         vulcheck/\n\
         \x20           Extension.java\n\
         \x20           poc/\n\
         \x20             A.java\n\
         \x20           ui/\n\
         \x20             B.java\n\
         \x20           utils/\n\
         \x20             C.java\n\
         \n\
         === 文件: build.gradle.kts ===\nplugins{{}}\n\n\
         === 文件: Extension.java ===\nclass Extension{{}}\n\n\
         === 文件: poc/A.java ===\nclass A{{}}\n\n\
         === 文件: ui/B.java ===\nclass B{{}}\n\n\
         === 文件: utils/C.java ===\nclass C{{}}\n\n",
        dir.path().display()
    );
    assert_eq!(manifest, expected);
}
#[test]
fn integration_rerun_is_byte_identical() {
    let dir = tempdir().unwrap();
    sample_project(dir.path());
    let first = generate(ManifestBuilder::new(dir.path()).build()).unwrap();
    let before = fs::read(&first.output).unwrap();
    let second = generate(ManifestBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(second.files.len(), 5);
    assert_eq!(fs::read(&second.output).unwrap(), before);
}
#[test]
fn integration_empty_root_still_writes_structure() {
    let dir = tempdir().unwrap();
    let report = generate(ManifestBuilder::new(dir.path()).build()).unwrap();
    assert!(report.files.is_empty());
    assert!(matches!(
        report.diagnostics.as_slice(),
        [Diagnostic::MissingDirectory { .. }]
    ));
    let manifest = fs::read_to_string(&report.output).unwrap();
    assert!(manifest.starts_with("=== 目录结构 ===\n"));
    assert!(manifest.ends_with("            utils/\n\n"));
    assert!(!manifest.contains("=== 文件:"));
}
#[test]
fn integration_latin1_source_is_included() {
    let dir = tempdir().unwrap();
    sample_project(dir.path());
    let pkg = dir.path().join("src/main/java/com/vulcheck");
    write(&pkg.join("ui/Legacy.java"), b"// r\xe9sum\xe9\nclass Legacy{}");
    let report = generate(ManifestBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(report.files.len(), 6);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::EncodingFallback {
            path: pkg.join("ui/Legacy.java")
        }]
    );
    let manifest = fs::read_to_string(&report.output).unwrap();
    assert!(manifest.contains("=== 文件: ui/Legacy.java ===\n// résumé\nclass Legacy{}\n\n"));
}
#[test]
fn integration_manifest_inside_group_is_not_collected() {
    let dir = tempdir().unwrap();
    sample_project(dir.path());
    let options = ManifestBuilder::new(dir.path())
        .output_name("src/main/java/com/vulcheck/poc/Manifest.java")
        .build();
    generate(options.clone()).unwrap();
    let report = generate(options).unwrap();
    assert!(report.files.iter().all(|f| f.title != "poc/Manifest.java"));
    assert_eq!(report.files.len(), 5);
}
#[test]
fn integration_unwritable_output_is_an_error() {
    let dir = tempdir().unwrap();
    sample_project(dir.path());
    let options = ManifestBuilder::new(dir.path())
        .output_name("missing/projectinfo.txt")
        .build();
    let err = generate(options).unwrap_err();
    assert!(matches!(err, ProjectInfoError::Io { .. }));
}
#[test]
fn integration_root_must_be_a_directory() {
    let dir = tempdir().unwrap();
    let err = generate(ManifestBuilder::new(dir.path().join("nope")).build()).unwrap_err();
    assert!(matches!(err, ProjectInfoError::InvalidPath(_)));
}
#[test]
fn integration_json_report() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("build.gradle.kts"), b"plugins{}");
    let report = generate(ManifestBuilder::new(dir.path()).build()).unwrap();
    let json = format_report(&report, ReportFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["files"][0]["title"], "build.gradle.kts");
    assert_eq!(value["diagnostics"][0]["kind"], "missing_directory");
    let text = format_report(&report, ReportFormat::Text, false).unwrap();
    assert!(text.contains("Files: 1\n  build.gradle.kts\n"));
    assert!(text.contains("Diagnostics: 1\n"));
}
