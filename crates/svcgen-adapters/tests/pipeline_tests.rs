//! End-to-end runs of the core pipeline over the real adapters.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use svcgen_adapters::{LocalFilesystem, MemoryFilesystem, template_locator::bundled_template_dir};
use svcgen_core::prelude::*;
use svcgen_core::{
    application::ApplicationError,
    domain::{DomainError, NameViolation},
    error::ErrorCategory,
};
use tempfile::TempDir;
use walkdir::WalkDir;

type Lines = Arc<Mutex<Vec<(StatusLevel, String)>>>;

/// Answers once, applying the same name rules as the interactive prompt.
struct ScriptedPrompter {
    name: &'static str,
}

impl ConfigPrompter for ScriptedPrompter {
    fn prompt(&self, existing: &HashSet<String>) -> SvcgenResult<Option<ServiceConfig>> {
        let name = ServiceName::parse_unique(self.name, existing)?;
        Ok(Some(ServiceConfig::new(name, "A", "MIT")))
    }
}

struct Declining;

impl ConfigPrompter for Declining {
    fn prompt(&self, _existing: &HashSet<String>) -> SvcgenResult<Option<ServiceConfig>> {
        Ok(None)
    }
}

struct FixedInstaller {
    code: i32,
    ran_in: Arc<Mutex<Option<std::path::PathBuf>>>,
}

impl DependencyInstaller for FixedInstaller {
    fn describe(&self) -> String {
        format!("fixed {}", self.code)
    }

    fn install(&self, project_dir: &Path) -> SvcgenResult<InstallStatus> {
        *self.ran_in.lock().unwrap() = Some(project_dir.to_path_buf());
        Ok(InstallStatus::from_code(self.code))
    }
}

struct Recorder(Lines);

impl Reporter for Recorder {
    fn report(&self, level: StatusLevel, message: &str) {
        self.0.lock().unwrap().push((level, message.to_string()));
    }
}

/// Relative path -> content for every file below `root`; directories map
/// to `None`.
fn snapshot(root: &Path) -> BTreeMap<String, Option<String>> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            let content = entry
                .file_type()
                .is_file()
                .then(|| fs::read_to_string(entry.path()).unwrap());
            (rel, content)
        })
        .collect()
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn node_template(root: &Path) {
    write(root, "package.json", r#"{"name":"tmpl","version":"1.0.0"}"#);
    write(root, "index.js", "require('./lib/util');\n");
    write(root, "lib/util.js", "module.exports = {};\n");
    write(root, "node_modules/left-pad/index.js", "cached");
    write(root, "lib/node_modules/x/index.js", "cached");
}

struct Run {
    report: RunReport,
    lines: Lines,
    installed_in: Option<std::path::PathBuf>,
}

fn run(
    prompter: Box<dyn ConfigPrompter>,
    filesystem: Box<dyn Filesystem>,
    template: &Path,
    workspace: &Path,
    install_code: i32,
) -> Run {
    let lines = Lines::default();
    let ran_in = Arc::new(Mutex::new(None));
    let report = Orchestrator::new(
        Collaborators {
            prompter,
            filesystem,
            installer: Box::new(FixedInstaller {
                code: install_code,
                ran_in: ran_in.clone(),
            }),
            reporter: Box::new(Recorder(lines.clone())),
        },
        TemplateLayout::node(template),
        workspace,
    )
    .run();
    let installed_in = ran_in.lock().unwrap().clone();
    Run {
        report,
        lines,
        installed_in,
    }
}

#[test]
fn copier_round_trips_a_plain_tree() {
    let template = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write(template.path(), "a.txt", "x");
    write(template.path(), "dir/b.txt", "y");
    let dest = out.path().join("copy");

    let fs_adapter = LocalFilesystem::new();
    TemplateCopier::new(&fs_adapter)
        .materialize(template.path(), &dest, &ExclusionSet::new())
        .unwrap();

    assert_eq!(snapshot(template.path()), snapshot(&dest));
}

#[test]
fn creates_service_from_node_template() {
    let template = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    node_template(template.path());

    let run = run(
        Box::new(ScriptedPrompter { name: "my-svc" }),
        Box::new(LocalFilesystem::new()),
        template.path(),
        workspace.path(),
        0,
    );

    assert!(run.report.is_success(), "{:?}", run.report.error);
    let project = workspace.path().join("my-svc");
    assert_eq!(run.installed_in.as_deref(), Some(project.as_path()));

    let files = snapshot(&project);
    let names: Vec<&str> = files.keys().map(String::as_str).collect();
    assert_eq!(names, ["index.js", "lib", "lib/util.js", "package.json"]);
    assert_eq!(
        files["index.js"].as_deref(),
        Some("require('./lib/util');\n")
    );

    let manifest: Value =
        serde_json::from_str(files["package.json"].as_deref().unwrap()).unwrap();
    assert_eq!(
        manifest,
        json!({"name": "my-svc", "version": "1.0.0", "author": "A", "license": "MIT"})
    );

    let lines = run.lines.lock().unwrap();
    assert_eq!(
        lines.last().unwrap(),
        &(
            StatusLevel::Success,
            "A new service \"my-svc\" has been successfully created!".to_string()
        )
    );
}

#[test]
fn failed_install_keeps_the_project() {
    let template = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    node_template(template.path());

    let run = run(
        Box::new(ScriptedPrompter { name: "my-svc" }),
        Box::new(LocalFilesystem::new()),
        template.path(),
        workspace.path(),
        1,
    );

    assert_eq!(run.report.stage, Stage::Failed);
    assert_eq!(
        run.report.error,
        Some(ApplicationError::InstallFailed { code: Some(1) }.into())
    );
    assert!(workspace.path().join("my-svc/package.json").is_file());
    assert!(
        run.lines
            .lock()
            .unwrap()
            .contains(&(
                StatusLevel::Error,
                "Something went wrong while dependencies installation.".to_string()
            ))
    );
}

#[test]
fn existing_name_is_rejected_before_anything_is_written() {
    let template = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    node_template(template.path());
    write(workspace.path(), "my-svc", "already here");

    let run = run(
        Box::new(ScriptedPrompter { name: "my-svc" }),
        Box::new(LocalFilesystem::new()),
        template.path(),
        workspace.path(),
        0,
    );

    assert_eq!(run.report.stage, Stage::Failed);
    match run.report.error {
        Some(SvcgenError::Domain(err)) => {
            assert!(!err.suggestions().is_empty());
            assert!(err.to_string().contains("my-svc"));
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(
        fs::read_to_string(workspace.path().join("my-svc")).unwrap(),
        "already here"
    );
    assert!(run.installed_in.is_none());
}

#[test]
fn declined_prompt_creates_nothing() {
    let template = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    node_template(template.path());

    let run = run(
        Box::new(Declining),
        Box::new(LocalFilesystem::new()),
        template.path(),
        workspace.path(),
        0,
    );

    assert_eq!(run.report.stage, Stage::Failed);
    assert!(snapshot(workspace.path()).is_empty());
    assert_eq!(
        *run.lines.lock().unwrap(),
        vec![(StatusLevel::Warning, "Config was not provided.".to_string())]
    );
}

#[test]
fn broken_manifest_fails_before_creating_the_directory() {
    let template = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write(template.path(), "package.json", "{ not json");
    write(template.path(), "index.js", "");

    let run = run(
        Box::new(ScriptedPrompter { name: "my-svc" }),
        Box::new(LocalFilesystem::new()),
        template.path(),
        workspace.path(),
        0,
    );

    assert!(matches!(
        run.report.error,
        Some(SvcgenError::Application(ApplicationError::ManifestParse { .. }))
    ));
    assert!(!workspace.path().join("my-svc").exists());
}

#[test]
fn binary_file_rolls_back_the_project() {
    let template = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    node_template(template.path());
    fs::write(template.path().join("logo.png"), [0x89, 0x50, 0xff, 0xfe]).unwrap();

    let run = run(
        Box::new(ScriptedPrompter { name: "my-svc" }),
        Box::new(LocalFilesystem::new()),
        template.path(),
        workspace.path(),
        0,
    );

    assert!(matches!(
        run.report.error,
        Some(SvcgenError::Application(ApplicationError::FilesystemError { .. }))
    ));
    assert!(!workspace.path().join("my-svc").exists());
}

#[test]
fn memory_filesystem_runs_the_same_pipeline() {
    let memory = MemoryFilesystem::new()
        .with_file("/t/package.json", r#"{"name":"tmpl","private":true}"#)
        .with_file("/t/index.js", "x")
        .with_file("/t/node_modules/dep/index.js", "cached")
        .with_dir("/work");

    let run = run(
        Box::new(ScriptedPrompter { name: "svc-2" }),
        Box::new(memory.clone()),
        Path::new("/t"),
        Path::new("/work"),
        0,
    );

    assert!(run.report.is_success());
    let files: Vec<String> = memory
        .list_files()
        .into_iter()
        .filter(|p| p.starts_with("/work"))
        .map(|p| p.display().to_string())
        .collect();
    assert_eq!(files, ["/work/svc-2/index.js", "/work/svc-2/package.json"]);
    assert_eq!(
        memory.read_file(Path::new("/work/svc-2/package.json")).unwrap(),
        "{\n  \"name\": \"svc-2\",\n  \"private\": true,\n  \"author\": \"A\",\n  \"license\": \"MIT\"\n}"
    );
}

#[test]
fn bundled_template_materializes() {
    let workspace = TempDir::new().unwrap();

    let run = run(
        Box::new(ScriptedPrompter { name: "demo" }),
        Box::new(LocalFilesystem::new()),
        &bundled_template_dir(),
        workspace.path(),
        0,
    );

    assert!(run.report.is_success(), "{:?}", run.report.error);
    let project = workspace.path().join("demo");
    for file in ["package.json", "index.js", "lib/util.js", "README.md"] {
        assert!(project.join(file).is_file(), "missing {file}");
    }
}

#[cfg(target_os = "linux")]
#[test]
fn odd_file_names_in_workspace_do_not_block_the_run() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let template = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    node_template(template.path());
    fs::write(workspace.path().join(OsStr::from_bytes(b"caf\xe9.txt")), "x").unwrap();

    let run = run(
        Box::new(ScriptedPrompter { name: "cafe" }),
        Box::new(LocalFilesystem::new()),
        template.path(),
        workspace.path(),
        0,
    );

    assert!(run.report.is_success(), "{:?}", run.report.error);
    assert!(workspace.path().join("cafe/package.json").is_file());
}

#[cfg(target_os = "linux")]
#[test]
fn odd_file_names_in_template_are_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let template = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    node_template(template.path());
    fs::write(template.path().join(OsStr::from_bytes(b"logo\xff.txt")), "x").unwrap();

    let run = run(
        Box::new(ScriptedPrompter { name: "svc" }),
        Box::new(LocalFilesystem::new()),
        template.path(),
        workspace.path(),
        0,
    );

    assert!(run.report.is_success(), "{:?}", run.report.error);
    let odd = fs::read_dir(workspace.path().join("svc"))
        .unwrap()
        .filter(|e| e.as_ref().unwrap().file_name().to_str().is_none())
        .count();
    assert_eq!(odd, 0);
}

#[test]
fn malformed_name_fails_validation() {
    let template = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    node_template(template.path());

    let run = run(
        Box::new(ScriptedPrompter { name: "My_Svc" }),
        Box::new(LocalFilesystem::new()),
        template.path(),
        workspace.path(),
        0,
    );

    let err = run.report.error.unwrap();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(
        err,
        SvcgenError::from(DomainError::InvalidServiceName {
            name: "My_Svc".into(),
            violation: NameViolation::InvalidFormat,
        })
    );
    assert!(snapshot(workspace.path()).is_empty());
}
