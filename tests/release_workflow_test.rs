// tests/release_workflow_test.rs
use std::fs;
use std::path::Path;

use shipnote::boundary::BoundaryWarning;
use shipnote::changelog::CHANGELOG_PREAMBLE;
use shipnote::cli::orchestration::{run_release_workflow, ReleaseWorkflowArgs};
use shipnote::config::{Config, FilesConfig};
use shipnote::domain::VersionBump;
use shipnote::sink::{EnvFileSink, RecordingSink};
use shipnote::ShipnoteError;
use tempfile::TempDir;

const SAMPLE_COMMITS: &str = r#"[
    "feat(auth): add OAuth2 authentication support",
    "fix(api): resolve timeout issue in user endpoint",
    "docs: update README with new installation steps",
    "feat!: migrate to new API structure\n\nBREAKING CHANGE: API endpoints have changed",
    "chore: update dependencies"
]"#;

const EXPECTED_ENTRY: &str = "## [1.3.0] - 2024-05-01\n\n\
### ⚠ BREAKING CHANGES\n\n\
- migrate to new API structure\n\n\
### ✨ Features\n\n\
- **auth**: add OAuth2 authentication support\n\n\
### 🐛 Bug Fixes\n\n\
- **api**: resolve timeout issue in user endpoint\n\n\
### 📝 Other Changes\n\n\
- update README with new installation steps\n\
- update dependencies\n\n";

fn project(manifest: &str) -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("deno.json"), manifest).unwrap();

    let config = Config {
        files: FilesConfig {
            manifest: dir.path().join("deno.json"),
            changelog: dir.path().join("CHANGELOG.md"),
            release_notes: dir.path().join("RELEASE_NOTES.md"),
            env_file: dir.path().join(".env"),
        },
        ..Config::default()
    };
    (dir, config)
}

fn minor_release() -> ReleaseWorkflowArgs {
    ReleaseWorkflowArgs {
        bump_type: "minor".to_string(),
        commits_json: Some(SAMPLE_COMMITS.to_string()),
        pr_title: "Test minor release".to_string(),
        pr_number: Some("123".to_string()),
        date: Some("2024-05-01".to_string()),
        ..ReleaseWorkflowArgs::default()
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_minor_release_writes_all_documents() {
    let (_dir, config) = project("{\n  \"name\": \"@scope/pkg\",\n  \"version\": \"1.2.3\"\n}\n");
    let sink = RecordingSink::new();

    let result = run_release_workflow(&minor_release(), &config, &sink).unwrap();

    assert_eq!(result.previous_version, "1.2.3");
    assert_eq!(result.version, "1.3.0");
    assert_eq!(result.bump, VersionBump::Minor);
    assert!(result.warnings.is_empty());
    assert_eq!(
        result.updated_files,
        vec![
            config.files.manifest.clone(),
            config.files.changelog.clone(),
            config.files.release_notes.clone(),
        ]
    );

    assert_eq!(
        read(&config.files.manifest),
        "{\n  \"name\": \"@scope/pkg\",\n  \"version\": \"1.3.0\"\n}\n"
    );
    assert_eq!(
        read(&config.files.changelog),
        format!("{}{}", CHANGELOG_PREAMBLE, EXPECTED_ENTRY)
    );

    let notes = read(&config.files.release_notes);
    assert!(notes.starts_with("# Release 1.3.0\n\n**Merged PR**: Test minor release (#123)\n\n"));
    assert!(!notes.contains("## [1.3.0]"));

    assert_eq!(sink.published(), vec!["1.3.0".to_string()]);
}

#[test]
fn test_manifest_fields_keep_their_order() {
    let (_dir, config) = project(
        r#"{"version": "0.9.9", "name": "pkg", "exports": "./mod.ts", "tasks": {"dev": "deno run main.ts"}}"#,
    );
    let args = ReleaseWorkflowArgs {
        bump_type: "major".to_string(),
        date: Some("2024-05-01".to_string()),
        ..ReleaseWorkflowArgs::default()
    };

    run_release_workflow(&args, &config, &RecordingSink::new()).unwrap();

    let manifest = read(&config.files.manifest);
    let version_at = manifest.find("\"version\": \"1.0.0\"").unwrap();
    let name_at = manifest.find("\"name\"").unwrap();
    let exports_at = manifest.find("\"exports\"").unwrap();
    let tasks_at = manifest.find("\"tasks\"").unwrap();
    assert!(version_at < name_at && name_at < exports_at && exports_at < tasks_at);
    assert!(manifest.contains("    \"dev\": \"deno run main.ts\""));
    assert!(manifest.ends_with("}\n"));
}

#[test]
fn test_prepends_to_existing_changelog() {
    let (_dir, config) = project(r#"{"version": "1.2.3"}"#);
    let previous = format!(
        "{}## [1.2.3] - 2024-01-01\n\n### 🐛 Bug Fixes\n\n- **core**: earlier fix\n",
        CHANGELOG_PREAMBLE
    );
    fs::write(&config.files.changelog, &previous).unwrap();

    run_release_workflow(&minor_release(), &config, &RecordingSink::new()).unwrap();

    let changelog = read(&config.files.changelog);
    let old_entry = "## [1.2.3] - 2024-01-01\n\n### 🐛 Bug Fixes\n\n- **core**: earlier fix\n";
    assert_eq!(
        changelog,
        format!("{}{}\n{}", CHANGELOG_PREAMBLE, EXPECTED_ENTRY, old_entry)
    );
}

#[test]
fn test_changelog_without_entries_gets_warning() {
    let (_dir, config) = project(r#"{"version": "1.2.3"}"#);
    fs::write(&config.files.changelog, "# Changelog\n\nNothing yet.\n").unwrap();

    let result = run_release_workflow(&minor_release(), &config, &RecordingSink::new()).unwrap();

    assert_eq!(
        result.warnings,
        vec![BoundaryWarning::ChangelogHeaderMissing {
            path: config.files.changelog.clone()
        }]
    );
    let changelog = read(&config.files.changelog);
    assert!(changelog.starts_with("# Changelog\n\nNothing yet.\n"));
    assert!(changelog.ends_with(EXPECTED_ENTRY));
}

#[test]
fn test_release_without_commits() {
    let (_dir, config) = project(r#"{"version": "2.4.6"}"#);
    let args = ReleaseWorkflowArgs {
        date: Some("2024-05-01".to_string()),
        ..ReleaseWorkflowArgs::default()
    };

    let result = run_release_workflow(&args, &config, &RecordingSink::new()).unwrap();

    assert_eq!(result.version, "2.4.7");
    assert_eq!(result.warnings, vec![BoundaryWarning::NoCommits]);
    assert_eq!(
        read(&config.files.changelog),
        format!("{}## [2.4.7] - 2024-05-01\n\n", CHANGELOG_PREAMBLE)
    );
    assert_eq!(
        read(&config.files.release_notes),
        "# Release 2.4.7\n\n**Merged PR**: Merged changes\n\n"
    );
}

#[test]
fn test_version_suffix_is_dropped_with_warning() {
    let (_dir, config) = project(r#"{"version": "1.2.3-beta.1"}"#);
    let args = ReleaseWorkflowArgs {
        commits_json: Some(r#"["fix: small thing"]"#.to_string()),
        date: Some("2024-05-01".to_string()),
        ..ReleaseWorkflowArgs::default()
    };

    let result = run_release_workflow(&args, &config, &RecordingSink::new()).unwrap();

    assert_eq!(result.version, "1.2.4");
    assert_eq!(
        result.warnings,
        vec![BoundaryWarning::VersionSuffixDropped {
            original: "1.2.3-beta.1".to_string(),
            kept: "1.2.3".to_string(),
        }]
    );
}

#[test]
fn test_leading_zeros_are_normalized_without_warning() {
    let (_dir, config) = project(r#"{"version": "01.2.3"}"#);
    let args = ReleaseWorkflowArgs {
        commits_json: Some(r#"["fix: small thing"]"#.to_string()),
        date: Some("2024-05-01".to_string()),
        ..ReleaseWorkflowArgs::default()
    };

    let result = run_release_workflow(&args, &config, &RecordingSink::new()).unwrap();

    assert_eq!(result.version, "1.2.4");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_version_overflow_fails_before_any_write() {
    let manifest = r#"{"version": "4294967295.0.0"}"#;
    let (_dir, config) = project(manifest);
    let sink = RecordingSink::new();
    let args = ReleaseWorkflowArgs {
        bump_type: "major".to_string(),
        ..minor_release()
    };

    let err = run_release_workflow(&args, &config, &sink).unwrap_err();

    assert!(matches!(err, ShipnoteError::VersionOverflow { .. }));
    assert_eq!(read(&config.files.manifest), manifest);
    assert!(!config.files.changelog.exists());
    assert!(sink.published().is_empty());
}

#[test]
fn test_dry_run_writes_nothing() {
    let manifest = r#"{"version": "1.2.3"}"#;
    let (_dir, config) = project(manifest);
    let sink = RecordingSink::new();
    let args = ReleaseWorkflowArgs {
        dry_run: true,
        ..minor_release()
    };

    let result = run_release_workflow(&args, &config, &sink).unwrap();

    assert!(result.dry_run);
    assert_eq!(result.version, "1.3.0");
    assert_eq!(result.changelog_entry, EXPECTED_ENTRY);
    assert!(result.updated_files.is_empty());
    assert_eq!(read(&config.files.manifest), manifest);
    assert!(!config.files.changelog.exists());
    assert!(!config.files.release_notes.exists());
    assert!(sink.published().is_empty());
}

#[test]
fn test_commits_read_from_file() {
    let (dir, config) = project(r#"{"version": "1.2.3"}"#);
    let commits_file = dir.path().join("commits.json");
    fs::write(&commits_file, SAMPLE_COMMITS).unwrap();
    let args = ReleaseWorkflowArgs {
        commits_json: None,
        commits_file: Some(commits_file),
        ..minor_release()
    };

    let result = run_release_workflow(&args, &config, &RecordingSink::new()).unwrap();

    assert_eq!(result.commits.len(), 5);
    assert_eq!(result.changelog_entry, EXPECTED_ENTRY);
}

#[test]
fn test_invalid_bump_type_fails_before_any_write() {
    let manifest = r#"{"version": "1.2.3"}"#;
    let (_dir, config) = project(manifest);
    let args = ReleaseWorkflowArgs {
        bump_type: "huge".to_string(),
        ..minor_release()
    };

    let err = run_release_workflow(&args, &config, &RecordingSink::new()).unwrap_err();

    assert!(matches!(err, ShipnoteError::InvalidBumpType(ref t) if t == "huge"));
    assert_eq!(read(&config.files.manifest), manifest);
    assert!(!config.files.changelog.exists());
}

#[test]
fn test_malformed_commits_fail() {
    let (_dir, config) = project(r#"{"version": "1.2.3"}"#);
    let args = ReleaseWorkflowArgs {
        commits_json: Some("feat: not a json array".to_string()),
        ..minor_release()
    };

    let err = run_release_workflow(&args, &config, &RecordingSink::new()).unwrap_err();
    assert!(matches!(err, ShipnoteError::MalformedCommitsInput(_)));
}

#[test]
fn test_malformed_version_fails_before_any_write() {
    let manifest = r#"{"version": "v1.2"}"#;
    let (_dir, config) = project(manifest);
    let sink = RecordingSink::new();

    let err = run_release_workflow(&minor_release(), &config, &sink).unwrap_err();

    assert!(matches!(err, ShipnoteError::MalformedVersion(ref v) if v == "v1.2"));
    assert_eq!(read(&config.files.manifest), manifest);
    assert!(!config.files.release_notes.exists());
    assert!(sink.published().is_empty());
}

#[test]
fn test_missing_manifest_is_io_error() {
    let (dir, mut config) = project(r#"{"version": "1.2.3"}"#);
    config.files.manifest = dir.path().join("missing.json");

    let err = run_release_workflow(&minor_release(), &config, &RecordingSink::new()).unwrap_err();
    assert!(matches!(err, ShipnoteError::Io { ref document, .. } if document == &config.files.manifest));
}

#[test]
fn test_manifest_without_version_fails() {
    let (_dir, config) = project(r#"{"name": "pkg"}"#);

    let err = run_release_workflow(&minor_release(), &config, &RecordingSink::new()).unwrap_err();
    assert!(matches!(err, ShipnoteError::Manifest(_)));
}

#[test]
fn test_env_file_sink_receives_version() {
    let (dir, config) = project(r#"{"version": "1.2.3"}"#);
    let ci_env = dir.path().join("github_env");
    fs::write(&ci_env, "EXISTING=1\n").unwrap();
    let sink = EnvFileSink::new(config.files.env_file.clone(), Some(ci_env.clone()));

    run_release_workflow(&minor_release(), &config, &sink).unwrap();

    assert_eq!(read(&config.files.env_file), "NEW_VERSION=1.3.0\n");
    assert_eq!(read(&ci_env), "EXISTING=1\nNEW_VERSION=1.3.0\n");
}
