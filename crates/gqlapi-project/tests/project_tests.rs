use gqlapi_project::{Project, ProjectError, ResourceDescriptor, API_CATEGORY, APPSYNC_SERVICE};
use std::fs;

#[test]
fn test_open_reads_project_name() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("amplify").join(".config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("project-config.json"),
        r#"{ "projectName": "notes-app", "version": "2.0" }"#,
    )
    .unwrap();

    let project = Project::open(dir.path()).unwrap();
    assert_eq!(project.name(), "notes-app");
    assert_eq!(project.config().extra["version"], "2.0");
}

#[test]
fn test_open_falls_back_to_dir_name() {
    let parent = tempfile::tempdir().unwrap();
    let root = parent.path().join("myapp");
    fs::create_dir(&root).unwrap();

    let project = Project::open(&root).unwrap();
    assert_eq!(project.name(), "myapp");
}

#[test]
fn test_open_rejects_missing_root() {
    let parent = tempfile::tempdir().unwrap();
    let err = Project::open(parent.path().join("absent")).unwrap_err();
    assert!(matches!(err, ProjectError::NotADirectory(_)));
}

#[test]
fn test_meta_roundtrip_through_project() {
    let dir = tempfile::tempdir().unwrap();
    let project = Project::open(dir.path()).unwrap();

    assert!(project.load_meta().unwrap().find_first(API_CATEGORY, APPSYNC_SERVICE).is_none());

    let mut meta = project.load_meta().unwrap();
    meta.insert_resource(
        API_CATEGORY,
        "notes",
        ResourceDescriptor::new(APPSYNC_SERVICE).with_output("securityType", "API_KEY"),
    );
    project.save_meta(&meta).unwrap();

    assert!(project.paths().meta_file().exists());
    let reloaded = project.load_meta().unwrap();
    assert_eq!(reloaded.find_first(API_CATEGORY, APPSYNC_SERVICE), Some("notes"));
}

#[test]
fn test_corrupt_meta_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let project = Project::open(dir.path()).unwrap();
    fs::create_dir_all(project.paths().backend_dir()).unwrap();
    fs::write(project.paths().meta_file(), "{ not json").unwrap();

    let err = project.load_meta().unwrap_err();
    assert!(matches!(err, ProjectError::Json { .. }));
}
