//! Integration tests for `gridorder list`
//!
//! - Prints projects in build order with their dependencies
//! - --json emits the build order as JSON
//! - Writes nothing to disk

mod common;

use common::TestProject;

#[test]
fn test_list_prints_build_order() {
    let project = TestProject::sample();

    let output = project.run(&["list"]);

    assert!(
        output.status.success(),
        "list failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let position = |needle: &str| {
        stdout
            .find(needle)
            .unwrap_or_else(|| panic!("missing {needle} in {stdout}"))
    };

    assert!(position("1. org.acme:acme-parent") < position("2. org.acme:acme-api"));
    assert!(position("2. org.acme:acme-api") < position("3. org.acme:acme-core"));
    assert!(position("3. org.acme:acme-core") < position("4. org.acme:acme-app"));
    assert!(stdout.contains("<- org.acme:acme-api"));
}

#[test]
fn test_list_does_not_write_document() {
    let project = TestProject::sample();

    assert!(project.run(&["list"]).status.success());
    assert!(!project.file_exists(".grid/buildorder.yaml"));
}

#[test]
fn test_list_json() {
    let project = TestProject::sample();

    let output = project.run(&["--json", "list"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let projects = value["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 4);
    assert_eq!(projects[0]["artifactId"], "acme-parent");
    assert_eq!(projects[0]["dependencies"].as_array().unwrap().len(), 0);
    assert_eq!(projects[3]["artifactId"], "acme-app");
    assert_eq!(projects[3]["dependencies"].as_array().unwrap().len(), 3);
}

#[test]
fn test_list_without_workspace_fails() {
    let project = TestProject::new();

    let output = project.run(&["list"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
}

#[test]
fn test_list_quiet_prints_full_listing() {
    let project = TestProject::sample();

    let normal = project.run(&["list"]);
    let quiet = project.run(&["--quiet", "list"]);

    assert!(quiet.status.success());
    assert_eq!(quiet.stdout, normal.stdout);
    assert!(String::from_utf8_lossy(&quiet.stdout).contains("<- org.acme:acme-api"));
}
