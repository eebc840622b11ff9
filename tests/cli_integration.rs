//! CLI integration tests for Psybuild.
//!
//! These tests drive the binary over fixture source trees and check the
//! emitted plans and error surfaces.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the psybuild binary command.
fn psybuild() -> Command {
    Command::cargo_bin("psybuild").unwrap()
}

/// Lay out a complete Linux source tree for the five builtin modules.
fn scaffold_linux_tree(root: &Path) {
    let dirs = [
        "Common/Base",
        "Common/Base/PythonGlue",
        "Common/Screen",
        "Linux/Base",
        "Common/WaitSecs",
        "Common/GetSecs",
        "Common/IOPort",
        "Common/PsychHID",
        "Common/PsychPortAudio",
        "Linux/PsychPortAudio",
    ];
    for dir in dirs {
        fs::create_dir_all(root.join(dir)).unwrap();
    }

    fs::write(root.join("Common/Base/MiniBox.c"), "").unwrap();
    fs::write(root.join("Common/Base/PsychError.c"), "").unwrap();
    fs::write(
        root.join("Common/Base/PythonGlue/PsychScriptingGluePython.c"),
        "",
    )
    .unwrap();
    fs::write(root.join("Linux/Base/PsychTimeGlue.c"), "").unwrap();
    for module in ["WaitSecs", "GetSecs", "IOPort", "PsychHID", "PsychPortAudio"] {
        fs::write(root.join(format!("Common/{0}/{0}.c", module)), "").unwrap();
    }
    fs::write(root.join("Linux/PsychPortAudio/PsychPortAudioLinux.c"), "").unwrap();
}

// ============================================================================
// psybuild plan
// ============================================================================

#[test]
fn test_plan_emits_all_modules_in_order() {
    let tmp = TempDir::new().unwrap();
    scaffold_linux_tree(tmp.path());

    let output = psybuild()
        .args(["plan", "--platform", "linux", "--arch", "64"])
        .arg("--root")
        .arg(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(plan["package"], "Psychtoolbox4Python");
    assert_eq!(plan["version"], "0.1");

    let names: Vec<&str> = plan["descriptors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["WaitSecs", "GetSecs", "IOPort", "PsychHID", "PsychPortAudio"]
    );
}

#[test]
fn test_plan_includes_scripting_glue_and_override_sources() {
    let tmp = TempDir::new().unwrap();
    scaffold_linux_tree(tmp.path());

    let output = psybuild()
        .args(["plan", "--platform", "linux", "--arch", "64"])
        .arg("--root")
        .arg(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let audio = &plan["descriptors"].as_array().unwrap()[4];
    let sources: Vec<&str> = audio["sources"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();

    assert!(sources.contains(&"Common/Base/PythonGlue/PsychScriptingGluePython.c"));
    // The module-platform override contribution comes last.
    assert_eq!(
        *sources.last().unwrap(),
        "Linux/PsychPortAudio/PsychPortAudioLinux.c"
    );
}

#[test]
fn test_plan_module_filter() {
    let tmp = TempDir::new().unwrap();
    scaffold_linux_tree(tmp.path());

    let output = psybuild()
        .args(["plan", "--platform", "linux", "--arch", "64"])
        .args(["--module", "GetSecs"])
        .arg("--root")
        .arg(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let descriptors = plan["descriptors"].as_array().unwrap();

    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0]["name"], "GetSecs");
}

#[test]
fn test_plan_unknown_module_filter_fails() {
    let tmp = TempDir::new().unwrap();
    scaffold_linux_tree(tmp.path());

    psybuild()
        .args(["plan", "--platform", "linux", "--arch", "64"])
        .args(["--module", "Screen"])
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown module `Screen`"));
}

#[test]
fn test_plan_unsupported_platform_fails() {
    let tmp = TempDir::new().unwrap();
    scaffold_linux_tree(tmp.path());

    psybuild()
        .args(["plan", "--platform", "freebsd"])
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported platform `freebsd`"));
}

#[test]
fn test_plan_missing_platform_base_fails() {
    let tmp = TempDir::new().unwrap();
    scaffold_linux_tree(tmp.path());
    fs::remove_dir_all(tmp.path().join("Linux/Base")).unwrap();

    psybuild()
        .args(["plan", "--platform", "linux", "--arch", "64"])
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing source directory"));
}

#[test]
fn test_plan_is_deterministic() {
    let tmp = TempDir::new().unwrap();
    scaffold_linux_tree(tmp.path());

    let run = || {
        psybuild()
            .args(["plan", "--platform", "linux", "--arch", "64"])
            .arg("--root")
            .arg(tmp.path())
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_plan_writes_output_file() {
    let tmp = TempDir::new().unwrap();
    scaffold_linux_tree(tmp.path());
    let out = tmp.path().join("plan.json");

    psybuild()
        .args(["plan", "--platform", "linux", "--arch", "64"])
        .arg("--root")
        .arg(tmp.path())
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let json = fs::read_to_string(&out).unwrap();
    assert!(json.contains("Psychtoolbox4Python"));
}

#[test]
fn test_plan_numpy_include_lands_in_descriptors() {
    let tmp = TempDir::new().unwrap();
    scaffold_linux_tree(tmp.path());

    let output = psybuild()
        .args(["plan", "--platform", "linux", "--arch", "64"])
        .args(["--numpy-include", "/opt/numpy/include"])
        .arg("--root")
        .arg(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let includes = plan["descriptors"][0]["include_dirs"].as_array().unwrap();
    assert!(includes
        .iter()
        .any(|d| d.as_str().unwrap() == "/opt/numpy/include"));
}

// ============================================================================
// psybuild profile / modules
// ============================================================================

#[test]
fn test_profile_macos_shows_pre_link_frameworks() {
    psybuild()
        .args(["profile", "--platform", "macos", "--arch", "64"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-framework"))
        .stdout(predicate::str::contains("-mmacosx-version-min=10.11"));
}

#[test]
fn test_modules_lists_builtin_table() {
    psybuild()
        .args(["modules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GetSecs"))
        .stdout(predicate::str::contains("PsychHID [hid]"))
        .stdout(predicate::str::contains("PsychPortAudio [audio]"));
}
