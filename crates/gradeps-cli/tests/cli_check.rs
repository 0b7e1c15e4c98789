use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn gradeps_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gradeps").unwrap();
    // Isolate from any ~/.gradeps/config.toml on the host.
    cmd.env("HOME", home.path());
    cmd
}

const ANDROID_BOOTSTRAP: &str = r#"
buildscript {
    repositories {
        google()
        mavenCentral()
    }
    dependencies {
        classpath 'com.android.tools.build:gradle:8.1.0'
        classpath "org.jetbrains.kotlin:kotlin-gradle-plugin:1.9.20"
    }
}

allprojects {
    repositories {
        google()
        mavenCentral()
    }
}
"#;

#[test]
fn check_valid_script() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("build.gradle"), ANDROID_BOOTSTRAP).unwrap();

    gradeps_cmd(&tmp)
        .current_dir(tmp.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("Validated"))
        .stderr(predicate::str::contains(
            "2 repositories, 2 classpath dependencies",
        ));
}

#[test]
fn check_verbose_lists_pins() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("build.gradle"), ANDROID_BOOTSTRAP).unwrap();

    gradeps_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["check", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "com.android.tools.build:gradle:8.1.0",
        ));
}

#[test]
fn check_finds_script_in_parent() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("build.gradle.kts"), ANDROID_BOOTSTRAP).unwrap();
    let nested = tmp.path().join("app/src");
    fs::create_dir_all(&nested).unwrap();

    gradeps_cmd(&tmp)
        .current_dir(&nested)
        .arg("check")
        .assert()
        .success();
}

#[test]
fn check_explicit_file_flag() {
    let tmp = TempDir::new().unwrap();
    let script = tmp.path().join("other.gradle");
    fs::write(&script, "buildscript { repositories { google() } }").unwrap();

    gradeps_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["check", "--file"])
        .arg(&script)
        .assert()
        .success()
        .stderr(predicate::str::contains("1 repositories"));
}

#[test]
fn check_fails_without_script() {
    let tmp = TempDir::new().unwrap();

    gradeps_cmd(&tmp)
        .current_dir(tmp.path())
        .arg("check")
        .assert()
        .failure();
}

#[test]
fn check_fails_on_missing_brace() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("build.gradle"),
        "buildscript { repositories { google() }",
    )
    .unwrap();

    gradeps_cmd(&tmp)
        .current_dir(tmp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("end of input"));
}

#[test]
fn check_fails_on_unknown_repository() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("build.gradle"),
        "buildscript { repositories { jcenter() } }",
    )
    .unwrap();

    gradeps_cmd(&tmp)
        .current_dir(tmp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("jcenter"));
}

#[test]
fn duplicate_repository_rejected_by_default() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("build.gradle"),
        "allprojects { repositories { google() google() } }",
    )
    .unwrap();

    gradeps_cmd(&tmp)
        .current_dir(tmp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("declared twice"));
}

#[test]
fn duplicate_repository_accepted_with_dedupe_flag() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("build.gradle"),
        "allprojects { repositories { google() google() } }",
    )
    .unwrap();

    gradeps_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["check", "--duplicates", "dedupe"])
        .assert()
        .success()
        .stderr(predicate::str::contains("1 default repositories"));
}

#[test]
fn dedupe_policy_from_global_config() {
    let tmp = TempDir::new().unwrap();
    let config_dir = tmp.path().join(".gradeps");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[load]\nduplicates = \"dedupe\"\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join("build.gradle"),
        "allprojects { repositories { google() google() } }",
    )
    .unwrap();

    gradeps_cmd(&tmp)
        .current_dir(tmp.path())
        .arg("check")
        .assert()
        .success();
}

#[test]
fn unknown_duplicate_policy_flag_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("build.gradle"), ANDROID_BOOTSTRAP).unwrap();

    gradeps_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["check", "--duplicates", "merge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown duplicate policy"));
}
