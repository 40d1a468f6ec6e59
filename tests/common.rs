//! Test utilities for fixerset integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// Path of a file under tests/fixtures
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

/// Contents of a file under tests/fixtures
pub fn read_fixture(relative: &str) -> String {
    fs::read_to_string(fixture_path(relative)).expect("fixture should be readable")
}

/// Copy the StyleCI snapshots and the PHP target into `dir`, and write a
/// fixerset.toml that points at them with relative paths.
///
/// Returns the path of the written fixerset.toml.
pub fn setup_project(dir: &Path, preset: &str) -> PathBuf {
    let snapshots = dir.join("snapshots");
    let target = dir.join("src");
    fs::create_dir_all(&snapshots).expect("create snapshots dir");
    fs::create_dir_all(&target).expect("create src dir");

    fs::write(
        snapshots.join("presets.json"),
        read_fixture("styleci/presets.json"),
    )
    .expect("write presets.json");
    fs::write(
        snapshots.join("fixers.json"),
        read_fixture("styleci/fixers.json"),
    )
    .expect("write fixers.json");
    fs::write(target.join("Config.php"), read_fixture("php/Config.php"))
        .expect("write Config.php");

    let config = format!(
        r#"[fixerset]
version = "1"
preset = "{preset}"

[source]
presets = "snapshots/presets.json"
fixers = "snapshots/fixers.json"

[target]
path = "src/Config.php"
"#
    );
    let config_path = dir.join("fixerset.toml");
    fs::write(&config_path, config).expect("write fixerset.toml");
    config_path
}
