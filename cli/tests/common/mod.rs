#![allow(dead_code)]
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn mgs_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mgs"))
}

pub fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/lex")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn temp_input(name: &str, content: &str) -> std::io::Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("mgs_test_{}_{name}", std::process::id()));
    std::fs::write(&path, content)?;
    Ok(path)
}
