mod common;
use common::{mgs_cmd, stdout_of};

fn verify_help(args: &[&str], expected: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing help for args: {args:?}");
    let output = mgs_cmd().args(args).output()?;
    let stdout = stdout_of(&output);

    if !output.status.success() {
        return Err(format!(
            "Command failed for args {args:?}. stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }
    for needle in expected {
        if !stdout.contains(needle) {
            return Err(format!("Expected {needle:?} in help output, got:\n{stdout}").into());
        }
    }
    Ok(())
}

#[test]
fn test_help() -> Result<(), Box<dyn std::error::Error>> {
    let flags = ["--file <PATH>", "--output", "--flush-eol", "--skip-empty", "--debug"];
    verify_help(&["--help"], &flags)?;
    verify_help(&["-h"], &["--file <PATH>"])
}

#[test]
fn test_version() -> Result<(), Box<dyn std::error::Error>> {
    verify_help(&["--version"], &["mgs", env!("CARGO_PKG_VERSION")])
}
