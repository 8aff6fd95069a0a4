use crate::shared::Result;
use anyhow::{bail, Context};
use std::path::Path;
use std::process::Command;

/// Runs `git` with `args`, optionally inside `cwd`, returning trimmed stdout
///
/// # Errors
/// Returns an error if git cannot be spawned or exits unsuccessfully.
pub(super) fn run_git(args: &[&str], cwd: Option<&Path>) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let out = cmd.output().context("failed to execute git")?;
    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        bail!("git {} failed ({}): {}", args.join(" "), out.status, stderr.trim());
    }

    Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
}
