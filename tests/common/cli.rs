use assert_cmd::Command;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;

#[derive(Debug)]
pub struct BenchRun {
    pub stdout: String,
    pub stderr: String,
    pub status: std::process::ExitStatus,
    pub duration: Duration,
}

pub struct BenchWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl BenchWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir");
        let root = temp_dir.path().to_path_buf();
        Self { temp_dir, root }
    }
}

pub fn run_oasbench<I, S>(workspace: &BenchWorkspace, args: I) -> BenchRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("oasbench"));
    cmd.current_dir(&workspace.root);
    cmd.args(args);
    cmd.env("NO_COLOR", "1");
    cmd.env("RUST_LOG", "oasbench=debug");
    cmd.env("RUST_BACKTRACE", "1");

    let start = Instant::now();
    let output = cmd.output().expect("run oasbench");
    let duration = start.elapsed();

    BenchRun {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        status: output.status,
        duration,
    }
}
