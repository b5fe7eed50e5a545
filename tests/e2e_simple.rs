mod common;

use common::{BenchWorkspace, run_oasbench, write_spec_pair};

#[test]
fn e2e_simple_mode_reports_average_and_changes() {
    let workspace = BenchWorkspace::new();
    let (base, revision) = write_spec_pair(&workspace.root);

    let run = run_oasbench(
        &workspace,
        [
            "--mode",
            "simple",
            "--base",
            base.to_str().unwrap(),
            "--revision",
            revision.to_str().unwrap(),
        ],
    );

    assert!(run.status.success(), "simple mode failed: {}", run.stderr);
    assert!(run.stdout.contains("Starting basic OAS diff benchmark..."));
    assert!(run.stdout.contains("Specifications loaded in"));
    assert!(run.stdout.contains("Running 5 iterations:"));
    // Fixture pair differs by 1 added path + 1 deleted path + 1 modified op.
    assert_eq!(run.stdout.matches("Found 3 changes").count(), 5);
    assert!(run.stdout.contains("Average execution time:"));
}

#[test]
fn e2e_simple_mode_identical_documents_report_zero_changes() {
    let workspace = BenchWorkspace::new();
    let (base, _) = write_spec_pair(&workspace.root);

    let run = run_oasbench(
        &workspace,
        [
            "--mode",
            "simple",
            "--base",
            base.to_str().unwrap(),
            "--revision",
            base.to_str().unwrap(),
        ],
    );

    assert!(run.status.success(), "simple mode failed: {}", run.stderr);
    assert_eq!(run.stdout.matches("Found 0 changes").count(), 5);
}
