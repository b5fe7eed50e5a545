#![allow(dead_code)]

pub mod cli;
pub mod fixtures;

pub use cli::{BenchRun, BenchWorkspace, run_oasbench};
pub use fixtures::{BASE_SPEC_JSON, REVISION_SPEC_JSON, write_spec_pair};
