use std::fs;
use std::path::{Path, PathBuf};

/// Base document: two paths, three operations total.
pub const BASE_SPEC_JSON: &str = r#"{
  "openapi": "3.0.0",
  "info": {"title": "petstore", "version": "1.0.0"},
  "paths": {
    "/pets": {
      "get": {"summary": "List pets", "responses": {"200": {"description": "ok"}}},
      "post": {"summary": "Create a pet", "responses": {"201": {"description": "created"}}}
    },
    "/owners": {
      "get": {"summary": "List owners", "responses": {"200": {"description": "ok"}}}
    }
  }
}"#;

/// Revision document against `BASE_SPEC_JSON`:
/// - `/vets` added (1 path)
/// - `/owners` deleted (1 path)
/// - `/pets` GET summary modified (1 operation)
///
/// Flattened change count: 3.
pub const REVISION_SPEC_JSON: &str = r#"{
  "openapi": "3.0.0",
  "info": {"title": "petstore", "version": "1.1.0"},
  "paths": {
    "/pets": {
      "get": {"summary": "List all pets", "responses": {"200": {"description": "ok"}}},
      "post": {"summary": "Create a pet", "responses": {"201": {"description": "created"}}}
    },
    "/vets": {
      "get": {"summary": "List vets", "responses": {"200": {"description": "ok"}}}
    }
  }
}"#;

/// Write the fixture pair into `dir` and return `(base, revision)` paths.
pub fn write_spec_pair(dir: &Path) -> (PathBuf, PathBuf) {
    let base = dir.join("base.json");
    let revision = dir.join("revision.json");
    fs::write(&base, BASE_SPEC_JSON).expect("write base spec");
    fs::write(&revision, REVISION_SPEC_JSON).expect("write revision spec");
    (base, revision)
}
