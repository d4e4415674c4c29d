//! Chunk loading and batch evaluation tests

mod helper;

use tempfile::TempDir;

use date_reaper::lifecycle::batch::{ChunkSummary, evaluate_chunk};
use date_reaper::lifecycle::error::EvaluateError;
use date_reaper::parser::types::Variant;
use date_reaper::parser::{ChunkError, load_chunk};
use helper::{StaticRegistry, date, node_releases};

const NODE_CHUNK: &str = r#"# node base images
variants:
  - name: "14"
    args:
      base: alpine
  - name: "99"
  - name: "20"
    args:
      base: bookworm
      arch: arm64
"#;

#[tokio::test]
async fn check_chunk_from_yaml_file_reports_each_variant_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chunk.yaml");
    std::fs::write(&path, NODE_CHUNK).unwrap();
    let registry = StaticRegistry::new().with_releases("node", node_releases());

    let chunk = load_chunk(&path).unwrap();
    let reports = evaluate_chunk(&registry, "node", &chunk.variants, date("2025-01-01")).await;

    let lines: Vec<String> = reports.iter().map(|r| r.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "Version 14 is EOL since 2024-04-30. Support ended on: No Support".to_string(),
            "Error checking version 99: Version not found: node 99".to_string(),
            "Version 20 is not EOL yet. It will be EOL on 2026-04-30.".to_string(),
        ]
    );
    assert_eq!(
        chunk.variants[2],
        Variant::new("20")
            .with_arg("base", "bookworm")
            .with_arg("arch", "arm64")
    );
}

#[tokio::test]
async fn check_chunk_from_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chunk.json");
    std::fs::write(
        &path,
        r#"{"variants": [{"name": "22"}, {"name": "18", "args": {"slim": "yes"}}]}"#,
    )
    .unwrap();
    let registry = StaticRegistry::new().with_releases("node", node_releases());

    let chunk = load_chunk(&path).unwrap();
    let reports = evaluate_chunk(&registry, "node", &chunk.variants, date("2025-06-01")).await;

    assert_eq!(
        ChunkSummary::from_reports(&reports),
        ChunkSummary {
            total: 2,
            eol: 1,
            not_eol: 1,
            failed: 0,
        }
    );
}

#[tokio::test]
async fn check_chunk_continues_when_every_lookup_fails() {
    let registry = StaticRegistry::new().with_failure("node", 503);
    let variants = vec![Variant::new("14"), Variant::new("20"), Variant::new("22")];

    let reports = evaluate_chunk(&registry, "node", &variants, date("2025-01-01")).await;

    assert_eq!(reports.len(), 3);
    assert_eq!(registry.requests(), vec!["node", "node", "node"]);
    for (report, variant) in reports.iter().zip(&variants) {
        assert_eq!(report.version, variant.name);
        assert!(matches!(
            report.outcome,
            Err(EvaluateError::LookupFailed { .. })
        ));
    }
    assert_eq!(
        reports[0].to_string(),
        "Error checking version 14: lookup failed for node: Server returned status 503"
    );
}

#[test]
fn load_chunk_rejects_malformed_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chunk.yaml");
    std::fs::write(&path, "variants:\n  - name: [\"14\"\n").unwrap();

    let result = load_chunk(&path);

    assert!(matches!(result, Err(ChunkError::Parse { .. })));
}
