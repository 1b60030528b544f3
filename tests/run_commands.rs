//! End-to-end tests of the `cluster` and `density` runners.

mod helpers;

use campaign_map::config::{ClusterArgs, DensityArgs};
use campaign_map::{run_cluster, run_density};
use helpers::json_file;
use serde_json::Value;

const REGISTRATIONS: &str = r#"[
    {"id": "1", "neighborhood": "Centro", "latitude": -23.5505, "longitude": -46.6333},
    {"id": "2", "neighborhood": " centro", "latitude": "-23.5506", "longitude": "-46.6334"},
    {"id": "3", "neighborhood": "Moema", "latitude": -23.6000, "longitude": -46.6700},
    {"id": "4", "neighborhood": null, "latitude": -23.7000, "longitude": -46.8000},
    {"id": "5", "neighborhood": "Moema", "latitude": "", "longitude": -46.6700}
]"#;

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).expect("output should exist"))
        .expect("output should be JSON")
}

#[test]
fn test_run_cluster_writes_groups() {
    let input = json_file(REGISTRATIONS);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("clusters.json");

    let report = run_cluster(&ClusterArgs {
        file: input.path().to_path_buf(),
        base_radius: 200.0,
        output: Some(output.clone()),
    })
    .expect("cluster run should succeed");

    assert_eq!(report.total_records, 5);
    assert_eq!(report.summary.group_count, 3);
    assert_eq!(report.summary.skipped_records, 1);
    assert_eq!(report.summary.largest_group, 2);

    let json = read_json(&output);
    let groups = json.as_array().unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0]["member_ids"], serde_json::json!(["1", "2"]));
    assert_eq!(groups[1]["member_count"], 1);
    assert_eq!(groups[1]["radius"], 200.0);
}

#[test]
fn test_run_density_with_related_teams() {
    let input = json_file(REGISTRATIONS);
    let teams = json_file(
        r#"[
            {"name": "T1", "neighborhood": "CENTRO"},
            {"name": "T2", "neighborhood": "centro"},
            {"name": "T3", "neighborhood": "Centro "},
            {"name": "T4"}
        ]"#,
    );
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("density.json");

    let report = run_density(&DensityArgs {
        file: input.path().to_path_buf(),
        related: Some(teams.path().to_path_buf()),
        output: Some(output.clone()),
    })
    .expect("density run should succeed");

    assert_eq!(report.bucket_count, 3);
    assert_eq!(report.related_entities, 4);

    let json = read_json(&output);
    let buckets = json.as_array().unwrap();
    let keys: Vec<&str> = buckets.iter().map(|b| b["key"].as_str().unwrap()).collect();
    assert_eq!(keys, vec!["CENTRO", "MOEMA", "SEM BAIRRO"]);
    assert_eq!(buckets[0]["related_count"], 3);
    assert_eq!(buckets[0]["opacity"], 0.5);
    assert_eq!(buckets[1]["member_ids"], serde_json::json!(["3"]));
    assert_eq!(buckets[1]["opacity"], 0.3);
    assert_eq!(buckets[2]["related_count"], 1);
}

#[test]
fn test_run_cluster_missing_input() {
    let result = run_cluster(&ClusterArgs {
        file: "/definitely/not/here.json".into(),
        base_radius: 200.0,
        output: None,
    });
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read"));
}
