//! End-to-end scenarios: seed a store, then export its ids.
//!
//! These run against the in-memory store, so no database is required.

use records::{MemoryStore, RecordStore};
use serde_json::Value;
use test_data::config::ExportConfig;
use test_data::db::Seeder;
use test_data::export::{ExportError, IdentifierExporter};
use time::OffsetDateTime;
use time::macros::datetime;

fn export_config(dir: &tempfile::TempDir) -> ExportConfig {
    ExportConfig::default().with_path(dir.path().join("tests/hihitutor-env.postman_environment.json"))
}

fn read_json(config: &ExportConfig) -> Value {
    let text = std::fs::read_to_string(&config.path).expect("Failed to read exported file");
    serde_json::from_str(&text).expect("Exported file is not valid JSON")
}

#[tokio::test]
async fn test_seed_then_export_writes_five_enabled_values() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::new();
    let ids = Seeder::new(&store)
        .seed_sample(OffsetDateTime::now_utc())
        .await
        .unwrap();

    let config = export_config(&dir);
    IdentifierExporter::new(&store, config.clone())
        .export(datetime!(2025-04-11 00:00:00 UTC))
        .await
        .unwrap();

    let json = read_json(&config);
    let values = json["values"].as_array().unwrap();
    let keys: Vec<&str> = values.iter().map(|v| v["key"].as_str().unwrap()).collect();
    assert_eq!(
        keys,
        vec![
            "adminUserId",
            "orgUserId",
            "normalUserId",
            "approvedCaseId",
            "pendingCaseId"
        ]
    );
    assert!(values.iter().all(|v| v["enabled"] == true));

    assert_eq!(values[0]["value"], ids.admin_user.to_hex());
    assert_eq!(values[1]["value"], ids.org_user.to_hex());
    assert_eq!(values[3]["value"], ids.approved_case.to_hex());
    assert_eq!(values[4]["value"], ids.pending_case.to_hex());

    assert_eq!(json["id"], "hihitutor-env-id");
    assert_eq!(json["name"], "HiHiTutor API Env");
    assert_eq!(json["_postman_exported_at"], "2025-04-11T00:00:00.000Z");
}

#[tokio::test]
async fn test_exported_values_match_first_matching_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::new();
    Seeder::new(&store)
        .seed_sample(OffsetDateTime::now_utc())
        .await
        .unwrap();

    let config = export_config(&dir);
    let outcome = IdentifierExporter::new(&store, config.clone())
        .export(OffsetDateTime::now_utc())
        .await
        .unwrap();

    let users = store.users();
    let first_individual = users
        .iter()
        .find(|u| u.user_type == Some(records::UserType::Individual))
        .unwrap();
    assert_eq!(
        outcome.environment.get("normalUserId"),
        Some(first_individual.id.to_hex().as_str())
    );
    assert_eq!(read_json(&config)["values"][2]["value"], first_individual.id.to_hex());
}

#[tokio::test]
async fn test_export_against_empty_store_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::new();
    let config = export_config(&dir);
    let exporter = IdentifierExporter::new(&store, config.clone());

    let results = exporter.lookup().await.unwrap();
    assert_eq!(
        results.summary_lines(),
        vec![
            "adminUserId=<no result>",
            "orgUserId=<no result>",
            "normalUserId=<no result>",
            "approvedCaseId=<no result>",
            "pendingCaseId=<no result>",
        ]
    );

    let err = exporter
        .write(results, OffsetDateTime::now_utc())
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::MissingRecords(ref keys) if keys.len() == 5));
    assert!(!config.path.exists());
    assert!(!config.path.parent().unwrap().exists());
}

#[tokio::test]
async fn test_reseed_and_reexport_overwrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::new();
    let seeder = Seeder::new(&store);
    let config = export_config(&dir);
    let exporter = IdentifierExporter::new(&store, config.clone());

    let first = seeder.seed_sample(OffsetDateTime::now_utc()).await.unwrap();
    exporter.export(OffsetDateTime::now_utc()).await.unwrap();
    assert_eq!(read_json(&config)["values"][0]["value"], first.admin_user.to_hex());

    let second = seeder.seed_sample(OffsetDateTime::now_utc()).await.unwrap();
    exporter.export(OffsetDateTime::now_utc()).await.unwrap();

    let json = read_json(&config);
    assert_eq!(json["values"].as_array().unwrap().len(), 5);
    assert_eq!(json["values"][0]["value"], second.admin_user.to_hex());
    assert_eq!(store.count_users().await.unwrap(), 3);
    assert_eq!(store.count_cases().await.unwrap(), 2);
}
