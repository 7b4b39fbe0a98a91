//! End-to-end tests for the `dealbook` binary.
//!
//! Every run pins `--today 2025-01-15` against the bundled sample feed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn dealbook() -> Command {
    let mut cmd = Command::cargo_bin("dealbook").unwrap();
    cmd.env_remove("DEALBOOK_DATA")
        .env_remove("DEALBOOK_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .args(["--today", "2025-01-15"]);
    cmd
}

const MINI_FEED: &str = r#"{
  "deals": [
    {
      "id": "T-1",
      "kind": "Studio",
      "companyName": "Tidepool",
      "partnerName": "Acme Mutual",
      "investmentAmount": 100000,
      "currentValuation": 1000000,
      "equityStake": 20,
      "status": "On Track",
      "stage": "Build",
      "lastContact": "2024-11-20"
    }
  ],
  "alerts": [
    {
      "id": "T-AL",
      "kind": "Deadline",
      "title": "Board pack",
      "companyName": "Tidepool",
      "partnerName": "Acme Mutual",
      "dueDate": "2025-01-25"
    }
  ]
}"#;

fn write_feed(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

// =============================================================================
// Listing commands
// =============================================================================

#[test]
fn test_deals_filtered_by_partner() {
    dealbook()
        .args(["deals", "--partner", "Aviva"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JV-001"))
        .stdout(predicate::str::contains("Verdant Carbon"))
        .stdout(predicate::str::contains("45,000,000"))
        .stdout(predicate::str::contains("Mediobanca Digital").not());
}

#[test]
fn test_deals_csv_output() {
    dealbook()
        .args(["deals", "--kind", "Studio", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,company,partner,kind,status"))
        .stdout(predicate::str::contains("S-001"))
        .stdout(predicate::str::contains("S-002"))
        .stdout(predicate::str::contains("JV-001").not());
}

#[test]
fn test_deals_search_with_no_match() {
    dealbook()
        .args(["deals", "--search", "zzz-nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results."));
}

#[test]
fn test_summary_json() {
    dealbook()
        .args(["summary", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 8"))
        .stdout(predicate::str::contains("\"rounds\"").not());
}

#[test]
fn test_partners_table() {
    dealbook()
        .arg("partners")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aviva"))
        .stdout(predicate::str::contains("Banco Sabadell"))
        .stdout(predicate::str::contains("Mediobanca"));
}

#[test]
fn test_documents_search() {
    dealbook()
        .args(["documents", "--search", "nda"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DOC-003"))
        .stdout(predicate::str::contains("DOC-001").not());
}

#[test]
fn test_audit_range() {
    dealbook()
        .args(["audit", "--from", "2024-11-01", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wet ink"))
        .stdout(predicate::str::contains("liquidation preference").not());
}

// =============================================================================
// Alerts and schedules
// =============================================================================

#[test]
fn test_alert_queue_skips_acknowledged() {
    let output = dealbook().args(["alerts", "-f", "json"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(!stdout.contains("AL-004"));
    let first = stdout.find("AL-002").unwrap();
    let last = stdout.find("AL-001").unwrap();
    assert!(first < last);
}

#[test]
fn test_acknowledge_alert() {
    dealbook()
        .args(["alerts", "--ack", "AL-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acknowledged alert AL-001"));
}

#[test]
fn test_acknowledge_unknown_alert_fails() {
    dealbook()
        .args(["alerts", "--ack", "AL-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record with id 'AL-999'"));
}

#[test]
fn test_acknowledge_and_save() {
    let feed = write_feed(MINI_FEED);
    let path = feed.path().to_str().unwrap().to_string();

    dealbook()
        .args(["--data", &path, "alerts", "--ack", "T-AL", "--save"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(feed.path()).unwrap();
    assert!(saved.contains("\"acknowledged\": true"));
}

#[test]
fn test_acknowledge_and_save_json_output_stays_parseable() {
    let feed = write_feed(MINI_FEED);
    let path = feed.path().to_str().unwrap().to_string();

    let output = dealbook()
        .args(["--format", "json", "--data", &path])
        .args(["alerts", "--ack", "T-AL", "--save"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let queue: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(queue, serde_json::json!([]));

    let saved = std::fs::read_to_string(feed.path()).unwrap();
    assert!(saved.contains("\"acknowledged\": true"));
}

#[test]
fn test_renewals_json() {
    dealbook()
        .args(["renewals", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JV-002"))
        .stdout(predicate::str::contains("\"notice_milestone\": 30"))
        .stdout(predicate::str::contains("S-002").not());
}

#[test]
fn test_stale_contacts() {
    dealbook()
        .args(["stale", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JV-002"))
        .stdout(predicate::str::contains("JV-001").not());
}

// =============================================================================
// Calendar, config and errors
// =============================================================================

#[test]
fn test_calendar_month() {
    dealbook()
        .args(["calendar", "--month", "2025-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14*"))
        .stdout(predicate::str::contains("AL-005"));
}

#[test]
fn test_calendar_invalid_month() {
    dealbook()
        .args(["calendar", "--month", "2025-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn test_config_show_toml() {
    dealbook()
        .args(["config", "show", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stale_contact_months = 6"))
        .stdout(predicate::str::contains("[urgency]"));
}

#[test]
fn test_default_config_keeps_recent_contact_fresh() {
    let feed = write_feed(MINI_FEED);

    dealbook()
        .args(["--data", feed.path().to_str().unwrap()])
        .args(["stale", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("T-1").not());
}

#[test]
fn test_config_override_file() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "stale_contact_months = 1").unwrap();
    let feed = write_feed(MINI_FEED);

    dealbook()
        .args(["--data", feed.path().to_str().unwrap()])
        .args(["--config", config.path().to_str().unwrap()])
        .args(["stale", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("T-1"));
}

#[test]
fn test_invalid_today_fails() {
    Command::cargo_bin("dealbook")
        .unwrap()
        .env_remove("DEALBOOK_DATA")
        .args(["--today", "2025-13-01", "deals"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_missing_data_file_fails() {
    dealbook()
        .args(["--data", "/nonexistent/feed.json", "deals"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read data feed"));
}
