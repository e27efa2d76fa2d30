//! Tests for the headless driver against the JSON user fixture

use std::path::Path;

use modpanel::{run_headless, services, EventLog, Fixture, Permissions};
use modpanel_app::config::{load_settings, CONFIG_FILENAME};
use modpanel_app::{Router, Settings, UserRegistry};
use modpanel_core::Viewer;
use serde_json::Value;
use tempfile::tempdir;

const ALICE: u64 = 76561198000001001;
const UNNAMED: u64 = 76561198000001004;

fn fixture() -> Fixture {
    Fixture::load(Path::new("tests/fixtures/users.json")).expect("fixture should load")
}

fn drive(fixture: &Fixture, settings: Settings, commands: &str) -> Vec<Value> {
    let events = EventLog::new();
    let mut router = Router::new(services(fixture, Permissions::default(), &events), settings);
    let viewer = Viewer::new(1, "Admin", "en");

    let mut out = Vec::new();
    run_headless(&mut router, &viewer, &events, commands.as_bytes(), &mut out)
        .expect("headless run failed");

    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).expect("invalid NDJSON line"))
        .collect()
}

fn rendered(events: &[Value]) -> Vec<&Value> {
    events.iter().filter(|e| e["event"] == "rendered").collect()
}

/// All text components of a rendered surface
fn texts(event: &Value) -> Vec<String> {
    event["elements"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|e| e["components"].as_array().unwrap().iter())
        .filter(|c| c["type"] == "UnityEngine.UI.Text")
        .map(|c| c["text"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_fixture_parses() {
    let fixture = fixture();
    let users = fixture.snapshot();

    assert_eq!(users.len(), 5);
    assert_eq!(users[0].vitals.unwrap().health, 92.0);
    assert!(users[0].last_admin_cheat.is_some());
    assert_eq!(fixture.list_active_users().len(), 3);
    assert_eq!(fixture.list_banned_users().len(), 2);
}

#[test]
fn test_detail_page_shows_fixture_values() {
    let events = drive(
        &fixture(),
        Settings::default(),
        &format!("modpanel.switch PlayerPage {}\n", ALICE),
    );

    let pages = rendered(&events);
    assert_eq!(pages.len(), 1);
    let texts = texts(pages[0]);
    assert!(texts.contains(&"Health: 92.0".to_string()));
    assert!(texts.contains(&"Last admin cheat: 2024/03/09 14:05:00 UTC".to_string()));
}

#[test]
fn test_banned_list_shows_id_for_placeholder_name() {
    let events = drive(&fixture(), Settings::default(), "modpanel.switch PlayersBanned\n");

    let texts = texts(rendered(&events)[0]);
    assert!(texts.contains(&UNNAMED.to_string()));
    assert!(texts.contains(&"Mallory".to_string()));
}

#[test]
fn test_ban_updates_fixture_and_renders_banned_detail() {
    let fixture = fixture();
    let events = drive(
        &fixture,
        Settings::default(),
        &format!("modpanel\nmodpanel.ban {}\n", ALICE),
    );

    assert!(events
        .iter()
        .any(|e| e["event"] == "dispatched" && e["action"] == "ban"));
    assert_eq!(fixture.list_banned_users().len(), 3);

    let last = rendered(&events).pop().unwrap();
    let texts = texts(last);
    assert!(texts.contains(&"Unban".to_string()));
    assert!(texts.contains(&"Banned: Yes".to_string()));
}

#[test]
fn test_settings_file_disables_feature() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    std::fs::write(&path, "[features]\nkick = false\n").unwrap();
    let settings = load_settings(&path);

    let events = drive(&fixture(), settings, &format!("modpanel.kick {}\n", ALICE));

    assert!(events.iter().all(|e| e["event"] != "dispatched"));
    assert_eq!(events.last().unwrap()["outcome"], "Ignored");
}
