//! End-to-end runs of the travelkit binary.

use super::test_utils::{json_of, stdout_of, TestWorkspace};

#[test]
fn test_rooms_sorted_by_recency() {
    let ws = TestWorkspace::new();
    let rooms = json_of(&ws.run(&["rooms", "--format", "json"]));
    let ids: Vec<u64> = rooms
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 1, 2, 4, 5]);
    assert!(rooms[4]["last_activity"].is_null());
}

#[test]
fn test_rooms_search_is_case_insensitive() {
    let ws = TestWorkspace::new();
    let rooms = json_of(&ws.run(&["rooms", "--search", "JACK", "--format", "json"]));
    let rooms = rooms.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["name"], "Jack");
}

#[test]
fn test_theaters_filtered_by_kind() {
    let ws = TestWorkspace::new();
    let theaters = json_of(&ws.run(&["theaters", "--kind", "cgv", "--format", "json"]));
    let theaters = theaters.as_array().unwrap();
    assert_eq!(theaters.len(), 3);
    assert!(theaters.iter().all(|t| t["kind"] == "cgv"));
}

#[test]
fn test_theaters_text_output() {
    let ws = TestWorkspace::new();
    let out = stdout_of(&ws.run(&["theaters", "--search", "신촌"]));
    assert!(out.contains("Theaters (1)"));
    assert!(out.contains("메가박스 신촌"));
}

#[test]
fn test_frame_explicit_points() {
    let ws = TestWorkspace::new();
    let report = json_of(&ws.run(&[
        "frame",
        "--point",
        "-1,0",
        "--point",
        "1,0",
        "--point",
        "0,-1",
        "--point",
        "0,1",
        "--format",
        "json",
    ]));
    assert_eq!(report["points"], 4);
    assert_eq!(report["fallback_used"], false);
    let lat = report["frame"]["center"]["latitude"].as_f64().unwrap();
    let radius = report["frame"]["radius_meters"].as_f64().unwrap();
    assert!(lat.abs() < 1e-9);
    assert!((radius - 111_194.93).abs() < 1.0);
}

#[test]
fn test_frame_with_empty_catalog_falls_back() {
    let ws = TestWorkspace::new();
    ws.write_file("empty.json", "{}");
    ws.write_config("config.toml", "catalog = \"empty.json\"\n");
    let report = json_of(&ws.run(&["frame", "--format", "json"]));
    assert_eq!(report["fallback_used"], true);
    assert!(report["frame"].is_null());
    let lat = report["region"]["center"]["latitude"].as_f64().unwrap();
    assert!((lat - 37.5129).abs() < 1e-9);
    assert_eq!(report["region"]["span_meters"], 500.0);
}

#[test]
fn test_locate_denied_and_authorized() {
    let ws = TestWorkspace::new();
    let denied = json_of(&ws.run(&["locate", "--denied", "--format", "json"]));
    assert_eq!(denied["focus"]["focus"], "permission_required");

    let here = json_of(&ws.run(&["locate", "--at", "37.4979,127.0276", "--format", "json"]));
    assert_eq!(here["focus"]["focus"], "current");
    let lat = here["focus"]["point"]["latitude"].as_f64().unwrap();
    assert!((lat - 37.4979).abs() < 1e-9);
}

#[test]
fn test_partition_groups_every_chain() {
    let ws = TestWorkspace::new();
    let buckets = json_of(&ws.run(&["partition", "--format", "json"]));
    for slug in ["megabox", "lotte-cinema", "cgv"] {
        assert_eq!(buckets[slug].as_array().unwrap().len(), 3, "{}", slug);
    }
}

#[test]
fn test_env_override_applies() {
    let ws = TestWorkspace::new();
    let output = ws
        .command(&["rooms", "--format", "json"])
        .env("TRAVELKIT__QUERY__DEFAULT_LIMIT", "2")
        .output()
        .unwrap();
    assert_eq!(json_of(&output).as_array().unwrap().len(), 2);
}

#[test]
fn test_bad_catalog_reports_error() {
    let ws = TestWorkspace::new();
    ws.write_config("config.toml", "catalog = \"missing.json\"\n");
    let output = ws.run(&["theaters"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Catalog"), "stderr: {}", stderr);
}

#[test]
fn test_cities_filtered_by_region_and_search() {
    let ws = TestWorkspace::new();
    let overseas = json_of(&ws.run(&["cities", "--region", "overseas", "--format", "json"]));
    let names: Vec<&str> = overseas
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["방콕", "요코하마", "오사카", "파리", "뉴욕", "다낭"]);

    let jeju = json_of(&ws.run(&[
        "cities", "--region", "국내", "--search", "제주", "--format", "json",
    ]));
    let jeju = jeju.as_array().unwrap();
    assert_eq!(jeju.len(), 1);
    assert_eq!(jeju[0]["english_name"], "Jeju");
    assert_eq!(jeju[0]["region"], "domestic");
}

#[test]
fn test_cities_from_catalog_file() {
    let ws = TestWorkspace::new();
    ws.write_file(
        "catalog.toml",
        r#"
[[cities]]
name = "전주"
english_name = "Jeonju"
region = "domestic"
"#,
    );
    ws.write_config("config.toml", "catalog = \"catalog.toml\"\n");
    let out = stdout_of(&ws.run(&["cities"]));
    assert!(out.contains("Popular cities (1)"));
    assert!(out.contains("전주 | Jeonju"));
}
