//! Catalog files: JSON and TOML loading and validation.

use tempfile::TempDir;
use travelkit::catalog::{Catalog, TheaterKind};
use travelkit::error::CatalogError;

#[test]
fn test_load_json_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{
  "theaters": [
    {"kind": "megabox", "location": "메가박스 코엑스", "latitude": 37.5116, "longitude": 127.0595}
  ],
  "chat_rooms": [
    {"id": 7, "name": "Jack", "members": ["Jack"],
     "chats": [{"user": "Jack", "date": "2024-01-15 10:00", "message": "hello"}]}
  ]
}"#,
    )
    .unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.theaters[0].kind, TheaterKind::Megabox);
    assert_eq!(catalog.chat_rooms[0].last_chat().unwrap().message, "hello");
    assert!(catalog.find_theater("메가박스 코엑스").is_some());
    assert!(catalog.find_theater("메가박스 신촌").is_none());
}

#[test]
fn test_bad_date_is_rejected() {
    let result = Catalog::from_json(
        r#"{"chat_rooms":[{"id":1,"name":"a","chats":[
            {"user":"a","date":"yesterday","message":"x"}
        ]}]}"#,
    );
    assert!(matches!(result, Err(CatalogError::Json(_))));
}

#[test]
fn test_unknown_kind_is_rejected() {
    let result = Catalog::from_toml(
        r#"
[[theaters]]
kind = "imax"
location = "Somewhere"
latitude = 37.5
longitude = 127.0
"#,
    );
    assert!(matches!(result, Err(CatalogError::Toml(_))));
}

#[test]
fn test_empty_catalog_is_valid() {
    let catalog = Catalog::from_toml("").unwrap();
    assert!(catalog.theaters.is_empty());
    assert!(catalog.chat_rooms.is_empty());
}
