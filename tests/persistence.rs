use inventory_ledger::{Error, Inventory};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("inventory_ledger_test_{}.json", name))
}

#[test]
fn save_and_reload_roundtrip() {
    let path = temp_path("roundtrip");
    let _ = std::fs::remove_file(&path);
    {
        let mut inv = Inventory::builder().path(&path).build();
        inv.add_item("pear", 4, None).unwrap();
        inv.add_item("apple", 7, None).unwrap();
        inv.add_item("banana", 0, None).unwrap();
        inv.add_item("fig", -1, None).unwrap();
        inv.save().unwrap();
    }
    let inv = Inventory::open(&path).unwrap();
    let pairs: Vec<(&str, i64)> = inv.iter().collect();
    assert_eq!(pairs, vec![("pear", 4), ("apple", 7), ("banana", 0), ("fig", -1)]);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn open_missing_file_gives_empty_ledger() {
    let path = temp_path("open_missing");
    let _ = std::fs::remove_file(&path);
    let inv = Inventory::open(&path).unwrap();
    assert!(inv.is_empty());
    assert_eq!(inv.path(), path.as_path());
}

#[test]
fn load_missing_file_leaves_ledger() {
    let path = temp_path("load_missing");
    let _ = std::fs::remove_file(&path);
    let mut inv = Inventory::new();
    inv.add_item("apple", 3, None).unwrap();
    inv.load_from(&path).unwrap();
    assert_eq!(inv.items(), vec!["apple"]);
    assert_eq!(inv.get_qty("apple").unwrap(), 3);
}

#[test]
fn load_through_regular_file_is_treated_as_missing() {
    let base = temp_path("not_a_dir");
    std::fs::write(&base, "{}").unwrap();
    let path = base.join("inventory.json");

    let mut inv = Inventory::new();
    inv.add_item("apple", 3, None).unwrap();
    inv.load_from(&path).unwrap();
    assert_eq!(inv.items(), vec!["apple"]);
    assert_eq!(inv.get_qty("apple").unwrap(), 3);
    let _ = std::fs::remove_file(&base);
}

#[test]
fn load_replaces_rather_than_merges() {
    let path = temp_path("replace");
    std::fs::write(&path, r#"{"banana": 2, "cherry": 9}"#).unwrap();

    let mut inv = Inventory::new();
    inv.add_item("apple", 3, None).unwrap();
    inv.add_item("banana", 100, None).unwrap();
    inv.load_from(&path).unwrap();

    let pairs: Vec<(&str, i64)> = inv.iter().collect();
    assert_eq!(pairs, vec![("banana", 2), ("cherry", 9)]);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn load_keeps_file_key_order() {
    let path = temp_path("key_order");
    std::fs::write(&path, r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
    let inv = Inventory::open(&path).unwrap();
    assert_eq!(inv.items(), vec!["zeta", "alpha", "mid"]);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn load_rejects_non_integer_values() {
    let cases = [
        ("string_value", r#"{"apple": "ten"}"#),
        ("float_value", r#"{"apple": 1.5}"#),
        ("bool_value", r#"{"apple": true}"#),
        ("null_value", r#"{"apple": null}"#),
        ("nested_value", r#"{"apple": {"qty": 1}}"#),
        ("too_big", r#"{"apple": 18446744073709551615}"#),
    ];
    for (name, body) in cases {
        let path = temp_path(name);
        std::fs::write(&path, body).unwrap();
        let mut inv = Inventory::new();
        inv.add_item("kept", 1, None).unwrap();
        let err = inv.load_from(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)), "{name}: {err}");
        assert_eq!(inv.items(), vec!["kept"], "{name}: ledger must be untouched");
        let _ = std::fs::remove_file(&path);
    }
}

#[test]
fn load_rejects_non_object_documents() {
    for (name, body) in [("array", "[1, 2]"), ("number", "42"), ("string", r#""x""#)] {
        let path = temp_path(&format!("doc_{name}"));
        std::fs::write(&path, body).unwrap();
        let mut inv = Inventory::new();
        let err = inv.load_from(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)), "{name}: {err}");
        let _ = std::fs::remove_file(&path);
    }
}

#[test]
fn load_rejects_blank_keys() {
    let path = temp_path("blank_key");
    std::fs::write(&path, r#"{"  ": 1}"#).unwrap();
    let mut inv = Inventory::new();
    assert!(matches!(inv.load_from(&path), Err(Error::InvalidFormat(_))));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn malformed_json_is_a_parse_error() {
    for (name, body) in [("truncated", r#"{"apple": 1"#), ("garbage", "not json"), ("empty", "")] {
        let path = temp_path(&format!("malformed_{name}"));
        std::fs::write(&path, body).unwrap();
        let mut inv = Inventory::new();
        let err = inv.load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "{name}: {err}");
        let _ = std::fs::remove_file(&path);
    }
}

#[test]
fn blank_paths_are_rejected() {
    let mut inv = Inventory::new();
    assert!(matches!(inv.load_from(""), Err(Error::InvalidArgument(_))));
    assert!(matches!(inv.load_from("   "), Err(Error::InvalidArgument(_))));
    assert!(matches!(inv.save_to(""), Err(Error::InvalidArgument(_))));
    assert!(matches!(inv.save_to(" \t"), Err(Error::InvalidArgument(_))));
}

#[test]
fn save_writes_two_space_indented_object() {
    let path = temp_path("pretty");
    let mut inv = Inventory::new();
    inv.add_item("apple", 7, None).unwrap();
    inv.add_item("banana", 0, None).unwrap();
    inv.save_to(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw, "{\n  \"apple\": 7,\n  \"banana\": 0\n}");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_compact_when_configured() {
    let path = temp_path("compact");
    let mut inv = Inventory::builder().path(&path).pretty(false).build();
    inv.add_item("apple", 7, None).unwrap();
    inv.save().unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw, r#"{"apple":7}"#);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_keeps_non_ascii_names_unescaped() {
    let path = temp_path("unicode");
    let mut inv = Inventory::new();
    inv.add_item("jalapeño", 3, None).unwrap();
    inv.add_item("りんご", 2, None).unwrap();
    inv.save_to(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("jalapeño"));
    assert!(raw.contains("りんご"));
    assert!(!raw.contains("\\u"));

    let reloaded = Inventory::open(&path).unwrap();
    assert_eq!(reloaded.get_qty("りんご").unwrap(), 2);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_overwrites_existing_file() {
    let path = temp_path("overwrite");
    std::fs::write(&path, "x".repeat(4096)).unwrap();
    let mut inv = Inventory::new();
    inv.add_item("apple", 1, None).unwrap();
    inv.save_to(&path).unwrap();

    let reloaded = Inventory::open(&path).unwrap();
    assert_eq!(reloaded.items(), vec!["apple"]);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_empty_ledger_then_reload_clears() {
    let path = temp_path("empty_save");
    Inventory::new().save_to(&path).unwrap();

    let mut inv = Inventory::new();
    inv.add_item("apple", 1, None).unwrap();
    inv.load_from(&path).unwrap();
    assert!(inv.is_empty());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_into_missing_directory_is_io_error() {
    let path = std::env::temp_dir()
        .join("inventory_ledger_no_such_dir")
        .join("inventory.json");
    let inv = Inventory::new();
    assert!(matches!(inv.save_to(&path), Err(Error::Io(_))));
}
