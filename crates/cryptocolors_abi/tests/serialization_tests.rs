//! Re-serialization fidelity of interface tables.

use std::io::Write;

use cryptocolors_abi::{cryptocolors, AbiError, Entry, InterfaceTable, CRYPTOCOLORS_ABI_JSON};
use serde_json::Value;

#[test]
fn test_every_entry_round_trips() {
    let original: Vec<Value> = serde_json::from_str(CRYPTOCOLORS_ABI_JSON).unwrap();
    let table = cryptocolors();
    assert_eq!(original.len(), table.len());

    for (declared, entry) in original.iter().zip(table.entries()) {
        let reserialized = serde_json::to_value(entry).unwrap();
        assert_eq!(&reserialized, declared, "{}", entry.signature());

        let reparsed: Entry = serde_json::from_value(reserialized).unwrap();
        assert_eq!(&reparsed, entry);
    }
}

#[test]
fn test_entries_keep_declared_key_order() {
    let table = cryptocolors();
    let withdraw = table
        .entries()
        .iter()
        .find(|entry| entry.name() == "withdraw")
        .unwrap();
    assert_eq!(
        serde_json::to_string(withdraw).unwrap(),
        r#"{"constant":false,"inputs":[],"name":"withdraw","outputs":[],"payable":false,"stateMutability":"nonpayable","type":"function"}"#
    );
}

#[test]
fn test_table_round_trips() {
    let table = cryptocolors();
    let json = table.to_json_string().unwrap();
    let reparsed = InterfaceTable::from_json_str(&json).unwrap();
    assert_eq!(&reparsed, table);
    assert_eq!(
        reparsed.to_json_value().unwrap(),
        serde_json::from_str::<Value>(CRYPTOCOLORS_ABI_JSON).unwrap()
    );
}

#[test]
fn test_load_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CRYPTOCOLORS_ABI_JSON.as_bytes()).unwrap();

    let table = InterfaceTable::from_path(file.path()).unwrap();
    assert_eq!(&table, cryptocolors());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = InterfaceTable::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, AbiError::Io(_)));
    assert!(!err.is_not_found());
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        InterfaceTable::from_json_str("{\"not\":\"an array\"}").unwrap_err(),
        AbiError::Json(_)
    ));
    assert!(matches!(
        InterfaceTable::from_json_str("[{\"type\":\"event\"}]").unwrap_err(),
        AbiError::Json(_)
    ));
}

#[test]
fn test_invalid_type_in_loaded_table() {
    let json = r#"[{"anonymous":false,"inputs":[{"indexed":false,"name":"x","type":"uint31"}],"name":"Bad","type":"event"}]"#;
    let err = InterfaceTable::from_json_str(json).unwrap_err();
    assert!(matches!(err, AbiError::InvalidType { ref tag } if tag == "uint31"));
}

#[test]
fn test_unknown_keys_survive_round_trip() {
    let json = r#"[
        {"constant":true,"inputs":[{"internalType":"uint32","name":"tableId","type":"uint32"}],"name":"getTableInfo","outputs":[{"internalType":"address[]","name":"","type":"address[]"}],"payable":false,"stateMutability":"view","type":"function","gas":1200},
        {"anonymous":false,"inputs":[{"indexed":true,"internalType":"address","name":"owner","type":"address"}],"name":"TableHasAdded","type":"event","docs":"table created"}
    ]"#;
    let declared: Value = serde_json::from_str(json).unwrap();

    let table = InterfaceTable::from_json_str(json).unwrap();
    assert_eq!(table.to_json_value().unwrap(), declared);

    let reparsed = InterfaceTable::from_json_str(&table.to_json_string().unwrap()).unwrap();
    assert_eq!(reparsed, table);

    let op = table.operation("getTableInfo").unwrap();
    assert_eq!(op.signature(), "getTableInfo(uint32)");
    assert_eq!(op.inputs[0].extra["internalType"], "uint32");
    assert_eq!(op.extra["gas"], 1200);
}

#[test]
fn test_padded_type_tag_is_rejected() {
    let json = r#"[{"anonymous":false,"inputs":[{"indexed":false,"name":"tableId","type":" uint32 "}],"name":"GameIsEndedAtTable","type":"event"}]"#;
    let err = InterfaceTable::from_json_str(json).unwrap_err();
    assert!(matches!(err, AbiError::InvalidType { ref tag } if tag == " uint32 "));
}

#[test]
fn test_deeply_nested_type_tag_is_rejected() {
    let tag = format!("uint8{}", "[]".repeat(50_000));
    let json = serde_json::json!([{
        "anonymous": false,
        "inputs": [{"indexed": false, "name": "x", "type": tag}],
        "name": "Deep",
        "type": "event"
    }])
    .to_string();
    let err = InterfaceTable::from_json_str(&json).unwrap_err();
    assert!(matches!(err, AbiError::InvalidType { .. }));
}
