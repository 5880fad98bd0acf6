//! Unit tests for the Identifiers module

use std::collections::HashMap;

use core_kernel::PlayId;

#[test]
fn test_new_and_as_str() {
    let id = PlayId::new("hamlet");
    assert_eq!(id.as_str(), "hamlet");
}

#[test]
fn test_equality_is_by_key() {
    assert_eq!(PlayId::from("othello"), PlayId::from("othello".to_string()));
    assert_ne!(PlayId::from("othello"), PlayId::from("hamlet"));
}

#[test]
fn test_serde_is_transparent() {
    let id: PlayId = serde_json::from_str("\"as-like\"").unwrap();
    assert_eq!(id, PlayId::from("as-like"));
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"as-like\"");
}

#[test]
fn test_usable_as_map_key() {
    let mut plays = HashMap::new();
    plays.insert(PlayId::from("hamlet"), "Hamlet");
    plays.insert(PlayId::from("othello"), "Othello");

    assert_eq!(plays.get("hamlet"), Some(&"Hamlet"));
    assert_eq!(plays.get(&PlayId::from("othello")), Some(&"Othello"));
    assert!(plays.get("history").is_none());
}
