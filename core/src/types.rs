//! Wire DTOs for the CodeBoard API.
//!
//! # Design
//! These types mirror the server's JSON documents but are defined
//! independently of the mock-server crate; integration tests catch schema
//! drift. Wire names are camelCase, mapped with `#[serde(rename)]` where
//! they differ from Rust field names. Extra fields the server may add are
//! ignored; a missing required field fails deserialization and is surfaced
//! as a `BoardError` by the client.
//!
//! `url` fields are never taken from the wire: they carry
//! `#[serde(default)]` and the client overwrites them from its own
//! `base_url` after every successful call.

use serde::{Deserialize, Serialize};

/// A single file inside a board.
///
/// The service caps boards at 2 files; that limit is enforced server-side
/// and not validated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardFile {
    pub name: String,
    pub language: String,
    /// The code snippet shown in this file.
    pub value: String,
}

/// Request payload for the save endpoint.
///
/// `description` is optional in the type but `save` rejects a missing or
/// empty one before touching the network, matching the upstream wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub files: Vec<BoardFile>,
}

/// Response of the save endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResult {
    pub message: String,
    /// Server-side path of the new board, e.g. `/bin/abc123`.
    pub board: String,
    /// HTTP status code echoed in the document.
    pub status: u16,
    pub created: bool,
    /// Full board URL, derived client-side from `base_url` + `board`.
    #[serde(default)]
    pub url: String,
}

/// A board's relationship to the board it was copied from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fork {
    pub status: bool,
    pub key: String,
    pub name: String,
}

/// Response of the fetch endpoint (the board object).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    pub name: String,
    pub description: String,
    pub files: Vec<BoardFile>,
    /// Full board URL, derived client-side from `base_url` + `/bin/` + `key`.
    #[serde(default)]
    pub url: String,
    pub key: String,
    /// Creation time as epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    pub encrypted: bool,
    #[serde(rename = "autoVanish")]
    pub auto_vanish: bool,
    pub fork: Fork,
    #[serde(default)]
    pub author: Option<String>,
    pub bot: bool,
    /// HTTP status code echoed in the document.
    pub status: u16,
}

/// Body of the validate endpoint. Internal to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct KeyStatus {
    pub valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_request_omits_missing_description() {
        let body = SaveRequest {
            name: "scratch".to_string(),
            description: None,
            files: vec![BoardFile {
                name: "main.rs".to_string(),
                language: "rust".to_string(),
                value: "fn main() {}".to_string(),
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["files"][0]["language"], "rust");
    }

    #[test]
    fn fetch_result_reads_camel_case_wire_names() {
        let raw = r#"{
            "name": "demo",
            "description": "a demo board",
            "files": [{"name": "a.js", "language": "javascript", "value": "1"}],
            "key": "abc123",
            "createdAt": 1700000000000,
            "encrypted": false,
            "autoVanish": true,
            "fork": {"status": false, "key": "", "name": ""},
            "author": null,
            "bot": false,
            "status": 200
        }"#;
        let result: FetchResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.created_at, 1_700_000_000_000);
        assert!(result.auto_vanish);
        assert!(result.author.is_none());
        assert_eq!(result.url, "", "url must not come from the wire");
    }

    #[test]
    fn fetch_result_ignores_unexpected_extra_fields() {
        let raw = r#"{
            "name": "demo",
            "description": "d",
            "files": [],
            "key": "k",
            "createdAt": 0,
            "encrypted": true,
            "autoVanish": false,
            "fork": {"status": true, "key": "p", "name": "parent"},
            "bot": true,
            "status": 200,
            "views": 41,
            "theme": "dark"
        }"#;
        let result: FetchResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.fork.name, "parent");
    }

    #[test]
    fn fetch_result_rejects_missing_required_field() {
        // no "key"
        let raw = r#"{
            "name": "demo",
            "description": "d",
            "files": [],
            "createdAt": 0,
            "encrypted": false,
            "autoVanish": false,
            "fork": {"status": false, "key": "", "name": ""},
            "bot": false,
            "status": 200
        }"#;
        assert!(serde_json::from_str::<FetchResult>(raw).is_err());
    }

    #[test]
    fn save_result_defaults_url_when_absent() {
        let raw = r#"{"message": "Board created !", "board": "/bin/xyz", "status": 201, "created": true}"#;
        let result: SaveResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.url, "");
        assert_eq!(result.board, "/bin/xyz");
    }
}
