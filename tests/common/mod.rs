//! Common test utilities for sfquery integration tests
//!
//! Provides shared fixtures for:
//! - The Waterline collection definition used across tests
//! - Writing config and schema files into a temp directory

#![allow(dead_code)]

use serde_json::{json, Value};
use sfquery::CollectionSchema;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn mock_collection_json() -> Value {
    json!({
        "definition": {
            "name": { "type": "string", "columnName": "name" },
            "age": { "type": "number", "columnName": "age" },
            "createdDate": { "type": "ref", "columnType": "date", "columnName": "createdDate" },
            "updatedAt": { "type": "ref", "columnType": "datetime", "columnName": "updatedAt" }
        }
    })
}

pub fn mock_collection() -> CollectionSchema {
    CollectionSchema::from_value(&mock_collection_json())
}

pub fn create_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}
