//! Resource Registry - Load resource definitions from JSON
//!
//! Each resource type the client manages is described by an embedded
//! definition: its collection path, the envelope keys its API responses
//! wrap payloads under, and the columns its listings display. Envelope
//! unwrapping always names the expected key from here rather than
//! guessing from the response shape.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded resource catalog (compiled into the binary)
const CATALOG: &str = include_str!("../resources/catalog.json");

/// Column definition from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnDef {
    pub header: String,
    pub json_path: String,
}

/// Resource definition from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDef {
    pub display_name: String,
    /// Collection path relative to the endpoint, e.g. "types"
    pub path: String,
    /// Envelope key wrapping a single record, e.g. "volume_type"
    pub singular_key: String,
    /// Envelope key wrapping a listing, e.g. "volume_types"
    pub plural_key: String,
    /// Attribute used for fallback name resolution
    pub name_attr: String,
    pub columns: Vec<ColumnDef>,
    pub long_columns: Vec<ColumnDef>,
}

/// Root structure of resources/catalog.json
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub resources: HashMap<String, ResourceDef>,
}

/// Global registry loaded from JSON
static REGISTRY: OnceLock<Catalog> = OnceLock::new();

/// Get the resource catalog (loads from embedded JSON on first access)
pub fn get_catalog() -> &'static Catalog {
    REGISTRY.get_or_init(|| {
        serde_json::from_str(CATALOG)
            .unwrap_or_else(|e| panic!("Failed to parse embedded resource catalog: {}", e))
    })
}

/// Get a resource definition by key
pub fn get_resource(key: &str) -> Option<&'static ResourceDef> {
    get_catalog().resources.get(key)
}

fn require(key: &str) -> &'static ResourceDef {
    get_resource(key).unwrap_or_else(|| panic!("embedded catalog is missing resource {}", key))
}

pub fn volume_types() -> &'static ResourceDef {
    require("volume-types")
}

pub fn security_groups() -> &'static ResourceDef {
    require("security-groups")
}
