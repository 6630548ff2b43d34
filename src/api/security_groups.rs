//! Security group operations
//!
//! Listing with filter passthrough and the merge-then-PUT update used
//! by `security-group set`.

use super::client::{record_id, ApiClient};
use super::error::{ApiError, ApiResult, LookupError};
use crate::resource::merge;
use crate::resource::registry;
use serde_json::{json, Map, Value};

/// Create a new security group.
pub async fn create(
    client: &ApiClient,
    name: &str,
    description: Option<&str>,
) -> ApiResult<Value> {
    let mut payload = Map::new();
    payload.insert("name".to_string(), json!(name));
    if let Some(description) = description {
        payload.insert("description".to_string(), json!(description));
    }

    client
        .create(registry::security_groups(), Value::Object(payload))
        .await
}

/// List security groups.
///
/// `limit` and `marker` pass through to the server (the marker rides
/// the `offset` parameter, matching the wire API); `all_projects`
/// widens the listing beyond the token's project.
pub async fn list(
    client: &ApiClient,
    limit: Option<u32>,
    marker: Option<&str>,
    all_projects: bool,
) -> ApiResult<Vec<Value>> {
    let mut query: Vec<(String, String)> = Vec::new();
    if all_projects {
        query.push(("all_tenants".to_string(), "1".to_string()));
    }
    if let Some(limit) = limit {
        query.push(("limit".to_string(), limit.to_string()));
    }
    if let Some(marker) = marker {
        query.push(("offset".to_string(), marker.to_string()));
    }

    client.list(registry::security_groups(), &query).await
}

/// Update a security group resolved by name or ID.
///
/// The fetched record is merged with the supplied updates under
/// `UpdateIfPresent` (fields the record does not carry are dropped)
/// and PUT back whole.
pub async fn set(
    client: &ApiClient,
    identifier: &str,
    updates: &[(String, Value)],
) -> Result<Value, LookupError> {
    let def = registry::security_groups();
    let mut record = client.find(def, identifier).await?;

    merge::apply(&mut record, updates, merge::Policy::UpdateIfPresent)
        .map_err(|e| LookupError::Api(ApiError::Malformed(def.display_name.clone(), e.to_string())))?;

    let id = record_id(&record)
        .ok_or_else(|| LookupError::Api(ApiError::MissingId(def.display_name.clone())))?;

    let updated = client.update(def, &id, record).await?;
    Ok(updated)
}
