//! Volume type operations
//!
//! Payload assembly for the volume type endpoints, including the
//! extra-specs sub-resource that backs `--property` flags.

use super::client::{unwrap_envelope, ApiClient};
use super::error::ApiResult;
use crate::resource::registry;
use serde_json::{json, Map, Value};

/// Create a new volume type.
///
/// `is_public` is only sent when the caller picked a visibility; the
/// server default applies otherwise.
pub async fn create(
    client: &ApiClient,
    name: &str,
    description: Option<&str>,
    is_public: Option<bool>,
) -> ApiResult<Value> {
    let mut payload = Map::new();
    payload.insert("name".to_string(), json!(name));
    if let Some(description) = description {
        payload.insert("description".to_string(), json!(description));
    }
    if let Some(is_public) = is_public {
        payload.insert("is_public".to_string(), json!(is_public));
    }

    client
        .create(registry::volume_types(), Value::Object(payload))
        .await
}

/// Update name and/or description of a volume type by resolved ID.
pub async fn update(
    client: &ApiClient,
    id: &str,
    name: Option<&str>,
    description: Option<&str>,
) -> ApiResult<Value> {
    let mut payload = Map::new();
    if let Some(name) = name {
        payload.insert("name".to_string(), json!(name));
    }
    if let Some(description) = description {
        payload.insert("description".to_string(), json!(description));
    }

    client
        .update(registry::volume_types(), id, Value::Object(payload))
        .await
}

/// Set properties (extra specs) on a volume type. Returns the property
/// map the server acknowledged.
pub async fn set_properties(
    client: &ApiClient,
    id: &str,
    properties: &[(String, String)],
) -> ApiResult<Value> {
    let specs: Map<String, Value> = properties
        .iter()
        .map(|(k, v)| (k.clone(), json!(v)))
        .collect();

    let def = registry::volume_types();
    let url = format!("{}/extra_specs", client.member_url(&def.path, id));
    let body = json!({ "extra_specs": specs });

    let response = client.http.post(&url, Some(&body)).await?;
    Ok(unwrap_envelope(response, "extra_specs"))
}

/// Remove a single property (extra spec) from a volume type.
pub async fn unset_property(client: &ApiClient, id: &str, key: &str) -> ApiResult<()> {
    let def = registry::volume_types();
    let url = format!(
        "{}/extra_specs/{}",
        client.member_url(&def.path, id),
        urlencoding::encode(key)
    );

    client.http.delete(&url).await?;
    Ok(())
}
