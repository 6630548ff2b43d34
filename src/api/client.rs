//! Control plane client
//!
//! Combines the HTTP wrapper with envelope-aware CRUD operations and
//! the name-or-ID resolver. Every operation is one or two round-trips;
//! nothing is cached or retried.

use super::error::{ApiError, ApiResult, LookupError};
use super::http::HttpClient;
use crate::resource::registry::ResourceDef;
use serde_json::Value;
use url::Url;

/// Client for an OpenStack-compatible control plane endpoint
#[derive(Clone)]
pub struct ApiClient {
    pub http: HttpClient,
    endpoint: Url,
}

impl ApiClient {
    /// Create a new client for the given endpoint and bearer token
    pub fn new(endpoint: Url, token: String) -> ApiResult<Self> {
        let http = HttpClient::new(token)?;
        Ok(Self { http, endpoint })
    }

    /// Build a collection URL, e.g. `https://cloud/v2/types`
    pub fn collection_url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.as_str().trim_end_matches('/'), path)
    }

    /// Build a member URL, e.g. `https://cloud/v2/types/<id>`
    pub fn member_url(&self, path: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(path), urlencoding::encode(id))
    }

    /// List a collection, unwrapping the plural envelope key.
    ///
    /// Query parameters pass through verbatim; pagination is the
    /// caller's concern.
    pub async fn list(
        &self,
        def: &ResourceDef,
        query: &[(String, String)],
    ) -> ApiResult<Vec<Value>> {
        let url = build_query(&self.collection_url(&def.path), query);
        let response = self.http.get(&url).await?;

        let items = match unwrap_envelope(response, &def.plural_key) {
            Value::Array(items) => items,
            _ => Vec::new(),
        };
        Ok(items)
    }

    /// Create a resource: POST the payload under the singular envelope
    /// key and unwrap the created record from the response.
    pub async fn create(&self, def: &ResourceDef, payload: Value) -> ApiResult<Value> {
        let url = self.collection_url(&def.path);
        let body = envelope(&def.singular_key, payload);
        let response = self.http.post(&url, Some(&body)).await?;
        Ok(unwrap_envelope(response, &def.singular_key))
    }

    /// Update a resource: PUT the record under the singular envelope key.
    pub async fn update(&self, def: &ResourceDef, id: &str, record: Value) -> ApiResult<Value> {
        let url = self.member_url(&def.path, id);
        let body = envelope(&def.singular_key, record);
        let response = self.http.put(&url, &body).await?;
        Ok(unwrap_envelope(response, &def.singular_key))
    }

    /// Delete a resource by ID. The response body is discarded; failure
    /// surfaces as an error.
    pub async fn delete(&self, def: &ResourceDef, id: &str) -> ApiResult<()> {
        let url = self.member_url(&def.path, id);
        self.http.delete(&url).await?;
        Ok(())
    }

    /// Find a single resource by name or ID.
    ///
    /// Tries the cheap path first: a direct fetch treating the value as
    /// an ID. When that comes back not-found or bad-request, falls back
    /// to a listing filtered by the resource's name attribute, which
    /// must produce exactly one match.
    pub async fn find(&self, def: &ResourceDef, value: &str) -> Result<Value, LookupError> {
        let url = self.member_url(&def.path, value);

        match self.http.get(&url).await {
            Ok(response) => Ok(unwrap_envelope(response, &def.singular_key)),
            Err(ApiError::NotFound { .. }) | Err(ApiError::BadRequest { .. }) => {
                self.find_by_attr(def, value).await
            }
            Err(e) => Err(LookupError::Api(e)),
        }
    }

    /// Fallback resolution: list filtered by the name attribute, then
    /// match exactly client-side since servers treat the filter as
    /// advisory.
    async fn find_by_attr(&self, def: &ResourceDef, value: &str) -> Result<Value, LookupError> {
        tracing::debug!(
            "direct fetch missed, searching {} by {}={}",
            def.path,
            def.name_attr,
            value
        );

        let query = [(def.name_attr.clone(), value.to_string())];
        let items = self.list(def, &query).await?;

        let mut matches: Vec<Value> = items
            .into_iter()
            .filter(|item| {
                item.get(&def.name_attr).and_then(Value::as_str) == Some(value)
            })
            .collect();

        match matches.len() {
            0 => Err(LookupError::NotFound(value.to_string())),
            1 => Ok(matches.swap_remove(0)),
            count => Err(LookupError::Ambiguous {
                value: value.to_string(),
                count,
            }),
        }
    }
}

/// Extract the `id` field of a record for use in member URLs.
/// Some services serve numeric IDs, so both forms are accepted.
pub fn record_id(record: &Value) -> Option<String> {
    match record.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Wrap a payload under an envelope key
pub fn envelope(key: &str, payload: Value) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(key.to_string(), payload);
    Value::Object(map)
}

/// Unwrap the expected envelope key from a response body.
///
/// Bodies without the expected key are returned as-is; some endpoints
/// answer with the bare record.
pub fn unwrap_envelope(mut body: Value, key: &str) -> Value {
    if let Value::Object(ref mut map) = body {
        if let Some(inner) = map.remove(key) {
            return inner;
        }
    }
    body
}

/// Append query parameters to a URL, skipping empty values
pub fn build_query(url: &str, params: &[(String, String)]) -> String {
    let query_parts: Vec<String> = params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect();

    if query_parts.is_empty() {
        url.to_string()
    } else {
        format!("{}?{}", url, query_parts.join("&"))
    }
}
