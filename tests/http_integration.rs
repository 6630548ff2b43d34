//! Integration tests for the control plane client using wiremock
//!
//! These exercise the real client against mocked endpoints: envelope
//! handling, the two-phase name-or-ID resolver, filter passthrough,
//! and the merge-then-PUT update path.

use ostack::api::client::ApiClient;
use ostack::api::{security_groups, volume_types, ApiError, LookupError};
use ostack::commands::volume_type::displayable;
use ostack::resource::registry;
use serde_json::json;
use url::Url;
use wiremock::matchers::{bearer_token, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let endpoint = Url::parse(&server.uri()).expect("mock server URI should parse");
    ApiClient::new(endpoint, "test-token".to_string()).expect("client should build")
}

mod resolver_tests {
    use super::*;

    /// An identifier that is an exact ID resolves via the direct fetch,
    /// with no fallback listing issued.
    #[tokio::test]
    async fn id_resolves_directly_without_fallback() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/types/abc123"))
            .and(bearer_token("test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "volume_type": {"id": "abc123", "name": "gold"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "volume_types": []
            })))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let record = client
            .find(registry::volume_types(), "abc123")
            .await
            .expect("find should succeed");

        assert_eq!(record["name"], "gold");
    }

    /// A name that is not an ID resolves via exactly one fallback
    /// listing query.
    #[tokio::test]
    async fn name_resolves_via_fallback_search() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/types/gold"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "itemNotFound": {"code": 404, "message": "no such type"}
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/types"))
            .and(query_param("name", "gold"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "volume_types": [{"id": "t1", "name": "gold"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let record = client
            .find(registry::volume_types(), "gold")
            .await
            .expect("find should fall back to name search");

        assert_eq!(record["id"], "t1");
    }

    /// A bad-request answer to the direct fetch also triggers the
    /// fallback; some services reject non-UUID path segments outright.
    #[tokio::test]
    async fn bad_request_triggers_fallback() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/types/gold"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "badRequest": {"code": 400, "message": "invalid id format"}
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "volume_types": [{"id": "t1", "name": "gold"}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let record = client
            .find(registry::volume_types(), "gold")
            .await
            .expect("find should fall back on bad request");

        assert_eq!(record["id"], "t1");
    }

    /// The fallback matches the name attribute exactly; the server-side
    /// filter is advisory and may return near-misses.
    #[tokio::test]
    async fn fallback_filters_for_exact_match() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/types/gold"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "volume_types": [
                    {"id": "t1", "name": "gold-plus"},
                    {"id": "t2", "name": "gold"}
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let record = client
            .find(registry::volume_types(), "gold")
            .await
            .expect("find should pick the exact match");

        assert_eq!(record["id"], "t2");
    }

    /// Matching nothing in either phase fails with NotFound carrying
    /// the exact identifier searched for.
    #[tokio::test]
    async fn miss_in_both_phases_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/types/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "volume_types": []
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .find(registry::volume_types(), "missing")
            .await
            .expect_err("find should fail");

        match err {
            LookupError::NotFound(value) => assert_eq!(value, "missing"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    /// More than one name match is ambiguous, not an arbitrary pick.
    #[tokio::test]
    async fn multiple_matches_are_ambiguous() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/types/dup"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "volume_types": [
                    {"id": "t1", "name": "dup"},
                    {"id": "t2", "name": "dup"}
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .find(registry::volume_types(), "dup")
            .await
            .expect_err("find should fail");

        match err {
            LookupError::Ambiguous { value, count } => {
                assert_eq!(value, "dup");
                assert_eq!(count, 2);
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }

    /// Failures other than 404/400 propagate unchanged and never
    /// trigger the fallback.
    #[tokio::test]
    async fn server_errors_propagate_without_fallback() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/types/abc"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "volume_types": []
            })))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .find(registry::volume_types(), "abc")
            .await
            .expect_err("find should fail");

        match err {
            LookupError::Api(ApiError::Status { status, .. }) => {
                assert_eq!(status.as_u16(), 500);
            }
            other => panic!("expected propagated status error, got {other:?}"),
        }
    }
}

mod crud_tests {
    use super::*;

    /// Create sends the payload under the singular envelope key and
    /// unwraps the created record.
    #[tokio::test]
    async fn create_uses_singular_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/types"))
            .and(bearer_token("test-token"))
            .and(body_json(json!({
                "volume_type": {"name": "gold", "is_public": true}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "volume_type": {"id": "t1", "name": "gold", "is_public": true}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let record = volume_types::create(&client, "gold", None, Some(true))
            .await
            .expect("create should succeed");

        assert_eq!(record["id"], "t1");
    }

    /// Delete discards the (empty) response body and succeeds.
    #[tokio::test]
    async fn delete_discards_empty_body() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/types/t1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .delete(registry::volume_types(), "t1")
            .await
            .expect("delete should succeed");
    }

    /// Empty filter values are skipped, so a listing with empty search
    /// filters issues the same request as an unfiltered one.
    #[tokio::test]
    async fn empty_filters_match_unfiltered_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/os-security-groups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "security_groups": [{"id": "1", "name": "default"}]
            })))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let def = registry::security_groups();

        let unfiltered = client.list(def, &[]).await.expect("list should succeed");
        let empty_filtered = client
            .list(def, &[("name".to_string(), String::new())])
            .await
            .expect("list should succeed");

        assert_eq!(unfiltered, empty_filtered);

        let requests = server
            .received_requests()
            .await
            .expect("request recording enabled");
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, requests[1].url);
    }

    /// Listing filters pass through to the query string; the marker
    /// rides the offset parameter.
    #[tokio::test]
    async fn security_group_list_passes_filters_through() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/os-security-groups"))
            .and(query_param("all_tenants", "1"))
            .and(query_param("limit", "10"))
            .and(query_param("offset", "m1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "security_groups": [{"id": "1", "name": "default"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let groups = security_groups::list(&client, Some(10), Some("m1"), true)
            .await
            .expect("list should succeed");

        assert_eq!(groups.len(), 1);
    }
}

mod update_tests {
    use super::*;

    /// Set merges supplied fields into the fetched record under
    /// update-if-present: unknown fields are dropped from the PUT
    /// payload.
    #[tokio::test]
    async fn set_drops_fields_absent_from_record() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/os-security-groups/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "security_group": {"id": "1", "name": "a"}
            })))
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/os-security-groups/1"))
            .and(body_json(json!({
                "security_group": {"id": "1", "name": "b"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "security_group": {"id": "1", "name": "b"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let updated = security_groups::set(
            &client,
            "1",
            &[
                ("bogus".to_string(), json!("x")),
                ("name".to_string(), json!("b")),
            ],
        )
        .await
        .expect("set should succeed");

        assert_eq!(updated["name"], "b");
    }

    /// Unset removes each property key with its own DELETE call.
    #[tokio::test]
    async fn unset_property_deletes_the_key() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/types/t1/extra_specs/foo"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        volume_types::unset_property(&client, "t1", "foo")
            .await
            .expect("unset should succeed");
    }
}

mod end_to_end_tests {
    use super::*;

    /// Create a volume type with a property, then show it: the display
    /// record carries `properties` and no `extra_specs`.
    #[tokio::test]
    async fn create_with_property_then_show() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/types"))
            .and(body_json(json!({
                "volume_type": {"name": "gold"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "volume_type": {"id": "t1", "name": "gold", "extra_specs": {}}
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/types/t1/extra_specs"))
            .and(body_json(json!({
                "extra_specs": {"foo": "bar"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "extra_specs": {"foo": "bar"}
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/types/t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "volume_type": {
                    "id": "t1",
                    "name": "gold",
                    "extra_specs": {"foo": "bar"}
                }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);

        let created = volume_types::create(&client, "gold", None, None)
            .await
            .expect("create should succeed");
        assert_eq!(created["id"], "t1");

        let specs = volume_types::set_properties(
            &client,
            "t1",
            &[("foo".to_string(), "bar".to_string())],
        )
        .await
        .expect("set_properties should succeed");
        assert_eq!(specs, json!({"foo": "bar"}));

        let record = client
            .find(registry::volume_types(), "t1")
            .await
            .expect("find should succeed");
        let shown = displayable(record);

        assert_eq!(shown["properties"], json!({"foo": "bar"}));
        assert!(shown.get("extra_specs").is_none());
    }
}
