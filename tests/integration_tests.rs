//! End-to-end tests against a mock control plane

use cirrus_mgmt::models::{DatabaseEdition, ServerVersion};
use cirrus_mgmt::{BearerTokenCredential, Error, ManagementClient};
use futures::{StreamExt, TryStreamExt};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

fn client_for(server: &MockServer) -> ManagementClient {
    init_tracing();
    ManagementClient::builder()
        .endpoint(server.uri())
        .subscription_id("sub-1")
        .build()
        .unwrap()
}

fn server_json(name: &str) -> serde_json::Value {
    json!({
        "id": format!("/subscriptions/sub-1/resourceGroups/rg-1/providers/Cirrus.Sql/servers/{name}"),
        "name": name,
        "type": "Cirrus.Sql/servers",
        "location": "westus",
        "properties": {"version": "12.0", "state": "Ready"}
    })
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_walks_all_pages_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscriptions/sub-1/providers/Cirrus.Sql/servers"))
        .and(query_param("api-version", "2014-04-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [server_json("sql1"), server_json("sql2")],
            "nextLink": format!("{}/page2?skipToken=abc", mock_server.uri())
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page2"))
        .and(query_param("skipToken", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [server_json("sql3")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let servers = client.servers().list().collect().await.unwrap();

    let names: Vec<_> = servers
        .iter()
        .map(|s| s.resource.resource.name.clone().unwrap())
        .collect();
    assert_eq!(names, vec!["sql1", "sql2", "sql3"]);
}

#[tokio::test]
async fn test_list_terminates_on_empty_next_link() {
    let mock_server = MockServer::start().await;

    // An empty nextLink means the sequence is over, same as an absent one.
    Mock::given(method("GET"))
        .and(path("/subscriptions/sub-1/providers/Cirrus.Sql/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [server_json("sql1")],
            "nextLink": ""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let servers = client.servers().list().collect().await.unwrap();
    assert_eq!(servers.len(), 1);
}

#[tokio::test]
async fn test_empty_page_with_continuation_keeps_walking() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscriptions/sub-1/providers/Cirrus.Sql/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [],
            "nextLink": format!("{}/page2", mock_server.uri())
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [server_json("sql1")]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let servers = client.servers().list().collect().await.unwrap();
    assert_eq!(servers.len(), 1);
}

#[tokio::test]
async fn test_next_link_is_followed_verbatim() {
    let mock_server = MockServer::start().await;

    // The continuation carries its own pre-encoded query; nothing may be
    // re-encoded or merged in on the follow-up request.
    Mock::given(method("GET"))
        .and(path("/subscriptions/sub-1/providers/Cirrus.Sql/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [],
            "nextLink": format!(
                "{}/continuation?skipToken=a%20b%2Fc&api-version=2014-04-01",
                mock_server.uri()
            )
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/continuation"))
        .and(query_param("skipToken", "a b/c"))
        .and(query_param("api-version", "2014-04-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [server_json("sql1")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let servers = client.servers().list().collect().await.unwrap();
    assert_eq!(servers.len(), 1);
}

#[tokio::test]
async fn test_pages_are_fetched_on_demand_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscriptions/sub-1/providers/Cirrus.Sql/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [server_json("sql1"), server_json("sql2")],
            "nextLink": format!("{}/page2", mock_server.uri())
        })))
        .mount(&mock_server)
        .await;

    // The consumer stops inside the first page, so this must never be hit.
    Mock::given(method("GET"))
        .and(path("/page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let first_two: Vec<_> = client
        .servers()
        .list()
        .take(2)
        .try_collect()
        .await
        .unwrap();
    assert_eq!(first_two.len(), 2);
}

#[tokio::test]
async fn test_mid_sequence_error_surfaces_after_yielded_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscriptions/sub-1/providers/Cirrus.Sql/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [server_json("sql1")],
            "nextLink": format!("{}/page2", mock_server.uri())
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": "InternalServerError", "message": "boom"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut stream = client.servers().list();

    let first = stream.try_next().await.unwrap().unwrap();
    assert_eq!(first.resource.resource.name.as_deref(), Some("sql1"));

    let err = stream.try_next().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.is_server_error());

    // The stream is over after the error.
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_concurrent_listings_keep_independent_cursors() {
    let mock_server = MockServer::start().await;

    // Two streams from the same operation group each start from page one.
    Mock::given(method("GET"))
        .and(path("/subscriptions/sub-1/providers/Cirrus.Sql/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [server_json("sql1")]
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let servers = client.servers();

    let first = servers.list().collect().await.unwrap();
    let second = servers.list().collect().await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[tokio::test]
async fn test_invalid_argument_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client
        .servers()
        .list_by_resource_group("")
        .try_next()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(err.to_string().contains("resourceGroupName"));

    let err = client.servers().get("rg-1", "  ").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_single_page_listing_exposes_the_continuation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/subscriptions/sub-1/resourceGroups/rg-1/providers/Cirrus.Sql/servers/sql1/databases",
        ))
        .and(query_param("api-version", "2014-04-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"name": "db1", "properties": {"edition": "Basic"}}],
            "nextLink": format!("{}/dbs/page2", mock_server.uri())
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dbs/page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"name": "db2", "properties": {"edition": "Premium"}}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let databases = client.databases();

    let page = databases
        .list_by_server_single_page("rg-1", "sql1")
        .await
        .unwrap();
    assert_eq!(page.value.len(), 1);

    let token = page.continuation().unwrap();
    let next = databases.list_next_page(&token).await.unwrap();
    assert_eq!(
        next.value[0].resource.resource.name.as_deref(),
        Some("db2")
    );
    assert!(next.continuation().is_none());
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_credential_applied_to_every_page_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscriptions/sub-1/providers/Cirrus.Sql/servers"))
        .and(header("authorization", "Bearer t0ken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [],
            "nextLink": format!("{}/page2", mock_server.uri())
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page2"))
        .and(header("authorization", "Bearer t0ken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    init_tracing();
    let client = ManagementClient::builder()
        .endpoint(mock_server.uri())
        .subscription_id("sub-1")
        .credential(Arc::new(BearerTokenCredential::new("t0ken")))
        .build()
        .unwrap();

    let servers = client.servers().list().collect().await.unwrap();
    assert!(servers.is_empty());
}

// ============================================================================
// Point operations
// ============================================================================

#[tokio::test]
async fn test_get_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/subscriptions/sub-1/resourceGroups/rg-1/providers/Cirrus.Sql/servers/sql1",
        ))
        .and(query_param("api-version", "2014-04-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_json("sql1")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let server = client.servers().get("rg-1", "sql1").await.unwrap();

    assert_eq!(server.resource.resource.name.as_deref(), Some("sql1"));
    assert_eq!(server.properties.version, Some(ServerVersion::V12));
}

#[tokio::test]
async fn test_get_missing_server_is_a_client_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/subscriptions/sub-1/resourceGroups/rg-1/providers/Cirrus.Sql/servers/nope",
        ))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "ResourceNotFound", "message": "Server 'nope' was not found."}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.servers().get("rg-1", "nope").await.unwrap_err();

    assert!(err.is_client_error());
    match err {
        Error::Api { status, code, .. } => {
            assert_eq!(status, 404);
            assert_eq!(code.as_deref(), Some("ResourceNotFound"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_define_server_sends_assembled_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(
            "/subscriptions/sub-1/resourceGroups/rg-1/providers/Cirrus.Sql/servers/sql1",
        ))
        .and(query_param("api-version", "2014-04-01"))
        .and(body_json(json!({
            "location": "eastus",
            "tags": {"env": "prod"},
            "properties": {
                "version": "12.0",
                "administratorLogin": "admin",
                "administratorLoginPassword": "hunter2"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(server_json("sql1")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let created = client
        .servers()
        .define("rg-1", "sql1")
        .location("eastus")
        .tag("env", "prod")
        .version(ServerVersion::V12)
        .administrator_login("admin")
        .administrator_login_password("hunter2")
        .send()
        .await
        .unwrap();

    assert_eq!(created.resource.resource.name.as_deref(), Some("sql1"));
}

#[tokio::test]
async fn test_define_database_sends_assembled_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(
            "/subscriptions/sub-1/resourceGroups/rg-1/providers/Cirrus.Sql/servers/sql1/databases/db1",
        ))
        .and(body_json(json!({
            "location": "eastus",
            "properties": {
                "collation": "SQL_Latin1_General_CP1_CI_AS",
                "edition": "Standard",
                "maxSizeBytes": "268435456000"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "db1",
            "location": "eastus",
            "properties": {"edition": "Standard", "status": "Online"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let created = client
        .databases()
        .define("rg-1", "sql1", "db1")
        .location("eastus")
        .collation("SQL_Latin1_General_CP1_CI_AS")
        .edition(DatabaseEdition::Standard)
        .max_size_bytes(268_435_456_000)
        .send()
        .await
        .unwrap();

    assert_eq!(created.properties.edition, Some(DatabaseEdition::Standard));
}

#[tokio::test]
async fn test_create_requires_location() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .servers()
        .define("rg-1", "sql1")
        .administrator_login("admin")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(err.to_string().contains("parameters.location"));
}

#[tokio::test]
async fn test_delete_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(
            "/subscriptions/sub-1/resourceGroups/rg-1/providers/Cirrus.Sql/servers/sql1",
        ))
        .and(query_param("api-version", "2014-04-01"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.servers().delete("rg-1", "sql1").await.unwrap();
}

// ============================================================================
// Virtual networks
// ============================================================================

#[tokio::test]
async fn test_virtual_network_listing_uses_network_provider() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/subscriptions/sub-1/resourceGroups/rg-1/providers/Cirrus.Network/virtualNetworks",
        ))
        .and(query_param("api-version", "2020-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{
                "name": "vnet1",
                "location": "westus",
                "properties": {
                    "addressSpace": {"addressPrefixes": ["10.0.0.0/16"]},
                    "provisioningState": "Succeeded"
                }
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let networks = client
        .virtual_networks()
        .list("rg-1")
        .collect()
        .await
        .unwrap();

    assert_eq!(networks.len(), 1);
    assert_eq!(
        networks[0]
            .properties
            .address_space
            .as_ref()
            .unwrap()
            .address_prefixes,
        vec!["10.0.0.0/16"]
    );
}

#[tokio::test]
async fn test_define_virtual_network_sends_assembled_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(
            "/subscriptions/sub-1/resourceGroups/rg-1/providers/Cirrus.Network/virtualNetworks/vnet1",
        ))
        .and(query_param("api-version", "2020-06-01"))
        .and(body_json(json!({
            "location": "westus",
            "properties": {
                "addressSpace": {"addressPrefixes": ["10.0.0.0/16"]},
                "dhcpOptions": {"dnsServers": ["10.0.0.4"]},
                "subnets": [
                    {"name": "default", "properties": {"addressPrefix": "10.0.1.0/24"}}
                ]
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "vnet1",
            "location": "westus",
            "properties": {
                "addressSpace": {"addressPrefixes": ["10.0.0.0/16"]},
                "provisioningState": "Updating"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let created = client
        .virtual_networks()
        .define("rg-1", "vnet1")
        .location("westus")
        .address_prefix("10.0.0.0/16")
        .dns_server("10.0.0.4")
        .subnet("default", "10.0.1.0/24")
        .send()
        .await
        .unwrap();

    assert_eq!(created.resource.resource.name.as_deref(), Some("vnet1"));
}
