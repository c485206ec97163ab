//! Integration tests for the hub API client and the page loader using wiremock

use hub_facts::facts::hosting;
use hub_facts::facts::plugins::{HubResponse, Provider};
use hub_facts::facts::RepoFetchError;
use hub_facts::page::{EMPTY_PLUGIN_MESSAGE, PageLoader, PageMetadata, PluginPage};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn plugin_body(code_repository: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "napari-svg",
        "summary": "A plugin for reading and writing svg files with napari",
        "description": "# napari-svg\n\nWrite layers as SVG.",
        "version": "0.1.5",
        "license": "BSD-3-Clause",
        "python_version": ">=3.7",
        "authors": [{ "name": "Nicholas Sofroniew", "email": "sofroniewn@gmail.com" }],
        "release_date": "2021-04-22T17:03:36.081417Z",
        "first_released": "2020-04-21T01:50:40.165016Z",
        "development_status": ["Development Status :: 4 - Beta"],
        "operating_system": ["Operating System :: OS Independent"],
        "requirements": ["napari-plugin-engine (>=0.1.4)", "pytest ; extra == \"testing\""],
        "code_repository": code_repository,
        "project_site": "https://github.com/napari/napari-svg"
    })
}

async fn mount_plugin(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/plugins/napari-svg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn loader(server: &MockServer) -> PageLoader<hosting::GitHubClient> {
    let hub = Provider::new(&server.uri(), None).unwrap();
    PageLoader::new(hub, hosting::Provider::github(None, server.uri(), None))
}

#[tokio::test]
async fn test_get_plugin_found() {
    let mock_server = MockServer::start().await;
    mount_plugin(&mock_server, plugin_body("https://github.com/napari/napari-svg")).await;

    let hub = Provider::new(&mock_server.uri(), None).unwrap();
    let response = hub.get_plugin("napari-svg").await.unwrap();

    let HubResponse::Plugin(plugin) = response else {
        panic!("expected a plugin, got {response:?}");
    };
    assert_eq!(plugin.name.as_deref(), Some("napari-svg"));
    assert_eq!(plugin.version.as_deref(), Some("0.1.5"));
}

#[tokio::test]
async fn test_get_plugin_server_error() {
    let mock_server = MockServer::start().await;
    mount_plugin(
        &mock_server,
        serde_json::json!({
            "errorMessage": "plugin not found",
            "errorType": "KeyError",
            "stackTrace": ["File \"handler.py\", line 12"]
        }),
    )
    .await;

    let hub = Provider::new(&mock_server.uri(), None).unwrap();
    let response = hub.get_plugin("napari-svg").await.unwrap();

    let HubResponse::ServerError(error) = response else {
        panic!("expected a server error, got {response:?}");
    };
    assert_eq!(error.error_type(), Some("KeyError"));
    assert_eq!(error.error_message(), Some("plugin not found"));
}

#[tokio::test]
async fn test_get_plugin_http_failure_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/plugins/napari-svg"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let hub = Provider::new(&mock_server.uri(), None).unwrap();
    let err = hub.get_plugin("napari-svg").await.unwrap_err();

    assert!(err.to_string().contains("could not fetch plugin 'napari-svg'"));
}

#[tokio::test]
async fn test_load_combines_plugin_and_repo_stats() {
    let mock_server = MockServer::start().await;
    mount_plugin(&mock_server, plugin_body("https://github.com/napari/napari-svg")).await;

    Mock::given(method("GET"))
        .and(path("/repos/napari/napari-svg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "stargazers_count": 12,
            "forks_count": 4,
            "open_issues_count": 9
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = loader(&mock_server).load("napari-svg").await;
    let state = page.state().unwrap();

    assert_eq!(state.repo().stars, 12);
    assert_eq!(state.repo().forks, 4);
    assert_eq!(state.repo().issues_and_prs, 9);
    assert_eq!(state.repo_fetch_error(), None);

    let metadata = state.metadata();
    assert_eq!(metadata.release_date.value, "22 April 2021");
    assert_eq!(metadata.first_released.value, "21 April 2020");
    assert_eq!(metadata.development_status.values, vec!["4 - Beta"]);
    assert_eq!(metadata.requirements.values, vec!["napari-plugin-engine (>=0.1.4)"]);
    assert_eq!(metadata.authors.values, vec!["Nicholas Sofroniew"]);

    let page_metadata = PageMetadata::for_plugin(state.plugin());
    assert_eq!(page_metadata.title, "napari hub | plugins | napari-svg by Nicholas Sofroniew");
}

#[tokio::test]
async fn test_load_keeps_repo_fetch_error() {
    let mock_server = MockServer::start().await;
    mount_plugin(&mock_server, plugin_body("https://github.com/napari/napari-svg")).await;

    Mock::given(method("GET"))
        .and(path("/repos/napari/napari-svg"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let page = loader(&mock_server).load("napari-svg").await;
    let state = page.state().unwrap();

    assert_eq!(state.repo_fetch_error(), Some(&RepoFetchError::http(403)));
    assert_eq!(state.repo().stars, 0);
    assert_eq!(state.plugin().and_then(|p| p.name.as_deref()), Some("napari-svg"));
}

#[tokio::test]
async fn test_load_without_supported_repository() {
    let mock_server = MockServer::start().await;
    mount_plugin(&mock_server, plugin_body("https://gitlab.com/napari/napari-svg")).await;

    let loader = loader(&mock_server);
    let page = loader.load("napari-svg").await;
    let state = page.state().unwrap();

    assert_eq!(state.repo().stars, 0);
    assert_eq!(state.repo_fetch_error(), None);
    assert!(!loader.hosting().is_initialized());
}

#[tokio::test]
async fn test_load_server_error_is_pretty_json() {
    let mock_server = MockServer::start().await;
    mount_plugin(
        &mock_server,
        serde_json::json!({ "errorMessage": "boom", "errorType": "ValueError", "stackTrace": [] }),
    )
    .await;

    let page = loader(&mock_server).load("napari-svg").await;

    let message = page.error().unwrap();
    assert!(message.contains("\"errorType\": \"ValueError\""), "got {message}");
    assert!(message.contains('\n'));
    assert_eq!(page.state(), None);
}

#[tokio::test]
async fn test_load_malformed_server_error_is_shown() {
    let mock_server = MockServer::start().await;
    mount_plugin(
        &mock_server,
        serde_json::json!({ "errorType": "KeyError", "errorMessage": null, "stackTrace": "single string" }),
    )
    .await;

    let page = loader(&mock_server).load("napari-svg").await;

    let message = page.error().unwrap();
    assert_ne!(message, EMPTY_PLUGIN_MESSAGE);
    assert!(message.contains("\"stackTrace\": \"single string\""), "got {message}");
}

#[tokio::test]
async fn test_load_empty_plugin_data() {
    let mock_server = MockServer::start().await;
    mount_plugin(&mock_server, serde_json::json!({})).await;

    let page = loader(&mock_server).load("napari-svg").await;

    assert_eq!(page, PluginPage::Error(EMPTY_PLUGIN_MESSAGE.to_string()));
}

#[tokio::test]
async fn test_load_http_failure_is_page_error() {
    let mock_server = MockServer::start().await;

    let page = loader(&mock_server).load("napari-svg").await;

    assert!(page.error().is_some());
    assert_eq!(page.state(), None);
}
