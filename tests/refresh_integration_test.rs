use graph_refresh::core::{RefreshReport, SkipReason};
use graph_refresh::domain::ports::Container;
use graph_refresh::{CliConfig, GraphPipeline, HtmlPage, RefreshEngine, RefreshError};
use httpmock::prelude::*;
use tempfile::TempDir;

const PAGE_TEMPLATE: &str = r#"<html>
<head><title>Mentions graph</title></head>
<body>
<button onclick="refresh()">Generate graph</button>
<div id="graphContainer"><p>placeholder</p></div>
</body>
</html>"#;

struct TestPage {
    _dir: TempDir,
    path: String,
}

fn write_page() -> TestPage {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index.html");
    std::fs::write(&path, PAGE_TEMPLATE).unwrap();
    TestPage {
        path: path.to_str().unwrap().to_string(),
        _dir: dir,
    }
}

fn config_for(endpoint: String, page: &TestPage) -> CliConfig {
    CliConfig {
        endpoint,
        page: page.path.clone(),
        container_id: "graphContainer".to_string(),
        verbose: false,
        monitor: false,
    }
}

fn engine_for(
    endpoint: String,
    page: &TestPage,
) -> RefreshEngine<GraphPipeline<HtmlPage, CliConfig>> {
    let config = config_for(endpoint, page);
    let container = HtmlPage::new(config.page.clone(), config.container_id.clone());
    RefreshEngine::new(GraphPipeline::new(container, config))
}

#[tokio::test]
async fn test_end_to_end_success_updates_container() {
    let page = write_page();
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/generate-graph");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!("<svg></svg>"));
    });

    let engine = engine_for(server.url("/generate-graph"), &page);
    let report = engine.run().await.unwrap();

    api_mock.assert();
    assert!(report.updated());

    let container = HtmlPage::new(page.path.clone(), "graphContainer".to_string());
    assert_eq!(container.content().await.unwrap(), "<svg></svg>");

    // The rest of the page survives the splice
    let document = std::fs::read_to_string(&page.path).unwrap();
    assert!(document.contains("Generate graph"));
    assert!(document.contains("<title>Mentions graph</title>"));
}

#[tokio::test]
async fn test_server_error_leaves_container_unchanged() {
    let page = write_page();
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/generate-graph");
        then.status(500);
    });

    let engine = engine_for(server.url("/generate-graph"), &page);
    let report = engine.run().await.unwrap();

    api_mock.assert();
    match report {
        RefreshReport::Unchanged {
            reason: SkipReason::NonSuccessStatus(500),
        } => {}
        other => panic!("expected unchanged report, got {:?}", other),
    }

    let document = std::fs::read_to_string(&page.path).unwrap();
    assert_eq!(document, PAGE_TEMPLATE);
}

#[tokio::test]
async fn test_malformed_body_leaves_container_unchanged() {
    let page = write_page();
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/generate-graph");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{not valid json");
    });

    let engine = engine_for(server.url("/generate-graph"), &page);
    let report = engine.run().await.unwrap();

    api_mock.assert();
    match report {
        RefreshReport::Unchanged {
            reason: SkipReason::MalformedBody(_),
        } => {}
        other => panic!("expected malformed-body skip, got {:?}", other),
    }

    let document = std::fs::read_to_string(&page.path).unwrap();
    assert_eq!(document, PAGE_TEMPLATE);
}

#[tokio::test]
async fn test_two_refreshes_last_response_wins() {
    let page = write_page();
    let server = MockServer::start();

    let mut first_mock = server.mock(|when, then| {
        when.method(GET).path("/generate-graph");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!("<svg>first</svg>"));
    });

    let engine = engine_for(server.url("/generate-graph"), &page);
    engine.run().await.unwrap();
    first_mock.assert();
    first_mock.delete();

    let second_mock = server.mock(|when, then| {
        when.method(GET).path("/generate-graph");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!("<svg>second</svg>"));
    });

    engine.run().await.unwrap();
    second_mock.assert();

    let container = HtmlPage::new(page.path.clone(), "graphContainer".to_string());
    assert_eq!(container.content().await.unwrap(), "<svg>second</svg>");
}

#[tokio::test]
async fn test_repeat_refresh_with_div_payloads() {
    // Generated graph markup is itself full of <div>s; a second refresh must
    // still replace the whole container content, not splice inside it.
    let page = write_page();
    let server = MockServer::start();

    let mut first_mock = server.mock(|when, then| {
        when.method(GET).path("/generate-graph");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!("<div class=\"card\"><div>first graph</div></div>"));
    });

    let engine = engine_for(server.url("/generate-graph"), &page);
    engine.run().await.unwrap();
    first_mock.assert();
    first_mock.delete();

    let second_mock = server.mock(|when, then| {
        when.method(GET).path("/generate-graph");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!("<div class=\"card\"><div>second graph</div></div>"));
    });

    engine.run().await.unwrap();
    second_mock.assert();

    let container = HtmlPage::new(page.path.clone(), "graphContainer".to_string());
    assert_eq!(
        container.content().await.unwrap(),
        "<div class=\"card\"><div>second graph</div></div>"
    );

    // The document holds exactly one copy of the payload and no stray tags
    let document = std::fs::read_to_string(&page.path).unwrap();
    assert!(!document.contains("first graph"));
    assert!(document.contains(
        r#"<div id="graphContainer"><div class="card"><div>second graph</div></div></div>"#
    ));
    assert!(document.ends_with("</body>\n</html>"));
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_markup() {
    let page = write_page();
    let server = MockServer::start();

    let mut ok_mock = server.mock(|when, then| {
        when.method(GET).path("/generate-graph");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!("<svg>kept</svg>"));
    });

    let engine = engine_for(server.url("/generate-graph"), &page);
    engine.run().await.unwrap();
    ok_mock.assert();
    ok_mock.delete();

    let failing_mock = server.mock(|when, then| {
        when.method(GET).path("/generate-graph");
        then.status(503);
    });

    let report = engine.run().await.unwrap();
    failing_mock.assert();
    assert!(!report.updated());

    let container = HtmlPage::new(page.path.clone(), "graphContainer".to_string());
    assert_eq!(container.content().await.unwrap(), "<svg>kept</svg>");
}

#[tokio::test]
async fn test_missing_container_element_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index.html");
    std::fs::write(&path, "<html><body><p>no container here</p></body></html>").unwrap();
    let page = TestPage {
        path: path.to_str().unwrap().to_string(),
        _dir: dir,
    };

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/generate-graph");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!("<svg></svg>"));
    });

    let engine = engine_for(server.url("/generate-graph"), &page);
    let result = engine.run().await;

    api_mock.assert();
    match result {
        Err(RefreshError::ContainerNotFoundError { id, page: in_page }) => {
            assert_eq!(id, "graphContainer");
            assert_eq!(in_page, page.path);
        }
        other => panic!("expected container-not-found, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn test_script_payload_still_injected() {
    // Active content is flagged at warn level but the trusted payload is
    // injected unchanged.
    let page = write_page();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/generate-graph");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!("<script>draw()</script><svg></svg>"));
    });

    let engine = engine_for(server.url("/generate-graph"), &page);
    let report = engine.run().await.unwrap();
    assert!(report.updated());

    let container = HtmlPage::new(page.path.clone(), "graphContainer".to_string());
    assert_eq!(
        container.content().await.unwrap(),
        "<script>draw()</script><svg></svg>"
    );
}
