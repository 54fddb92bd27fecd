use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::json;
use smartbase_engine::{
    ApiError, ApiSettings, EngineEvent, EngineHandle, FailureKind, ListFilter, ListResponse,
    SnippetApi, SnippetId, WriteResponse,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn collect(engine: &EngineHandle, expected: usize) -> Vec<EngineEvent> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut events = Vec::new();
    while events.len() < expected && Instant::now() < deadline {
        if let Some(event) = engine.recv_timeout(Duration::from_millis(50)) {
            events.push(event);
        }
    }
    events
}

#[test]
fn list_events_arrive_in_completion_order() {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/snippets/"))
            .and(query_param("search", "slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(300))
                    .set_body_json(json!({ "results": [] })),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/snippets/"))
            .and(query_param("search", "fast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .mount(&server)
            .await;
        server
    });

    let settings = ApiSettings {
        base_url: format!("{}/api", server.uri()),
        ..ApiSettings::default()
    };
    let engine = EngineHandle::new(&settings).expect("engine");
    engine.list(
        1,
        ListFilter {
            tag: None,
            search: Some("slow".to_string()),
        },
    );
    engine.list(
        2,
        ListFilter {
            tag: None,
            search: Some("fast".to_string()),
        },
    );

    let epochs: Vec<_> = collect(&engine, 2)
        .into_iter()
        .map(|event| match event {
            EngineEvent::Listed { epoch, result } => {
                assert_eq!(result, Ok(ListResponse::Results(Vec::new())));
                epoch
            }
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    assert_eq!(epochs, vec![2, 1]);
    drop(server);
}

struct OfflineApi;

#[async_trait::async_trait]
impl SnippetApi for OfflineApi {
    async fn list(&self, _filter: &ListFilter) -> Result<ListResponse, ApiError> {
        Err(offline())
    }

    async fn create(&self, _content: &str) -> Result<WriteResponse, ApiError> {
        Err(offline())
    }

    async fn update(&self, _id: SnippetId, _content: &str) -> Result<WriteResponse, ApiError> {
        Err(offline())
    }

    async fn delete(&self, _id: SnippetId) -> Result<(), ApiError> {
        Err(offline())
    }
}

fn offline() -> ApiError {
    ApiError {
        kind: FailureKind::Network,
        message: "connection refused".to_string(),
    }
}

#[test]
fn every_command_reports_its_failure() {
    let engine = EngineHandle::with_api(Arc::new(OfflineApi)).expect("engine");
    engine.delete(3);

    let events = collect(&engine, 1);
    match events.as_slice() {
        [EngineEvent::Deleted { id: 3, result: Err(err) }] => {
            assert_eq!(err.kind, FailureKind::Network);
        }
        other => panic!("unexpected events {other:?}"),
    }

    engine.create("text");
    engine.update(8, "text");
    let events = collect(&engine, 2);
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| matches!(
        event,
        EngineEvent::Created { result: Err(_) } | EngineEvent::Updated { id: 8, result: Err(_) }
    )));
}
