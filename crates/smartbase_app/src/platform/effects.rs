use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use smartbase_core::{DeleteOutcome, Effect, FetchOutcome, Msg, Snippet, Tag, WriteOutcome};
use smartbase_engine::{
    ApiError, ApiSettings, EngineError, EngineEvent, EngineHandle, ListFilter, ListResponse,
    SnippetRecord, WriteResponse,
};
use smartbase_logging::{smartbase_info, smartbase_warn};

use super::ui::commands::HostEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: &ApiSettings, msg_tx: mpsc::Sender<HostEvent>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings)?;
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchSnippets { epoch, query } => {
                    smartbase_info!(
                        "FetchSnippets epoch={} tag={:?} search={:?}",
                        epoch,
                        query.tag,
                        query.search
                    );
                    self.engine.list(
                        epoch,
                        ListFilter {
                            tag: query.tag.map(|tag| tag.label().to_string()),
                            search: query.search,
                        },
                    );
                }
                Effect::CreateSnippet { content } => {
                    smartbase_info!("CreateSnippet content_len={}", content.chars().count());
                    self.engine.create(content);
                }
                Effect::UpdateSnippet { id, content } => {
                    smartbase_info!("UpdateSnippet id={} content_len={}", id, content.chars().count());
                    self.engine.update(id, content);
                }
                Effect::DeleteSnippet { id } => {
                    smartbase_info!("DeleteSnippet id={}", id);
                    self.engine.delete(id);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<HostEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.recv_timeout(Duration::from_millis(50)) {
                if msg_tx.send(HostEvent::Core(map_event(event))).is_err() {
                    break;
                }
            }
        });
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Listed { epoch, result } => Msg::SnippetsLoaded {
            epoch,
            outcome: match result {
                Ok(ListResponse::Results(records)) => {
                    FetchOutcome::Loaded(records.into_iter().map(map_record).collect())
                }
                Ok(ListResponse::Malformed) => FetchOutcome::Malformed,
                Err(err) => {
                    log_failure("list", &err);
                    FetchOutcome::TransportFailed
                }
            },
        },
        EngineEvent::Created { result } => Msg::CreateFinished(map_write("create", result)),
        EngineEvent::Updated { id, result } => Msg::UpdateFinished {
            id,
            outcome: map_write("update", result),
        },
        EngineEvent::Deleted { id, result } => Msg::DeleteFinished {
            id,
            outcome: match result {
                Ok(()) => DeleteOutcome::Deleted,
                Err(err) => {
                    log_failure("delete", &err);
                    DeleteOutcome::Failed
                }
            },
        },
    }
}

fn map_write(operation: &str, result: Result<WriteResponse, ApiError>) -> WriteOutcome {
    match result {
        Ok(WriteResponse::Saved(record)) => WriteOutcome::Saved(map_record(record)),
        Ok(WriteResponse::Rejected { status, message }) => {
            smartbase_warn!("{} rejected with status {}: {:?}", operation, status, message);
            WriteOutcome::Rejected { message }
        }
        Err(err) => {
            log_failure(operation, &err);
            WriteOutcome::TransportFailed
        }
    }
}

fn map_record(record: SnippetRecord) -> Snippet {
    Snippet {
        id: record.id,
        content: record.content,
        ai_tag: Tag::from_label(&record.ai_tag),
        created_at: record.created_at,
    }
}

fn log_failure(operation: &str, err: &ApiError) {
    smartbase_warn!("{} failed: {}", operation, err);
}
