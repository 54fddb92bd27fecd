use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use smartbase_logging::{smartbase_debug, smartbase_warn};

use crate::client::{ApiSettings, ReqwestSnippetApi, SnippetApi};
use crate::{ApiError, EngineEvent, ListFilter, RequestEpoch, SnippetId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build api client: {0}")]
    Client(#[from] ApiError),
}

enum EngineCommand {
    List {
        epoch: RequestEpoch,
        filter: ListFilter,
    },
    Create {
        content: String,
    },
    Update {
        id: SnippetId,
        content: String,
    },
    Delete {
        id: SnippetId,
    },
}

/// Runs backend calls on a background tokio runtime.
///
/// Each command is spawned as its own task, so completions are reported in
/// arrival order, not submission order.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: &ApiSettings) -> Result<Self, EngineError> {
        let api = ReqwestSnippetApi::new(settings)?;
        Self::with_api(Arc::new(api))
    }

    pub fn with_api(api: Arc<dyn SnippetApi>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(api.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
            smartbase_debug!("engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn list(&self, epoch: RequestEpoch, filter: ListFilter) {
        self.send(EngineCommand::List { epoch, filter });
    }

    pub fn create(&self, content: impl Into<String>) {
        self.send(EngineCommand::Create {
            content: content.into(),
        });
    }

    pub fn update(&self, id: SnippetId, content: impl Into<String>) {
        self.send(EngineCommand::Update {
            id,
            content: content.into(),
        });
    }

    pub fn delete(&self, id: SnippetId) {
        self.send(EngineCommand::Delete { id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            smartbase_warn!("engine worker is gone; command dropped");
        }
    }
}

async fn handle_command(api: &dyn SnippetApi, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::List { epoch, filter } => EngineEvent::Listed {
            epoch,
            result: api.list(&filter).await,
        },
        EngineCommand::Create { content } => EngineEvent::Created {
            result: api.create(&content).await,
        },
        EngineCommand::Update { id, content } => EngineEvent::Updated {
            id,
            result: api.update(id, &content).await,
        },
        EngineCommand::Delete { id } => EngineEvent::Deleted {
            id,
            result: api.delete(id).await,
        },
    }
}
