use crate::{RequestEpoch, Snippet, SnippetId, TagFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The host is up; issue the initial list query.
    Started,
    /// Clock/frame tick from the host loop.
    Tick { now_ms: u64 },
    /// User picked a tag in the filter bar.
    TagSelected(TagFilter),
    /// User edited the search box.
    SearchChanged(String),
    /// User cleared the search box.
    SearchCleared,
    /// User clicked the manual refresh button.
    RefreshClicked,
    /// User clicked "New Snippet" / "Close".
    PanelToggled,
    /// User edited the creation form.
    DraftChanged(String),
    /// User submitted the creation form.
    SubmitClicked,
    EditClicked(SnippetId),
    EditDraftChanged { id: SnippetId, text: String },
    SaveClicked(SnippetId),
    /// Cancels either an edit or a pending delete confirmation.
    CancelClicked(SnippetId),
    DeleteClicked(SnippetId),
    DeleteConfirmed(SnippetId),
    /// User closed the notification.
    NotificationDismissed,
    /// List response for the query issued with `epoch`.
    SnippetsLoaded {
        epoch: RequestEpoch,
        outcome: FetchOutcome,
    },
    CreateFinished(WriteOutcome),
    UpdateFinished { id: SnippetId, outcome: WriteOutcome },
    DeleteFinished { id: SnippetId, outcome: DeleteOutcome },
    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Vec<Snippet>),
    /// The body could not be interpreted; treated as an empty result set.
    Malformed,
    TransportFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Saved(Snippet),
    /// Non-success status; `message` is the server's explanation when present.
    Rejected { message: Option<String> },
    TransportFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed,
}
