//! Create/update/delete handling: local validation before any request, and
//! conversion of every outcome into a notification plus a list refresh.

use smartbase_logging::{smartbase_debug, smartbase_info, smartbase_warn};

use crate::notification::NotificationKind;
use crate::validation::{validate_content, ContentError};
use crate::{AppState, DeleteOutcome, Effect, SnippetId, WriteOutcome};

const CREATE_REJECTED: &str = "Upload failed.";
const CREATE_TRANSPORT: &str = "Server error. Is the backend running?";
const UPDATE_REJECTED: &str = "Failed to update snippet.";
const UPDATE_TRANSPORT: &str = "Server error.";
const DELETE_SUCCEEDED: &str = "Snippet deleted successfully.";
const DELETE_FAILED: &str = "Failed to delete snippet.";

pub(crate) fn refresh(state: &mut AppState) -> Effect {
    let (epoch, query) = state.query.refresh();
    Effect::FetchSnippets { epoch, query }
}

fn notify(state: &mut AppState, message: impl Into<String>, kind: NotificationKind) {
    state
        .notifications
        .post(&mut state.scheduler, message, kind);
    state.mark_dirty();
}

pub(crate) fn submit_create(state: &mut AppState) -> Vec<Effect> {
    if state.form.submitting {
        smartbase_debug!("create ignored: a submission is already in flight");
        return Vec::new();
    }
    let content = match validate_content(&state.form.draft).map(str::to_string) {
        Ok(content) => content,
        Err(err) => {
            notify(state, err.message(), NotificationKind::Error);
            return Vec::new();
        }
    };
    state.form.submitting = true;
    state.mark_dirty();
    vec![Effect::CreateSnippet { content }]
}

pub(crate) fn create_finished(state: &mut AppState, outcome: WriteOutcome) -> Vec<Effect> {
    state.form.submitting = false;
    state.mark_dirty();
    match outcome {
        WriteOutcome::Saved(snippet) => {
            smartbase_info!("snippet {} created with tag {}", snippet.id, snippet.ai_tag);
            notify(
                state,
                format!("Tagged as \"{}\" successfully!", snippet.ai_tag),
                NotificationKind::Success,
            );
            state.form.draft.clear();
            state.panel.close(&mut state.scheduler);
            if state.query.query().matches(&snippet) {
                state.store.upsert(snippet);
            }
            vec![refresh(state)]
        }
        WriteOutcome::Rejected { message } => {
            smartbase_warn!("create rejected by server: {:?}", message);
            notify(
                state,
                message.unwrap_or_else(|| CREATE_REJECTED.to_string()),
                NotificationKind::Error,
            );
            Vec::new()
        }
        WriteOutcome::TransportFailed => {
            smartbase_warn!("create failed: transport error");
            notify(state, CREATE_TRANSPORT, NotificationKind::Error);
            Vec::new()
        }
    }
}

pub(crate) fn submit_update(state: &mut AppState, id: SnippetId) -> Vec<Effect> {
    let Some(draft) = state.items.draft(id) else {
        return Vec::new();
    };
    if state.items.state(id).is_in_flight() {
        smartbase_debug!("update for {} ignored: request already in flight", id);
        return Vec::new();
    }
    let content = match validate_content(draft).map(str::to_string) {
        Ok(content) => content,
        Err(ContentError::Blank) => return Vec::new(),
        Err(err @ ContentError::TooLong { .. }) => {
            notify(state, err.message(), NotificationKind::Error);
            return Vec::new();
        }
    };
    if !state.items.begin_save(id) {
        return Vec::new();
    }
    state.mark_dirty();
    vec![Effect::UpdateSnippet { id, content }]
}

pub(crate) fn update_finished(
    state: &mut AppState,
    id: SnippetId,
    outcome: WriteOutcome,
) -> Vec<Effect> {
    state.mark_dirty();
    match outcome {
        WriteOutcome::Saved(snippet) => {
            smartbase_info!("snippet {} updated, re-tagged {}", id, snippet.ai_tag);
            state.items.finish_save(id, true);
            notify(
                state,
                format!("Updated & re-tagged as \"{}\"!", snippet.ai_tag),
                NotificationKind::Success,
            );
            if state.query.query().matches(&snippet) {
                state.store.upsert(snippet);
            } else {
                state.store.remove(id);
                state.reconcile_store();
            }
            vec![refresh(state)]
        }
        WriteOutcome::Rejected { message } => {
            smartbase_warn!("update of {} rejected by server: {:?}", id, message);
            state.items.finish_save(id, false);
            notify(
                state,
                message.unwrap_or_else(|| UPDATE_REJECTED.to_string()),
                NotificationKind::Error,
            );
            Vec::new()
        }
        WriteOutcome::TransportFailed => {
            smartbase_warn!("update of {} failed: transport error", id);
            state.items.finish_save(id, false);
            notify(state, UPDATE_TRANSPORT, NotificationKind::Error);
            Vec::new()
        }
    }
}

pub(crate) fn confirm_delete(state: &mut AppState, id: SnippetId) -> Vec<Effect> {
    if !state.items.confirm_delete(id) {
        return Vec::new();
    }
    state.mark_dirty();
    vec![Effect::DeleteSnippet { id }]
}

pub(crate) fn delete_finished(
    state: &mut AppState,
    id: SnippetId,
    outcome: DeleteOutcome,
) -> Vec<Effect> {
    state.mark_dirty();
    match outcome {
        DeleteOutcome::Deleted => {
            smartbase_info!("snippet {} deleted", id);
            notify(state, DELETE_SUCCEEDED, NotificationKind::Success);
            vec![refresh(state)]
        }
        DeleteOutcome::Failed => {
            smartbase_warn!("delete of {} failed", id);
            state.items.delete_failed(id);
            notify(state, DELETE_FAILED, NotificationKind::Error);
            Vec::new()
        }
    }
}
