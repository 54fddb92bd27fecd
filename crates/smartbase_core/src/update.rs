use smartbase_logging::{smartbase_debug, smartbase_warn};

use crate::mutation;
use crate::notification::NotificationKind;
use crate::query::Admission;
use crate::scheduler::TimerKey;
use crate::{AppState, Effect, FetchOutcome, ListQuery, Msg, RequestEpoch};

const FETCH_FAILED: &str = "Failed to fetch snippets.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started | Msg::RefreshClicked => {
            state.mark_dirty();
            vec![mutation::refresh(&mut state)]
        }
        Msg::Tick { now_ms } => {
            apply_tick(&mut state, now_ms);
            Vec::new()
        }
        Msg::TagSelected(tag) => {
            state.mark_dirty();
            let (epoch, query) = state.query.set_tag(tag);
            vec![fetch(epoch, query)]
        }
        Msg::SearchChanged(text) => {
            state.mark_dirty();
            let (epoch, query) = state.query.set_search(text);
            vec![fetch(epoch, query)]
        }
        Msg::SearchCleared => {
            state.mark_dirty();
            let (epoch, query) = state.query.set_search(String::new());
            vec![fetch(epoch, query)]
        }
        Msg::PanelToggled => {
            if state.panel.toggle(&mut state.scheduler) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DraftChanged(text) => {
            state.form.draft = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::SubmitClicked => mutation::submit_create(&mut state),
        Msg::EditClicked(id) => {
            if let Some(snippet) = state.store.get(id) {
                let content = snippet.content.clone();
                if state.items.begin_edit(id, &content) {
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
        Msg::EditDraftChanged { id, text } => {
            if state.items.set_draft(id, text) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SaveClicked(id) => mutation::submit_update(&mut state, id),
        Msg::CancelClicked(id) => {
            if state.items.cancel(id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DeleteClicked(id) => {
            if state.store.contains(id) && state.items.request_delete(id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DeleteConfirmed(id) => mutation::confirm_delete(&mut state, id),
        Msg::NotificationDismissed => {
            if state.notifications.dismiss(&mut state.scheduler) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SnippetsLoaded { epoch, outcome } => {
            apply_list_response(&mut state, epoch, outcome);
            Vec::new()
        }
        Msg::CreateFinished(outcome) => mutation::create_finished(&mut state, outcome),
        Msg::UpdateFinished { id, outcome } => mutation::update_finished(&mut state, id, outcome),
        Msg::DeleteFinished { id, outcome } => mutation::delete_finished(&mut state, id, outcome),
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn fetch(epoch: RequestEpoch, query: ListQuery) -> Effect {
    Effect::FetchSnippets { epoch, query }
}

fn apply_tick(state: &mut AppState, now_ms: u64) {
    for fired in state.scheduler.advance(now_ms) {
        let changed = match fired.key {
            TimerKey::NotificationExpiry => state.notifications.on_expired(fired.handle),
            TimerKey::PanelFrame => state.panel.on_frame(&mut state.scheduler, fired.handle),
            TimerKey::PanelExit => state.panel.on_exit_elapsed(fired.handle),
        };
        if changed {
            state.mark_dirty();
        }
    }
}

fn apply_list_response(state: &mut AppState, epoch: RequestEpoch, outcome: FetchOutcome) {
    if state.query.admit(epoch) == Admission::Stale {
        smartbase_debug!(
            "discarding stale list response epoch={} latest={}",
            epoch,
            state.query.latest_epoch()
        );
        return;
    }
    state.mark_dirty();
    match outcome {
        FetchOutcome::Loaded(snippets) => {
            smartbase_debug!("epoch {} accepted with {} snippets", epoch, snippets.len());
            state.store.replace_all(snippets);
        }
        FetchOutcome::Malformed => {
            smartbase_warn!("epoch {} returned a malformed list; showing nothing", epoch);
            state.store.replace_all(Vec::new());
        }
        FetchOutcome::TransportFailed => {
            smartbase_warn!("epoch {} failed; keeping current list", epoch);
            state
                .notifications
                .post(&mut state.scheduler, FETCH_FAILED, NotificationKind::Error);
        }
    }
    state.reconcile_store();
}
