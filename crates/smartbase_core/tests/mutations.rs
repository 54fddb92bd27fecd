use std::sync::Once;

use pretty_assertions::assert_eq;
use smartbase_core::{
    update, AppState, DeleteOutcome, Effect, FetchOutcome, ItemPhase, ListQuery, Msg,
    NotificationKind, PanelPhase, Snippet, Tag, TagFilter, WriteOutcome,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(smartbase_logging::initialize_for_tests);
}

fn snippet(id: u64, content: &str, tag: Tag) -> Snippet {
    Snippet {
        id,
        content: content.to_string(),
        ai_tag: tag,
        created_at: "2026-10-19T09:00:00Z".to_string(),
    }
}

/// State with one accepted list response containing `items`.
fn loaded(items: Vec<Snippet>) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Started);
    let epoch = match effects.as_slice() {
        [Effect::FetchSnippets { epoch, .. }] => *epoch,
        other => panic!("unexpected effects {other:?}"),
    };
    let (mut state, _) = update(
        state,
        Msg::SnippetsLoaded {
            epoch,
            outcome: FetchOutcome::Loaded(items),
        },
    );
    state.consume_dirty();
    state
}

fn notification(state: &AppState) -> (NotificationKind, String) {
    let note = state.view().notification.expect("notification");
    (note.kind, note.message)
}

fn is_fetch(effect: &Effect) -> bool {
    matches!(effect, Effect::FetchSnippets { .. })
}

#[test]
fn create_rejects_over_length_without_request() {
    init_logging();
    let state = loaded(vec![snippet(1, "existing", Tag::General)]);
    let before = state.store().clone();

    let (state, _) = update(state, Msg::DraftChanged("x".repeat(501)));
    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(state.store(), &before);
    assert_eq!(
        notification(&state),
        (
            NotificationKind::Error,
            "Content too long (max 500 chars).".to_string()
        )
    );
    let form = state.view().form;
    assert_eq!(form.char_count, 501);
    assert!(form.char_warn);
    assert!(!form.submitting);
}

#[test]
fn create_rejects_blank_without_request() {
    init_logging();
    for draft in ["", "   ", "\n\t"] {
        let (state, _) = update(AppState::new(), Msg::DraftChanged(draft.to_string()));
        let (state, effects) = update(state, Msg::SubmitClicked);
        assert!(effects.is_empty());
        assert_eq!(
            notification(&state),
            (
                NotificationKind::Error,
                "Please enter some content.".to_string()
            )
        );
    }
}

#[test]
fn create_success_notifies_clears_closes_and_refreshes() {
    init_logging();
    let state = loaded(Vec::new());
    let (state, _) = update(state, Msg::PanelToggled);
    let (state, _) = update(state, Msg::Tick { now_ms: 16 });
    let (state, _) = update(state, Msg::Tick { now_ms: 32 });
    assert_eq!(state.view().panel, PanelPhase::Visible);

    let (state, _) = update(state, Msg::DraftChanged("  bug in login ".to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(
        effects,
        vec![Effect::CreateSnippet {
            content: "bug in login".to_string()
        }]
    );
    assert!(state.view().form.submitting);

    // A second click while the first is in flight does nothing.
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());

    let created = snippet(7, "bug in login", Tag::Urgent);
    let (state, effects) = update(state, Msg::CreateFinished(WriteOutcome::Saved(created)));

    assert_eq!(effects.len(), 1);
    assert!(is_fetch(&effects[0]));
    let (kind, message) = notification(&state);
    assert_eq!(kind, NotificationKind::Success);
    assert!(message.contains("Urgent"), "{message}");
    let view = state.view();
    assert_eq!(view.form.draft, "");
    assert!(!view.form.submitting);
    assert_eq!(view.panel, PanelPhase::Exiting);
    assert_eq!(view.cards.len(), 1);
    assert!(view.fetching);
}

#[test]
fn create_hint_skips_snippets_outside_the_filter() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::TagSelected(TagFilter::Only(Tag::Technical)),
    );
    let (state, _) = update(state, Msg::DraftChanged("call the vendor".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::CreateFinished(WriteOutcome::Saved(snippet(3, "call the vendor", Tag::General))),
    );

    assert!(state.store().is_empty());
}

#[test]
fn create_server_rejection_uses_server_message() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::DraftChanged("draft".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, effects) = update(
        state,
        Msg::CreateFinished(WriteOutcome::Rejected {
            message: Some("Content cannot be blank or whitespace only.".to_string()),
        }),
    );

    assert!(effects.is_empty());
    assert_eq!(
        notification(&state),
        (
            NotificationKind::Error,
            "Content cannot be blank or whitespace only.".to_string()
        )
    );
    assert_eq!(state.view().form.draft, "draft");
    assert!(!state.view().form.submitting);
}

#[test]
fn create_failures_fall_back_to_generic_messages() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::DraftChanged("draft".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::CreateFinished(WriteOutcome::Rejected { message: None }),
    );
    assert_eq!(notification(&state).1, "Upload failed.");

    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(state, Msg::CreateFinished(WriteOutcome::TransportFailed));
    assert_eq!(notification(&state).1, "Server error. Is the backend running?");
    assert_eq!(state.view().form.draft, "draft");
}

#[test]
fn update_success_returns_to_viewing_and_refreshes() {
    init_logging();
    let state = loaded(vec![snippet(1, "old text", Tag::General)]);
    let (state, _) = update(state, Msg::EditClicked(1));
    let (state, _) = update(
        state,
        Msg::EditDraftChanged {
            id: 1,
            text: "server crash on deploy".to_string(),
        },
    );
    let (state, effects) = update(state, Msg::SaveClicked(1));
    assert_eq!(
        effects,
        vec![Effect::UpdateSnippet {
            id: 1,
            content: "server crash on deploy".to_string()
        }]
    );
    assert_eq!(state.items().phase(1), ItemPhase::Saving);

    let (state, effects) = update(
        state,
        Msg::UpdateFinished {
            id: 1,
            outcome: WriteOutcome::Saved(snippet(1, "server crash on deploy", Tag::Technical)),
        },
    );

    assert!(effects.iter().all(is_fetch));
    assert_eq!(effects.len(), 1);
    assert_eq!(state.items().phase(1), ItemPhase::Viewing);
    assert_eq!(
        notification(&state),
        (
            NotificationKind::Success,
            "Updated & re-tagged as \"Technical\"!".to_string()
        )
    );
    assert_eq!(state.store().items()[0].ai_tag, Tag::Technical);
}

#[test]
fn update_transport_failure_keeps_draft_in_editing() {
    init_logging();
    let state = loaded(vec![snippet(1, "old text", Tag::General)]);
    let (state, _) = update(state, Msg::EditClicked(1));
    let (state, _) = update(
        state,
        Msg::EditDraftChanged {
            id: 1,
            text: "draft".to_string(),
        },
    );
    let (state, _) = update(state, Msg::SaveClicked(1));
    let (state, effects) = update(
        state,
        Msg::UpdateFinished {
            id: 1,
            outcome: WriteOutcome::TransportFailed,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.items().phase(1), ItemPhase::Editing);
    assert_eq!(state.items().draft(1), Some("draft"));
    assert_eq!(notification(&state).1, "Server error.");
    assert_eq!(state.store().items()[0].content, "old text");
}

#[test]
fn update_rejection_falls_back_to_generic_message() {
    init_logging();
    let state = loaded(vec![snippet(1, "old", Tag::General)]);
    let (state, _) = update(state, Msg::EditClicked(1));
    let (state, _) = update(state, Msg::SaveClicked(1));
    let (state, _) = update(
        state,
        Msg::UpdateFinished {
            id: 1,
            outcome: WriteOutcome::Rejected { message: None },
        },
    );

    assert_eq!(state.items().phase(1), ItemPhase::Editing);
    assert_eq!(notification(&state).1, "Failed to update snippet.");
}

#[test]
fn update_blank_draft_is_a_noop() {
    init_logging();
    let state = loaded(vec![snippet(1, "old", Tag::General)]);
    let (state, _) = update(state, Msg::EditClicked(1));
    let (mut state, _) = update(
        state,
        Msg::EditDraftChanged {
            id: 1,
            text: "   ".to_string(),
        },
    );
    state.consume_dirty();

    let (mut state, effects) = update(state, Msg::SaveClicked(1));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.items().phase(1), ItemPhase::Editing);
    assert!(state.view().notification.is_none());
}

#[test]
fn update_over_length_stays_editing_with_error() {
    init_logging();
    let state = loaded(vec![snippet(1, "old", Tag::General)]);
    let (state, _) = update(state, Msg::EditClicked(1));
    let (state, _) = update(
        state,
        Msg::EditDraftChanged {
            id: 1,
            text: "y".repeat(600),
        },
    );
    let (state, effects) = update(state, Msg::SaveClicked(1));

    assert!(effects.is_empty());
    assert_eq!(state.items().phase(1), ItemPhase::Editing);
    assert_eq!(notification(&state).0, NotificationKind::Error);
}

#[test]
fn update_hint_drops_snippet_that_left_the_filter() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::TagSelected(TagFilter::Only(Tag::General)),
    );
    let epoch = match effects.as_slice() {
        [Effect::FetchSnippets { epoch, query }] => {
            assert_eq!(
                query,
                &ListQuery {
                    tag: Some(Tag::General),
                    search: None
                }
            );
            *epoch
        }
        other => panic!("unexpected effects {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::SnippetsLoaded {
            epoch,
            outcome: FetchOutcome::Loaded(vec![snippet(1, "note", Tag::General)]),
        },
    );
    let (state, _) = update(state, Msg::EditClicked(1));
    let (state, _) = update(
        state,
        Msg::EditDraftChanged {
            id: 1,
            text: "urgent outage".to_string(),
        },
    );
    let (state, _) = update(state, Msg::SaveClicked(1));
    let (state, _) = update(
        state,
        Msg::UpdateFinished {
            id: 1,
            outcome: WriteOutcome::Saved(snippet(1, "urgent outage", Tag::Urgent)),
        },
    );

    assert!(state.store().is_empty());
    assert!(state.items().is_empty());
}

#[test]
fn delete_success_keeps_marker_until_refresh_drops_the_id() {
    init_logging();
    let state = loaded(vec![
        snippet(1, "first", Tag::General),
        snippet(2, "second", Tag::General),
    ]);
    let (state, _) = update(state, Msg::DeleteClicked(1));
    let (state, effects) = update(state, Msg::DeleteConfirmed(1));
    assert_eq!(effects, vec![Effect::DeleteSnippet { id: 1 }]);
    assert_eq!(state.items().phase(1), ItemPhase::Deleting);

    let (state, effects) = update(
        state,
        Msg::DeleteFinished {
            id: 1,
            outcome: DeleteOutcome::Deleted,
        },
    );
    let epoch = match effects.as_slice() {
        [Effect::FetchSnippets { epoch, .. }] => *epoch,
        other => panic!("unexpected effects {other:?}"),
    };
    assert_eq!(state.items().phase(1), ItemPhase::Deleting);
    assert_eq!(state.store().len(), 2);
    assert_eq!(notification(&state).1, "Snippet deleted successfully.");

    let (state, _) = update(
        state,
        Msg::SnippetsLoaded {
            epoch,
            outcome: FetchOutcome::Loaded(vec![snippet(2, "second", Tag::General)]),
        },
    );
    assert!(!state.store().contains(1));
    assert!(state.items().is_empty());
}

#[test]
fn delete_failure_returns_to_viewing_and_keeps_item() {
    init_logging();
    let state = loaded(vec![snippet(1, "keep", Tag::General)]);
    let (state, _) = update(state, Msg::DeleteClicked(1));
    let (state, _) = update(state, Msg::DeleteConfirmed(1));
    let (state, effects) = update(
        state,
        Msg::DeleteFinished {
            id: 1,
            outcome: DeleteOutcome::Failed,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.items().phase(1), ItemPhase::Viewing);
    assert!(state.store().contains(1));
    assert_eq!(
        notification(&state),
        (
            NotificationKind::Error,
            "Failed to delete snippet.".to_string()
        )
    );
}
