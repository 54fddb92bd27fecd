use crate::item::ItemMachines;
use crate::notification::NotificationChannel;
use crate::panel::PanelController;
use crate::query::QueryController;
use crate::scheduler::Scheduler;
use crate::store::SnippetStore;
use crate::validation::CHAR_WARN_THRESHOLD;
use crate::view_model::{
    AppViewModel, CreateFormView, NotificationView, SnippetCardView, TagButtonView,
};
use crate::{Tag, TagFilter};

/// Creation form inside the panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct CreateForm {
    pub(crate) draft: String,
    pub(crate) submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) scheduler: Scheduler,
    pub(crate) query: QueryController,
    pub(crate) store: SnippetStore,
    pub(crate) items: ItemMachines,
    pub(crate) panel: PanelController,
    pub(crate) notifications: NotificationChannel,
    pub(crate) form: CreateForm,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &SnippetStore {
        &self.store
    }

    pub fn items(&self) -> &ItemMachines {
        &self.items
    }

    pub fn query(&self) -> &QueryController {
        &self.query
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn view(&self) -> AppViewModel {
        let active = &self.query.filter().active_tag;
        let tags = std::iter::once(TagFilter::All)
            .chain(Tag::KNOWN.into_iter().map(TagFilter::Only))
            .map(|filter| TagButtonView {
                label: filter.label().to_string(),
                accent: filter.accent(),
                active: &filter == active,
                filter,
            })
            .collect();

        let cards = self
            .store
            .items()
            .iter()
            .enumerate()
            .map(|(index, snippet)| {
                let state = self.items.state(snippet.id);
                SnippetCardView {
                    id: snippet.id,
                    index,
                    content: snippet.content.clone(),
                    tag_label: snippet.ai_tag.label().to_string(),
                    accent: snippet.ai_tag.accent(),
                    created_at: snippet.created_at.clone(),
                    phase: state.phase(),
                    draft: state.draft().map(ToOwned::to_owned),
                }
            })
            .collect();

        let fetching = self.query.is_fetching();
        let count = self.store.len();
        let status_line = if fetching {
            "Loading...".to_string()
        } else {
            format!(
                "{} snippet{} found",
                count,
                if count == 1 { "" } else { "s" }
            )
        };

        let char_count = self.form.draft.chars().count();
        AppViewModel {
            tags,
            search: self.query.filter().search_term.clone(),
            fetching,
            status_line,
            cards,
            panel: self.panel.phase(),
            form: CreateFormView {
                draft: self.form.draft.clone(),
                char_count,
                char_warn: char_count > CHAR_WARN_THRESHOLD,
                submitting: self.form.submitting,
            },
            notification: self.notifications.current().map(|note| NotificationView {
                message: note.message.clone(),
                kind: note.kind,
            }),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Drops item machines whose snippet left the store.
    pub(crate) fn reconcile_store(&mut self) {
        self.items.retain_listed(&self.store);
    }
}
