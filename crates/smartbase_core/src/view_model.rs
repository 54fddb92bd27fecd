use crate::{ItemPhase, NotificationKind, PanelPhase, SnippetId, TagAccent, TagFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub tags: Vec<TagButtonView>,
    pub search: String,
    /// The latest issued query is still pending.
    pub fetching: bool,
    pub status_line: String,
    pub cards: Vec<SnippetCardView>,
    pub panel: PanelPhase,
    pub form: CreateFormView,
    pub notification: Option<NotificationView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagButtonView {
    pub filter: TagFilter,
    pub label: String,
    pub accent: TagAccent,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetCardView {
    pub id: SnippetId,
    /// Position in server order, used for staggered entry.
    pub index: usize,
    pub content: String,
    pub tag_label: String,
    pub accent: TagAccent,
    pub created_at: String,
    pub phase: ItemPhase,
    /// Working copy while editing or saving.
    pub draft: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFormView {
    pub draft: String,
    pub char_count: usize,
    pub char_warn: bool,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub message: String,
    pub kind: NotificationKind,
}
