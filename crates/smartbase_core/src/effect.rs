use crate::{ListQuery, RequestEpoch, SnippetId};

/// Backend calls requested by [`crate::update`]. The host executes them and
/// feeds the outcome back as a [`crate::Msg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchSnippets {
        epoch: RequestEpoch,
        query: ListQuery,
    },
    CreateSnippet {
        content: String,
    },
    UpdateSnippet {
        id: SnippetId,
        content: String,
    },
    DeleteSnippet {
        id: SnippetId,
    },
}
