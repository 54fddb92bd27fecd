use crate::{Snippet, Tag, TagFilter};

pub type RequestEpoch = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub active_tag: TagFilter,
    pub search_term: String,
}

/// Canonical list query derived from [`FilterState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub tag: Option<Tag>,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn from_filter(filter: &FilterState) -> Self {
        let tag = match &filter.active_tag {
            TagFilter::All => None,
            TagFilter::Only(tag) => Some(tag.clone()),
        };
        let search = filter.search_term.trim();
        Self {
            tag,
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    /// Mirrors the backend filter: exact tag match and case-insensitive
    /// substring search on content.
    pub fn matches(&self, snippet: &Snippet) -> bool {
        if let Some(tag) = &self.tag {
            if &snippet.ai_tag != tag {
                return false;
            }
        }
        match &self.search {
            Some(needle) => snippet
                .content
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }
}

/// What to do with a response for a given epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accept,
    Stale,
}

/// Owns filter state and the request epoch counter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryController {
    filter: FilterState,
    latest_epoch: RequestEpoch,
    fetching: bool,
}

impl QueryController {
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn query(&self) -> ListQuery {
        ListQuery::from_filter(&self.filter)
    }

    pub fn latest_epoch(&self) -> RequestEpoch {
        self.latest_epoch
    }

    /// True while the most recently issued query has not been answered.
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn set_tag(&mut self, tag: TagFilter) -> (RequestEpoch, ListQuery) {
        self.filter.active_tag = tag;
        self.issue()
    }

    pub fn set_search(&mut self, text: String) -> (RequestEpoch, ListQuery) {
        self.filter.search_term = text;
        self.issue()
    }

    pub fn refresh(&mut self) -> (RequestEpoch, ListQuery) {
        self.issue()
    }

    /// Decides whether a response for `epoch` may touch the store. Accepting
    /// the latest epoch also ends the pending state.
    pub fn admit(&mut self, epoch: RequestEpoch) -> Admission {
        if epoch == self.latest_epoch {
            self.fetching = false;
            Admission::Accept
        } else {
            Admission::Stale
        }
    }

    fn issue(&mut self) -> (RequestEpoch, ListQuery) {
        self.latest_epoch += 1;
        self.fetching = true;
        (self.latest_epoch, self.query())
    }
}
