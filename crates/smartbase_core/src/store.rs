use crate::{Snippet, SnippetId};

/// Ordered snippet list as returned by the last accepted query response.
///
/// `remove` and `upsert` are local hints only; the next accepted response
/// replaces everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnippetStore {
    items: Vec<Snippet>,
}

impl SnippetStore {
    pub fn replace_all(&mut self, items: Vec<Snippet>) {
        self.items = items;
    }

    pub fn remove(&mut self, id: SnippetId) -> Option<Snippet> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Replaces the snippet in place, or inserts it at the front (newest first)
    /// when the id is not present.
    pub fn upsert(&mut self, snippet: Snippet) {
        match self.items.iter_mut().find(|item| item.id == snippet.id) {
            Some(existing) => *existing = snippet,
            None => self.items.insert(0, snippet),
        }
    }

    pub fn get(&self, id: SnippetId) -> Option<&Snippet> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: SnippetId) -> bool {
        self.get(id).is_some()
    }

    pub fn items(&self) -> &[Snippet] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
