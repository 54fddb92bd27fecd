use std::collections::BTreeMap;

use smartbase_logging::smartbase_debug;

use crate::{SnippetId, SnippetStore};

/// Per-snippet interaction state. Editing and saving carry the working copy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ItemState {
    #[default]
    Viewing,
    Editing {
        draft: String,
    },
    Saving {
        draft: String,
    },
    ConfirmingDelete,
    Deleting,
}

/// Data-free mirror of [`ItemState`] for the view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    Viewing,
    Editing,
    Saving,
    ConfirmingDelete,
    Deleting,
}

impl ItemState {
    pub fn phase(&self) -> ItemPhase {
        match self {
            ItemState::Viewing => ItemPhase::Viewing,
            ItemState::Editing { .. } => ItemPhase::Editing,
            ItemState::Saving { .. } => ItemPhase::Saving,
            ItemState::ConfirmingDelete => ItemPhase::ConfirmingDelete,
            ItemState::Deleting => ItemPhase::Deleting,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            ItemState::Editing { draft } | ItemState::Saving { draft } => Some(draft),
            _ => None,
        }
    }

    /// Saving and deleting are the two states with a request outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, ItemState::Saving { .. } | ItemState::Deleting)
    }
}

/// Arena of item machines keyed by snippet id. Ids without an entry are
/// `Viewing`; entries are dropped once their snippet leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemMachines {
    machines: BTreeMap<SnippetId, ItemState>,
}

impl ItemMachines {
    pub fn state(&self, id: SnippetId) -> ItemState {
        self.machines.get(&id).cloned().unwrap_or_default()
    }

    pub fn phase(&self, id: SnippetId) -> ItemPhase {
        self.machines
            .get(&id)
            .map_or(ItemPhase::Viewing, ItemState::phase)
    }

    pub fn draft(&self, id: SnippetId) -> Option<&str> {
        self.machines.get(&id).and_then(ItemState::draft)
    }

    pub fn begin_edit(&mut self, id: SnippetId, content: &str) -> bool {
        self.transition(id, "begin_edit", |state| match state {
            ItemState::Viewing => Some(ItemState::Editing {
                draft: content.to_string(),
            }),
            _ => None,
        })
    }

    pub fn set_draft(&mut self, id: SnippetId, text: String) -> bool {
        match self.machines.get_mut(&id) {
            Some(ItemState::Editing { draft }) => {
                *draft = text;
                true
            }
            _ => false,
        }
    }

    /// Cancels an edit (dropping the working copy) or a delete confirmation.
    pub fn cancel(&mut self, id: SnippetId) -> bool {
        self.transition(id, "cancel", |state| match state {
            ItemState::Editing { .. } | ItemState::ConfirmingDelete => Some(ItemState::Viewing),
            _ => None,
        })
    }

    /// Moves `Editing` to `Saving` when the working copy is non-blank.
    pub fn begin_save(&mut self, id: SnippetId) -> bool {
        self.transition(id, "begin_save", |state| match state {
            ItemState::Editing { draft } if !crate::validation::is_blank(draft) => {
                Some(ItemState::Saving {
                    draft: draft.clone(),
                })
            }
            _ => None,
        })
    }

    /// Success returns to `Viewing`; failure returns to `Editing` with the
    /// working copy intact.
    pub fn finish_save(&mut self, id: SnippetId, succeeded: bool) -> bool {
        self.transition(id, "finish_save", |state| match state {
            ItemState::Saving { .. } if succeeded => Some(ItemState::Viewing),
            ItemState::Saving { draft } => Some(ItemState::Editing {
                draft: draft.clone(),
            }),
            _ => None,
        })
    }

    pub fn request_delete(&mut self, id: SnippetId) -> bool {
        self.transition(id, "request_delete", |state| match state {
            ItemState::Viewing => Some(ItemState::ConfirmingDelete),
            _ => None,
        })
    }

    pub fn confirm_delete(&mut self, id: SnippetId) -> bool {
        self.transition(id, "confirm_delete", |state| match state {
            ItemState::ConfirmingDelete => Some(ItemState::Deleting),
            _ => None,
        })
    }

    /// A failed delete puts the item back in `Viewing`. A successful one leaves
    /// it `Deleting` until the store drops the id.
    pub fn delete_failed(&mut self, id: SnippetId) -> bool {
        self.transition(id, "delete_failed", |state| match state {
            ItemState::Deleting => Some(ItemState::Viewing),
            _ => None,
        })
    }

    /// Drops machines whose snippet is no longer in the store.
    pub fn retain_listed(&mut self, store: &SnippetStore) {
        self.machines.retain(|id, _| store.contains(*id));
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    fn transition(
        &mut self,
        id: SnippetId,
        action: &str,
        next: impl FnOnce(&ItemState) -> Option<ItemState>,
    ) -> bool {
        let current = self.machines.get(&id).cloned().unwrap_or_default();
        match next(&current) {
            Some(ItemState::Viewing) => {
                self.machines.remove(&id);
                true
            }
            Some(state) => {
                self.machines.insert(id, state);
                true
            }
            None => {
                smartbase_debug!(
                    "item {} ignored {} in phase {:?}",
                    id,
                    action,
                    current.phase()
                );
                false
            }
        }
    }
}
