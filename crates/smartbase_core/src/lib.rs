//! SmartBase core: pure view-state machine for the snippet catalog.
//!
//! Everything here is synchronous and free of I/O. The host feeds [`Msg`]s
//! into [`update`], executes the returned [`Effect`]s against the backend and
//! reports their outcomes back as further messages.
mod effect;
mod item;
mod msg;
mod mutation;
mod notification;
mod panel;
mod query;
mod scheduler;
mod snippet;
mod state;
mod store;
mod update;
pub mod validation;
mod view_model;

pub use effect::Effect;
pub use item::{ItemMachines, ItemPhase, ItemState};
pub use msg::{DeleteOutcome, FetchOutcome, Msg, WriteOutcome};
pub use notification::{Notification, NotificationChannel, NotificationKind, NOTIFICATION_TTL_MS};
pub use panel::{PanelController, PanelPhase, PANEL_ENTER_FRAMES, PANEL_EXIT_MS};
pub use query::{Admission, FilterState, ListQuery, QueryController, RequestEpoch};
pub use scheduler::{Fired, Scheduler, TimerHandle, TimerKey};
pub use snippet::{Snippet, SnippetId, Tag, TagAccent, TagFilter};
pub use state::AppState;
pub use store::SnippetStore;
pub use update::update;
pub use view_model::{
    AppViewModel, CreateFormView, NotificationView, SnippetCardView, TagButtonView,
};
