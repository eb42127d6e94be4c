//! Message handlers (TEA pattern)

mod keys;
mod pointer;
mod update;

pub use keys::handle_key;
pub use pointer::handle_pointer;
pub use update::update;

use folio_core::ThemeMode;

/// Side effect requested by an update; executed by the runner so the
/// update function itself stays pure and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// Persist the newly toggled theme preference.
    PersistTheme(ThemeMode),
}

/// Result of processing one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateResult {
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
        }
    }
}
