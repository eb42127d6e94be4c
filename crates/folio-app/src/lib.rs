//! # folio-app - Application State and Update Loop
//!
//! The Elm-architecture layer of folio: [`AppState`] is the model,
//! [`Message`] the event vocabulary, and [`update`] the single transition
//! function. Side effects (persisting the theme preference) are returned
//! as [`UpdateAction`]s for the runner to execute, so everything in this
//! crate is synchronous and testable.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod layout;
pub mod message;
pub mod scroll;
pub mod state;

pub use config::{default_settings_path, load_settings, save_settings, Settings};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use layout::{PageLayout, PageRect, Section, HEADER_ROWS, TITLE_H};
pub use message::{Message, PointerInput, PointerKind};
pub use scroll::PageScroll;
pub use state::{initial_state, AppState, TiltTarget, TICK_MS};
