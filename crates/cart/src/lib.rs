//! Shopping-cart state store.
//!
//! The cart is a single owned [`CartStore`]: a pure reducer over
//! [`CartAction`]s, derived totals recomputed after every transition, a
//! subscription channel for views, and a one-way mirror of the line list into a
//! key-value [`CartStorage`].

pub mod action;
pub mod error;
pub mod event;
pub mod line;
pub mod notify;
pub mod snapshot;
pub mod state;
pub mod storage;
pub mod store;

pub use action::CartAction;
pub use error::PersistenceError;
pub use event::{CartActionKind, CartChanged};
pub use line::CartLine;
pub use notify::{Notice, NoticeLevel, Notifier, NoopNotifier, RecordingNotifier, TracingNotifier};
pub use state::CartState;
pub use storage::{CartStorage, FileStorage, MemoryStorage};
pub use store::{CART_STORAGE_KEY, CartStore};
