//! State-change events and their in-process publish/subscribe plumbing.
//!
//! Stores publish an event after every committed transition; views hold a
//! [`Subscription`] and re-render when something arrives.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
