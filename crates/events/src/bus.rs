//! Publish/subscribe abstraction for committed state changes.
//!
//! The bus is the explicit replacement for implicit UI reactivity: whoever owns
//! a piece of state publishes after each commit, and every subscriber receives
//! its own copy of each message.
//!
//! ## Delivery
//!
//! - **Broadcast**: each live subscription receives every message published
//!   after it subscribed (no replay of earlier messages)
//! - **Ordered per publisher**: a single publisher's messages arrive in
//!   publish order
//! - **No persistence**: the bus is for distribution only; durable state lives
//!   in the owner's storage adapter

use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvError, RecvTimeoutError, TryRecvError};
use std::time::Duration;

/// A subscription to a message stream.
///
/// ## Usage Pattern
///
/// ```ignore
/// let subscription = store.subscribe();
///
/// // after the user did something:
/// if let Some(latest) = subscription.drain().pop() {
///     render(&latest.state);
/// }
/// ```
///
/// Subscriptions are designed for single-threaded consumption. Dropping the
/// subscription unsubscribes it; the bus prunes it on the next publish.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Take every message that is currently queued, oldest first.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic publish/subscribe bus.
///
/// `publish()` can fail (e.g. internal lock poisoning). Publishers decide
/// whether that matters; a state store typically logs and carries on, since
/// the committed state is already authoritative.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
