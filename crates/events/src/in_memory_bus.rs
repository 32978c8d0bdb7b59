//! In-memory event bus.

use std::sync::{Mutex, mpsc};

use thiserror::Error;

use crate::bus::{EventBus, Subscription};

#[derive(Debug, Error)]
pub enum InMemoryBusError {
    /// Publish failed due to internal lock poisoning.
    #[error("event bus lock poisoned")]
    Poisoned,
}

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Fan-out by cloning each message once per live subscriber
/// - Subscribers whose receiving end was dropped are pruned on publish
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    subscribers: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subscribers still registered (dead ones are pruned lazily).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|subs| subs.len()).unwrap_or(0)
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut subs = self.subscribers.lock().map_err(|_| InMemoryBusError::Poisoned)?;

        let before = subs.len();
        subs.retain(|tx| tx.send(message.clone()).is_ok());
        if subs.len() < before {
            tracing::debug!(dropped = before - subs.len(), "pruned closed subscriptions");
        }

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        // A poisoned lock still yields a subscription; it just never receives.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_receives_every_message_in_order() {
        let bus = InMemoryEventBus::new();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.publish(1u32).unwrap();
        bus.publish(2u32).unwrap();

        assert_eq!(first.drain(), vec![1, 2]);
        assert_eq!(second.drain(), vec![1, 2]);
    }

    #[test]
    fn late_subscribers_do_not_see_earlier_messages() {
        let bus = InMemoryEventBus::new();
        bus.publish("early").unwrap();
        let late = bus.subscribe();
        bus.publish("late").unwrap();

        assert_eq!(late.drain(), vec!["late"]);
    }

    #[test]
    fn dropped_subscriptions_are_pruned_on_publish() {
        let bus = InMemoryEventBus::new();
        let kept = bus.subscribe();
        let dropped = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        drop(dropped);
        bus.publish(7u8).unwrap();

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.try_recv().unwrap(), 7);
    }

    #[test]
    fn drain_on_an_idle_subscription_is_empty() {
        let bus: InMemoryEventBus<u8> = InMemoryEventBus::new();
        let sub = bus.subscribe();
        assert!(sub.drain().is_empty());
        assert!(sub.try_recv().is_err());
    }

    #[test]
    fn publish_reports_a_poisoned_lock() {
        let bus = std::sync::Arc::new(InMemoryEventBus::<u8>::new());
        let holder = bus.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.subscribers.lock().unwrap();
            panic!("poison the subscriber list");
        })
        .join();

        let err = bus.publish(1).unwrap_err();
        assert!(matches!(err, InMemoryBusError::Poisoned));
        assert_eq!(err.to_string(), "event bus lock poisoned");
    }
}
