use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts about a committed transition)
/// - **versioned** (schema evolution)
/// - cheap enough to clone once per subscriber
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "cart.item_added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the transition was committed.
    fn occurred_at(&self) -> DateTime<Utc>;
}
