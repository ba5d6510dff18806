/// Result of running a subscribe or unsubscribe request through the store.
///
/// A subscriber record is never deleted; unsubscribing flips the `subscribed`
/// flag so that a later re-subscribe reuses the same row. Every transition is
/// idempotent, so each variant maps to exactly one confirmation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    /// No record existed for the email; a new one was created.
    NewSubscription,
    /// A record already existed and is now (again) subscribed.
    Resubscribed,
    /// An existing record was flipped to unsubscribed.
    Unsubscribed,
    /// Unsubscribe for an email the store has never seen; nothing was written.
    NotSubscribed,
}
