mod subscriber_email;
mod subscription_outcome;

pub use subscriber_email::SubscriberEmail;
pub use subscription_outcome::SubscriptionOutcome;
