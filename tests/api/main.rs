mod helpers;
mod subscriptions;
