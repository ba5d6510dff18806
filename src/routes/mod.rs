mod health_check;
mod helpers;
mod home;
mod subscriptions;

pub use health_check::health_check;
pub use home::home;
pub use subscriptions::{subscribe, unsubscribe};
