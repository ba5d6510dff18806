pub mod content;
pub mod render;
pub mod sender;

pub use sender::{CampaignReport, run_campaign};
