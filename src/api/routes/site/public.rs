//! Public types for the site admin API
use serde::Deserialize;

use crate::feed::models::{NotificationItem, Plan};

fn default_plan() -> Plan {
    Plan::Free
}

#[derive(Deserialize)]
pub struct CreateSiteRequest {
    pub name: String,
    #[serde(default = "default_plan")]
    pub plan: Plan,
}

#[derive(Deserialize)]
pub struct ReplaceNotificationsRequest {
    pub notifications: Vec<NotificationItem>,
}
