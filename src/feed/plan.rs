//! Write-time plan gating
//!
//! Free-tier restrictions are applied when the owner saves a list or a
//! config, never at display time. Oversized lists are rejected outright;
//! disallowed fields are degraded in place.
use super::models::{DisplayConfig, NotificationItem, Plan, Theme};

/// Maximum notifications a free-plan website may store
pub const FREE_MAX_NOTIFICATIONS: usize = 5;

/// Apply free-tier limits to a notification list before storing it.
/// Returns an error message when the list cannot be accepted at all.
pub fn gate_notifications(
    plan: Plan,
    items: &mut Vec<NotificationItem>,
) -> Result<(), String> {
    if plan == Plan::Pro {
        return Ok(());
    }

    if items.len() > FREE_MAX_NOTIFICATIONS {
        return Err(format!(
            "Free plan is limited to {} notifications, got {}",
            FREE_MAX_NOTIFICATIONS,
            items.len()
        ));
    }

    // Click-through URLs are a paid feature
    for item in items.iter_mut() {
        item.url = None;
    }

    Ok(())
}

/// Apply free-tier limits to a display config before storing it
pub fn gate_config(plan: Plan, config: &mut DisplayConfig) {
    if plan == Plan::Free {
        config.theme = Theme::Ios;
    }
}
