//! Shared types for the notification feed
//!
//! These are the wire types served by the embed endpoint and consumed by
//! the display engine. Field names are camelCase on the wire. Every
//! `DisplayConfig` field has a serde fallback so a partial or missing
//! config resolves to the documented defaults.
use serde::{Deserialize, Serialize};

// Defaults

fn default_start_delay() -> u64 {
    500
}

fn default_display_duration() -> u64 {
    30_000
}

fn default_cycle_duration() -> u64 {
    3_000
}

fn default_theme() -> Theme {
    Theme::Ios
}

fn default_max_visible() -> u32 {
    5
}

/// A single notification record, in display order within its website's
/// list. `id` is stable for the session and used only for lookup and
/// deletion, never for ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationItem {
    /// Assigned by the server when omitted at write time
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "body")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Free-form display string ("now", "2 hours ago"). Never parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Accepted and stored for compatibility with existing records. The
    /// scheduler does not read it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
}

impl NotificationItem {
    /// The click-through target, if this item is interactive. An empty
    /// string counts as absent.
    pub fn click_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

/// Visual style selector. Purely cosmetic, carries no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Ios,
    Modern,
    Dark,
    Minimal,
    Glass,
    Colorful,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Ios => "ios",
            Theme::Modern => "modern",
            Theme::Dark => "dark",
            Theme::Minimal => "minimal",
            Theme::Glass => "glass",
            Theme::Colorful => "colorful",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "ios" => Some(Theme::Ios),
            "modern" => Some(Theme::Modern),
            "dark" => Some(Theme::Dark),
            "minimal" => Some(Theme::Minimal),
            "glass" => Some(Theme::Glass),
            "colorful" => Some(Theme::Colorful),
            _ => None,
        }
    }
}

/// Display configuration for a website's widget. Immutable for the
/// duration of a page session; the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Milliseconds before the first notification appears
    #[serde(default = "default_start_delay")]
    pub start_delay: u64,
    /// Milliseconds a notification stays visible before its exit begins
    #[serde(default = "default_display_duration")]
    pub display_duration: u64,
    /// Milliseconds between the start of one display and the next
    #[serde(default = "default_cycle_duration")]
    pub cycle_duration: u64,
    /// Restart from the first item after exhausting the list
    #[serde(default, rename = "loop")]
    pub loop_enabled: bool,
    #[serde(default)]
    pub show_close_button: bool,
    #[serde(default = "default_theme")]
    pub theme: Theme,
    /// Soft cap on concurrently stacked notifications. Advisory styling
    /// guidance only; the engine does not enforce it.
    #[serde(default = "default_max_visible")]
    pub max_visible_notifications: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            start_delay: default_start_delay(),
            display_duration: default_display_duration(),
            cycle_duration: default_cycle_duration(),
            loop_enabled: false,
            show_close_button: false,
            theme: default_theme(),
            max_visible_notifications: default_max_visible(),
        }
    }
}

/// Response shape of the embed feed endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub notifications: Vec<NotificationItem>,
    pub config: DisplayConfig,
}

/// Account tier for a website. Gating happens at write time; the display
/// engine trusts whatever it is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Pro,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
        }
    }

    pub fn parse(value: &str) -> Option<Plan> {
        match value {
            "free" => Some(Plan::Free),
            "pro" => Some(Plan::Pro),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Website {
    pub id: String,
    pub name: String,
    pub plan: Plan,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_for_missing_fields() {
        // Only part of the config present; the rest falls back
        let json = r#"{"startDelay": 1000, "displayDuration": 5000}"#;
        let config: DisplayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.start_delay, 1000);
        assert_eq!(config.display_duration, 5000);
        assert_eq!(config.cycle_duration, 3_000);
        assert!(!config.loop_enabled);
        assert!(!config.show_close_button);
        assert_eq!(config.theme, Theme::Ios);
        assert_eq!(config.max_visible_notifications, 5);
    }

    #[test]
    fn test_config_defaults_for_empty_object() {
        let config: DisplayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.start_delay, 500);
        assert_eq!(config.display_duration, 30_000);
        assert_eq!(config.cycle_duration, 3_000);
        assert!(!config.loop_enabled);
        assert_eq!(config.theme, Theme::Ios);
    }

    #[test]
    fn test_config_wire_field_names() {
        let config = DisplayConfig {
            loop_enabled: true,
            show_close_button: true,
            ..DisplayConfig::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["startDelay"], 500);
        assert_eq!(json["displayDuration"], 30_000);
        assert_eq!(json["cycleDuration"], 3_000);
        assert_eq!(json["loop"], true);
        assert_eq!(json["showCloseButton"], true);
        assert_eq!(json["theme"], "ios");
        assert_eq!(json["maxVisibleNotifications"], 5);
    }

    #[test]
    fn test_item_accepts_body_alias() {
        let json = r#"{"id": "1", "title": "Ana bought Pro", "body": "2 minutes ago"}"#;
        let item: NotificationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.message, "2 minutes ago");
    }

    #[test]
    fn test_item_optional_fields_default_to_absent() {
        let json = r#"{"id": "1", "title": "Sale"}"#;
        let item: NotificationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.message, "");
        assert!(item.image.is_none());
        assert!(item.url.is_none());
        assert!(item.timestamp.is_none());
        assert!(item.delay.is_none());
    }

    #[test]
    fn test_click_url_treats_empty_as_absent() {
        let mut item: NotificationItem =
            serde_json::from_str(r#"{"id": "1", "title": "Sale", "url": ""}"#).unwrap();
        assert!(item.click_url().is_none());

        item.url = Some("https://example.com/pro".to_string());
        assert_eq!(item.click_url(), Some("https://example.com/pro"));
    }

    #[test]
    fn test_theme_round_trip() {
        for theme in [
            Theme::Ios,
            Theme::Modern,
            Theme::Dark,
            Theme::Minimal,
            Theme::Glass,
            Theme::Colorful,
        ] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("neon"), None);
    }
}
