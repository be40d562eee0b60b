//! Database queries for the notification store
use anyhow::{Error, Result};
use tokio_rusqlite::Connection;

use super::models::{DisplayConfig, NotificationItem, Plan, Theme, Website};

pub async fn find_website(db: &Connection, id: &str) -> Result<Option<Website>, Error> {
    let id = id.to_string();
    let website = db
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, plan, created_at FROM website WHERE id = ? LIMIT 1",
            )?;
            let result = stmt
                .query_map([id], |i| {
                    Ok(Website {
                        id: i.get(0)?,
                        name: i.get(1)?,
                        plan: Plan::parse(&i.get::<_, String>(2)?).unwrap_or(Plan::Free),
                        created_at: i.get(3)?,
                    })
                })?
                .filter_map(Result::ok)
                .next();
            Ok(result)
        })
        .await?;
    Ok(website)
}

pub async fn insert_website(db: &Connection, website: Website) -> Result<(), Error> {
    db.call(move |conn| {
        let mut stmt = conn
            .prepare("INSERT INTO website(id, name, plan, created_at) VALUES (?, ?, ?, ?)")?;
        stmt.execute(tokio_rusqlite::params![
            website.id,
            website.name,
            website.plan.as_str(),
            website.created_at,
        ])?;
        Ok(())
    })
    .await?;
    Ok(())
}

/// Fetch a website's notifications in display order
pub async fn find_notifications(
    db: &Connection,
    website_id: &str,
) -> Result<Vec<NotificationItem>, Error> {
    let website_id = website_id.to_string();
    let items = db
        .call(move |conn| {
            let mut stmt = conn.prepare(
                r"
              SELECT
                id,
                title,
                message,
                image,
                url,
                timestamp,
                delay
              FROM notification
              WHERE website_id = ?
              ORDER BY position ASC
            ",
            )?;
            let rows = stmt
                .query_map([website_id], |i| {
                    Ok(NotificationItem {
                        id: i.get(0)?,
                        title: i.get(1)?,
                        message: i.get(2)?,
                        image: i.get(3)?,
                        url: i.get(4)?,
                        timestamp: i.get(5)?,
                        delay: i.get(6)?,
                    })
                })?
                .filter_map(Result::ok)
                .collect::<Vec<NotificationItem>>();
            Ok(rows)
        })
        .await?;
    Ok(items)
}

/// Replace a website's entire notification list. Position follows the
/// order of the given items.
pub async fn replace_notifications(
    db: &Connection,
    website_id: &str,
    items: Vec<NotificationItem>,
) -> Result<(), Error> {
    let website_id = website_id.to_string();
    db.call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
            "DELETE FROM notification WHERE website_id = ?",
            [&website_id],
        )?;
        {
            let mut stmt = tx.prepare(
                r"
              INSERT INTO notification
                (id, website_id, position, title, message, image, url, timestamp, delay)
              VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
            )?;
            for (position, item) in items.iter().enumerate() {
                stmt.execute(tokio_rusqlite::params![
                    item.id,
                    website_id,
                    position as i64,
                    item.title,
                    item.message,
                    item.image,
                    item.url,
                    item.timestamp,
                    item.delay,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    })
    .await?;
    Ok(())
}

/// Fetch a website's stored display config, if one was ever saved
pub async fn find_display_config(
    db: &Connection,
    website_id: &str,
) -> Result<Option<DisplayConfig>, Error> {
    let website_id = website_id.to_string();
    let config = db
        .call(move |conn| {
            let mut stmt = conn.prepare(
                r"
              SELECT
                start_delay,
                display_duration,
                cycle_duration,
                loop_enabled,
                show_close_button,
                theme,
                max_visible
              FROM display_config
              WHERE website_id = ?
              LIMIT 1
            ",
            )?;
            let result = stmt
                .query_map([website_id], |i| {
                    Ok(DisplayConfig {
                        start_delay: i.get(0)?,
                        display_duration: i.get(1)?,
                        cycle_duration: i.get(2)?,
                        loop_enabled: i.get(3)?,
                        show_close_button: i.get(4)?,
                        theme: Theme::parse(&i.get::<_, String>(5)?)
                            .unwrap_or(Theme::Ios),
                        max_visible_notifications: i.get(6)?,
                    })
                })?
                .filter_map(Result::ok)
                .next();
            Ok(result)
        })
        .await?;
    Ok(config)
}

pub async fn upsert_display_config(
    db: &Connection,
    website_id: &str,
    config: DisplayConfig,
) -> Result<(), Error> {
    let website_id = website_id.to_string();
    db.call(move |conn| {
        let mut stmt = conn.prepare(
            r"
          REPLACE INTO display_config
            (website_id, start_delay, display_duration, cycle_duration,
             loop_enabled, show_close_button, theme, max_visible)
          VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ",
        )?;
        stmt.execute(tokio_rusqlite::params![
            website_id,
            config.start_delay,
            config.display_duration,
            config.cycle_duration,
            config.loop_enabled,
            config.show_close_button,
            config.theme.as_str(),
            config.max_visible_notifications,
        ])?;
        Ok(())
    })
    .await?;
    Ok(())
}
