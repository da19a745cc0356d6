//! User settings persistence

use rusqlite::params;

use super::Store;
use crate::error::{Error, Result};
use crate::settings::UserSettings;

impl Store {
    /// Fetch a user's settings, falling back to defaults when no row exists
    pub fn get_settings(&self, user_id: &str) -> Result<UserSettings> {
        let conn = self.conn()?;
        let result = conn.query_row(
            "SELECT user_id, email_alerts, push_alerts, dark_mode, weekly_summary
             FROM user_settings WHERE user_id = ?1",
            params![user_id],
            |row| {
                Ok(UserSettings {
                    user_id: row.get(0)?,
                    email_alerts: row.get(1)?,
                    push_alerts: row.get(2)?,
                    dark_mode: row.get(3)?,
                    weekly_summary: row.get(4)?,
                })
            },
        );

        match result {
            Ok(settings) => Ok(settings),
            // Absence of the row is not an error: a fresh account simply has
            // the default preferences.
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(UserSettings::for_user(user_id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the full settings row (upsert on user id)
    pub fn save_settings(&self, settings: &UserSettings) -> Result<()> {
        if settings.user_id.trim().is_empty() {
            return Err(Error::InvalidData("Settings user id is required".to_string()));
        }

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO user_settings (user_id, email_alerts, push_alerts, dark_mode, weekly_summary, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, CURRENT_TIMESTAMP)
            ON CONFLICT(user_id) DO UPDATE SET
                email_alerts = excluded.email_alerts,
                push_alerts = excluded.push_alerts,
                dark_mode = excluded.dark_mode,
                weekly_summary = excluded.weekly_summary,
                updated_at = CURRENT_TIMESTAMP
            "#,
            params![
                settings.user_id,
                settings.email_alerts,
                settings.push_alerts,
                settings.dark_mode,
                settings.weekly_summary,
            ],
        )?;

        Ok(())
    }
}
