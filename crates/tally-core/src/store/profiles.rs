//! Profile operations

use rusqlite::params;

use super::Store;
use crate::error::{Error, Result};
use crate::models::Profile;

impl Store {
    /// Fetch a user's profile row
    ///
    /// Returns `Error::NotFound` when no row exists; callers treat that as
    /// absence (fresh account) and fall back to `Profile::default()`.
    pub fn get_profile(&self, user_id: &str) -> Result<Profile> {
        let conn = self.conn()?;
        conn.query_row(
            "SELECT user_id, first_name, last_name, bio FROM profiles WHERE user_id = ?1",
            params![user_id],
            |row| {
                Ok(Profile {
                    user_id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    bio: row.get(3)?,
                })
            },
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => {
                Error::NotFound(format!("Profile not found: {}", user_id))
            }
            other => other.into(),
        })
    }

    /// Create or replace a user's profile
    pub fn upsert_profile(&self, profile: &Profile) -> Result<()> {
        if profile.user_id.trim().is_empty() {
            return Err(Error::InvalidData("Profile user id is required".to_string()));
        }

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO profiles (user_id, first_name, last_name, bio)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(user_id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                bio = excluded.bio
            "#,
            params![profile.user_id, profile.first_name, profile.last_name, profile.bio],
        )?;

        Ok(())
    }
}
