//! Per-user boolean preferences with optimistic toggling

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::Store;

/// The named boolean preferences a user can toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub user_id: String,
    pub email_alerts: bool,
    pub push_alerts: bool,
    pub dark_mode: bool,
    pub weekly_summary: bool,
}

impl UserSettings {
    /// Defaults applied when a user has no settings row yet
    pub fn for_user(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            email_alerts: true,
            push_alerts: true,
            dark_mode: true,
            weekly_summary: false,
        }
    }

    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::EmailAlerts => self.email_alerts,
            SettingKey::PushAlerts => self.push_alerts,
            SettingKey::DarkMode => self.dark_mode,
            SettingKey::WeeklySummary => self.weekly_summary,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::EmailAlerts => self.email_alerts = value,
            SettingKey::PushAlerts => self.push_alerts = value,
            SettingKey::DarkMode => self.dark_mode = value,
            SettingKey::WeeklySummary => self.weekly_summary = value,
        }
    }
}

/// Typed key for each settings field
///
/// Each key maps to a dedicated accessor pair in [`UserSettings`]; there is
/// no string-indexed field access anywhere in the update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    EmailAlerts,
    PushAlerts,
    DarkMode,
    WeeklySummary,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::EmailAlerts,
        SettingKey::PushAlerts,
        SettingKey::DarkMode,
        SettingKey::WeeklySummary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::EmailAlerts => "email_alerts",
            SettingKey::PushAlerts => "push_alerts",
            SettingKey::DarkMode => "dark_mode",
            SettingKey::WeeklySummary => "weekly_summary",
        }
    }
}

impl std::str::FromStr for SettingKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "email_alerts" => Ok(SettingKey::EmailAlerts),
            "push_alerts" => Ok(SettingKey::PushAlerts),
            "dark_mode" => Ok(SettingKey::DarkMode),
            "weekly_summary" => Ok(SettingKey::WeeklySummary),
            _ => Err(format!("Unknown setting key: {}", s)),
        }
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Two-phase optimistic settings editor
///
/// `toggle` applies the change locally first (so the UI can reflect it
/// immediately), then persists it; an explicit write failure reverts the
/// local value to what it was before. There is no third state: the editor
/// always holds either the confirmed or the reverted value.
#[derive(Debug, Clone)]
pub struct SettingsEditor {
    settings: UserSettings,
}

impl SettingsEditor {
    /// Load the editor for a user, defaulting when no row exists
    pub fn load(store: &Store, user_id: &str) -> Result<Self> {
        Ok(Self {
            settings: store.get_settings(user_id)?,
        })
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// Tentatively apply, persist, and revert on failure
    pub fn toggle(&mut self, store: &Store, key: SettingKey, value: bool) -> Result<()> {
        let previous = self.settings.get(key);
        self.settings.set(key, value);

        if let Err(e) = store.save_settings(&self.settings) {
            self.settings.set(key, previous);
            return Err(e);
        }
        Ok(())
    }
}
