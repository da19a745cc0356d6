//! Auth session state
//!
//! The session is an explicit value passed by reference into each view, not
//! an ambient global. It is created once at app start, updated by auth
//! events pushed from the auth backend, and torn down on sign-out.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::models::Profile;
use crate::store::Store;

/// The authenticated identity behind a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Auth state change pushed from the auth backend
#[derive(Debug, Clone)]
pub enum AuthEvent {
    SignedIn(AuthUser),
    SignedOut,
}

/// Current session: who is signed in, plus their cached profile
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<AuthUser>,
    profile: Option<Profile>,
}

impl Session {
    /// Start an anonymous session (app start, before any auth event)
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an already-known user (restored auth state)
    pub fn initialize(store: &Store, user: Option<AuthUser>) -> Self {
        let mut session = Self::new();
        if let Some(user) = user {
            session.apply(store, AuthEvent::SignedIn(user));
        }
        session
    }

    /// Apply an auth event, loading or dropping the profile as needed
    pub fn apply(&mut self, store: &Store, event: AuthEvent) {
        match event {
            AuthEvent::SignedIn(user) => {
                info!(user = %user.id, "Session signed in");
                self.profile = load_profile(store, &user.id);
                self.user = Some(user);
            }
            AuthEvent::SignedOut => {
                info!("Session signed out");
                self.user = None;
                self.profile = None;
            }
        }
    }

    /// Re-fetch the profile for the signed-in user (after a profile edit)
    pub fn refresh_profile(&mut self, store: &Store) {
        if let Some(user) = &self.user {
            self.profile = load_profile(store, &user.id);
        }
    }

    /// Persist profile changes, then refresh the cached copy
    pub fn save_profile(&mut self, store: &Store, profile: &Profile) -> Result<()> {
        store.upsert_profile(profile)?;
        self.refresh_profile(store);
        Ok(())
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    /// Cached profile, or the default for a signed-in user with no row yet
    pub fn profile(&self) -> Option<Profile> {
        match (&self.user, &self.profile) {
            (Some(_), Some(profile)) => Some(profile.clone()),
            (Some(user), None) => Some(Profile {
                user_id: user.id.clone(),
                ..Profile::default()
            }),
            (None, _) => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Load a profile, treating a missing row as absence rather than failure
fn load_profile(store: &Store, user_id: &str) -> Option<Profile> {
    match store.get_profile(user_id) {
        Ok(profile) => Some(profile),
        Err(e) if e.is_not_found() => None,
        Err(e) => {
            warn!(user = user_id, error = %e, "Failed to load profile");
            None
        }
    }
}
