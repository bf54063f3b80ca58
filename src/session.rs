//! Session Gate
//!
//! Authenticated/unauthenticated flag controlling dashboard access.

use leptos::prelude::*;

use crate::config::Credentials;
use crate::error::LoginError;

/// Plain session state, never persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
}

impl SessionState {
    pub fn login(&mut self) {
        self.authenticated = true;
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

impl Credentials {
    /// Exact match against the configured pair
    pub fn verify(&self, username: &str, password: &str) -> Result<(), LoginError> {
        if username == self.username && password == self.password {
            Ok(())
        } else {
            Err(LoginError::InvalidCredentials)
        }
    }
}

/// Reactive session handle, provided once at the app root
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Tracked read, for views that switch on login state
    pub fn is_authenticated(&self) -> bool {
        self.state.get().authenticated
    }

    pub fn login(&self) {
        self.state.update(SessionState::login);
        log::info!("Session opened");
    }

    pub fn logout(&self) {
        self.state.update(SessionState::logout);
        log::info!("Session closed");
    }

    /// End the session at teardown; tolerates an already-disposed signal
    pub fn close(&self) {
        if self.state.try_update(SessionState::logout).is_some() {
            log::debug!("Session released");
        }
    }

    /// Check credentials and open the session on success
    pub fn sign_in(&self, credentials: &Credentials, username: &str, password: &str) -> Result<(), LoginError> {
        credentials.verify(username, password).map_err(|e| {
            log::warn!("Rejected login for {:?}", username);
            e
        })?;
        self.login();
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
