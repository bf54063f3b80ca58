//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::components::Notifications;
use crate::config::DashboardConfig;
use crate::session::Session;
use crate::storage::SharedSnapshots;

/// App-wide handles, created once by the root component
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: Session,
    pub notifications: Notifications,
    config: StoredValue<DashboardConfig>,
    snapshots: StoredValue<SharedSnapshots, LocalStorage>,
}

impl AppContext {
    /// Build every handle and provide it to descendants
    pub fn init(config: DashboardConfig) -> Self {
        let snapshots = SharedSnapshots::open(config.storage.clone());
        let ctx = Self {
            session: Session::new(),
            notifications: Notifications::new(),
            config: StoredValue::new(config),
            snapshots: StoredValue::new_local(snapshots),
        };
        provide_context(ctx);
        log::info!("Application context ready");
        ctx
    }

    /// Close the session when the root unmounts
    pub fn teardown(&self) {
        self.session.close();
        log::info!("Application context released");
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }

    /// Handle onto the shared snapshot backend
    pub fn snapshots(&self) -> SharedSnapshots {
        self.snapshots.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
