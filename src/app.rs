//! Pokédex Dashboard App
//!
//! Root component: provides shared state and switches between the login
//! form and the dashboard.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Dashboard, LoginForm, ToastStack};
use crate::config::DashboardConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::from_location();

    // Provide context to all children
    provide_context(Store::new(AppState::default()));
    let ctx = AppContext::init(config);
    on_cleanup(move || ctx.teardown());

    view! {
        <main class="app-layout">
            <Show
                when=move || ctx.session.is_authenticated()
                fallback=|| view! { <LoginForm /> }
            >
                <Dashboard />
            </Show>
            <ToastStack notifications=ctx.notifications />
        </main>
    }
}
