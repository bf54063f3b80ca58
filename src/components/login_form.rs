//! Login Form Component
//!
//! Credential form in front of the dashboard.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    // Tracked for the form only; sessions are never persisted
    let (remember_me, set_remember_me) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = ctx.config().credentials;
        match ctx.session.sign_in(&credentials, &username.get_untracked(), &password.get_untracked()) {
            Ok(()) => {
                set_error.set(None);
                set_password.set(String::new());
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="login-container">
            <h2>"Login"</h2>
            <form on:submit=on_submit>
                <div>
                    <label>"Usuario:"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label>"Contraseña:"</label>
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <div class="remember-me">
                    <input
                        type="checkbox"
                        prop:checked=move || remember_me.get()
                        on:change=move |ev| set_remember_me.set(event_target_checked(&ev))
                    />
                    <label>"Recordarme"</label>
                </div>
                {move || error.get().map(|msg| view! { <div class="error">{msg}</div> })}
                <button type="submit">"Ingresar"</button>
            </form>
        </div>
    }
}
