//! Edit Location Dialog
//!
//! Modal with latitude/longitude fields for moving one record.

use leptos::prelude::*;

use crate::catalogue::parse_position;
use crate::error::ValidationError;
use crate::models::{CatalogueItem, Position};

/// Location editor for the record in `target`; hidden when it is `None`.
///
/// Fields start empty each time a record is opened. Input is validated
/// before `on_save` sees it, and `on_save` may still reject the edit.
#[component]
pub fn EditLocationDialog(
    #[prop(into)] target: Signal<Option<CatalogueItem>>,
    #[prop(into)] on_save: Callback<(u32, Position), Result<(), ValidationError>>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (lat, set_lat) = signal(String::new());
    let (lng, set_lng) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Reset the form whenever a different record is opened
    Effect::new(move |_| {
        let _ = target.with(|t| t.as_ref().map(|row| row.id));
        set_lat.set(String::new());
        set_lng.set(String::new());
        set_error.set(None);
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = target.with_untracked(|t| t.as_ref().map(|row| row.id)) else { return };
        let result = parse_position(&lat.get_untracked(), &lng.get_untracked())
            .and_then(|position| on_save.run((id, position)));
        if let Err(e) = result {
            log::warn!("Rejected location edit for #{}: {}", id, e);
            set_error.set(Some(e.to_string()));
        }
    };

    view! {
        <Show when=move || target.with(|t| t.is_some())>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <form class="dialog" on:submit=save on:click=|ev| ev.stop_propagation()>
                    <h3>"Editar Ubicación"</h3>
                    <p class="dialog-subtitle">
                        {move || target.with(|t| t.as_ref().map(|row| format!("#{} {}", row.id, row.name)).unwrap_or_default())}
                    </p>
                    <label>
                        "Latitud"
                        <input
                            type="text"
                            inputmode="decimal"
                            placeholder=move || target.with(|t| t.as_ref().map(|row| format!("{:.5}", row.position().lat)).unwrap_or_default())
                            prop:value=move || lat.get()
                            on:input=move |ev| set_lat.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Longitud"
                        <input
                            type="text"
                            inputmode="decimal"
                            placeholder=move || target.with(|t| t.as_ref().map(|row| format!("{:.5}", row.position().lng)).unwrap_or_default())
                            prop:value=move || lng.get()
                            on:input=move |ev| set_lng.set(event_target_value(&ev))
                        />
                    </label>
                    {move || error.get().map(|msg| view! { <div class="error">{msg}</div> })}
                    <div class="dialog-actions">
                        <button type="button" on:click=move |_| on_cancel.run(())>"Cancelar"</button>
                        <button type="submit">"Guardar"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
