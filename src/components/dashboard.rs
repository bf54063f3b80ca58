//! Dashboard Component
//!
//! Catalogue table, search, map and location editor behind the login gate.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::PokeApiClient;
use crate::catalogue::{filter_by_name, load_catalogue, restore_catalogue, LoadStatus};
use crate::components::{CatalogueMap, CatalogueTable, EditLocationDialog};
use crate::config::{EDIT_SUCCESS_MESSAGE, FETCH_ERROR_MESSAGE};
use crate::context::use_app_context;
use crate::error::ValidationError;
use crate::models::Position;
use crate::store::{
    catalogue_signal, last_fetch_signal, status_signal, store_begin_load, store_fail, store_publish,
    store_relocate, store_reset, use_app_store,
};

/// Local display form of a stored RFC 3339 timestamp
fn format_fetch_time(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let config = ctx.config();

    let rows = catalogue_signal(store);
    let status = status_signal(store);
    let last_fetch = last_fetch_signal(store);

    let (search, set_search) = signal(String::new());
    let (editing, set_editing) = signal::<Option<u32>>(None);

    let filtered = Signal::derive(move || {
        let query = search.get();
        rows.with(|r| filter_by_name(r, &query))
    });
    let edit_target = Signal::derive(move || {
        let id = editing.get()?;
        rows.with(|r| r.iter().find(|row| row.id == id).cloned())
    });

    // Restore the stored snapshot, or fetch when there is none (or when forced)
    let load = move |force_fetch: bool| {
        let config = ctx.config();
        let snapshots = ctx.snapshots();
        let generation = store_begin_load(&store);

        if !force_fetch && config.reuse_snapshot {
            if let Some(restored) = restore_catalogue(&snapshots) {
                store_publish(&store, generation, restored.rows, restored.fetched_at);
                return;
            }
        }

        spawn_local(async move {
            let client = PokeApiClient::new(&config.api_base_url);
            let fetched_at = chrono::Utc::now().to_rfc3339();
            match load_catalogue(&client, &snapshots, &config.catalogue, js_sys::Math::random, &fetched_at).await {
                Ok(rows) => {
                    store_publish(&store, generation, rows, Some(fetched_at));
                }
                Err(_) => {
                    if store_fail(&store, generation, FETCH_ERROR_MESSAGE) && force_fetch {
                        ctx.notifications.error(FETCH_ERROR_MESSAGE);
                    }
                }
            }
        });
    };

    // Load on mount
    Effect::new(move |_| load(false));

    let on_save = Callback::new(move |(id, position): (u32, Position)| -> Result<(), ValidationError> {
        let rows = store_relocate(&store, id, position)?;
        log::info!("Moved #{} to {}", id, position.label());
        if let Err(e) = ctx.snapshots().save(&rows) {
            log::warn!("Could not store edited snapshot: {}", e);
            ctx.notifications.warning("No se pudo guardar la ubicación en el navegador");
        }
        ctx.notifications.success(EDIT_SUCCESS_MESSAGE);
        set_editing.set(None);
        Ok(())
    });

    let logout = move |_| {
        set_editing.set(None);
        store_reset(&store);
        ctx.session.logout();
    };

    let default_page_size = config.default_page_size;

    view! {
        <div class="dashboard">
            <section class="data-grid-container">
                <h2>"Panel de Control"</h2>
                <input
                    type="search"
                    class="search-box"
                    placeholder="Buscar Pokémon"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />

                {move || match status.get() {
                    LoadStatus::Idle | LoadStatus::Loading => view! {
                        <div class="spinner" aria-label="Cargando"></div>
                    }.into_any(),
                    LoadStatus::Failed(message) => view! {
                        <p class="error">{message}</p>
                    }.into_any(),
                    LoadStatus::Ready => view! {
                        <CatalogueTable
                            rows=filtered
                            default_page_size=default_page_size
                            on_edit=move |id: u32| set_editing.set(Some(id))
                        />
                    }.into_any(),
                }}

                <div class="dashboard-actions">
                    <span class="last-fetch">
                        {move || last_fetch.get().map(|t| format!("Última actualización: {}", format_fetch_time(&t)))}
                    </span>
                    <button
                        class="refresh-button"
                        disabled=move || status.get() == LoadStatus::Loading
                        on:click=move |_| load(true)
                    >
                        "Actualizar"
                    </button>
                    <button class="logout-button" on:click=logout>"Cerrar Sesión"</button>
                </div>
            </section>

            <section class="map-container">
                <CatalogueMap
                    rows=rows
                    center=config.catalogue.center
                    zoom=config.map_zoom
                    tile_url=config.tile_url.clone()
                />
            </section>

            <EditLocationDialog
                target=edit_target
                on_save=on_save
                on_cancel=move |_: ()| set_editing.set(None)
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparseable_fetch_time_is_shown_verbatim() {
        assert_eq!(format_fetch_time("yesterday"), "yesterday");
    }

    #[test]
    fn test_fetch_time_is_reformatted() {
        let shown = format_fetch_time("2026-10-16T12:00:00+00:00");
        assert_eq!(shown.len(), "2026-10-16 12:00".len());
        assert!(!shown.contains('T'));
    }
}
