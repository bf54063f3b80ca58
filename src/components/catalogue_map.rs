//! Catalogue Map Component
//!
//! Leaflet map with one marker per catalogue record.

use leptos::html::Div;
use leptos::prelude::*;

use crate::config::TILE_ATTRIBUTION;
use crate::leaflet::MapView;
use crate::models::{CatalogueItem, Position};

#[component]
pub fn CatalogueMap(
    #[prop(into)] rows: Signal<Vec<CatalogueItem>>,
    center: Position,
    zoom: u8,
    #[prop(into)] tile_url: String,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let view_handle = StoredValue::new_local(None::<MapView>);

    // Create the map once the container exists, then redraw markers on every change
    Effect::new(move |_| {
        let Some(element) = container.get() else { return };
        let rows = rows.get();

        view_handle.update_value(|handle| {
            let map = handle.get_or_insert_with(|| {
                log::debug!("Mounting map");
                MapView::mount(&element, center, zoom, &tile_url, TILE_ATTRIBUTION)
            });
            map.show_markers(rows.iter().map(|row| (row.name.as_str(), row.position(), row.location())));
        });
    });

    on_cleanup(move || {
        view_handle.try_update_value(|handle| {
            if let Some(map) = handle.take() {
                map.unmount();
            }
        });
    });

    view! { <div class="map-view" node_ref=container></div> }
}
