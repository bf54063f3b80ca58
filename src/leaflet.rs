//! Leaflet Bindings
//!
//! The handful of `L.*` calls the map view needs. Leaflet itself is loaded
//! by `index.html` and lives on `window.L`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::Position;

#[wasm_bindgen]
extern "C" {
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn map(element: &web_sys::HtmlElement) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map) -> Map;
}

#[wasm_bindgen]
extern "C" {
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &LayerGroup, map: &Map) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup) -> LayerGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &LayerGroup, layer: &Marker) -> LayerGroup;
}

#[wasm_bindgen]
extern "C" {
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &str) -> Marker;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
}

fn lat_lng(position: Position) -> JsValue {
    let pair: [f64; 2] = position.into();
    serde_wasm_bindgen::to_value(&pair).unwrap_or(JsValue::NULL)
}

/// Leaflet renders popup strings as HTML; record text must go in escaped
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Popup body: name over location, both as text
pub fn popup_html(name: &str, label: &str) -> String {
    format!("{}<br/>{}", escape_html(name), escape_html(label))
}

/// A live map plus the layer holding its markers
pub struct MapView {
    map: Map,
    markers: LayerGroup,
}

impl MapView {
    pub fn mount(element: &web_sys::HtmlElement, center: Position, zoom: u8, tile_url: &str, attribution: &str) -> Self {
        let map = map(element);
        map.set_view(&lat_lng(center), f64::from(zoom));

        let options = serde_wasm_bindgen::to_value(&TileOptions { attribution, max_zoom: 19 })
            .unwrap_or(JsValue::UNDEFINED);
        tile_layer(tile_url, &options).add_to(&map);

        let markers = layer_group();
        markers.add_to(&map);
        Self { map, markers }
    }

    /// Replace every marker; each popup shows the name and location
    pub fn show_markers<'a>(&self, markers: impl IntoIterator<Item = (&'a str, Position, &'a str)>) {
        self.markers.clear_layers();
        for (name, position, label) in markers {
            let marker = marker(&lat_lng(position));
            marker.bind_popup(&popup_html(name, label));
            self.markers.add_layer(&marker);
        }
    }

    pub fn unmount(self) {
        self.map.remove();
    }
}
