//! Frontend Models
//!
//! Catalogue records and the PokeAPI response shapes they are built from.

use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees.
///
/// Serialized as a `[lat, lng]` pair so the snapshot matches what map
/// libraries expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Display label, five decimal places per axis
    pub fn label(&self) -> String {
        format!("({:.5}, {:.5})", self.lat, self.lng)
    }
}

impl From<[f64; 2]> for Position {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.lat, p.lng]
    }
}

/// One row of the dashboard table and one marker on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredItem")]
pub struct CatalogueItem {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
    /// Always `position.label()`; only `relocate` may change either.
    location: String,
    position: Position,
}

impl CatalogueItem {
    pub fn new(id: u32, name: String, detail: &CatalogueDetail, position: Position) -> Self {
        Self {
            id,
            name,
            height: detail.height,
            weight: detail.weight,
            base_experience: detail.base_experience,
            location: position.label(),
            position,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Move the record, keeping the label in step with the coordinate
    pub fn relocate(&mut self, position: Position) {
        self.position = position;
        self.location = position.label();
    }
}

/// Snapshot form of a record. The stored `location` is ignored and
/// rebuilt from `position`.
#[derive(Deserialize)]
struct StoredItem {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    base_experience: Option<u32>,
    position: Position,
}

impl From<StoredItem> for CatalogueItem {
    fn from(stored: StoredItem) -> Self {
        Self {
            id: stored.id,
            name: stored.name,
            height: stored.height,
            weight: stored.weight,
            base_experience: stored.base_experience,
            location: stored.position.label(),
            position: stored.position,
        }
    }
}

/// `GET /pokemon?limit=..&offset=..`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CataloguePage {
    pub results: Vec<CatalogueEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogueEntry {
    pub name: String,
    /// Detail endpoint for this entry
    pub url: String,
}

/// `GET <entry url>`, only the fields the dashboard shows
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogueDetail {
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> CatalogueDetail {
        CatalogueDetail { height: 7, weight: 69, base_experience: Some(64) }
    }

    #[test]
    fn test_label_uses_five_decimals() {
        assert_eq!(Position::new(51.5, -0.09).label(), "(51.50000, -0.09000)");
        assert_eq!(Position::new(51.123456, -0.987654).label(), "(51.12346, -0.98765)");
    }

    #[test]
    fn test_relocate_keeps_label_in_step() {
        let mut item = CatalogueItem::new(1, "bulbasaur".to_string(), &detail(), Position::new(51.5, -0.09));
        item.relocate(Position::new(40.41678, -3.70379));
        assert_eq!(item.position(), Position::new(40.41678, -3.70379));
        assert_eq!(item.location(), "(40.41678, -3.70379)");
    }

    #[test]
    fn test_snapshot_shape() {
        let item = CatalogueItem::new(1, "bulbasaur".to_string(), &detail(), Position::new(51.5, -0.09));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["position"], serde_json::json!([51.5, -0.09]));
        assert_eq!(json["location"], "(51.50000, -0.09000)");
        assert_eq!(json["base_experience"], 64);
    }

    #[test]
    fn test_stored_label_is_rebuilt_from_position() {
        let item: CatalogueItem = serde_json::from_str(
            r#"{"id":3,"name":"venusaur","height":20,"weight":1000,"base_experience":null,
                "location":"(0.00000, 0.00000)","position":[51.5,-0.09]}"#,
        )
        .unwrap();
        assert_eq!(item.location(), "(51.50000, -0.09000)");
        assert_eq!(item.position(), Position::new(51.5, -0.09));
    }

    #[test]
    fn test_detail_ignores_unknown_fields_and_null_experience() {
        let detail: CatalogueDetail = serde_json::from_str(
            r#"{"height":3,"weight":40,"base_experience":null,"abilities":[],"order":1}"#,
        )
        .unwrap();
        assert_eq!(detail.base_experience, None);
        assert_eq!(detail.height, 3);
    }
}
