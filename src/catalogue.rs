//! Catalogue Load, Edit and Query
//!
//! Fetch a page of entries plus their details, place each on the map,
//! persist the result, and answer table queries over it.

use futures::future::try_join_all;

use crate::api::CatalogueSource;
use crate::config::CatalogueSettings;
use crate::error::{FetchError, ValidationError};
use crate::models::{CatalogueDetail, CatalogueEntry, CatalogueItem, Position};
use crate::storage::{KeyValueStore, SnapshotStore};

/// Catalogue lifecycle as the dashboard shows it
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// `center` moved by up to `spread` degrees on each axis.
///
/// `unit` yields uniform samples in `[0, 1)`.
pub fn jittered_position(center: Position, spread: f64, mut unit: impl FnMut() -> f64) -> Position {
    let lat = center.lat + unit() * 2.0 * spread - spread;
    let lng = center.lng + unit() * 2.0 * spread - spread;
    Position::new(lat, lng)
}

/// Zip entries with their details into records numbered from 1
pub fn assemble(
    entries: Vec<CatalogueEntry>,
    details: &[CatalogueDetail],
    settings: &CatalogueSettings,
    mut unit: impl FnMut() -> f64,
) -> Vec<CatalogueItem> {
    entries
        .into_iter()
        .zip(details)
        .enumerate()
        .map(|(index, (entry, detail))| {
            let position = jittered_position(settings.center, settings.spread, &mut unit);
            CatalogueItem::new(index as u32 + 1, entry.name, detail, position)
        })
        .collect()
}

/// One page request, then every detail request at once. Any failure fails the batch.
pub async fn fetch_catalogue<S>(
    source: &S,
    settings: &CatalogueSettings,
    unit: impl FnMut() -> f64,
) -> Result<Vec<CatalogueItem>, FetchError>
where
    S: CatalogueSource + ?Sized,
{
    let page = source.fetch_page(settings.limit, settings.offset).await?;
    log::info!("Catalogue page has {} entries, fetching details", page.results.len());

    let details = try_join_all(page.results.iter().map(|entry| source.fetch_detail(&entry.url))).await?;
    Ok(assemble(page.results, &details, settings, unit))
}

/// Drop the stored snapshot, fetch a fresh catalogue and store it.
///
/// Nothing is written when the fetch fails. Storage failures after a
/// successful fetch are logged and do not fail the load.
pub async fn load_catalogue<S, K>(
    source: &S,
    snapshots: &SnapshotStore<K>,
    settings: &CatalogueSettings,
    unit: impl FnMut() -> f64,
    fetched_at: &str,
) -> Result<Vec<CatalogueItem>, FetchError>
where
    S: CatalogueSource + ?Sized,
    K: KeyValueStore,
{
    if let Err(e) = snapshots.invalidate() {
        log::warn!("Could not clear cached catalogue: {}", e);
    }

    let rows = fetch_catalogue(source, settings, unit).await.map_err(|e| {
        log::error!("Catalogue fetch failed: {}", e);
        e
    })?;

    if let Err(e) = snapshots.save(&rows).and_then(|_| snapshots.record_fetch(fetched_at)) {
        log::warn!("Could not store catalogue snapshot: {}", e);
    }
    log::info!("Loaded {} catalogue items", rows.len());
    Ok(rows)
}

/// Stored catalogue, if there is a readable one
pub struct Restored {
    pub rows: Vec<CatalogueItem>,
    pub fetched_at: Option<String>,
}

/// Read-through on mount. A missing or unreadable snapshot is a miss.
pub fn restore_catalogue<K: KeyValueStore>(snapshots: &SnapshotStore<K>) -> Option<Restored> {
    match snapshots.load() {
        Ok(Some(rows)) => {
            log::info!("Restored {} catalogue items from snapshot", rows.len());
            let fetched_at = snapshots.last_fetch().ok().flatten();
            Some(Restored { rows, fetched_at })
        }
        Ok(None) => {
            log::debug!("No catalogue snapshot stored");
            None
        }
        Err(e) => {
            log::warn!("Ignoring unreadable catalogue snapshot: {}", e);
            None
        }
    }
}

fn parse_axis(field: &'static str, input: &str, limit: f64) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field,
        input: trimmed.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ValidationError::NotANumber { field, input: trimmed.to_string() });
    }
    if value.abs() > limit {
        return Err(ValidationError::OutOfRange { field, value });
    }
    Ok(value)
}

/// Parse the edit dialog's text fields
pub fn parse_position(lat: &str, lng: &str) -> Result<Position, ValidationError> {
    let lat = parse_axis("Latitud", lat, 90.0)?;
    let lng = parse_axis("Longitud", lng, 180.0)?;
    Ok(Position::new(lat, lng))
}

/// Move record `id`; other records are untouched
pub fn relocate(rows: &mut [CatalogueItem], id: u32, position: Position) -> Result<(), ValidationError> {
    let row = rows
        .iter_mut()
        .find(|row| row.id == id)
        .ok_or(ValidationError::UnknownRecord(id))?;
    row.relocate(position);
    Ok(())
}

/// Rows whose name contains `query`, ignoring case
pub fn filter_by_name(rows: &[CatalogueItem], query: &str) -> Vec<CatalogueItem> {
    let query = query.to_lowercase();
    rows.iter()
        .filter(|row| row.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Number of pages needed for `total` rows; at least one
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Rows on zero-based `page`. Past-the-end pages are empty.
pub fn page_slice(rows: &[CatalogueItem], page: usize, page_size: usize) -> &[CatalogueItem] {
    let start = page.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}
