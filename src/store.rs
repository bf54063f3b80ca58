//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalogue::{self, LoadStatus};
use crate::error::ValidationError;
use crate::models::{CatalogueItem, Position};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current catalogue, in id order
    pub catalogue: Vec<CatalogueItem>,
    pub status: LoadStatus,
    /// RFC 3339 time of the fetch that produced `catalogue`
    pub last_fetch: Option<String>,
    /// Bumped by every load; completions for older loads are dropped
    pub generation: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Enter `Loading` and return the generation the result must carry
pub fn store_begin_load(store: &AppStore) -> u32 {
    let generation = store.generation().get_untracked().wrapping_add(1);
    *store.generation().write() = generation;
    store.catalogue().write().clear();
    *store.status().write() = LoadStatus::Loading;
    generation
}

fn is_current(store: &AppStore, generation: u32) -> bool {
    let current = store.generation().get_untracked();
    if current != generation {
        log::debug!("Dropping stale catalogue load {} (current {})", generation, current);
    }
    current == generation
}

/// Publish a finished load. Returns false if a newer load superseded it.
pub fn store_publish(store: &AppStore, generation: u32, rows: Vec<CatalogueItem>, fetched_at: Option<String>) -> bool {
    if !is_current(store, generation) {
        return false;
    }
    *store.catalogue().write() = rows;
    *store.last_fetch().write() = fetched_at;
    *store.status().write() = LoadStatus::Ready;
    true
}

/// Record a failed load. Returns false if a newer load superseded it.
pub fn store_fail(store: &AppStore, generation: u32, message: &str) -> bool {
    if !is_current(store, generation) {
        return false;
    }
    store.catalogue().write().clear();
    *store.status().write() = LoadStatus::Failed(message.to_string());
    true
}

/// Move one record and return the full list for the snapshot rewrite
pub fn store_relocate(store: &AppStore, id: u32, position: Position) -> Result<Vec<CatalogueItem>, ValidationError> {
    let field = store.catalogue();
    let mut rows = field.write();
    catalogue::relocate(rows.as_mut_slice(), id, position)?;
    Ok(rows.to_vec())
}

/// Back to `Idle` with no rows; pending loads become stale
pub fn store_reset(store: &AppStore) {
    let generation = store.generation().get_untracked().wrapping_add(1);
    *store.generation().write() = generation;
    store.catalogue().write().clear();
    *store.last_fetch().write() = None;
    *store.status().write() = LoadStatus::Idle;
}

pub fn catalogue_signal(store: AppStore) -> Signal<Vec<CatalogueItem>> {
    Signal::derive(move || store.catalogue().get())
}

pub fn status_signal(store: AppStore) -> Signal<LoadStatus> {
    Signal::derive(move || store.status().get())
}

pub fn last_fetch_signal(store: AppStore) -> Signal<Option<String>> {
    Signal::derive(move || store.last_fetch().get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FETCH_ERROR_MESSAGE;
    use crate::models::CatalogueDetail;

    fn rows() -> Vec<CatalogueItem> {
        let detail = CatalogueDetail { height: 4, weight: 60, base_experience: Some(112) };
        vec![
            CatalogueItem::new(1, "pikachu".to_string(), &detail, Position::new(51.5, -0.1)),
            CatalogueItem::new(2, "raichu".to_string(), &detail, Position::new(51.51, -0.08)),
        ]
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::default());
            let first = store_begin_load(&store);
            let second = store_begin_load(&store);

            assert!(!store_publish(&store, first, rows(), None));
            assert_eq!(store.status().get_untracked(), LoadStatus::Loading);

            assert!(store_publish(&store, second, rows(), Some("now".to_string())));
            assert_eq!(store.status().get_untracked(), LoadStatus::Ready);
            assert_eq!(store.catalogue().get_untracked().len(), 2);
        });
    }

    #[test]
    fn test_reset_invalidates_pending_load() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::default());
            let generation = store_begin_load(&store);
            store_reset(&store);
            assert!(!store_fail(&store, generation, "boom"));
            assert_eq!(store.status().get_untracked(), LoadStatus::Idle);
        });
    }

    #[test]
    fn test_failed_refresh_clears_rows() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::default());
            let first = store_begin_load(&store);
            assert!(store_publish(&store, first, rows(), None));

            let refresh = store_begin_load(&store);
            assert!(store_fail(&store, refresh, FETCH_ERROR_MESSAGE));
            assert!(store.catalogue().get_untracked().is_empty());
            assert_eq!(
                store.status().get_untracked(),
                LoadStatus::Failed("Error al obtener datos de Pokémon".to_string())
            );
        });
    }

    #[test]
    fn test_reset_wraps_generation() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState { generation: u32::MAX, ..AppState::default() });
            store_reset(&store);
            assert_eq!(store.generation().get_untracked(), 0);
        });
    }

    #[test]
    fn test_relocate_through_store() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::default());
            let generation = store_begin_load(&store);
            store_publish(&store, generation, rows(), None);

            let updated = store_relocate(&store, 2, Position::new(48.85661, 2.35222)).unwrap();
            assert_eq!(updated[1].location(), "(48.85661, 2.35222)");
            assert_eq!(store.catalogue().get_untracked(), updated);
            assert_eq!(
                store_relocate(&store, 7, Position::new(0.0, 0.0)),
                Err(ValidationError::UnknownRecord(7))
            );
        });
    }
}
