//! Catalogue API Bindings
//!
//! Frontend access to the remote catalogue, behind a trait so the load flow
//! can run against a stub.

mod pokeapi;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{CatalogueDetail, CataloguePage};

pub use pokeapi::PokeApiClient;

/// Remote catalogue: one page listing plus one detail per entry
#[async_trait(?Send)]
pub trait CatalogueSource {
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<CataloguePage, FetchError>;

    /// `url` is the entry's own detail link from the page listing
    async fn fetch_detail(&self, url: &str) -> Result<CatalogueDetail, FetchError>;
}
