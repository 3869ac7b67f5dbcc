//! Fixtures
//!
//! A small embedded flower catalog used by composition tests and examples.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    flowers::{Flower, FlowerCatalog, FlowerKey},
    prices::Price,
};

const FLOWERS_YAML: &str = include_str!("flowers.yml");

/// Errors raised while loading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture document could not be parsed.
    #[error(transparent)]
    Parse(#[from] serde_norway::Error),
}

/// One flower definition from the fixture document.
#[derive(Debug, Deserialize)]
struct FlowerFixture {
    /// Stable label used to reference the flower from tests
    label: String,

    /// Display name
    name: String,

    /// Price in minor units
    price: u64,
}

#[derive(Debug, Deserialize)]
struct FlowerFixtureDocument {
    flowers: Vec<FlowerFixture>,
}

/// A loaded fixture catalog with a label → key lookup.
#[derive(Debug)]
pub struct FlowerFixtureSet {
    /// The flower catalog
    pub catalog: FlowerCatalog,

    by_label: FxHashMap<String, FlowerKey>,
}

impl FlowerFixtureSet {
    /// Look up a flower key by its fixture label.
    #[must_use]
    pub fn key(&self, label: &str) -> Option<FlowerKey> {
        self.by_label.get(label).copied()
    }
}

/// Loads the embedded flower fixture catalog.
///
/// # Errors
///
/// Returns [`FixtureError`] if the embedded document cannot be parsed.
pub fn flowers() -> Result<FlowerFixtureSet, FixtureError> {
    let document: FlowerFixtureDocument = serde_norway::from_str(FLOWERS_YAML)?;

    let mut catalog = FlowerCatalog::with_key();
    let mut by_label = FxHashMap::default();

    for fixture in document.flowers {
        let key = catalog.insert(Flower::new(fixture.name, Price::new(fixture.price)));

        by_label.insert(fixture.label, key);
    }

    Ok(FlowerFixtureSet { catalog, by_label })
}
