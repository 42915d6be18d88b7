//! # Atlas
//!
//! The read-only half of the engine: a validated [`ZoneRepository`], the
//! unit → zone [`ReverseIndex`], the display [`ZoneGrouping`] and the
//! override-aware [`FeatureResolver`], bundled into a cheaply clonable
//! [`Atlas`] built once per session.
//!
//! ```rust
//! use dialecta_atlas::Atlas;
//! use dialecta_domain::value::FeatureValue;
//! use std::collections::BTreeMap;
//!
//! let raw = serde_json::json!({
//!     "zones": {
//!         "andino": { "nombre": "Andino", "features": { "seseo": 1 }, "admin_units": ["BO", "PE"] }
//!     }
//! });
//! let atlas = Atlas::load(&raw, BTreeMap::new()).unwrap();
//! assert_eq!(atlas.resolve("PE", "seseo").value, Some(FeatureValue::Present));
//! ```

mod error;
mod explore;
mod filter;
mod grouping;
mod index;
mod repository;
mod resolver;

pub use crate::error::{LoadError, LoadErrorExt};
pub use crate::explore::{ProfileFeature, ZoneProfile};
pub use crate::filter::{FeatureFilter, UnitCounts};
pub use crate::grouping::ZoneGrouping;
pub use crate::index::ReverseIndex;
pub use crate::repository::ZoneRepository;
pub use crate::resolver::{FeatureResolver, Resolution};

use dialecta_domain::config::DataConfig;
use dialecta_domain::document::Zone;
use dialecta_domain::{UnitCode, ZoneKey};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::info;

#[dialecta_derive::shared_state]
pub struct Atlas {
    pub repository: ZoneRepository,
    pub index: ReverseIndex,
    pub grouping: ZoneGrouping,
}

impl Atlas {
    #[must_use]
    pub fn build(repository: ZoneRepository, links: BTreeMap<ZoneKey, Vec<ZoneKey>>) -> Self {
        let index = ReverseIndex::build(repository.zones());
        let grouping = ZoneGrouping::new(links);
        info!(zones = repository.len(), units = index.len(), "Atlas ready");
        Self::new(AtlasInner { repository, index, grouping })
    }

    /// # Errors
    /// Any [`LoadError`] raised by [`ZoneRepository::load`].
    pub fn load(raw: &Value, links: BTreeMap<ZoneKey, Vec<ZoneKey>>) -> Result<Self, LoadError> {
        Ok(Self::build(ZoneRepository::load(raw)?, links))
    }

    /// Loads the document and links named by the `[data]` config section.
    ///
    /// # Errors
    /// Any [`LoadError`] raised by [`ZoneRepository::from_path`].
    pub fn from_config(config: &DataConfig) -> Result<Self, LoadError> {
        Self::from_path(&config.path, config.linked_zones.clone())
    }

    /// # Errors
    /// Any [`LoadError`] raised by [`ZoneRepository::from_path`].
    pub fn from_path(
        path: impl AsRef<Path>,
        links: BTreeMap<ZoneKey, Vec<ZoneKey>>,
    ) -> Result<Self, LoadError> {
        Ok(Self::build(ZoneRepository::from_path(path)?, links))
    }

    #[must_use]
    pub fn resolver(&self) -> FeatureResolver<'_> {
        FeatureResolver::new(&self.repository, &self.index)
    }

    #[must_use]
    pub fn zone_of(&self, unit: &str) -> Option<&Zone> {
        self.repository.get_zone(self.index.resolve(unit)?)
    }

    #[must_use]
    pub fn resolve(&self, unit: &str, feature: &str) -> Resolution {
        self.resolver().resolve(unit, feature)
    }

    #[must_use]
    pub fn expand(&self, zone: &str) -> BTreeSet<UnitCode> {
        self.grouping.expand(&self.repository, zone)
    }

    /// Zone selected by a click on `unit`; linked zones select their parent.
    #[must_use]
    pub fn selection_zone(&self, unit: &str) -> Option<&str> {
        self.index.resolve(unit).map(|zone| self.grouping.selection_key(zone))
    }

    #[must_use]
    pub fn profile(&self, unit: &str) -> Option<ZoneProfile> {
        explore::profile(&self.repository, &self.index, unit)
    }

    #[must_use]
    pub fn filter(&self, feature: &str) -> FeatureFilter {
        filter::filter(&self.repository, &self.index, feature)
    }
}
