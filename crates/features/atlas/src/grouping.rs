//! Display grouping of zones.
//!
//! A parent zone may absorb linked zones (coastal enclaves under the generic
//! Caribbean zone): expanding the parent yields the union of all member units
//! and clicks on a linked zone select the parent.

use crate::repository::ZoneRepository;
use dialecta_domain::{UnitCode, ZoneKey};
use fxhash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
pub struct ZoneGrouping {
    links: BTreeMap<ZoneKey, Vec<ZoneKey>>,
    parents: FxHashMap<ZoneKey, ZoneKey>,
}

impl ZoneGrouping {
    /// A linked zone listed under several parents belongs to the first parent in key order.
    #[must_use]
    pub fn new(links: BTreeMap<ZoneKey, Vec<ZoneKey>>) -> Self {
        let mut parents = FxHashMap::default();
        for (parent, children) in &links {
            for child in children.iter().filter(|c| *c != parent) {
                parents.entry(child.clone()).or_insert_with(|| parent.clone());
            }
        }
        Self { links, parents }
    }

    /// Units displayed for `zone`: its own members plus those of linked zones.
    ///
    /// Unknown zones expand to nothing; unknown linked zones are skipped.
    #[must_use]
    pub fn expand(&self, repository: &ZoneRepository, zone: &str) -> BTreeSet<UnitCode> {
        let Some(root) = repository.get_zone(zone) else {
            return BTreeSet::new();
        };

        let mut units: BTreeSet<UnitCode> = root.admin_units.iter().cloned().collect();
        for linked in self.linked(zone) {
            if let Some(linked) = repository.get_zone(linked) {
                units.extend(linked.admin_units.iter().cloned());
            }
        }
        units
    }

    #[must_use]
    pub fn linked(&self, zone: &str) -> &[ZoneKey] {
        self.links.get(zone).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn parent_of(&self, zone: &str) -> Option<&str> {
        self.parents.get(zone).map(String::as_str)
    }

    /// Zone that a click on `zone` selects.
    #[must_use]
    pub fn selection_key<'a>(&'a self, zone: &'a str) -> &'a str {
        self.parent_of(zone).unwrap_or(zone)
    }
}
