use dialecta_domain::document::Zone;
use dialecta_domain::{UnitCode, ZoneKey};
use fxhash::FxHashMap;
use tracing::debug;

/// Administrative unit → owning zone.
///
/// Built once from the member lists. If two zones claim a unit the last zone
/// visited wins; loading rejects such documents before the index is built.
#[derive(Debug, Clone, Default)]
pub struct ReverseIndex {
    units: FxHashMap<UnitCode, ZoneKey>,
}

impl ReverseIndex {
    pub fn build<'a>(zones: impl IntoIterator<Item = &'a Zone>) -> Self {
        let mut units = FxHashMap::default();
        for zone in zones {
            for unit in &zone.admin_units {
                units.insert(unit.clone(), zone.key.clone());
            }
        }
        debug!(units = units.len(), "Reverse index built");
        Self { units }
    }

    /// Zone key of `unit`, `None` when no zone lists it.
    #[must_use]
    pub fn resolve(&self, unit: &str) -> Option<&str> {
        self.units.get(unit).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// `(unit, zone)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.units.iter().map(|(u, z)| (u.as_str(), z.as_str()))
    }
}
