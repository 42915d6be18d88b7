//! Per-feature classification of the whole map.

use crate::index::ReverseIndex;
use crate::repository::ZoneRepository;
use crate::resolver::FeatureResolver;
use dialecta_domain::value::FeatureValue;
use dialecta_domain::{FeatureKey, UnitCode, ZoneKey};
use serde::Serialize;
use std::collections::BTreeMap;

/// Units with a value, by class. Units without data are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UnitCounts {
    pub present: usize,
    pub variable: usize,
    pub absent: usize,
}

impl UnitCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.present + self.variable + self.absent
    }

    fn add(&mut self, value: FeatureValue) {
        match value {
            FeatureValue::Present => self.present += 1,
            FeatureValue::Variable => self.variable += 1,
            FeatureValue::Absent => self.absent += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureFilter {
    pub feature: FeatureKey,
    pub label: String,
    /// Zones by base value, in key order.
    pub present: Vec<ZoneKey>,
    pub variable: Vec<ZoneKey>,
    pub absent: Vec<ZoneKey>,
    pub no_data: Vec<ZoneKey>,
    /// Effective value of every mapped unit; `None` is no data.
    pub units: BTreeMap<UnitCode, Option<FeatureValue>>,
    pub counts: UnitCounts,
}

impl FeatureFilter {
    /// An empty key resets the map.
    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.feature.is_empty()
    }

    #[must_use]
    pub fn value_of(&self, unit: &str) -> Option<FeatureValue> {
        self.units.get(unit).copied().flatten()
    }

    /// Units whose effective value is `value`.
    pub fn units_with(&self, value: FeatureValue) -> impl Iterator<Item = &str> {
        self.units
            .iter()
            .filter(move |(_, v)| **v == Some(value))
            .map(|(u, _)| u.as_str())
    }

    /// Mapped units without data.
    pub fn units_without_data(&self) -> impl Iterator<Item = &str> {
        self.units.iter().filter(|(_, v)| v.is_none()).map(|(u, _)| u.as_str())
    }
}

#[must_use]
pub fn filter(repository: &ZoneRepository, index: &ReverseIndex, feature: &str) -> FeatureFilter {
    if feature.is_empty() {
        return FeatureFilter::default();
    }

    let mut result = FeatureFilter {
        feature: feature.to_owned(),
        label: repository.feature_label(feature).into_owned(),
        ..FeatureFilter::default()
    };

    let resolver = FeatureResolver::new(repository, index);
    for zone in repository.zones() {
        let bucket = match zone.features.get(feature) {
            Some(FeatureValue::Present) => &mut result.present,
            Some(FeatureValue::Variable) => &mut result.variable,
            Some(FeatureValue::Absent) => &mut result.absent,
            None => &mut result.no_data,
        };
        bucket.push(zone.key.clone());

        for unit in &zone.admin_units {
            let value = resolver.resolve(unit, feature).value;
            if let Some(value) = value {
                result.counts.add(value);
            }
            result.units.insert(unit.clone(), value);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> (ZoneRepository, ReverseIndex) {
        let raw = json!({
            "zones": {
                "andino": { "nombre": "Andino", "features": { "seseo": 1 }, "admin_units": ["BO", "PE"] },
                "centro": {
                    "nombre": "Centro",
                    "features": { "seseo": 0 },
                    "admin_units": ["ES-MD", "ES-CL"],
                    "admin_overrides": { "ES-CL": { "seseo": 2 } }
                },
                "guineano": { "nombre": "Guineano", "admin_units": ["GQ"] }
            }
        });
        let repo = ZoneRepository::load(&raw).unwrap_or_default();
        let index = ReverseIndex::build(repo.zones());
        (repo, index)
    }

    #[test]
    fn zones_and_units_are_classified() {
        let (repo, index) = fixture();
        let f = filter(&repo, &index, "seseo");

        assert_eq!(f.label, "Seseo");
        assert_eq!(f.present, ["andino"]);
        assert_eq!(f.absent, ["centro"]);
        assert_eq!(f.no_data, ["guineano"]);
        assert!(f.variable.is_empty());

        assert_eq!(f.value_of("ES-CL"), Some(FeatureValue::Variable));
        assert_eq!(f.value_of("GQ"), None);
        assert_eq!(f.counts, UnitCounts { present: 2, variable: 1, absent: 1 });
        assert_eq!(f.counts.total(), 4);
        assert_eq!(f.units_without_data().collect::<Vec<_>>(), ["GQ"]);
        assert_eq!(f.units_with(FeatureValue::Present).count(), 2);
    }

    #[test]
    fn empty_key_resets() {
        let (repo, index) = fixture();
        let f = filter(&repo, &index, "");
        assert!(f.is_reset());
        assert!(f.units.is_empty());
    }
}
