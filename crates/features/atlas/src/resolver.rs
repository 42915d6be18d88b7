//! Effective feature value of a single administrative unit.

use crate::index::ReverseIndex;
use crate::repository::ZoneRepository;
use dialecta_domain::value::FeatureValue;
use dialecta_domain::ZoneKey;
use serde::Serialize;

/// Outcome of resolving one feature for one unit.
///
/// `value` is the unit override when one exists, otherwise the zone value.
/// `base` always carries the zone value so callers can show "differs from zone".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Resolution {
    pub value: Option<FeatureValue>,
    pub zone: Option<ZoneKey>,
    pub is_override: bool,
    pub base: Option<FeatureValue>,
}

impl Resolution {
    /// The unit belongs to no zone.
    #[must_use]
    pub const fn unknown_unit() -> Self {
        Self { value: None, zone: None, is_override: false, base: None }
    }

    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.value.is_some()
    }

    /// The override changes what the zone says.
    #[must_use]
    pub fn differs_from_zone(&self) -> bool {
        self.is_override && self.value != self.base
    }
}

/// Borrowed view resolving features against the repository and index.
#[derive(Debug, Clone, Copy)]
pub struct FeatureResolver<'a> {
    repository: &'a ZoneRepository,
    index: &'a ReverseIndex,
}

impl<'a> FeatureResolver<'a> {
    #[must_use]
    pub const fn new(repository: &'a ZoneRepository, index: &'a ReverseIndex) -> Self {
        Self { repository, index }
    }

    #[must_use]
    pub fn resolve(&self, unit: &str, feature: &str) -> Resolution {
        let Some(zone) = self.index.resolve(unit).and_then(|z| self.repository.get_zone(z)) else {
            return Resolution::unknown_unit();
        };

        let base = zone.features.get(feature);
        let unit_value = zone.overrides_for(unit).and_then(|o| o.get(feature));

        Resolution {
            value: unit_value.or(base),
            zone: Some(zone.key.clone()),
            is_override: unit_value.is_some(),
            base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> (ZoneRepository, ReverseIndex) {
        let raw = json!({
            "zones": {
                "sur_espana": {
                    "nombre": "Sur de España",
                    "features": { "seseo": 2, "yeismo": 1, "lambdacismo": "?" },
                    "admin_units": ["ES-AN", "ES-CN"],
                    "admin_overrides": { "ES-CN": { "seseo": 1, "ustedeo": 0 } }
                }
            }
        });
        let repo = ZoneRepository::load(&raw).unwrap_or_default();
        let index = ReverseIndex::build(repo.zones());
        (repo, index)
    }

    #[test]
    fn override_wins_and_keeps_base() {
        let (repo, index) = fixture();
        let r = FeatureResolver::new(&repo, &index).resolve("ES-CN", "seseo");

        assert_eq!(r.value, Some(FeatureValue::Present));
        assert_eq!(r.base, Some(FeatureValue::Variable));
        assert_eq!(r.zone.as_deref(), Some("sur_espana"));
        assert!(r.is_override);
        assert!(r.differs_from_zone());
    }

    #[test]
    fn zone_value_without_override() {
        let (repo, index) = fixture();
        let r = FeatureResolver::new(&repo, &index).resolve("ES-AN", "seseo");

        assert_eq!(r.value, Some(FeatureValue::Variable));
        assert!(!r.is_override);
    }

    #[test]
    fn override_on_feature_missing_from_zone() {
        let (repo, index) = fixture();
        let r = FeatureResolver::new(&repo, &index).resolve("ES-CN", "ustedeo");

        assert_eq!(r.value, Some(FeatureValue::Absent));
        assert_eq!(r.base, None);
        assert!(r.is_override);
    }

    #[test]
    fn no_data_cases() {
        let (repo, index) = fixture();
        let resolver = FeatureResolver::new(&repo, &index);

        let invalid = resolver.resolve("ES-AN", "lambdacismo");
        assert!(!invalid.has_data());
        assert_eq!(invalid.zone.as_deref(), Some("sur_espana"));

        assert_eq!(resolver.resolve("ZZ", "seseo"), Resolution::unknown_unit());
    }
}
