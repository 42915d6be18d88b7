//! Zone profile shown when a unit is clicked in exploration mode.

use crate::index::ReverseIndex;
use crate::repository::ZoneRepository;
use crate::resolver::FeatureResolver;
use dialecta_domain::value::FeatureValue;
use dialecta_domain::{FeatureKey, UnitCode, ZoneKey};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileFeature {
    pub key: FeatureKey,
    pub label: String,
    pub value: FeatureValue,
    pub base: Option<FeatureValue>,
    pub is_override: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneProfile {
    pub unit: UnitCode,
    pub zone: ZoneKey,
    pub name: String,
    /// Features with a value for this unit, in key order.
    pub features: Vec<ProfileFeature>,
    pub substrate: Option<String>,
    pub adstrate: Option<String>,
    pub description: Option<String>,
}

impl ZoneProfile {
    #[must_use]
    pub fn feature(&self, key: &str) -> Option<&ProfileFeature> {
        self.features.iter().find(|f| f.key == key)
    }

    /// Features the unit overrides away from its zone.
    pub fn adjustments(&self) -> impl Iterator<Item = &ProfileFeature> {
        self.features.iter().filter(|f| f.is_override && Some(f.value) != f.base)
    }
}

/// `None` when `unit` belongs to no zone.
#[must_use]
pub fn profile(
    repository: &ZoneRepository,
    index: &ReverseIndex,
    unit: &str,
) -> Option<ZoneProfile> {
    let zone = repository.get_zone(index.resolve(unit)?)?;
    let resolver = FeatureResolver::new(repository, index);

    let mut keys: BTreeSet<&str> = zone.features.iter().map(|(k, _)| k).collect();
    if let Some(overrides) = zone.overrides_for(unit) {
        keys.extend(overrides.iter().map(|(k, _)| k));
    }

    let features = keys
        .into_iter()
        .filter_map(|key| {
            let resolution = resolver.resolve(unit, key);
            Some(ProfileFeature {
                key: key.to_owned(),
                label: repository.feature_label(key).into_owned(),
                value: resolution.value?,
                base: resolution.base,
                is_override: resolution.is_override,
            })
        })
        .collect();

    Some(ZoneProfile {
        unit: unit.to_owned(),
        zone: zone.key.clone(),
        name: zone.name.clone(),
        features,
        substrate: zone.substrate.clone(),
        adstrate: zone.adstrate.clone(),
        description: zone.description.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_merges_zone_and_override_features() {
        let raw = json!({
            "zones": {
                "sur_espana": {
                    "nombre": "Sur de España",
                    "features": { "seseo": 2, "yeismo": 1 },
                    "admin_units": ["ES-AN", "ES-CN"],
                    "admin_overrides": { "ES-CN": { "seseo": 1, "ustedeo": 0 } },
                    "sustrato": "Mozárabe"
                }
            },
            "feature_descriptions": { "seseo": { "nombre": "Seseo" } }
        });
        let repo = ZoneRepository::load(&raw).unwrap_or_default();
        let index = ReverseIndex::build(repo.zones());

        let canary = profile(&repo, &index, "ES-CN").expect("ES-CN is mapped");
        let keys: Vec<&str> = canary.features.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["seseo", "ustedeo", "yeismo"]);
        assert_eq!(canary.name, "Sur de España");
        assert_eq!(canary.substrate.as_deref(), Some("Mozárabe"));
        assert_eq!(canary.adjustments().count(), 2);
        assert_eq!(canary.feature("ustedeo").map(|f| f.label.as_str()), Some("Ustedeo"));

        let andalusia = profile(&repo, &index, "ES-AN").expect("ES-AN is mapped");
        assert_eq!(andalusia.features.len(), 2);
        assert_eq!(andalusia.adjustments().count(), 0);

        assert!(profile(&repo, &index, "FR").is_none());
    }
}
