//! Tri-state feature values and lenient feature maps.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Tri-state value of a linguistic feature in a zone.
///
/// Anything outside `0`, `1`, `2` means "no data" and is represented by the
/// absence of a value, never by a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum FeatureValue {
    Absent = 0,
    Present = 1,
    Variable = 2,
}

impl FeatureValue {
    /// Interprets a raw document value.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Variable),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Spanish badge text used by the panels.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Absent => "Ausente",
            Self::Present => "Presente",
            Self::Variable => "Variable",
        }
    }
}

impl Serialize for FeatureValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_raw())
    }
}

/// Feature key → tri-state value.
///
/// Deserialization drops every entry whose value is not `0`, `1` or `2`
/// (including `null`, strings and floats).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureMap(BTreeMap<String, FeatureValue>);

impl FeatureMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<FeatureValue> {
        self.0.get(key).copied()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FeatureValue) {
        self.0.insert(key.into(), value);
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FeatureValue)> for FeatureMap {
    fn from_iter<I: IntoIterator<Item = (K, FeatureValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(i64),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for FeatureMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, RawValue>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(key, value)| match value {
                    RawValue::Number(n) => FeatureValue::from_raw(n).map(|v| (key, v)),
                    RawValue::Other(_) => None,
                })
                .collect(),
        ))
    }
}
