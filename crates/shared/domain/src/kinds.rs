use crate::constants::{KIND_FEATURE, KIND_TEXT};
use bitflags::bitflags;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

bitflags! {
    /// Kinds of challenge questions a session may generate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ChallengeKinds: u32 {
        const FEATURE = 1 << 0;
        const TEXT = 1 << 1;

        const ALL = Self::FEATURE.bits() | Self::TEXT.bits();
    }
}

impl Default for ChallengeKinds {
    fn default() -> Self {
        Self::FEATURE
    }
}

impl FromStr for ChallengeKinds {
    type Err = String;

    /// Parses `feature`, `text`, `all`/`*` or a `|`/`,` separated list of them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(['|', ',']).map(str::trim).try_fold(Self::empty(), |acc, part| {
            let kind = match part {
                KIND_FEATURE => Self::FEATURE,
                KIND_TEXT => Self::TEXT,
                "all" | "*" => Self::ALL,
                other => return Err(format!("unknown challenge kind '{other}'")),
            };
            Ok(acc | kind)
        })
    }
}

impl From<u32> for ChallengeKinds {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for ChallengeKinds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKinds {
    Bits(u32),
    Names(String),
}

impl<'de> Deserialize<'de> for ChallengeKinds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let kinds = match RawKinds::deserialize(deserializer)? {
            RawKinds::Bits(bits) => {
                Self::from_bits(bits).ok_or_else(|| D::Error::custom(format!("unknown challenge kind bits {bits:#b}")))?
            },
            RawKinds::Names(names) => names.parse().map_err(D::Error::custom)?,
        };
        if kinds.is_empty() {
            return Err(D::Error::custom("at least one challenge kind is required"));
        }
        Ok(kinds)
    }
}
