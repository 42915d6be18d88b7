use dialecta_atlas::Atlas;
use dialecta_domain::{UnitCode, ZoneKey};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Class a selected zone is marked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Present,
    Variable,
}

/// Debounced click delivered to the selection tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickKind {
    Single,
    Double,
}

/// Zone key → mark. Absence means unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selections(BTreeMap<ZoneKey, Mark>);

impl Selections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set-membership track: unselected ↔ present.
    pub fn toggle(&mut self, zone: &str) -> Option<Mark> {
        if self.0.remove(zone).is_some() {
            None
        } else {
            self.0.insert(zone.to_owned(), Mark::Present);
            Some(Mark::Present)
        }
    }

    /// Three-way track.
    ///
    /// A single click toggles presence and clears a variable mark; a double
    /// click toggles the variable mark.
    pub fn apply(&mut self, zone: &str, click: ClickKind) -> Option<Mark> {
        let next = match (self.get(zone), click) {
            (None, ClickKind::Single) => Some(Mark::Present),
            (Some(_), ClickKind::Single) | (Some(Mark::Variable), ClickKind::Double) => None,
            (_, ClickKind::Double) => Some(Mark::Variable),
        };
        self.set(zone, next);
        next
    }

    /// Single-answer track: the zone replaces any previous selection.
    pub fn replace(&mut self, zone: &str) {
        self.0.clear();
        self.0.insert(zone.to_owned(), Mark::Present);
    }

    fn set(&mut self, zone: &str, mark: Option<Mark>) {
        match mark {
            Some(mark) => {
                self.0.insert(zone.to_owned(), mark);
            },
            None => {
                self.0.remove(zone);
            },
        }
    }

    #[must_use]
    pub fn get(&self, zone: &str) -> Option<Mark> {
        self.0.get(zone).copied()
    }

    #[must_use]
    pub fn contains(&self, zone: &str) -> bool {
        self.0.contains_key(zone)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Mark)> {
        self.0.iter().map(|(z, m)| (z.as_str(), *m))
    }

    /// Zones carrying `mark`.
    #[must_use]
    pub fn with_mark(&self, mark: Mark) -> BTreeSet<ZoneKey> {
        self.iter().filter(|(_, m)| *m == mark).map(|(z, _)| z.to_owned()).collect()
    }

    /// Every selected zone regardless of mark.
    #[must_use]
    pub fn zones(&self) -> BTreeSet<ZoneKey> {
        self.0.keys().cloned().collect()
    }

    /// Marks spread onto the expanded member units of each zone.
    #[must_use]
    pub fn units(&self, atlas: &Atlas) -> BTreeMap<UnitCode, Mark> {
        self.iter()
            .flat_map(|(zone, mark)| atlas.expand(zone).into_iter().map(move |u| (u, mark)))
            .collect()
    }
}

impl FromIterator<(ZoneKey, Mark)> for Selections {
    fn from_iter<I: IntoIterator<Item = (ZoneKey, Mark)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
