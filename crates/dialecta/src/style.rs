use dialecta_domain::UnitCode;
use dialecta_domain::value::FeatureValue;
use serde::Serialize;
use std::collections::BTreeSet;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Visual class the rendering collaborator maps to colors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Style {
    Neutral,
    Selected,
    SelectedVariable,
    Correct,
    Missed,
    Wrong,
    Present,
    Absent,
    Variable,
}

impl From<Option<FeatureValue>> for Style {
    fn from(value: Option<FeatureValue>) -> Self {
        match value {
            Some(FeatureValue::Present) => Self::Present,
            Some(FeatureValue::Variable) => Self::Variable,
            Some(FeatureValue::Absent) => Self::Absent,
            None => Self::Neutral,
        }
    }
}

/// Restyle `units` with `style`. Requests apply in order; later ones win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleRequest {
    pub units: BTreeSet<UnitCode>,
    pub style: Style,
}

impl StyleRequest {
    #[must_use]
    pub const fn new(units: BTreeSet<UnitCode>, style: Style) -> Self {
        Self { units, style }
    }

    /// Final style of every touched unit after applying `requests` in order.
    #[must_use]
    pub fn resolve(requests: &[Self]) -> std::collections::BTreeMap<&str, Style> {
        let mut styles = std::collections::BTreeMap::new();
        for request in requests {
            for unit in &request.units {
                styles.insert(unit.as_str(), request.style);
            }
        }
        styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names_are_snake_case() {
        assert_eq!(Style::SelectedVariable.to_string(), "selected_variable");
        let name: &'static str = Style::Missed.into();
        assert_eq!(name, "missed");
        assert_eq!(Style::iter().count(), 9);
    }

    #[test]
    fn later_requests_win() {
        let units = |u: &[&str]| u.iter().map(|&s| s.to_owned()).collect();
        let requests = [
            StyleRequest::new(units(&["A", "B"]), Style::Neutral),
            StyleRequest::new(units(&["B"]), Style::Wrong),
        ];
        let styles = StyleRequest::resolve(&requests);
        assert_eq!(styles.get("A"), Some(&Style::Neutral));
        assert_eq!(styles.get("B"), Some(&Style::Wrong));
    }

    #[test]
    fn feature_values_map_to_styles() {
        assert_eq!(Style::from(Some(FeatureValue::Variable)), Style::Variable);
        assert_eq!(Style::from(None), Style::Neutral);
    }
}
