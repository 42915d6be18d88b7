pub mod atlas;
pub mod challenge;
pub mod quiz;

use dialecta::features::atlas::Atlas;

/// Display names of `keys`, comma separated; unknown keys print as-is.
fn zone_names<'a>(atlas: &Atlas, keys: impl IntoIterator<Item = &'a String>) -> String {
    keys.into_iter()
        .map(|key| atlas.repository.get_zone(key).map_or(key.as_str(), |z| z.name.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}
