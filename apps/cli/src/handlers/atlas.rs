use super::zone_names;
use anyhow::Result;
use dialecta::features::atlas::Atlas;
use dialecta::{Mode, Session, Style, StyleRequest};
use tracing::debug;

/// Prints the profile of `unit`.
///
/// # Errors
/// Never fails; the signature matches the other handlers.
pub fn explore(session: &Session, unit: &str) -> Result<()> {
    let Some(profile) = session.explore(unit) else {
        println!("{unit}: esta región no está incluida en los datos lingüísticos.");
        return Ok(());
    };

    println!("{} ({}) → {}", profile.unit, profile.zone, profile.name);
    for feature in &profile.features {
        let note = if feature.is_override && Some(feature.value) != feature.base {
            format!(
                "  [ajuste local; zona: {}]",
                feature.base.map_or("sin datos", |v| v.label())
            )
        } else {
            String::new()
        };
        println!("  {:<32} {}{note}", feature.label, feature.value.label());
    }
    println!("Sustrato: {}", profile.substrate.as_deref().unwrap_or("No especificado"));
    if let Some(adstrate) = &profile.adstrate {
        println!("Adstrato: {adstrate}");
    }
    if let Some(description) = &profile.description {
        println!("{description}");
    }
    Ok(())
}

/// # Errors
/// Never fails; the signature matches the other handlers.
pub fn resolve(atlas: &Atlas, unit: &str, feature: &str) -> Result<()> {
    let r = atlas.resolve(unit, feature);
    let Some(zone) = &r.zone else {
        println!("{unit}: sin zona");
        return Ok(());
    };

    let value = r.value.map_or("sin datos", |v| v.label());
    let origin = if r.is_override { "ajuste local" } else { "zona" };
    println!("{unit} ({zone}) {feature}: {value} [{origin}]");
    Ok(())
}

/// # Errors
/// Never fails; the signature matches the other handlers.
pub fn expand(atlas: &Atlas, zone: &str) -> Result<()> {
    let units = atlas.expand(zone);
    if units.is_empty() {
        println!("{zone}: zona desconocida");
    } else {
        println!("{zone}: {}", units.into_iter().collect::<Vec<_>>().join(", "));
    }
    Ok(())
}

/// # Errors
/// Never fails; the signature matches the other handlers.
pub fn filter(session: &mut Session, feature: &str) -> Result<()> {
    session.switch_mode(Mode::Filter);
    let (result, styles) = session.filter(feature);
    let atlas = session.atlas();

    println!("Rasgo: {}", result.label);
    for (title, zones) in [
        ("✓ Presente en", &result.present),
        ("~ Variable en", &result.variable),
        ("✗ Ausente en", &result.absent),
        ("Sin datos", &result.no_data),
    ] {
        if !zones.is_empty() {
            println!("{title}: {}", zone_names(atlas, zones));
        }
    }

    let c = result.counts;
    println!("Unidades: {} presente, {} variable, {} ausente", c.present, c.variable, c.absent);

    let colored = StyleRequest::resolve(&styles).into_values().filter(|s| *s != Style::Neutral).count();
    debug!(colored, "Filter styles resolved");

    let adjusted = result
        .units
        .iter()
        .filter(|(unit, value)| atlas.zone_of(unit).map(|z| z.features.get(feature)) != Some(**value))
        .map(|(unit, _)| unit.as_str())
        .collect::<Vec<_>>();
    if !adjusted.is_empty() {
        println!("Ajustes locales: {}", adjusted.join(", "));
    }
    Ok(())
}
