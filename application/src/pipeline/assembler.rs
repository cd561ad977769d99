//! Domain assembly
//!
//! Builds the Radar/Quadrant/Ring/Blip graph from sanitized rows.

use radar_domain::radar::ring::MAX_RINGS;
use radar_domain::{Blip, BlipRow, Quadrant, Radar, RadarError, Ring, capitalize};
use std::sync::Arc;
use tracing::debug;

/// Assemble one immutable [`Radar`] from sanitized rows.
///
/// Distinct ring names are collected in first-seen order and capped at
/// four; discovery order governs only that cap — each ring's `order`
/// is its fixed semantic rank. Quadrants are created lazily on first
/// reference, keyed by the verbatim quadrant value, named with its
/// capitalized form, and kept in first-seen order. Blips within a
/// quadrant share the load-scoped ring values.
pub fn assemble(
    rows: &[BlipRow],
    current_sheet_name: &str,
    alternative_sheet_names: &[String],
) -> Result<Radar, RadarError> {
    let rings = build_ring_registry(rows)?;

    let mut quadrant_keys: Vec<String> = Vec::new();
    let mut quadrants: Vec<Quadrant> = Vec::new();

    for row in rows {
        let index = match quadrant_keys.iter().position(|k| k == &row.quadrant) {
            Some(index) => index,
            None => {
                quadrant_keys.push(row.quadrant.clone());
                quadrants.push(Quadrant::new(capitalize(&row.quadrant)));
                quadrants.len() - 1
            }
        };

        let order = Ring::order_of(&row.ring)?;
        // The registry slot is filled for every ring name that survived
        // discovery; a miss here means the row list changed under us.
        let ring = rings[order]
            .clone()
            .ok_or_else(|| RadarError::UnknownRing(row.ring.clone()))?;

        quadrants[index].add(Blip::new(
            &row.name,
            ring,
            row.is_new,
            &row.topic,
            &row.description,
        ));
    }

    let mut radar = Radar::new();
    for quadrant in quadrants {
        radar.add_quadrant(quadrant);
    }
    for sheet_name in alternative_sheet_names {
        radar.add_alternative(sheet_name);
    }
    radar.set_current_sheet(current_sheet_name);

    debug!(
        quadrants = radar.quadrants().len(),
        blips = radar.blip_count(),
        "Assembled radar"
    );
    Ok(radar)
}

/// Collect distinct ring names in first-seen order and resolve each to
/// a shared [`Ring`] keyed by its fixed order.
///
/// Distinctness is on the verbatim string, so two casings of one ring
/// are two discoveries that resolve to the same slot (the later one
/// wins) while both count toward the cap. The cap check re-runs here
/// even though the validator already enforces it.
fn build_ring_registry(rows: &[BlipRow]) -> Result<[Option<Arc<Ring>>; MAX_RINGS], RadarError> {
    let mut discovered: Vec<&str> = Vec::new();
    for row in rows {
        if !discovered.contains(&row.ring.as_str()) {
            discovered.push(&row.ring);
        }
    }
    if discovered.len() > MAX_RINGS {
        return Err(RadarError::too_many_rings(discovered.len()));
    }

    let mut rings: [Option<Arc<Ring>>; MAX_RINGS] = [None, None, None, None];
    for name in discovered {
        let ring = Ring::new(name)?;
        let order = ring.order();
        rings[order] = Some(Arc::new(ring));
    }
    Ok(rings)
}
