//! Line of sight in the ground plane.

use game_core::{ArenaLayout, Circle, Unit, UnitId, Vec3};

/// First thing a shot would strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    Unit(UnitId),
    Obstacle,
}

/// First obstacle or living unit (other than `shooter`) entered by the
/// segment `from -> to`.
///
/// Units are discs of `unit_radius`. On equal distances obstacles win.
pub fn first_hit(
    from: Vec3,
    to: Vec3,
    shooter: UnitId,
    units: &[Unit],
    layout: &ArenaLayout,
    unit_radius: f32,
) -> Option<Hit> {
    let obstacles = layout
        .obstacles
        .iter()
        .filter_map(|obstacle| obstacle.segment_entry(from, to))
        .map(|distance| (distance, Hit::Obstacle));

    let bodies = units
        .iter()
        .filter(|unit| unit.is_alive() && unit.id != shooter)
        .filter_map(|unit| {
            Circle::new(unit.position, unit_radius)
                .segment_entry(from, to)
                .map(|distance| (distance, Hit::Unit(unit.id)))
        });

    obstacles
        .chain(bodies)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, hit)| hit)
}
