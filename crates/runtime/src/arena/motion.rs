//! Straight-line navigation with simple steering around blockers.

use std::f32::consts::FRAC_PI_4;

use game_core::{ArenaLayout, Unit, Vec3};

/// Heading offsets tried in order when the direct step is blocked.
const STEERING: [f32; 5] = [0.0, FRAC_PI_4, -FRAC_PI_4, 2.0 * FRAC_PI_4, -2.0 * FRAC_PI_4];

/// Moves a unit toward its destination by at most `speed * dt`.
///
/// The unit turns to face its direction of travel. When every steering
/// candidate is blocked it stays put.
pub fn advance(unit: &mut Unit, layout: &ArenaLayout, dt: f32) {
    let Some(destination) = unit.destination else {
        return;
    };
    let step = unit.parameters.speed * dt;
    let destination = destination.with_y(unit.position.y);
    let to_destination = destination - unit.position;
    if step <= 0.0 || to_destination.is_zero() {
        return;
    }

    let heading = to_destination.yaw();
    for offset in STEERING {
        let candidate = if offset == 0.0 {
            unit.position.move_towards(destination, step)
        } else {
            unit.position + Vec3::from_yaw(heading + offset) * step
        };

        if layout.is_reachable(candidate) {
            unit.heading = heading + offset;
            unit.position = candidate;
            return;
        }
    }
}
