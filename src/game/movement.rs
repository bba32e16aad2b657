use crate::config::*;
use crate::game::physics::{self, Bounds};
use crate::game::player::PlayerCell;

/// Advance every cell one frame toward `target` (world space).
pub fn integrate(cells: &mut [PlayerCell], target: (f64, f64), bounds: Bounds) {
    for cell in cells.iter_mut() {
        integrate_cell(cell, target, bounds);
    }
}

pub fn integrate_cell(cell: &mut PlayerCell, target: (f64, f64), bounds: Bounds) {
    cell.tick_cooldown();

    let radius = cell.radius();
    let speed = speed_for_radius(radius);
    let dx = target.0 - cell.body.x;
    let dy = target.1 - cell.body.y;
    if dx.hypot(dy) > SEEK_DEADZONE {
        let (nx, ny) = physics::direction(dx, dy);
        cell.body.x += nx * speed;
        cell.body.y += ny * speed;
    }

    // Residual impulse from splits and pops
    cell.body.x += cell.body.vx;
    cell.body.y += cell.body.vy;
    cell.body.vx *= DRAG;
    cell.body.vy *= DRAG;

    keep_cell_in_bounds(cell, bounds);
}

/// Re-clamp after collisions, which can push or grow a cell past the edge.
pub fn keep_in_bounds(cells: &mut [PlayerCell], bounds: Bounds) {
    for cell in cells.iter_mut() {
        keep_cell_in_bounds(cell, bounds);
    }
}

fn keep_cell_in_bounds(cell: &mut PlayerCell, bounds: Bounds) {
    let (x, y) = bounds.clamp(cell.body.x, cell.body.y, cell.radius());
    cell.body.x = x;
    cell.body.y = y;
}
