//! Per-frame collision resolution. Runs cell/cell, then food, then viruses;
//! every population change to the entity collections happens here.

use rand::Rng;
use std::f64::consts::TAU;
use tracing::debug;

use crate::config::*;
use crate::game::food::{Food, Virus};
use crate::game::physics::{self, Bounds};
use crate::game::player::PlayerCell;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvents {
    pub merges: usize,
    pub food_eaten: usize,
    pub pops: usize,
}

pub fn resolve<R: Rng + ?Sized>(
    cells: &mut Vec<PlayerCell>,
    foods: &mut [Food],
    viruses: &mut [Virus],
    config: &GameConfig,
    bounds: Bounds,
    rng: &mut R,
) -> CollisionEvents {
    let merges = resolve_cells(cells);
    let food_eaten = consume_food(cells, foods, bounds, rng);
    let pops = pop_viruses(cells, viruses, config, bounds, rng);
    CollisionEvents {
        merges,
        food_eaten,
        pops,
    }
}

/// Push overlapping siblings apart and merge the ones whose cooldowns have expired.
///
/// Pairs are visited as `(i, j)` with `i < j` in collection order. On a merge the heavier
/// cell survives; on equal mass the later cell `j` absorbs `i`. Removal keeps the order of
/// the remaining cells, and scanning resumes at the index the removed cell vacated.
pub fn resolve_cells(cells: &mut Vec<PlayerCell>) -> usize {
    let mut merges = 0;
    let mut i = 0;
    'outer: while i < cells.len() {
        let mut j = i + 1;
        while j < cells.len() {
            let (head, tail) = cells.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            let dx = b.body.x - a.body.x;
            let dy = b.body.y - a.body.y;
            let overlap = a.radius() + b.radius() - dx.hypot(dy);
            if overlap > 0.0 {
                let (nx, ny) = physics::direction(dx, dy);
                let push = overlap / 2.0;
                a.body.x -= nx * push;
                a.body.y -= ny * push;
                b.body.x += nx * push;
                b.body.y += ny * push;

                if a.can_merge() && b.can_merge() {
                    let combined = a.mass() + b.mass();
                    merges += 1;
                    if a.mass() > b.mass() {
                        a.body.set_mass(combined);
                        debug!(survivor = i, absorbed = j, mass = combined, "cells merged");
                        cells.remove(j);
                        continue;
                    }
                    b.body.set_mass(combined);
                    debug!(survivor = j, absorbed = i, mass = combined, "cells merged");
                    cells.remove(i);
                    continue 'outer;
                }
            }
            j += 1;
        }
        i += 1;
    }
    merges
}

/// Each food goes to the first cell (in collection order) containing its centre
/// and is replaced in place by a fresh random food.
pub fn consume_food<R: Rng + ?Sized>(
    cells: &mut [PlayerCell],
    foods: &mut [Food],
    bounds: Bounds,
    rng: &mut R,
) -> usize {
    let mut eaten = 0;
    for food in foods.iter_mut() {
        let (fx, fy) = (food.body.x, food.body.y);
        if let Some(cell) = cells
            .iter_mut()
            .find(|c| c.body.distance_to(fx, fy) < c.radius())
        {
            cell.body.add_mass(food.body.mass());
            *food = Food::random(rng, bounds);
            eaten += 1;
        }
    }
    eaten
}

/// Number of fragments a popped cell breaks into given the current population.
pub fn fragment_count(cell_count: usize, max_cells: usize) -> usize {
    (max_cells + 1)
        .saturating_sub(cell_count)
        .min(MAX_POP_FRAGMENTS)
}

/// Fragment a heavy-enough cell whose centre sits inside each virus. Cells are
/// scanned from the back of the collection, so the highest index wins.
pub fn pop_viruses<R: Rng + ?Sized>(
    cells: &mut Vec<PlayerCell>,
    viruses: &mut [Virus],
    config: &GameConfig,
    bounds: Bounds,
    rng: &mut R,
) -> usize {
    let mut pops = 0;
    for virus in viruses.iter_mut() {
        let (vx, vy) = (virus.body.x, virus.body.y);
        let hit = cells.iter().rposition(|c| {
            c.mass() >= config.hazard_pop_mass && c.body.distance_to(vx, vy) < virus.body.radius()
        });
        let Some(index) = hit else {
            continue;
        };

        let fragments = fragment_count(cells.len(), config.max_cells);
        if fragments <= 1 {
            // No room to fragment; the virus stays put
            continue;
        }

        let cell = cells.remove(index);
        let total = cell.mass() + config.hazard_mass_boost;
        let piece_mass = total / fragments as f64;
        for _ in 0..fragments {
            let mut piece = cell.sibling(piece_mass, config.merge_cooldown_frames);
            let (nx, ny) = physics::heading(rng.gen_range(0.0..TAU));
            piece.body.vx = nx * POP_EJECT_SPEED;
            piece.body.vy = ny * POP_EJECT_SPEED;
            cells.push(piece);
        }
        debug!(fragments, mass = total, "virus popped cell");

        *virus = Virus::random(rng, bounds);
        pops += 1;
    }
    pops
}
