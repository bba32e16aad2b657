use tracing::debug;

use crate::config::*;
use crate::game::physics;
use crate::game::player::PlayerCell;

/// Split every cell that existed when the command fired, while the population cap allows.
/// New halves are appended after the scan so none of them splits again this call.
/// Returns the number of cells created.
pub fn split_cells(cells: &mut Vec<PlayerCell>, aim: (f64, f64), config: &GameConfig) -> usize {
    let current_count = cells.len();
    let mut new_cells = Vec::new();

    for cell in cells.iter_mut() {
        if cell.mass() < config.min_mass_to_split
            || current_count + new_cells.len() >= config.max_cells
        {
            continue;
        }
        let half = cell.mass() / 2.0;
        cell.body.set_mass(half);
        cell.merge_cooldown = config.merge_cooldown_frames;

        let (nx, ny) = physics::direction(aim.0 - cell.body.x, aim.1 - cell.body.y);
        let mut new_cell = cell.sibling(half, config.merge_cooldown_frames);
        new_cell.body.vx = nx * SPLIT_EJECT_SPEED;
        new_cell.body.vy = ny * SPLIT_EJECT_SPEED;
        cell.body.vx = -nx * SPLIT_EJECT_SPEED / SPLIT_RECOIL_DIVISOR;
        cell.body.vy = -ny * SPLIT_EJECT_SPEED / SPLIT_RECOIL_DIVISOR;
        new_cells.push(new_cell);
    }

    let created = new_cells.len();
    if created > 0 {
        debug!(created, total = current_count + created, "split cells");
    }
    cells.extend(new_cells);
    created
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: f64, y: f64, mass: f64) -> PlayerCell {
        PlayerCell::new(x, y, mass, "c".into(), "n".into())
    }

    #[test]
    fn halves_and_ejects_toward_aim() {
        let config = GameConfig::default();
        let mut cells = vec![cell(100.0, 100.0, 64.0)];
        assert_eq!(split_cells(&mut cells, (200.0, 100.0), &config), 1);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].mass(), 32.0);
        assert_eq!(cells[1].mass(), 32.0);
        assert_eq!(cells[1].body.vx, 25.0);
        assert_eq!(cells[0].body.vx, -5.0);
        assert!(cells.iter().all(|c| c.merge_cooldown == 1800));
    }

    #[test]
    fn small_cells_do_not_split() {
        let config = GameConfig::default();
        let mut cells = vec![cell(100.0, 100.0, 31.9)];
        assert_eq!(split_cells(&mut cells, (0.0, 0.0), &config), 0);
        assert_eq!(cells[0].mass(), 31.9);
        assert_eq!(cells[0].merge_cooldown, 0);
    }

    #[test]
    fn split_stops_at_cap() {
        let config = GameConfig {
            max_cells: 3,
            ..GameConfig::default()
        };
        let mut cells = vec![cell(100.0, 100.0, 64.0), cell(300.0, 100.0, 64.0)];
        assert_eq!(split_cells(&mut cells, (0.0, 0.0), &config), 1);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[1].mass(), 64.0);

        // already at cap
        assert_eq!(split_cells(&mut cells, (0.0, 0.0), &config), 0);
        assert_eq!(cells.len(), 3);
    }

    #[test]
    fn new_halves_are_not_resplit() {
        let config = GameConfig::default();
        let mut cells = vec![cell(100.0, 100.0, 256.0)];
        split_cells(&mut cells, (100.0, 100.0), &config);
        assert_eq!(cells.len(), 2);
        assert!(cells.iter().all(|c| c.mass() == 128.0));
        // aim on top of the cell resolves to angle zero
        assert_eq!(cells[1].body.vx, 25.0);
        assert_eq!(cells[1].body.vy, 0.0);
    }
}
