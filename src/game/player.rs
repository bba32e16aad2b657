use crate::game::body::{Body, Entity, EntityKind};

#[derive(Debug, Clone)]
pub struct PlayerCell {
    pub body: Body,
    pub name: String,
    pub merge_cooldown: u32, // frames until this cell may merge with a sibling
}

impl PlayerCell {
    pub fn new(x: f64, y: f64, mass: f64, color: String, name: String) -> Self {
        PlayerCell {
            body: Body::new(x, y, mass, color),
            name,
            merge_cooldown: 0,
        }
    }

    /// Fresh copy at the same spot sharing color and name, as produced by splits and pops.
    pub fn sibling(&self, mass: f64, cooldown: u32) -> Self {
        let mut cell = PlayerCell::new(
            self.body.x,
            self.body.y,
            mass,
            self.body.color().to_string(),
            self.name.clone(),
        );
        cell.merge_cooldown = cooldown;
        cell
    }

    pub fn mass(&self) -> f64 {
        self.body.mass()
    }

    pub fn radius(&self) -> f64 {
        self.body.radius()
    }

    pub fn can_merge(&self) -> bool {
        self.merge_cooldown == 0
    }

    pub fn tick_cooldown(&mut self) {
        self.merge_cooldown = self.merge_cooldown.saturating_sub(1);
    }
}

impl Entity for PlayerCell {
    fn body(&self) -> &Body {
        &self.body
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Cell
    }
}

pub fn total_mass(cells: &[PlayerCell]) -> f64 {
    cells.iter().map(|c| c.mass()).sum()
}

/// Mass-weighted centre of the given cells, `None` when there are none.
pub fn mass_centroid(cells: &[PlayerCell]) -> Option<(f64, f64)> {
    if cells.is_empty() {
        return None;
    }
    let total = total_mass(cells);
    if total <= 0.0 {
        return Some((cells[0].body.x, cells[0].body.y));
    }
    let cx = cells.iter().map(|c| c.body.x * c.mass()).sum::<f64>() / total;
    let cy = cells.iter().map(|c| c.body.y * c.mass()).sum::<f64>() / total;
    Some((cx, cy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: f64, y: f64, mass: f64) -> PlayerCell {
        PlayerCell::new(x, y, mass, "blue".into(), "p".into())
    }

    #[test]
    fn cooldown_never_goes_negative() {
        let mut c = cell(0.0, 0.0, 10.0);
        c.merge_cooldown = 2;
        c.tick_cooldown();
        c.tick_cooldown();
        c.tick_cooldown();
        assert_eq!(c.merge_cooldown, 0);
        assert!(c.can_merge());
    }

    #[test]
    fn centroid_is_mass_weighted() {
        let cells = vec![cell(0.0, 0.0, 30.0), cell(100.0, 40.0, 10.0)];
        assert_eq!(mass_centroid(&cells), Some((25.0, 10.0)));
        assert_eq!(total_mass(&cells), 40.0);
        assert_eq!(mass_centroid(&[]), None);
    }

    #[test]
    fn sibling_copies_identity() {
        let mut parent = cell(5.0, 6.0, 40.0);
        parent.body.vx = 3.0;
        let child = parent.sibling(20.0, 1800);
        assert_eq!((child.body.x, child.body.y), (5.0, 6.0));
        assert_eq!(child.body.vx, 0.0);
        assert_eq!(child.mass(), 20.0);
        assert_eq!(child.merge_cooldown, 1800);
        assert_eq!(child.body.color(), parent.body.color());
    }
}
