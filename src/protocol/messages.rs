use serde::{Deserialize, Serialize};

use crate::game::body::{Entity, EntityKind};
use crate::game::camera::{Camera, CameraState};
use crate::game::player::PlayerCell;

// ── Host → Simulation ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer position in viewport pixels.
    PointerMoved { x: f64, y: f64 },
    Split,
    Resize { width: f64, height: f64 },
}

// ── Simulation → Renderer ──

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EntityState {
    pub kind: EntityKind,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
}

impl EntityState {
    pub fn of<E: Entity>(entity: &E) -> Self {
        let body = entity.body();
        EntityState {
            kind: entity.kind(),
            x: body.x,
            y: body.y,
            radius: body.radius(),
            color: body.color().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CellState {
    #[serde(flatten)]
    pub entity: EntityState,
    pub name: String,
    pub mass: f64,
    /// Whole-number mass shown on the cell.
    pub label_mass: u64,
    pub merging_blocked: bool,
}

impl From<&PlayerCell> for CellState {
    fn from(cell: &PlayerCell) -> Self {
        CellState {
            entity: EntityState::of(cell),
            name: cell.name.clone(),
            mass: cell.mass(),
            label_mass: cell.mass().floor() as u64,
            merging_blocked: !cell.can_merge(),
        }
    }
}

/// Read-only view of one frame, enough to draw it.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub score: u64,
    pub camera: CameraState,
    pub cells: Vec<CellState>,
    pub foods: Vec<EntityState>,
    pub viruses: Vec<EntityState>,
}

impl FrameSnapshot {
    /// Drop everything the camera cannot see.
    pub fn visible(mut self, camera: &Camera) -> Self {
        let view = camera.visible_bounds();
        self.foods.retain(|e| view.touches_circle(e.x, e.y, e.radius));
        self.viruses.retain(|e| view.touches_circle(e.x, e.y, e.radius));
        self.cells
            .retain(|c| view.touches_circle(c.entity.x, c.entity.y, c.entity.radius));
        self
    }
}
