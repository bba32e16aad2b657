use crate::config::*;
use crate::game::body::{random_hsl, Body, Entity, EntityKind};
use crate::game::physics::Bounds;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Food {
    pub body: Body,
}

impl Food {
    pub fn at(x: f64, y: f64, color: String) -> Self {
        Food {
            body: Body::new(x, y, FOOD_MASS, color),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Self {
        let (x, y) = bounds.random_position(rng, FOOD_SPAWN_MARGIN);
        Food::at(x, y, random_hsl(rng, 50))
    }
}

impl Entity for Food {
    fn body(&self) -> &Body {
        &self.body
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Food
    }
}

/// Stationary hazard that fragments large cells.
#[derive(Debug, Clone)]
pub struct Virus {
    pub body: Body,
}

impl Virus {
    pub fn at(x: f64, y: f64) -> Self {
        Virus {
            body: Body::new(x, y, VIRUS_MASS, VIRUS_COLOR.to_string()),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Self {
        let (x, y) = bounds.random_position(rng, VIRUS_SPAWN_MARGIN);
        Virus::at(x, y)
    }
}

impl Entity for Virus {
    fn body(&self) -> &Body {
        &self.body
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Virus
    }
}
