use rand::Rng;
use serde::Serialize;

use crate::config::mass_to_radius;
use crate::game::physics;

/// Fields every entity shares. Mass is private so the radius can never drift from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    mass: f64,
    radius: f64,
    color: String,
}

impl Body {
    pub fn new(x: f64, y: f64, mass: f64, color: String) -> Self {
        Body {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            mass,
            radius: mass_to_radius(mass),
            color,
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
        self.radius = mass_to_radius(mass);
    }

    pub fn add_mass(&mut self, gained: f64) {
        self.set_mass(self.mass + gained);
    }

    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        physics::distance(self.x, self.y, x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Food,
    Virus,
    Cell,
}

/// Capability shared by everything a renderer draws.
pub trait Entity {
    fn body(&self) -> &Body;
    fn kind(&self) -> EntityKind;
}

pub fn random_hsl<R: Rng + ?Sized>(rng: &mut R, lightness: u8) -> String {
    format!("hsl({:.0}, 70%, {}%)", rng.gen_range(0.0..360.0), lightness)
}
