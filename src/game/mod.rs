pub mod body;
pub mod camera;
pub mod collision;
pub mod engine;
pub mod food;
pub mod movement;
pub mod physics;
pub mod player;
pub mod split;
pub mod world;
