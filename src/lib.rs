//! Single-player mass absorption simulation: cells eat food, split, merge
//! back together and shatter on viruses, with a follow camera on top.

pub mod config;
pub mod game;
pub mod protocol;

pub use config::{ConfigError, GameConfig};
pub use game::camera::{Camera, Viewport};
pub use game::world::{FrameInput, FrameReport, World};
pub use protocol::messages::{FrameSnapshot, InputEvent};
