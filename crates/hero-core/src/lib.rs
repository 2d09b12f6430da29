pub mod animator;
pub mod constants;
pub mod decor;
pub mod error;
pub mod geometry;
pub mod material;
pub mod picking;
pub mod scene;
pub mod scroll;
pub mod smoothing;
pub mod state;

#[cfg(feature = "gpu")]
pub mod render;

pub use animator::*;
pub use constants::*;
pub use error::*;
pub use scene::*;
pub use state::*;

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");
pub static SPRITES_WGSL: &str = include_str!("../shaders/sprites.wgsl");
