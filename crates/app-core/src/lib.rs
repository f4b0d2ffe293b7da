pub mod animate;
pub mod camera;
pub mod constants;
pub mod gfx;
pub mod input;
pub mod layout;
pub mod scene;
pub mod words;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animate::*;
pub use camera::*;
pub use constants::*;
pub use gfx::*;
pub use input::*;
pub use layout::*;
pub use scene::*;
pub use words::*;
