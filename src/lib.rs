//! mage-stage
//!
//! A decorative voxel mage for a personal web page. The character is built
//! procedurally out of boxes and a few cylinders, lit and tone mapped with
//! wgpu, bobs and glows on its own, and can be turned by dragging. Next to the
//! stage the crate carries the page's scroll reveal glue.
//!
//! High-level modules
//! - `scene`: the procedural scene builder (palette, character, staff, platform, lights)
//! - `interaction`: drag-to-rotate state machine with auto rotation while idle
//! - `animation`: the closed-form per-frame animation
//! - `stage`: the flow tying scene, input, animation and rendering together
//! - `camera`, `context`, `pipelines`, `render`, `resources`: the GPU side
//! - `data_structures`: transforms, materials, volumes and the scene graph
//! - `flow`: the application event loop and lifecycle hooks
//! - `viewport`: surface sizing from the container size and pixel ratio
//! - `reveal`: scroll reveal timing and one-shot bookkeeping
//! - `web`: browser entry point and DOM wiring (wasm32 only)

pub mod animation;
pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod error;
pub mod flow;
pub mod interaction;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod reveal;
pub mod scene;
pub mod stage;
pub mod viewport;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{RevealConfig, StageConfig};
pub use error::ConfigurationError;
pub use stage::{CharacterStage, stage_constructor};
