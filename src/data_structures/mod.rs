//! Engine data structures: transforms, materials, volumes and the scene graph.
//!
//! - `instance` holds per-node transformation data and the packed GPU record
//! - `material` is the shared surface description with an animatable glow
//! - `volume` is a sized primitive with a material
//! - `scene_graph` enables hierarchical scene organization
//! - `model` contains mesh definitions and draw helpers
//! - `texture` contains the depth texture wrapper

pub mod instance;
pub mod material;
pub mod model;
pub mod scene_graph;
pub mod texture;
pub mod volume;
