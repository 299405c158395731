use std::collections::HashMap;

use crate::data_structures::{model, volume::Shape};

/**
 * This module contains all logic for generating GPU geometry.
 *
 * Nothing is loaded from files: every shape in the scene is a unit primitive
 * created here and stretched by its instance transform.
 */
pub mod mesh;

/// The uploaded unit primitives, one mesh per distinct [`Shape`].
#[derive(Debug, Default)]
pub struct Primitives {
    meshes: HashMap<Shape, model::Mesh>,
}

impl Primitives {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads the mesh for `shape` unless it is already present.
    pub fn ensure(&mut self, device: &wgpu::Device, shape: Shape) -> &model::Mesh {
        self.meshes.entry(shape).or_insert_with(|| {
            let (name, data) = match shape {
                Shape::Cuboid => ("unit cuboid".to_string(), mesh::unit_cuboid()),
                Shape::Cylinder { segments } => (
                    format!("unit cylinder ({segments} segments)"),
                    mesh::unit_cylinder(segments),
                ),
            };
            log::debug!(
                "Uploading {} with {} vertices",
                name,
                data.vertices.len()
            );
            data.upload(device, &name)
        })
    }

    pub fn get(&self, shape: Shape) -> Option<&model::Mesh> {
        self.meshes.get(&shape)
    }
}
