use crate::data_structures::material::MaterialRef;

/// The primitive a volume is drawn with. Both are unit sized and stretched to
/// the volume's dimensions by the instance transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Cuboid,
    /// Upright cylinder approximated with `segments` side faces.
    Cylinder { segments: u32 },
}

/**
 * A `Volume` is a solid primitive with fixed dimensions and a surface material.
 *
 * Its placement lives in the owning [`crate::data_structures::scene_graph::VolumeNode`],
 * so a volume itself never changes after it was built.
 */
#[derive(Clone, Debug)]
pub struct Volume {
    pub shape: Shape,
    /// Width, height and depth. For cylinders width and depth are the diameter.
    pub dims: cgmath::Vector3<f32>,
    pub material: MaterialRef,
}

impl Volume {
    pub fn cuboid(width: f32, height: f32, depth: f32, material: &MaterialRef) -> Self {
        Self {
            shape: Shape::Cuboid,
            dims: cgmath::Vector3::new(width, height, depth),
            material: material.clone(),
        }
    }

    pub fn cylinder(radius: f32, height: f32, segments: u32, material: &MaterialRef) -> Self {
        Self {
            shape: Shape::Cylinder { segments },
            dims: cgmath::Vector3::new(radius * 2.0, height, radius * 2.0),
            material: material.clone(),
        }
    }
}
