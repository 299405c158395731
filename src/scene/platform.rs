use rand::Rng;

use crate::{
    data_structures::{
        instance::Instance,
        material::MaterialRef,
        scene_graph::ContainerNode,
        volume::Volume,
    },
    scene::palette::Palette,
};

pub const PLATFORM_RADIUS: f32 = 2.4;
pub const PLATFORM_HEIGHT: f32 = 0.08;
pub const PLATFORM_SEGMENTS: u32 = 32;

pub const PARTICLE_SIZE: f32 = 0.09;
pub const PARTICLE_BASE_RADIUS: f32 = 1.8;
pub const PARTICLE_RADIUS_JITTER: f32 = 0.6;
pub const PARTICLE_BASE_HEIGHT: f32 = 2.5;
pub const PARTICLE_HEIGHT_JITTER: f32 = 0.6;

/// The translucent glowing disc under the feet.
pub fn platform(p: &Palette) -> (Volume, Instance, MaterialRef) {
    let material = p.platform();
    let disc = Volume::cylinder(PLATFORM_RADIUS, PLATFORM_HEIGHT, PLATFORM_SEGMENTS, &material);
    (disc, Instance::at(0.0, 2.3, 0.0), material)
}

/**
 * Small gem cubes evenly spread on a ring around the figure.
 *
 * Particle `i` sits at angle `i / count` of a full turn. Its distance from the
 * axis and its starting height are jittered once here and never re-rolled.
 * Every particle gets its own copy of the gem material so that its glow can
 * pulse with its own phase.
 */
pub fn particles<R: Rng>(
    p: &Palette,
    count: usize,
    rng: &mut R,
) -> (ContainerNode, Vec<MaterialRef>) {
    let mut group = ContainerNode::new("particles");
    let mut materials = Vec::with_capacity(count);
    for i in 0..count {
        let angle = i as f32 / count as f32 * std::f32::consts::TAU;
        let radius = PARTICLE_BASE_RADIUS + rng.r#gen::<f32>() * PARTICLE_RADIUS_JITTER;
        let height = PARTICLE_BASE_HEIGHT + rng.r#gen::<f32>() * PARTICLE_HEIGHT_JITTER;

        let material = p.gem.detached(format!("particle {i}"));
        group.add_volume(
            Volume::cuboid(PARTICLE_SIZE, PARTICLE_SIZE, PARTICLE_SIZE, &material),
            Instance::at(angle.cos() * radius, height, angle.sin() * radius),
        );
        materials.push(material);
    }
    (group, materials)
}
