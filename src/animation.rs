//! The per-frame update of the stage.
//!
//! Everything is a closed-form function of the elapsed time `t` in seconds,
//! except the yaw which the [`crate::interaction::RotationController`] smooths
//! over frames and passes in.

use crate::{
    data_structures::instance::{Axis, rotation_about},
    scene::{CHARACTER_BASELINE_Y, Scene, platform::PARTICLE_BASE_HEIGHT},
};

/// A sine oscillation `baseline + amplitude * sin(frequency * t + phase)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    pub baseline: f32,
    pub amplitude: f32,
    pub frequency: f32,
}

impl Pulse {
    pub const fn new(baseline: f32, amplitude: f32, frequency: f32) -> Self {
        Self {
            baseline,
            amplitude,
            frequency,
        }
    }

    pub fn at(&self, t: f32) -> f32 {
        self.at_phase(t, 0.0)
    }

    pub fn at_phase(&self, t: f32, phase: f32) -> f32 {
        self.baseline + self.amplitude * (self.frequency * t + phase).sin()
    }
}

pub const GEM_GLOW: Pulse = Pulse::new(0.4, 0.3, 2.5);
pub const ORB_CORE_GLOW: Pulse = Pulse::new(0.6, 0.4, 3.0);
pub const PLATFORM_GLOW: Pulse = Pulse::new(0.15, 0.1, 1.8);
/// Phase offset per particle is its index.
pub const PARTICLE_GLOW: Pulse = Pulse::new(0.3, 0.3, 2.0);
/// Phase offset per particle is 0.7 times its index.
pub const PARTICLE_DRIFT: Pulse = Pulse::new(PARTICLE_BASE_HEIGHT, 0.4, 1.5);
pub const PARTICLE_DRIFT_PHASE_STEP: f32 = 0.7;
pub const BOB: Pulse = Pulse::new(CHARACTER_BASELINE_Y, 0.12, 1.2);
/// Arm tilt about z. The right arm uses the negated value.
pub const ARM_SWAY: Pulse = Pulse::new(0.0, 0.025, 0.9);

/**
 * Applies one frame of animation at elapsed time `t` with the character
 * turned to `yaw`, then recomputes all world transforms.
 *
 * Particles are driven by their index, so their phases depend on the order in
 * which they were built.
 */
pub fn animate(scene: &mut Scene, t: f32, yaw: f32) {
    {
        let root = scene.root.local_transform_mut();
        root.rotation = rotation_about(Axis::Y, yaw);
        root.position.y = BOB.at(t);
    }

    let sway = ARM_SWAY.at(t);
    let arms = [
        (scene.handles.left_arm.clone(), sway),
        (scene.handles.right_arm.clone(), -sway),
    ];
    for (path, tilt) in arms {
        if let Some(arm) = scene.node_mut(&path) {
            arm.local_transform_mut().set_tilt(Axis::Z, tilt);
        }
    }

    scene.handles.gem.set_emissive_intensity(GEM_GLOW.at(t));
    scene.handles.orb_core.set_emissive_intensity(ORB_CORE_GLOW.at(t));
    scene.handles.platform.set_emissive_intensity(PLATFORM_GLOW.at(t));

    for (i, material) in scene.handles.particle_materials.iter().enumerate() {
        material.set_emissive_intensity(PARTICLE_GLOW.at_phase(t, i as f32));
    }
    let particles = scene.handles.particles.clone();
    if let Some(group) = scene.node_mut(&particles) {
        for (i, particle) in group.get_children_mut().iter_mut().enumerate() {
            let phase = i as f32 * PARTICLE_DRIFT_PHASE_STEP;
            particle.local_transform_mut().position.y = PARTICLE_DRIFT.at_phase(t, phase);
        }
    }

    scene.update_world_transforms();
}
