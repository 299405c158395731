use std::f32::consts::PI;

use approx::assert_abs_diff_eq;
use mage_stage::{
    StageConfig,
    animation::{
        ARM_SWAY, BOB, GEM_GLOW, ORB_CORE_GLOW, PARTICLE_DRIFT, PARTICLE_GLOW, PLATFORM_GLOW,
        Pulse, animate,
    },
    data_structures::{
        instance::{Axis, rotation_about},
        scene_graph::SceneNode,
    },
    scene::{Scene, build_scene},
};
use rand::{SeedableRng, rngs::StdRng};

fn scene() -> Scene {
    build_scene(&StageConfig::default(), &mut StdRng::seed_from_u64(11))
}

fn assert_rotation_eq(actual: cgmath::Quaternion<f32>, expected: cgmath::Quaternion<f32>) {
    assert_abs_diff_eq!(actual.s, expected.s, epsilon = 1e-6);
    assert_abs_diff_eq!(actual.v.x, expected.v.x, epsilon = 1e-6);
    assert_abs_diff_eq!(actual.v.y, expected.v.y, epsilon = 1e-6);
    assert_abs_diff_eq!(actual.v.z, expected.v.z, epsilon = 1e-6);
}

#[test]
fn should_evaluate_pulse_as_sine_around_baseline() {
    let pulse = Pulse::new(1.0, 0.5, 2.0);

    assert_abs_diff_eq!(pulse.at(0.0), 1.0);
    assert_abs_diff_eq!(pulse.at(PI / 4.0), 1.5, epsilon = 1e-6);
    assert_abs_diff_eq!(pulse.at_phase(0.0, -PI / 2.0), 0.5, epsilon = 1e-6);
}

#[test]
fn should_start_glows_at_their_baselines() {
    let mut scene = scene();
    animate(&mut scene, 0.0, 0.0);

    assert_abs_diff_eq!(scene.handles.gem.emissive_intensity(), 0.4);
    assert_abs_diff_eq!(scene.handles.orb_core.emissive_intensity(), 0.6);
    assert_abs_diff_eq!(scene.handles.platform.emissive_intensity(), 0.15);
}

#[test]
fn should_pulse_glows_over_time() {
    let mut scene = scene();
    let t = 1.3;
    animate(&mut scene, t, 0.0);

    assert_abs_diff_eq!(scene.handles.gem.emissive_intensity(), GEM_GLOW.at(t));
    assert_abs_diff_eq!(
        scene.handles.orb_core.emissive_intensity(),
        ORB_CORE_GLOW.at(t)
    );
    assert_abs_diff_eq!(
        scene.handles.platform.emissive_intensity(),
        PLATFORM_GLOW.at(t)
    );
    for (i, material) in scene.handles.particle_materials.iter().enumerate() {
        assert_abs_diff_eq!(
            material.emissive_intensity(),
            PARTICLE_GLOW.at_phase(t, i as f32)
        );
    }
}

#[test]
fn should_pulse_particles_independently_of_the_gem() {
    let mut scene = scene();
    animate(&mut scene, 0.5, 0.0);

    let gem = scene.handles.gem.emissive_intensity();
    let first = scene.handles.particle_materials[0].emissive_intensity();
    let second = scene.handles.particle_materials[1].emissive_intensity();
    assert!((first - second).abs() > 1e-3);
    assert!((gem - second).abs() > 1e-3);
}

#[test]
fn should_keep_the_scene_shape_across_frames() {
    let mut scene = scene();
    for frame in 0..120 {
        animate(&mut scene, frame as f32 / 60.0, frame as f32 * 0.01);
    }

    assert_eq!(scene.volume_count(), 122);
    assert_eq!(scene.particle_count(), 10);
}

#[test]
fn should_bob_and_turn_the_character_root() {
    let mut scene = scene();
    let t = PI / (2.0 * BOB.frequency);
    animate(&mut scene, t, 1.0);

    let root = scene.root.get_local_transform();
    assert_abs_diff_eq!(root.position.y, -5.5 + 0.12, epsilon = 1e-5);
    assert_rotation_eq(root.rotation, rotation_about(Axis::Y, 1.0));
}

#[test]
fn should_sway_arms_in_opposition() {
    let mut scene = scene();
    let t = PI / (2.0 * ARM_SWAY.frequency);
    animate(&mut scene, t, 0.0);

    let tilt = |path| {
        scene
            .node(path)
            .expect("arm handle resolves")
            .get_local_transform()
            .rotation
    };
    assert_rotation_eq(tilt(&scene.handles.left_arm), rotation_about(Axis::Z, 0.025));
    assert_rotation_eq(tilt(&scene.handles.right_arm), rotation_about(Axis::Z, -0.025));
}

#[test]
fn should_drift_particles_with_staggered_phase() {
    let mut scene = scene();
    let t = 2.0;
    animate(&mut scene, t, 0.0);

    let particles = scene
        .node(&scene.handles.particles)
        .expect("particle group exists");
    for (i, particle) in particles.get_children().iter().enumerate() {
        let y = particle.get_local_transform().position.y;
        assert_abs_diff_eq!(y, PARTICLE_DRIFT.at_phase(t, i as f32 * 0.7), epsilon = 1e-6);
    }
}

#[test]
fn should_update_world_transforms_after_animating() {
    let mut scene = scene();
    animate(&mut scene, 0.0, 0.0);

    let arm = scene
        .node(&scene.handles.left_arm)
        .expect("arm handle resolves");
    let hand = arm.get_children()[4].get_world_transform();
    // Hand at (-1.3, 4.38, 0) in character space, character root at y = -5.5
    assert_abs_diff_eq!(hand.position.x, -1.3, epsilon = 1e-5);
    assert_abs_diff_eq!(hand.position.y, 4.38 - 5.5, epsilon = 1e-5);
}
