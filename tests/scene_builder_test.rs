use std::rc::Rc;

use approx::assert_abs_diff_eq;
use mage_stage::{
    StageConfig,
    data_structures::{
        material::{DEFAULT_METALNESS, DEFAULT_ROUGHNESS, Material, MaterialOptions},
        scene_graph::SceneNode,
        volume::Shape,
    },
    scene::{
        Scene, build_scene,
        platform::{
            PARTICLE_BASE_HEIGHT, PARTICLE_BASE_RADIUS, PARTICLE_HEIGHT_JITTER,
            PARTICLE_RADIUS_JITTER,
        },
        staff::RING_COUNT,
    },
};
use rand::{SeedableRng, rngs::StdRng};

fn seeded_scene(seed: u64) -> Scene {
    build_scene(&StageConfig::default(), &mut StdRng::seed_from_u64(seed))
}

#[test]
fn should_build_every_volume_of_the_figure() {
    let scene = seeded_scene(7);

    assert_eq!(scene.volume_count(), 122);
    assert_eq!(scene.particle_count(), 10);
    assert_eq!(RING_COUNT, 7);
}

#[test]
fn should_follow_configured_particle_count() {
    let config = StageConfig {
        particle_count: 3,
        ..Default::default()
    };
    let scene = build_scene(&config, &mut StdRng::seed_from_u64(1));

    assert_eq!(scene.particle_count(), 3);
    assert_eq!(scene.handles.particle_materials.len(), 3);
    assert_eq!(scene.volume_count(), 115);
}

#[test]
fn should_share_gem_material_between_visor_belt_and_orb() {
    let scene = seeded_scene(7);
    let mut sharing = 0;
    scene.root.visit_volumes(&mut |_, volume| {
        if Rc::ptr_eq(&volume.material, &scene.handles.gem) {
            sharing += 1;
        }
    });

    assert_eq!(sharing, 6);
}

#[test]
fn should_give_every_particle_its_own_material() {
    let scene = seeded_scene(7);
    let materials = &scene.handles.particle_materials;

    for (i, a) in materials.iter().enumerate() {
        assert!(!Rc::ptr_eq(a, &scene.handles.gem));
        assert!(a.is_emissive());
        for b in &materials[i + 1..] {
            assert!(!Rc::ptr_eq(a, b));
        }
    }
}

#[test]
fn should_apply_material_defaults() {
    let material = Material::new("plain", 0xffffff, MaterialOptions::default());

    assert_abs_diff_eq!(material.roughness(), DEFAULT_ROUGHNESS);
    assert_abs_diff_eq!(material.roughness(), 0.7);
    assert_abs_diff_eq!(material.metalness(), DEFAULT_METALNESS);
    assert_abs_diff_eq!(material.metalness(), 0.05);
    assert!(!material.is_emissive());
    assert!(!material.is_transparent());
    assert_abs_diff_eq!(material.opacity(), 1.0);
    assert_eq!(material.emissive_color(), [0.0; 3]);
}

#[test]
fn should_make_only_the_platform_translucent() {
    let scene = seeded_scene(7);
    let mut translucent = Vec::new();
    scene.root.visit_volumes(&mut |_, volume| {
        if volume.material.is_transparent() {
            translucent.push(volume.shape);
        }
    });

    assert_eq!(translucent, vec![Shape::Cylinder { segments: 32 }]);
    assert!(scene.handles.platform.is_transparent());
    assert_abs_diff_eq!(scene.handles.platform.opacity(), 0.3);
    assert_abs_diff_eq!(scene.handles.platform.roughness(), 0.5);
    assert_abs_diff_eq!(scene.handles.platform.metalness(), 0.3);
}

#[test]
fn should_resolve_animation_handles() {
    let scene = seeded_scene(7);

    let name = |path| scene.node(path).map(|node| node.name().to_string());
    assert_eq!(name(&scene.handles.left_arm).as_deref(), Some("left arm"));
    assert_eq!(name(&scene.handles.right_arm).as_deref(), Some("right arm"));
    assert_eq!(name(&scene.handles.staff).as_deref(), Some("staff"));
    assert_eq!(name(&scene.handles.particles).as_deref(), Some("particles"));
}

#[test]
fn should_place_character_staff_and_camera() {
    let scene = seeded_scene(7);

    let root = scene.root.get_local_transform();
    assert_abs_diff_eq!(root.position.y, -5.5);

    let staff = scene
        .node(&scene.handles.staff)
        .expect("staff handle resolves")
        .get_local_transform();
    assert_abs_diff_eq!(staff.position.x, 1.6);
    assert_abs_diff_eq!(staff.position.y, -1.5);
    assert_abs_diff_eq!(staff.position.z, 0.2);

    assert_abs_diff_eq!(scene.camera.position.z, 20.0);
    assert_abs_diff_eq!(scene.camera.position.y, 3.5);
    assert_abs_diff_eq!(scene.camera.target.y, 2.5);
}

#[test]
fn should_compose_world_transforms_through_groups() {
    let scene = seeded_scene(7);

    // Shoulder groups sit at (±1.2, 6.55, 0) inside the character root
    let shoulder = scene
        .root
        .get_children()
        .iter()
        .find(|child| child.name() == "left shoulder")
        .expect("left shoulder exists");
    let base = shoulder.get_children()[0].get_world_transform();
    assert_abs_diff_eq!(base.position.x, -1.2, epsilon = 1e-5);
    assert_abs_diff_eq!(base.position.y, 6.55 - 5.5, epsilon = 1e-5);
}

#[test]
fn should_scatter_particles_within_the_jitter_ring() {
    let scene = seeded_scene(42);
    let particles = scene
        .node(&scene.handles.particles)
        .expect("particle group exists");

    for particle in particles.get_children() {
        let p = particle.get_local_transform().position;
        let radius = (p.x * p.x + p.z * p.z).sqrt();
        assert!(radius >= PARTICLE_BASE_RADIUS - 1e-4);
        assert!(radius < PARTICLE_BASE_RADIUS + PARTICLE_RADIUS_JITTER + 1e-4);
        assert!(p.y >= PARTICLE_BASE_HEIGHT);
        assert!(p.y <= PARTICLE_BASE_HEIGHT + PARTICLE_HEIGHT_JITTER);
    }
}

#[test]
fn should_place_particle_i_at_its_share_of_the_turn() {
    let scene = seeded_scene(3);
    let particles = scene
        .node(&scene.handles.particles)
        .expect("particle group exists");
    let count = particles.get_children().len();

    for (i, particle) in particles.get_children().iter().enumerate() {
        let p = particle.get_local_transform().position;
        let expected = i as f32 / count as f32 * std::f32::consts::TAU;
        let angle = p.z.atan2(p.x).rem_euclid(std::f32::consts::TAU);
        assert_abs_diff_eq!(angle, expected, epsilon = 1e-4);
    }
}

#[test]
fn should_reproduce_particles_from_the_same_seed() {
    let positions = |scene: &Scene| -> Vec<[f32; 3]> {
        scene
            .node(&scene.handles.particles)
            .map(|group| {
                group
                    .get_children()
                    .iter()
                    .map(|p| p.get_local_transform().position.into())
                    .collect()
            })
            .unwrap_or_default()
    };

    assert_eq!(positions(&seeded_scene(9)), positions(&seeded_scene(9)));
    assert_ne!(positions(&seeded_scene(9)), positions(&seeded_scene(10)));
}

#[test]
fn should_set_up_six_lights() {
    let scene = seeded_scene(7);

    assert_eq!(scene.lights.count(), 6);
    assert_eq!(scene.lights.directional.len(), 3);
    assert_eq!(scene.lights.point.len(), 2);
    assert_abs_diff_eq!(scene.lights.ambient.intensity, 0.5);
}
