//! The scene builder.
//!
//! [`build_scene`] runs once at start-up. It creates the materials, assembles
//! the character hierarchy out of primitive volumes, places the lights and the
//! camera, and hands back [`SceneHandles`]: the nodes and materials that the
//! per-frame animation is allowed to touch. Nothing else in the scene changes
//! after this point.

pub mod character;
pub mod lights;
pub mod palette;
pub mod platform;
pub mod staff;

use rand::Rng;

use crate::{
    camera::Camera,
    config::StageConfig,
    data_structures::{
        instance::{Axis, Instance},
        material::MaterialRef,
        scene_graph::{ContainerNode, NodePath, SceneNode},
        volume::Volume,
    },
    scene::{
        character::Side,
        lights::LightSet,
        palette::Palette,
    },
};

/// Resting height of the character root. The bobbing oscillates around it.
pub const CHARACTER_BASELINE_Y: f32 = -5.5;

/// Builder shorthand for the cuboids most of the figure is made of.
pub(crate) trait Blocks {
    fn cuboid(&mut self, dims: [f32; 3], material: &MaterialRef, at: [f32; 3]) -> usize;

    fn tilted_cuboid(
        &mut self,
        dims: [f32; 3],
        material: &MaterialRef,
        at: [f32; 3],
        axis: Axis,
        angle: f32,
    ) -> usize;
}

impl Blocks for ContainerNode {
    fn cuboid(&mut self, dims: [f32; 3], material: &MaterialRef, at: [f32; 3]) -> usize {
        let [w, h, d] = dims;
        let [x, y, z] = at;
        self.add_volume(Volume::cuboid(w, h, d, material), Instance::at(x, y, z))
    }

    fn tilted_cuboid(
        &mut self,
        dims: [f32; 3],
        material: &MaterialRef,
        at: [f32; 3],
        axis: Axis,
        angle: f32,
    ) -> usize {
        let [w, h, d] = dims;
        let [x, y, z] = at;
        self.add_volume(
            Volume::cuboid(w, h, d, material),
            Instance::at(x, y, z).tilted(axis, angle),
        )
    }
}

/// What the animation step mutates. Paths are relative to [`Scene::root`].
#[derive(Clone, Debug)]
pub struct SceneHandles {
    pub left_arm: NodePath,
    pub right_arm: NodePath,
    pub staff: NodePath,
    pub particles: NodePath,
    /// Shared by the visor gem, the belt gem and the staff orb.
    pub gem: MaterialRef,
    pub orb_core: MaterialRef,
    pub platform: MaterialRef,
    /// One per particle, in particle order.
    pub particle_materials: Vec<MaterialRef>,
}

pub struct Scene {
    /// The character group. Everything drawn hangs below it.
    pub root: Box<dyn SceneNode>,
    pub lights: LightSet,
    pub camera: Camera,
    pub handles: SceneHandles,
}

impl Scene {
    pub fn node(&self, path: &NodePath) -> Option<&dyn SceneNode> {
        self.root.descendant(path)
    }

    pub fn node_mut(&mut self, path: &NodePath) -> Option<&mut (dyn SceneNode + 'static)> {
        self.root.descendant_mut(path)
    }

    pub fn volume_count(&self) -> usize {
        self.root.volume_count()
    }

    pub fn particle_count(&self) -> usize {
        self.node(&self.handles.particles)
            .map_or(0, |particles| particles.get_children().len())
    }

    pub fn update_world_transforms(&mut self) {
        self.root.update_world_transform_all();
    }
}

/**
 * Builds the complete stage.
 *
 * The layout is fixed. The only input that changes the result is `rng`, which
 * jitters the particle ring; pass a seeded generator to get a reproducible
 * scene.
 */
pub fn build_scene<R: Rng>(config: &StageConfig, rng: &mut R) -> Scene {
    let p = Palette::new();
    let mut character = ContainerNode::new("character")
        .with_transform(Instance::at(0.0, CHARACTER_BASELINE_Y, 0.0));

    character.add_child(Box::new(character::hat(&p)));
    character.add_child(Box::new(character::head(&p)));
    character.add_child(Box::new(character::eye(&p, Side::Left, [-0.58, 8.3, 1.22])));
    character.add_child(Box::new(character::eye(&p, Side::Right, [0.58, 8.3, 1.22])));
    character::add_nose_and_neck(&mut character, &p);
    character.add_child(Box::new(character::shoulder(&p, Side::Left)));
    character.add_child(Box::new(character::shoulder(&p, Side::Right)));
    character::add_torso(&mut character, &p);
    let left_arm = character.add_child(Box::new(character::arm(&p, Side::Left)));
    let right_arm = character.add_child(Box::new(character::arm(&p, Side::Right)));
    character::add_feet(&mut character, &p);

    let (staff_group, orb_core) = staff::staff(&p);
    let staff = character.add_child(Box::new(staff_group));

    let (disc, disc_at, platform_material) = platform::platform(&p);
    character.add_volume(disc, disc_at);

    let (particle_group, particle_materials) =
        platform::particles(&p, config.particle_count, rng);
    let particles = character.add_child(Box::new(particle_group));

    let root = NodePath::root();
    let mut scene = Scene {
        root: Box::new(character),
        lights: lights::stage_lights(),
        camera: Camera::new(config.eye, config.target),
        handles: SceneHandles {
            left_arm: root.child(left_arm),
            right_arm: root.child(right_arm),
            staff: root.child(staff),
            particles: root.child(particles),
            gem: p.gem.clone(),
            orb_core,
            platform: platform_material,
            particle_materials,
        },
    };
    scene.update_world_transforms();

    log::info!(
        "Built stage with {} volumes, {} particles and {} lights",
        scene.volume_count(),
        scene.particle_count(),
        scene.lights.count()
    );
    scene
}
