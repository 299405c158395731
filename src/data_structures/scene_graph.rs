//! Scene graph and hierarchical scene organization.
//!
//! A scene is a tree of [`SceneNode`]s. Groups are [`ContainerNode`]s, leaves are
//! [`VolumeNode`]s. Every node owns its children, so a volume belongs to exactly
//! one parent and the hierarchy cannot contain cycles. Each node keeps a pair of
//! transforms: the local one relative to its parent, which is what builders and
//! the animation step write, and the world one, which is recomputed top-down by
//! [`SceneNode::update_world_transforms`].

use log::warn;

use crate::data_structures::{instance::Instance, volume::Volume};

/// A handle to a node: the child indices leading from the root to it.
///
/// The empty path addresses the root itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, idx: usize) -> Self {
        let mut path = self.0.clone();
        path.push(idx);
        Self(path)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

pub trait SceneNode {
    fn name(&self) -> &str;

    fn get_local_transform(&self) -> &Instance;

    fn local_transform_mut(&mut self) -> &mut Instance;

    fn get_world_transform(&self) -> &Instance;

    /**
     * Recomputes this node's world transform from the parent's world transform and
     * pushes the result down to all children.
     */
    fn update_world_transforms(&mut self, parents_world_transform: &Instance);

    fn update_world_transform_all(&mut self) {
        self.update_world_transforms(&Instance::default());
    }

    fn get_children(&self) -> &[Box<dyn SceneNode>];

    fn get_children_mut(&mut self) -> &mut [Box<dyn SceneNode>];

    /// Appends `child` and returns its index among this node's children.
    fn add_child(&mut self, child: Box<dyn SceneNode>) -> usize;

    /// The drawable payload of a leaf.
    fn volume(&self) -> Option<&Volume>;

    fn visit_volumes<'a>(&'a self, visit: &mut dyn FnMut(&'a Instance, &'a Volume)) {
        if let Some(volume) = self.volume() {
            visit(self.get_world_transform(), volume);
        }
        for child in self.get_children() {
            child.visit_volumes(visit);
        }
    }
}

impl dyn SceneNode {
    pub fn descendant(&self, path: &NodePath) -> Option<&(dyn SceneNode + 'static)> {
        let mut node: &(dyn SceneNode + 'static) = self;
        for &idx in path.indices() {
            node = node.get_children().get(idx)?.as_ref();
        }
        Some(node)
    }

    pub fn descendant_mut(&mut self, path: &NodePath) -> Option<&mut (dyn SceneNode + 'static)> {
        let mut node: &mut (dyn SceneNode + 'static) = self;
        for &idx in path.indices() {
            node = node.get_children_mut().get_mut(idx)?.as_mut();
        }
        Some(node)
    }

    pub fn volume_count(&self) -> usize {
        let mut count = 0;
        self.visit_volumes(&mut |_, _| count += 1);
        count
    }
}

/// A group: no geometry of its own, one transform shared by all its children.
pub struct ContainerNode {
    name: String,
    pub children: Vec<Box<dyn SceneNode>>,
    local: Instance,
    world: Instance,
}

impl ContainerNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            local: Instance::default(),
            world: Instance::default(),
        }
    }

    pub fn with_transform(mut self, local: Instance) -> Self {
        self.local = local;
        self
    }

    /// Shorthand used by builders: add a leaf at `local`.
    pub fn add_volume(&mut self, volume: Volume, local: Instance) -> usize {
        self.add_child(Box::new(VolumeNode::new(volume, local)))
    }
}

impl SceneNode for ContainerNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_local_transform(&self) -> &Instance {
        &self.local
    }

    fn local_transform_mut(&mut self) -> &mut Instance {
        &mut self.local
    }

    fn get_world_transform(&self) -> &Instance {
        &self.world
    }

    fn update_world_transforms(&mut self, parents_world_transform: &Instance) {
        self.world = parents_world_transform * &self.local;
        for child in self.children.iter_mut() {
            child.update_world_transforms(&self.world);
        }
    }

    fn get_children(&self) -> &[Box<dyn SceneNode>] {
        &self.children
    }

    fn get_children_mut(&mut self) -> &mut [Box<dyn SceneNode>] {
        &mut self.children
    }

    fn add_child(&mut self, child: Box<dyn SceneNode>) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    fn volume(&self) -> Option<&Volume> {
        None
    }
}

/// A leaf carrying a [`Volume`].
pub struct VolumeNode {
    volume: Volume,
    local: Instance,
    world: Instance,
}

impl VolumeNode {
    pub fn new(volume: Volume, local: Instance) -> Self {
        Self {
            volume,
            world: local.clone(),
            local,
        }
    }
}

impl SceneNode for VolumeNode {
    fn name(&self) -> &str {
        self.volume.material.name()
    }

    fn get_local_transform(&self) -> &Instance {
        &self.local
    }

    fn local_transform_mut(&mut self) -> &mut Instance {
        &mut self.local
    }

    fn get_world_transform(&self) -> &Instance {
        &self.world
    }

    fn update_world_transforms(&mut self, parents_world_transform: &Instance) {
        self.world = parents_world_transform * &self.local;
    }

    fn get_children(&self) -> &[Box<dyn SceneNode>] {
        &[]
    }

    fn get_children_mut(&mut self) -> &mut [Box<dyn SceneNode>] {
        &mut []
    }

    fn add_child(&mut self, child: Box<dyn SceneNode>) -> usize {
        warn!(
            "Volume '{}' is a leaf, dropping child '{}'. Wrap both in a ContainerNode instead.",
            self.name(),
            child.name()
        );
        0
    }

    fn volume(&self) -> Option<&Volume> {
        Some(&self.volume)
    }
}
