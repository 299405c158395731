//! Render composition and pipeline batching.
//!
//! A flow describes what it wants drawn each frame with a [`Render`]. The
//! engine sorts those into the opaque and the translucent batch, draws all
//! opaque batches first and then blends the translucent ones on top.
//!
//! [`VolumeBatches`] turns a scene graph into such renders: every volume
//! becomes one instance record, grouped by shape (which mesh to draw) and by
//! translucency (which pipeline to draw with).

use wgpu::util::DeviceExt;

use crate::{
    context::Context,
    data_structures::{
        instance::InstanceRaw,
        model::Mesh,
        scene_graph::SceneNode,
        volume::Shape,
    },
    resources::Primitives,
};

/// Data for instanced rendering: a mesh and a buffer of per-instance records.
#[derive(Clone, Copy)]
pub struct Instanced<'a> {
    pub instance: &'a wgpu::Buffer,
    pub mesh: &'a Mesh,
    pub amount: usize,
}

/// Specifies how a flow should be rendered.
///
/// - `None` renders nothing
/// - `Default(Instanced)` renders an opaque instanced mesh
/// - `Transparent(Instanced)` renders a translucent instanced mesh
/// - `Composed(Vec<Render>)` recursively renders a composition of renders
pub enum Render<'a> {
    None,
    Default(Instanced<'a>),
    Transparent(Instanced<'a>),
    Composed(Vec<Render<'a>>),
}

impl<'a> Render<'a> {
    pub(crate) fn set_pipelines(self, basics: &mut Vec<Instanced<'a>>, trans: &mut Vec<Instanced<'a>>) {
        match self {
            Render::Default(instanced) => basics.push(instanced),
            Render::Transparent(instanced) => trans.push(instanced),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.set_pipelines(basics, trans)),
            Render::None => (),
        }
    }
}

/// Which mesh and which pipeline a group of volumes is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BatchKey {
    pub shape: Shape,
    pub transparent: bool,
}

/// The instance records of one batch, before upload.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchData {
    pub key: BatchKey,
    pub instances: Vec<InstanceRaw>,
}

/**
 * Collects the instance records of every volume below `root`.
 *
 * Uses the world transforms as they are, so the caller has to update them
 * first. Material state (colour, current glow, opacity) is sampled now. The
 * batches come out in the order their first volume was visited.
 */
pub fn partition(root: &dyn SceneNode) -> Vec<BatchData> {
    let mut batches: Vec<BatchData> = Vec::new();
    root.visit_volumes(&mut |world, volume| {
        let key = BatchKey {
            shape: volume.shape,
            transparent: volume.material.is_transparent(),
        };
        let raw = world.to_raw(volume.dims, &volume.material);
        match batches.iter_mut().find(|batch| batch.key == key) {
            Some(batch) => batch.instances.push(raw),
            None => batches.push(BatchData {
                key,
                instances: vec![raw],
            }),
        }
    });
    batches
}

struct GpuBatch {
    key: BatchKey,
    amount: usize,
    capacity: usize,
    buffer: wgpu::Buffer,
}

/// The uploaded batches of a scene, refreshed every frame.
pub struct VolumeBatches {
    primitives: Primitives,
    batches: Vec<GpuBatch>,
}

impl VolumeBatches {
    pub fn new(device: &wgpu::Device, root: &dyn SceneNode) -> Self {
        let mut batches = Self {
            primitives: Primitives::new(),
            batches: Vec::new(),
        };
        for data in partition(root) {
            batches.primitives.ensure(device, data.key.shape);
            let buffer = mk_instance_buffer(device, &data.instances);
            batches.batches.push(GpuBatch {
                key: data.key,
                amount: data.instances.len(),
                capacity: data.instances.len(),
                buffer,
            });
        }
        log::debug!("Created {} instance batches", batches.batches.len());
        batches
    }

    /// Re-reads the scene and writes the instance records. A batch whose
    /// buffer became too small gets a new one.
    pub fn write_to_buffers(&mut self, ctx: &Context, root: &dyn SceneNode) {
        for data in partition(root) {
            self.primitives.ensure(&ctx.device, data.key.shape);
            let amount = data.instances.len();
            match self.batches.iter_mut().find(|batch| batch.key == data.key) {
                Some(batch) if batch.capacity >= amount => {
                    ctx.queue
                        .write_buffer(&batch.buffer, 0, bytemuck::cast_slice(&data.instances));
                    batch.amount = amount;
                }
                Some(batch) => {
                    batch.buffer = mk_instance_buffer(&ctx.device, &data.instances);
                    batch.capacity = amount;
                    batch.amount = amount;
                }
                None => self.batches.push(GpuBatch {
                    key: data.key,
                    amount,
                    capacity: amount,
                    buffer: mk_instance_buffer(&ctx.device, &data.instances),
                }),
            }
        }
    }

    pub fn render(&self) -> Render<'_> {
        let renders = self
            .batches
            .iter()
            .filter(|batch| batch.amount > 0)
            .filter_map(|batch| {
                let mesh = self.primitives.get(batch.key.shape)?;
                let instanced = Instanced {
                    instance: &batch.buffer,
                    mesh,
                    amount: batch.amount,
                };
                Some(if batch.key.transparent {
                    Render::Transparent(instanced)
                } else {
                    Render::Default(instanced)
                })
            })
            .collect();
        Render::Composed(renders)
    }
}

fn mk_instance_buffer(device: &wgpu::Device, instances: &[InstanceRaw]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Instance Buffer"),
        contents: bytemuck::cast_slice(instances),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    })
}
