use wgpu::util::DeviceExt;

use crate::data_structures::model;

/// Vertices and triangle indices of a primitive before upload.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<model::ModelVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(
            corners
                .into_iter()
                .map(|position| model::ModelVertex { position, normal }),
        );
        // Two counter-clockwise triangles
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    pub fn upload(&self, device: &wgpu::Device, name: &str) -> model::Mesh {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Vertex Buffer", name)),
            contents: bytemuck::cast_slice(&self.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Index Buffer", name)),
            contents: bytemuck::cast_slice(&self.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        model::Mesh {
            name: name.to_string(),
            vertex_buffer,
            index_buffer,
            num_elements: self.indices.len() as u32,
        }
    }
}

/**
 * A unit cube centered on the origin with flat per-face normals.
 *
 * Every face gets its own four vertices so that lighting stays faceted.
 */
pub fn unit_cuboid() -> MeshData {
    let h = 0.5;
    let mut mesh = MeshData::default();
    // +x
    mesh.push_quad([[h, -h, h], [h, -h, -h], [h, h, -h], [h, h, h]], [1.0, 0.0, 0.0]);
    // -x
    mesh.push_quad([[-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h]], [-1.0, 0.0, 0.0]);
    // +y
    mesh.push_quad([[-h, h, h], [h, h, h], [h, h, -h], [-h, h, -h]], [0.0, 1.0, 0.0]);
    // -y
    mesh.push_quad([[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]], [0.0, -1.0, 0.0]);
    // +z
    mesh.push_quad([[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]], [0.0, 0.0, 1.0]);
    // -z
    mesh.push_quad([[h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h]], [0.0, 0.0, -1.0]);
    mesh
}

/**
 * An upright cylinder of diameter 1 and height 1 centered on the origin.
 *
 * Sides use smooth radial normals, the caps are triangle fans around a center vertex.
 */
pub fn unit_cylinder(segments: u32) -> MeshData {
    let segments = segments.max(3);
    let r = 0.5;
    let h = 0.5;
    let mut mesh = MeshData::default();
    let ring = |i: u32| {
        let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
        (angle.cos(), angle.sin())
    };

    for i in 0..segments {
        let (c0, s0) = ring(i);
        let (c1, s1) = ring(i + 1);
        let base = mesh.vertices.len() as u32;
        for (c, s) in [(c0, s0), (c1, s1)] {
            mesh.vertices.push(model::ModelVertex {
                position: [c * r, -h, s * r],
                normal: [c, 0.0, s],
            });
            mesh.vertices.push(model::ModelVertex {
                position: [c * r, h, s * r],
                normal: [c, 0.0, s],
            });
        }
        // base: bottom0, top0, bottom1, top1 (wound so the outside faces front)
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }

    for (y, normal_y) in [(h, 1.0_f32), (-h, -1.0_f32)] {
        let center = mesh.vertices.len() as u32;
        mesh.vertices.push(model::ModelVertex {
            position: [0.0, y, 0.0],
            normal: [0.0, normal_y, 0.0],
        });
        for i in 0..=segments {
            let (c, s) = ring(i);
            mesh.vertices.push(model::ModelVertex {
                position: [c * r, y, s * r],
                normal: [0.0, normal_y, 0.0],
            });
        }
        for i in 0..segments {
            let a = center + 1 + i;
            let b = center + 2 + i;
            if normal_y > 0.0 {
                mesh.indices.extend_from_slice(&[center, b, a]);
            } else {
                mesh.indices.extend_from_slice(&[center, a, b]);
            }
        }
    }
    mesh
}
