use wgpu::util::DeviceExt;

use crate::scene::lights::LightSet;

pub const MAX_DIRECTIONAL_LIGHTS: usize = 4;
pub const MAX_POINT_LIGHTS: usize = 4;

#[derive(Debug)]
pub struct LightResources {
    pub uniform: LightUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

/**
 * All lights of the stage packed for the fragment shader.
 *
 * Colours are linear and already multiplied by the light's intensity.
 * Every entry is a vec4 because uniform arrays use a 16 byte stride anyway:
 * directions and positions carry the point light range in `w`, `params` holds
 * the number of directional lights, the number of point lights and the
 * tone-mapping exposure.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    ambient: [f32; 4],
    directional_direction: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS],
    directional_color: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS],
    point_position: [[f32; 4]; MAX_POINT_LIGHTS],
    point_color: [[f32; 4]; MAX_POINT_LIGHTS],
    params: [f32; 4],
}

impl LightUniform {
    pub fn new(lights: &LightSet, exposure: f32) -> Self {
        use cgmath::InnerSpace;

        let mut uniform = Self {
            ambient: [0.0; 4],
            directional_direction: [[0.0; 4]; MAX_DIRECTIONAL_LIGHTS],
            directional_color: [[0.0; 4]; MAX_DIRECTIONAL_LIGHTS],
            point_position: [[0.0; 4]; MAX_POINT_LIGHTS],
            point_color: [[0.0; 4]; MAX_POINT_LIGHTS],
            params: [0.0, 0.0, exposure, 0.0],
        };

        let [r, g, b] = linear_rgb(lights.ambient.color, lights.ambient.intensity);
        uniform.ambient = [r, g, b, 1.0];

        if lights.directional.len() > MAX_DIRECTIONAL_LIGHTS {
            log::warn!(
                "Only {} of {} directional lights are used",
                MAX_DIRECTIONAL_LIGHTS,
                lights.directional.len()
            );
        }
        let directional = lights.directional.iter().take(MAX_DIRECTIONAL_LIGHTS);
        for (i, light) in directional.enumerate() {
            // Directional lights shine from their position towards the origin
            let dir = light.position.normalize();
            uniform.directional_direction[i] = [dir.x, dir.y, dir.z, 0.0];
            let [r, g, b] = linear_rgb(light.color, light.intensity);
            uniform.directional_color[i] = [r, g, b, 1.0];
            uniform.params[0] += 1.0;
        }

        if lights.point.len() > MAX_POINT_LIGHTS {
            log::warn!(
                "Only {} of {} point lights are used",
                MAX_POINT_LIGHTS,
                lights.point.len()
            );
        }
        for (i, light) in lights.point.iter().take(MAX_POINT_LIGHTS).enumerate() {
            let p = light.position;
            uniform.point_position[i] = [p.x, p.y, p.z, light.range];
            let [r, g, b] = linear_rgb(light.color, light.intensity);
            uniform.point_color[i] = [r, g, b, 1.0];
            uniform.params[1] += 1.0;
        }
        uniform
    }

    pub fn directional_count(&self) -> usize {
        self.params[0] as usize
    }

    pub fn point_count(&self) -> usize {
        self.params[1] as usize
    }

    pub fn exposure(&self) -> f32 {
        self.params[2]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_rgb(hex: u32, intensity: f32) -> [f32; 3] {
    crate::data_structures::material::hex_to_rgb(hex).map(|c| srgb_to_linear(c) * intensity)
}

impl LightResources {
    pub fn new(uniform: LightUniform, device: &wgpu::Device) -> Self {
        let buffer = mk_buffer(device, uniform);
        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = mk_bind_group(device, &bind_group_layout, &buffer);
        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    pub fn write(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

pub fn mk_buffer(device: &wgpu::Device, light_uniform: LightUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Light Uniform Buffer"),
        contents: bytemuck::cast_slice(&[light_uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("light_bind_group_layout"),
    })
}

pub fn mk_bind_group(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    light_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout: bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: light_buffer.as_entire_binding(),
        }],
        label: Some("light_bind_group"),
    })
}
