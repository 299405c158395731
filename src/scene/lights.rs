use cgmath::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: u32,
    pub intensity: f32,
}

/// Parallel light shining from `position` towards the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: u32,
    pub intensity: f32,
    pub position: Vector3<f32>,
}

/// Light radiating from `position`, fading out completely at `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: u32,
    pub intensity: f32,
    pub range: f32,
    pub position: Vector3<f32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightSet {
    pub ambient: AmbientLight,
    pub directional: Vec<DirectionalLight>,
    pub point: Vec<PointLight>,
}

impl LightSet {
    /// Number of lights including the ambient term.
    pub fn count(&self) -> usize {
        1 + self.directional.len() + self.point.len()
    }
}

/// Soft white key light from the upper front right, violet fill from behind
/// left, a cyan rim and two point lights: a violet under-glow below the
/// platform and a white specular highlight.
pub fn stage_lights() -> LightSet {
    LightSet {
        ambient: AmbientLight {
            color: 0xffffff,
            intensity: 0.5,
        },
        directional: vec![
            DirectionalLight {
                color: 0xffffff,
                intensity: 0.9,
                position: Vector3::new(5.0, 10.0, 7.0),
            },
            DirectionalLight {
                color: 0x7b40c9,
                intensity: 0.2,
                position: Vector3::new(-5.0, 3.0, -5.0),
            },
            DirectionalLight {
                color: 0x00fff7,
                intensity: 0.2,
                position: Vector3::new(0.0, 5.0, -8.0),
            },
        ],
        point: vec![
            PointLight {
                color: 0x7b40c9,
                intensity: 0.35,
                range: 15.0,
                position: Vector3::new(0.0, -3.0, 2.0),
            },
            PointLight {
                color: 0xffffff,
                intensity: 0.4,
                range: 20.0,
                position: Vector3::new(3.0, 8.0, 6.0),
            },
        ],
    }
}

impl Default for LightSet {
    /// Plain white ambient light only.
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: 0xffffff,
                intensity: 1.0,
            },
            directional: Vec::new(),
            point: Vec::new(),
        }
    }
}
