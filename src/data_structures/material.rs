//! Surface materials.
//!
//! A [`Material`] is immutable after construction except for its emissive
//! intensity, which lives in a [`Cell`] so that the animation step can pulse it
//! through a shared [`MaterialRef`]. Every volume holding the same `MaterialRef`
//! therefore glows in lockstep.

use std::{cell::Cell, rc::Rc};

/// Shared handle to a material. Cloning the handle aliases the material.
pub type MaterialRef = Rc<Material>;

pub const DEFAULT_ROUGHNESS: f32 = 0.7;
pub const DEFAULT_METALNESS: f32 = 0.05;

/// Overrides applied on top of a base colour. Unset fields fall back to the
/// defaults: roughness 0.7, metalness 0.05, no emissive, opaque.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialOptions {
    pub roughness: Option<f32>,
    pub metalness: Option<f32>,
    pub emissive: Option<u32>,
    pub emissive_intensity: Option<f32>,
    pub transparent: bool,
    pub opacity: Option<f32>,
}

impl MaterialOptions {
    pub fn roughness(mut self, roughness: f32) -> Self {
        self.roughness = Some(roughness);
        self
    }

    pub fn metalness(mut self, metalness: f32) -> Self {
        self.metalness = Some(metalness);
        self
    }

    pub fn emissive(mut self, color: u32, intensity: f32) -> Self {
        self.emissive = Some(color);
        self.emissive_intensity = Some(intensity);
        self
    }

    pub fn translucent(mut self, opacity: f32) -> Self {
        self.transparent = true;
        self.opacity = Some(opacity);
        self
    }
}

#[derive(Debug)]
pub struct Material {
    name: String,
    color: [f32; 3],
    roughness: f32,
    metalness: f32,
    emissive: Option<[f32; 3]>,
    emissive_intensity: Cell<f32>,
    transparent: bool,
    opacity: f32,
}

impl Material {
    pub fn new(name: impl Into<String>, color: u32, opts: MaterialOptions) -> Self {
        Self {
            name: name.into(),
            color: hex_to_rgb(color),
            roughness: opts.roughness.unwrap_or(DEFAULT_ROUGHNESS),
            metalness: opts.metalness.unwrap_or(DEFAULT_METALNESS),
            emissive: opts.emissive.map(hex_to_rgb),
            emissive_intensity: Cell::new(opts.emissive_intensity.unwrap_or(1.0)),
            transparent: opts.transparent,
            opacity: if opts.transparent {
                opts.opacity.unwrap_or(1.0)
            } else {
                1.0
            },
        }
    }

    pub fn shared(name: impl Into<String>, color: u32, opts: MaterialOptions) -> MaterialRef {
        Rc::new(Self::new(name, color, opts))
    }

    /// A fresh material with the same surface as `self` but its own intensity cell.
    pub fn detached(&self, name: impl Into<String>) -> MaterialRef {
        Rc::new(Self {
            name: name.into(),
            emissive_intensity: Cell::new(self.emissive_intensity.get()),
            ..*self
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    pub fn metalness(&self) -> f32 {
        self.metalness
    }

    pub fn is_emissive(&self) -> bool {
        self.emissive.is_some()
    }

    /// Black when the material does not glow.
    pub fn emissive_color(&self) -> [f32; 3] {
        self.emissive.unwrap_or([0.0; 3])
    }

    pub fn emissive_intensity(&self) -> f32 {
        self.emissive_intensity.get()
    }

    pub(crate) fn set_emissive_intensity(&self, intensity: f32) {
        self.emissive_intensity.set(intensity);
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// `0xRRGGBB` to normalized sRGB components. The shader linearizes them.
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}
