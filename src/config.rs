//! Tunables for the stage and the reveal glue.
//!
//! Both structs are plain data with [`Default`] values matching the page the
//! stage was designed for. Runtime knobs that a flow may change after start-up
//! (clear colour, exposure) live on [`crate::context::Context`] instead.

use cgmath::{Deg, Point3};

/// Mount point, camera and renderer settings for the character stage.
#[derive(Clone, Debug, PartialEq)]
pub struct StageConfig {
    /// Id of the `<canvas>` the stage draws into. Its parent is the container.
    pub canvas_id: String,
    pub fov_y: Deg<f32>,
    pub z_near: f32,
    pub z_far: f32,
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    /// Upper bound applied to the device pixel ratio when sizing the surface.
    pub max_pixel_ratio: f64,
    /// Tone-mapping exposure.
    pub exposure: f32,
    pub clear_colour: wgpu::Color,
    pub particle_count: usize,
    /// Fixes the particle jitter. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Initial window size of the native preview, in logical pixels.
    pub preview_size: (u32, u32),
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            canvas_id: "character-canvas".to_string(),
            fov_y: Deg(35.0),
            z_near: 0.1,
            z_far: 100.0,
            eye: Point3::new(0.0, 3.5, 20.0),
            target: Point3::new(0.0, 2.5, 0.0),
            max_pixel_ratio: 2.0,
            exposure: 1.2,
            clear_colour: wgpu::Color::TRANSPARENT,
            particle_count: 10,
            seed: None,
            preview_size: (480, 640),
        }
    }
}

/// Selectors, thresholds and timings of the scroll reveal controller.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub item_selector: String,
    pub bar_selector: String,
    pub fill_selector: String,
    pub anchor_selector: String,
    pub visible_class: String,
    pub item_threshold: f64,
    pub item_root_margin: String,
    pub bar_threshold: f64,
    /// Stagger step for items without an explicit delay.
    pub item_step_ms: u32,
    /// Number of items after which the item stagger starts over.
    pub item_cycle: usize,
    pub fill_step_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            item_selector: ".animate-in".to_string(),
            bar_selector: ".languages-block".to_string(),
            fill_selector: ".lang-bar-fill".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            visible_class: "visible".to_string(),
            item_threshold: 0.1,
            item_root_margin: "0px 0px -50px 0px".to_string(),
            bar_threshold: 0.3,
            item_step_ms: 100,
            item_cycle: 4,
            fill_step_ms: 300,
        }
    }
}
