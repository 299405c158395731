//! Surface sizing.
//!
//! The container is measured in CSS (logical) pixels. The drawing surface is
//! that size times the device pixel ratio, where the ratio is capped so that
//! very dense displays do not multiply the fragment work. The camera aspect
//! only depends on the logical size. The surface is a texture, so it is also
//! bounded by the device's largest texture dimension.

/// The sizes derived from one container measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Logical width and height.
    pub css: (f64, f64),
    /// Surface size in physical pixels.
    pub physical: (u32, u32),
    pub aspect: f32,
}

impl Viewport {
    /// Sizes the surface for a container of `css_width` × `css_height`.
    ///
    /// Returns `None` for an empty container (a hidden or collapsed element),
    /// in which case the previous surface should be kept untouched.
    pub fn fit(css_width: f64, css_height: f64, device_pixel_ratio: f64, max_ratio: f64) -> Option<Self> {
        if !(css_width > 0.0 && css_height > 0.0) {
            return None;
        }
        let ratio = effective_ratio(device_pixel_ratio, max_ratio);
        let physical = (
            ((css_width * ratio).round() as u32).max(1),
            ((css_height * ratio).round() as u32).max(1),
        );
        Some(Self {
            css: (css_width, css_height),
            physical,
            aspect: (css_width / css_height) as f32,
        })
    }

    /// Same as [`Viewport::fit`] for a size reported by the window system, which
    /// already includes the full (uncapped) scale factor.
    pub fn from_physical(width: u32, height: u32, scale_factor: f64, max_ratio: f64) -> Option<Self> {
        let scale_factor = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self::fit(
            width as f64 / scale_factor,
            height as f64 / scale_factor,
            scale_factor,
            max_ratio,
        )
    }

    /// Shrinks the surface so neither side exceeds `max_dimension`, scaling
    /// both sides by the same factor. The logical size and the aspect stay
    /// those of the container.
    pub fn limited_to(mut self, max_dimension: u32) -> Self {
        let (width, height) = self.physical;
        let longest = width.max(height);
        if max_dimension == 0 || longest <= max_dimension {
            return self;
        }
        let scale = |side: u32| ((side as u64 * max_dimension as u64 / longest as u64) as u32).max(1);
        self.physical = (scale(width), scale(height));
        log::debug!(
            "Surface {}x{} exceeds the texture limit {}, using {}x{}",
            width,
            height,
            max_dimension,
            self.physical.0,
            self.physical.1
        );
        self
    }
}

fn effective_ratio(device_pixel_ratio: f64, max_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(max_ratio)
    } else {
        1.0
    }
}
