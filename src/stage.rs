//! The character stage flow.
//!
//! [`CharacterStage`] ties the pieces together: it builds the scene once,
//! feeds pointer and touch input into the [`RotationController`], animates
//! the scene every frame and hands the uploaded batches to the renderer.

use instant::Duration;
use rand::{SeedableRng, rngs::StdRng};
use winit::{
    event::{ElementState, MouseButton, TouchPhase, WindowEvent},
    window::CursorIcon,
};

use crate::{
    animation::animate,
    config::StageConfig,
    context::{BufferWriter, Context, InitContext},
    flow::{FlowConstructor, GraphicsFlow, Out},
    interaction::{Clock, CursorHint, PointerInput, PointerTracker, RotationController},
    render::{Render, VolumeBatches},
    scene::{Scene, build_scene},
};

pub struct CharacterStage {
    scene: Scene,
    controller: RotationController,
    clock: Clock,
    batches: VolumeBatches,
    pointer: PointerTracker,
}

impl CharacterStage {
    pub fn new(device: &wgpu::Device, config: &StageConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scene = build_scene(config, &mut rng);
        let batches = VolumeBatches::new(device, scene.root.as_ref());
        Self {
            scene,
            controller: RotationController::new(),
            clock: Clock::start(),
            batches,
            pointer: PointerTracker::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn controller(&self) -> &RotationController {
        &self.controller
    }
}

impl BufferWriter for CharacterStage {
    fn write_to_buffer(&mut self, ctx: &Context) {
        self.batches.write_to_buffers(ctx, self.scene.root.as_ref());
    }
}

impl<S> GraphicsFlow<S> for CharacterStage {
    fn on_init(&mut self, ctx: &mut Context, _: &mut S) -> Out {
        ctx.set_lights(&self.scene.lights);
        ctx.set_camera(self.scene.camera);
        ctx.set_cursor(cursor_icon(self.controller.cursor()));
        Out::Empty
    }

    fn on_update(&mut self, ctx: &Context, _: &mut S, _: Duration) -> Out {
        let now = self.clock.elapsed();
        let yaw = self.controller.advance(now);
        animate(&mut self.scene, now.as_secs_f32(), yaw);
        self.write_to_buffer(ctx);
        Out::Empty
    }

    fn on_window_events(&mut self, ctx: &Context, _: &mut S, event: &WindowEvent) -> Out {
        let Some(input) = pointer_input(event, ctx.scale_factor()) else {
            return Out::Empty;
        };
        match self
            .pointer
            .apply(&mut self.controller, input, self.clock.elapsed())
        {
            Some(hint) => Out::Configure(Box::new(move |ctx| ctx.set_cursor(cursor_icon(hint)))),
            None => Out::Empty,
        }
    }

    fn on_render(&self) -> Render<'_> {
        self.batches.render()
    }

    #[cfg(feature = "integration-tests")]
    fn render_to_texture(
        &self,
        _: &Context,
        _: &mut S,
        _: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<crate::flow::ImageTestResult, anyhow::Error> {
        Ok(crate::flow::ImageTestResult::Passed)
    }
}

/// Translates the window events the stage reacts to into logical-pixel
/// pointer input. Only the left mouse button drags.
pub fn pointer_input(event: &WindowEvent, scale_factor: f64) -> Option<PointerInput> {
    let scale_factor = if scale_factor > 0.0 { scale_factor } else { 1.0 };
    match event {
        WindowEvent::CursorMoved { position, .. } => Some(PointerInput::Moved {
            x: position.x / scale_factor,
        }),
        WindowEvent::MouseInput {
            state,
            button: MouseButton::Left,
            ..
        } => Some(match state {
            ElementState::Pressed => PointerInput::Pressed,
            ElementState::Released => PointerInput::Released,
        }),
        WindowEvent::Touch(touch) => {
            let (id, x) = (touch.id, touch.location.x / scale_factor);
            Some(match touch.phase {
                TouchPhase::Started => PointerInput::TouchStarted { id, x },
                TouchPhase::Moved => PointerInput::TouchMoved { id, x },
                TouchPhase::Ended | TouchPhase::Cancelled => PointerInput::TouchEnded { id },
            })
        }
        _ => None,
    }
}

pub fn cursor_icon(hint: CursorHint) -> CursorIcon {
    match hint {
        CursorHint::Grab => CursorIcon::Grab,
        CursorHint::Grabbing => CursorIcon::Grabbing,
    }
}

/// Flow constructor for [`crate::flow::run`].
pub fn stage_constructor<S: 'static>(config: StageConfig) -> FlowConstructor<S> {
    Box::new(move |init: InitContext| {
        Box::pin(async move {
            let stage: Box<dyn GraphicsFlow<S>> = Box::new(CharacterStage::new(&init.device, &config));
            stage
        })
    })
}
