#[cfg(feature = "integration-tests")]
use mage_stage::{
    context::Context,
    flow::{GraphicsFlow, ImageTestResult, Out},
    render::Render,
};

#[derive(Default)]
pub(crate) struct FrameCounter(pub(crate) u32);

impl FrameCounter {
    pub(crate) fn frame(&self) -> u32 {
        self.0
    }

    pub(crate) fn progress(&mut self) {
        self.0 += 1;
    }
}

#[cfg(feature = "integration-tests")]
pub(crate) type Validate = Box<
    dyn Fn(
        &Context,
        &mut FrameCounter,
        &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error>,
>;

/// Runs `subject` as the only flow and checks every rendered frame with
/// `validate` until it passes.
#[cfg(feature = "integration-tests")]
pub(crate) struct TestRender {
    subject: Box<dyn GraphicsFlow<FrameCounter>>,
    setup: Box<dyn Fn(&mut Context)>,
    validate: Validate,
}

#[cfg(feature = "integration-tests")]
impl TestRender {
    pub(crate) fn new(
        subject: Box<dyn GraphicsFlow<FrameCounter>>,
        setup: impl Fn(&mut Context) + 'static,
        validate: impl Fn(
            &Context,
            &mut FrameCounter,
            &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
        ) -> Result<ImageTestResult, anyhow::Error>
        + 'static,
    ) -> Self {
        Self {
            subject,
            setup: Box::new(setup),
            validate: Box::new(validate),
        }
    }
}

#[cfg(feature = "integration-tests")]
impl GraphicsFlow<FrameCounter> for TestRender {
    fn on_init(&mut self, ctx: &mut Context, state: &mut FrameCounter) -> Out {
        let out = self.subject.on_init(ctx, state);
        (self.setup)(ctx);
        out
    }

    fn on_update(
        &mut self,
        ctx: &Context,
        state: &mut FrameCounter,
        dt: std::time::Duration,
    ) -> Out {
        state.progress();
        self.subject.on_update(ctx, state, dt)
    }

    fn on_window_events(
        &mut self,
        ctx: &Context,
        state: &mut FrameCounter,
        event: &winit::event::WindowEvent,
    ) -> Out {
        self.subject.on_window_events(ctx, state, event)
    }

    fn on_render(&self) -> Render<'_> {
        self.subject.on_render()
    }

    fn render_to_texture(
        &self,
        ctx: &Context,
        state: &mut FrameCounter,
        texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error> {
        (self.validate)(ctx, state, texture)
    }
}

#[macro_export]
macro_rules! golden_image_test {
    ($graphics_elem:expr) => {{
        use crate::common::test_utils::FrameCounter;
        use mage_stage::flow::{FlowConstructor, GraphicsFlow};
        let model_constructor: FlowConstructor<FrameCounter> = Box::new(|init| {
            Box::pin(async move {
                let g_flow: Box<dyn GraphicsFlow<FrameCounter>> = Box::new(($graphics_elem)(init));
                g_flow
            })
        });

        mage_stage::flow::run(mage_stage::StageConfig::default(), vec![model_constructor])
            .expect("Failed to run flow for integration test.");
    }};
}
