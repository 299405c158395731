#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_render_clear_colour() {
    use mage_stage::{
        context::{Context, InitContext},
        flow::{GraphicsFlow, ImageTestResult, Out},
        render::Render,
    };
    use wgpu::Color;

    use crate::common::test_utils::{FrameCounter, TestRender};

    struct Empty;
    impl GraphicsFlow<FrameCounter> for Empty {
        fn on_init(&mut self, _: &mut Context, _: &mut FrameCounter) -> Out {
            Out::Empty
        }

        fn on_update(&mut self, _: &Context, _: &mut FrameCounter, _: std::time::Duration) -> Out {
            Out::Empty
        }

        fn on_window_events(
            &mut self,
            _: &Context,
            _: &mut FrameCounter,
            _: &winit::event::WindowEvent,
        ) -> Out {
            Out::Empty
        }

        fn on_render(&self) -> Render<'_> {
            Render::None
        }

        fn render_to_texture(
            &self,
            _: &Context,
            _: &mut FrameCounter,
            _: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
        ) -> Result<ImageTestResult, anyhow::Error> {
            Ok(ImageTestResult::Passed)
        }
    }

    golden_image_test!(|_: InitContext| {
        TestRender::new(
            Box::new(Empty),
            |ctx: &mut Context| {
                ctx.clear_colour = Color::WHITE;
            },
            |_, state: &mut FrameCounter, texture| {
                if state.frame() == 0 {
                    return Ok(ImageTestResult::Waiting);
                }
                let desired_pixel = image::Rgba([255, 255, 255, 255]);
                for pixel in texture.pixels() {
                    assert_eq!(*pixel, desired_pixel);
                }
                Ok(ImageTestResult::Passed)
            },
        )
    });
}
