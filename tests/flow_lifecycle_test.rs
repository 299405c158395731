#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_init_once_and_apply_configure_output() {
    use mage_stage::{
        context::{Context, InitContext},
        flow::{GraphicsFlow, ImageTestResult, Out},
        render::Render,
    };
    use wgpu::Color;

    use crate::common::test_utils::FrameCounter;

    struct Lifecycle {
        inits: u32,
        updates: u32,
    }

    impl GraphicsFlow<FrameCounter> for Lifecycle {
        fn on_init(&mut self, ctx: &mut Context, state: &mut FrameCounter) -> Out {
            assert_eq!(self.inits, 0);
            assert_eq!(state.frame(), 0);
            ctx.clear_colour = Color::TRANSPARENT;
            self.inits += 1;
            Out::Empty
        }

        fn on_update(&mut self, ctx: &Context, state: &mut FrameCounter, _: std::time::Duration) -> Out {
            assert_eq!(self.inits, 1);
            assert_eq!(state.frame(), self.updates);
            self.updates += 1;
            state.progress();
            if self.updates == 2 {
                assert_eq!(ctx.clear_colour, Color::TRANSPARENT);
                return Out::Configure(Box::new(|ctx| ctx.clear_colour = Color::RED));
            }
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
            ctx: &Context,
            state: &mut FrameCounter,
            texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
        ) -> Result<ImageTestResult, anyhow::Error> {
            if state.frame() < 3 {
                return Ok(ImageTestResult::Waiting);
            }
            assert_eq!(ctx.clear_colour, Color::RED);
            let pixel = texture.get_pixel(0, 0);
            assert_eq!(pixel[3], 255);
            Ok(ImageTestResult::Passed)
        }
    }

    golden_image_test!(|_: InitContext| Lifecycle {
        inits: 0,
        updates: 0,
    });
}
