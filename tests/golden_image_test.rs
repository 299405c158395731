#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_draw_the_character_over_the_clear_colour() {
    use mage_stage::{
        CharacterStage, StageConfig,
        context::{Context, InitContext},
        flow::ImageTestResult,
    };
    use wgpu::Color;

    use crate::common::test_utils::{FrameCounter, TestRender};

    golden_image_test!(|init: InitContext| {
        let config = StageConfig {
            seed: Some(1),
            ..Default::default()
        };
        TestRender::new(
            Box::new(CharacterStage::new(&init.device, &config)),
            |ctx: &mut Context| {
                ctx.clear_colour = Color::BLACK;
            },
            |_, state: &mut FrameCounter, texture| {
                if state.frame() < 2 {
                    return Ok(ImageTestResult::Waiting);
                }
                let background = image::Rgba([0, 0, 0, 255]);
                let covered = texture.pixels().filter(|pixel| **pixel != background).count();
                let total = (texture.width() * texture.height()) as usize;
                // The figure fills a noticeable but partial share of the frame
                assert!(covered > total / 100, "only {covered} of {total} pixels drawn");
                assert!(covered < total, "the whole frame was painted");
                Ok(ImageTestResult::Passed)
            },
        )
    });
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_keep_the_frame_transparent_around_the_character() {
    use mage_stage::{
        CharacterStage, StageConfig,
        context::{Context, InitContext},
        flow::ImageTestResult,
    };

    use crate::common::test_utils::{FrameCounter, TestRender};

    golden_image_test!(|init: InitContext| {
        let config = StageConfig {
            seed: Some(1),
            ..Default::default()
        };
        TestRender::new(
            Box::new(CharacterStage::new(&init.device, &config)),
            |_: &mut Context| {},
            |_, state: &mut FrameCounter, texture| {
                if state.frame() < 2 {
                    return Ok(ImageTestResult::Waiting);
                }
                // Corners are far from the figure and show the cleared background
                let (w, h) = texture.dimensions();
                for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
                    assert_eq!(texture.get_pixel(x, y)[3], 0, "corner ({x}, {y}) is opaque");
                }
                Ok(ImageTestResult::Passed)
            },
        )
    });
}
