use std::time::Duration;

use approx::assert_relative_eq;
use mage_stage::{
    interaction::{CursorHint, DRAG_SENSITIVITY, PointerInput, PointerTracker, RotationController},
    stage::pointer_input,
};
use winit::{
    dpi::PhysicalPosition,
    event::{DeviceId, ElementState, MouseButton, Touch, TouchPhase, WindowEvent},
};

#[allow(unused_unsafe)]
fn device() -> DeviceId {
    unsafe { DeviceId::dummy() }
}

fn touch(phase: TouchPhase, id: u64, x: f64) -> WindowEvent {
    WindowEvent::Touch(Touch {
        device_id: device(),
        phase,
        location: PhysicalPosition::new(x, 10.0),
        force: None,
        id,
    })
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn should_convert_cursor_position_to_logical_pixels() {
    let moved = WindowEvent::CursorMoved {
        device_id: device(),
        position: PhysicalPosition::new(300.0, 50.0),
    };

    assert_eq!(
        pointer_input(&moved, 2.0),
        Some(PointerInput::Moved { x: 150.0 })
    );
}

#[test]
fn should_only_drag_with_left_button() {
    let left = WindowEvent::MouseInput {
        device_id: device(),
        state: ElementState::Pressed,
        button: MouseButton::Left,
    };
    let right = WindowEvent::MouseInput {
        device_id: device(),
        state: ElementState::Pressed,
        button: MouseButton::Right,
    };

    assert_eq!(pointer_input(&left, 1.0), Some(PointerInput::Pressed));
    assert_eq!(pointer_input(&right, 1.0), None);
    assert_eq!(pointer_input(&WindowEvent::Focused(true), 1.0), None);
}

#[test]
fn should_translate_touch_phases() {
    assert_eq!(
        pointer_input(&touch(TouchPhase::Started, 7, 90.0), 1.5),
        Some(PointerInput::TouchStarted { id: 7, x: 60.0 })
    );
    assert_eq!(
        pointer_input(&touch(TouchPhase::Moved, 7, 120.0), 1.5),
        Some(PointerInput::TouchMoved { id: 7, x: 80.0 })
    );
    assert_eq!(
        pointer_input(&touch(TouchPhase::Cancelled, 7, 120.0), 1.5),
        Some(PointerInput::TouchEnded { id: 7 })
    );
}

#[test]
fn should_press_where_the_cursor_was_last_seen() {
    let mut controller = RotationController::new();
    let mut tracker = PointerTracker::new();

    assert_eq!(
        tracker.apply(&mut controller, PointerInput::Moved { x: 100.0 }, ms(0)),
        None
    );
    assert_eq!(
        tracker.apply(&mut controller, PointerInput::Pressed, ms(10)),
        Some(CursorHint::Grabbing)
    );
    assert_eq!(
        tracker.apply(&mut controller, PointerInput::Moved { x: 150.0 }, ms(20)),
        None
    );
    assert_relative_eq!(controller.target_yaw(), 50.0 * DRAG_SENSITIVITY, epsilon = 1e-6);

    assert_eq!(
        tracker.apply(&mut controller, PointerInput::Released, ms(30)),
        Some(CursorHint::Grab)
    );
    assert_eq!(
        tracker.apply(&mut controller, PointerInput::Released, ms(40)),
        None
    );
}

#[test]
fn should_ignore_second_finger() {
    let mut controller = RotationController::new();
    let mut tracker = PointerTracker::new();

    let first = tracker.apply(
        &mut controller,
        PointerInput::TouchStarted { id: 1, x: 0.0 },
        ms(0),
    );
    assert_eq!(first, Some(CursorHint::Grabbing));

    let second = tracker.apply(
        &mut controller,
        PointerInput::TouchStarted { id: 2, x: 500.0 },
        ms(10),
    );
    assert_eq!(second, None);
    assert_eq!(tracker.active_touch(), Some(1));

    tracker.apply(&mut controller, PointerInput::TouchMoved { id: 2, x: 800.0 }, ms(20));
    assert_relative_eq!(controller.target_yaw(), 0.0);

    tracker.apply(&mut controller, PointerInput::TouchEnded { id: 2 }, ms(30));
    assert!(controller.is_dragging());

    tracker.apply(&mut controller, PointerInput::TouchMoved { id: 1, x: 10.0 }, ms(40));
    assert_relative_eq!(controller.target_yaw(), 10.0 * DRAG_SENSITIVITY, epsilon = 1e-6);

    let lifted = tracker.apply(&mut controller, PointerInput::TouchEnded { id: 1 }, ms(50));
    assert_eq!(lifted, Some(CursorHint::Grab));
    assert_eq!(tracker.active_touch(), None);
}
