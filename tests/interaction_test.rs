use std::time::Duration;

use approx::assert_relative_eq;
use mage_stage::interaction::{
    AUTO_ROTATE_COOLDOWN, AUTO_ROTATE_STEP, CursorHint, DRAG_SENSITIVITY, RotationController,
    RotationMode, SMOOTHING,
};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn should_start_rotating_automatically() {
    let mut controller = RotationController::new();
    assert_eq!(controller.mode(), RotationMode::AutoRotate);
    assert_eq!(controller.cursor(), CursorHint::Grab);

    let yaw = controller.advance(ms(16));

    assert_relative_eq!(controller.target_yaw(), AUTO_ROTATE_STEP);
    assert_relative_eq!(yaw, AUTO_ROTATE_STEP * SMOOTHING);
}

#[test]
fn should_contract_distance_to_target_by_constant_ratio() {
    let mut controller = RotationController::new();
    controller.press(0.0, ms(0));
    controller.move_to(100.0, ms(0));
    let target = controller.target_yaw();

    let mut distance = target - controller.applied_yaw();
    for frame in 1..=20 {
        controller.advance(ms(frame * 16));
        let next = target - controller.applied_yaw();
        assert_relative_eq!(next / distance, 1.0 - SMOOTHING, epsilon = 1e-4);
        distance = next;
    }
    assert_relative_eq!(controller.target_yaw(), target);
}

#[test]
fn should_rotate_by_horizontal_drag_distance() {
    let mut controller = RotationController::new();
    controller.press(100.0, ms(0));
    controller.move_to(150.0, ms(10));
    assert_relative_eq!(controller.target_yaw(), 50.0 * DRAG_SENSITIVITY, epsilon = 1e-6);

    controller.move_to(120.0, ms(20));
    assert_relative_eq!(controller.target_yaw(), 20.0 * DRAG_SENSITIVITY, epsilon = 1e-6);
}

#[test]
fn should_ignore_moves_without_press() {
    let mut controller = RotationController::new();
    controller.move_to(500.0, ms(0));
    controller.move_to(-300.0, ms(5));

    assert_eq!(controller.target_yaw(), 0.0);
}

#[test]
fn should_not_rotate_on_press_and_release_without_move() {
    let mut controller = RotationController::new();
    controller.press(42.0, ms(0));
    controller.release(ms(0));

    assert_eq!(controller.target_yaw(), 0.0);
    assert_eq!(controller.mode(), RotationMode::CooldownToAutoRotate);
}

#[test]
fn should_suspend_auto_rotation_while_dragging() {
    let mut controller = RotationController::new();
    controller.press(0.0, ms(0));
    assert_eq!(controller.mode(), RotationMode::UserDragging);
    assert_eq!(controller.cursor(), CursorHint::Grabbing);

    for frame in 1..=10 {
        controller.advance(ms(frame * 16));
    }
    assert_eq!(controller.target_yaw(), 0.0);
}

#[test]
fn should_resume_auto_rotation_exactly_after_cooldown() {
    let mut controller = RotationController::new();
    controller.press(0.0, ms(0));
    controller.release(ms(1000));
    assert_eq!(controller.pending_checks(), 1);
    assert_eq!(controller.cursor(), CursorHint::Grab);

    controller.advance(ms(1000) + AUTO_ROTATE_COOLDOWN - ms(1));
    assert_eq!(controller.mode(), RotationMode::CooldownToAutoRotate);
    assert_eq!(controller.target_yaw(), 0.0);

    controller.advance(ms(1000) + AUTO_ROTATE_COOLDOWN);
    assert_eq!(controller.mode(), RotationMode::AutoRotate);
    assert_eq!(controller.pending_checks(), 0);
    assert_relative_eq!(controller.target_yaw(), AUTO_ROTATE_STEP);
}

#[test]
fn should_stay_dragging_when_pressed_before_cooldown_elapses() {
    let mut controller = RotationController::new();
    controller.press(0.0, ms(0));
    controller.release(ms(0));
    controller.press(0.0, ms(2999));

    controller.advance(ms(3000));
    assert_eq!(controller.mode(), RotationMode::UserDragging);
    assert_eq!(controller.pending_checks(), 0);

    controller.release(ms(4000));
    controller.advance(ms(6999));
    assert_eq!(controller.mode(), RotationMode::CooldownToAutoRotate);
    controller.advance(ms(7000));
    assert_eq!(controller.mode(), RotationMode::AutoRotate);
}

#[test]
fn should_resume_on_earliest_release_check_without_cancellation() {
    let mut controller = RotationController::new();
    controller.press(0.0, ms(0));
    controller.release(ms(0));
    controller.press(0.0, ms(1000));
    controller.release(ms(2000));
    assert_eq!(controller.pending_checks(), 2);

    // The check scheduled by the first release finds no drag in progress
    controller.advance(ms(3000));
    assert_eq!(controller.mode(), RotationMode::AutoRotate);
    assert_eq!(controller.pending_checks(), 1);

    controller.advance(ms(5000));
    assert_eq!(controller.mode(), RotationMode::AutoRotate);
    assert_eq!(controller.pending_checks(), 0);
}

#[test]
fn should_run_due_checks_before_handling_input() {
    let mut controller = RotationController::new();
    controller.press(0.0, ms(0));
    controller.release(ms(0));

    // No frame ran in between, the press still sees the elapsed check first
    controller.press(10.0, ms(5000));
    assert_eq!(controller.mode(), RotationMode::UserDragging);
    assert_eq!(controller.pending_checks(), 0);

    controller.release(ms(5100));
    controller.advance(ms(5200));
    assert_eq!(controller.mode(), RotationMode::CooldownToAutoRotate);
}
