use mage_stage::flow::{FrameRecovery, frame_recovery};

#[test]
fn should_reconfigure_lost_and_outdated_surfaces() {
    assert_eq!(
        frame_recovery(&wgpu::SurfaceError::Lost),
        FrameRecovery::Reconfigure
    );
    assert_eq!(
        frame_recovery(&wgpu::SurfaceError::Outdated),
        FrameRecovery::Reconfigure
    );
}

#[test]
fn should_skip_frames_that_timed_out() {
    assert_eq!(
        frame_recovery(&wgpu::SurfaceError::Timeout),
        FrameRecovery::Skip
    );
}

#[test]
fn should_stop_when_out_of_memory() {
    assert_eq!(
        frame_recovery(&wgpu::SurfaceError::OutOfMemory),
        FrameRecovery::Exit
    );
}
