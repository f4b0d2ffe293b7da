// Host-side tests for the orbit camera.

use app_core::{OrbitCamera, MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE, PITCH_LIMIT};
use glam::Vec3;

#[test]
fn distance_stays_clamped_under_any_zoom_sequence() {
    let mut camera = OrbitCamera::new();
    for scroll in [5.0, -3.0, 100.0, -250.0, 7.5, 0.25, -0.25, 1e6, -1e6] {
        camera.zoom(scroll);
        assert!(
            camera.distance() >= MIN_CAMERA_DISTANCE && camera.distance() <= MAX_CAMERA_DISTANCE,
            "distance {} escaped [{MIN_CAMERA_DISTANCE}, {MAX_CAMERA_DISTANCE}] after scroll {scroll}",
            camera.distance()
        );
    }
}

#[test]
fn eye_sits_at_distance_from_target() {
    let mut camera = OrbitCamera::new();
    for _ in 0..50 {
        camera.rotate(17.0, -9.0);
        camera.zoom(-0.5);
        let d = (camera.eye() - camera.target()).length();
        assert!(
            (d - camera.distance()).abs() < 1e-3,
            "eye drifted off the orbit shell: {d} vs {}",
            camera.distance()
        );
    }
}

#[test]
fn default_camera_looks_down_positive_z() {
    let camera = OrbitCamera::new();
    let eye = camera.eye();
    assert!((eye.x).abs() < 1e-6 && (eye.y).abs() < 1e-6);
    assert!((eye.z - camera.distance()).abs() < 1e-6);
}

#[test]
fn pitch_is_clamped_short_of_the_poles() {
    let mut camera = OrbitCamera::new();
    for _ in 0..10_000 {
        camera.rotate(0.0, 10.0);
    }
    assert!(camera.pitch() <= PITCH_LIMIT);
    for _ in 0..10_000 {
        camera.rotate(0.0, -10.0);
    }
    assert!(camera.pitch() >= -PITCH_LIMIT);
}

#[test]
fn auto_rotate_advances_yaw_over_time() {
    let mut camera = OrbitCamera::new();
    let before = camera.yaw();
    camera.advance(2.0);
    assert!(camera.yaw() > before, "auto-rotate should advance the azimuth");
}

#[test]
fn auto_rotate_pauses_during_a_rotate_drag() {
    let mut camera = OrbitCamera::new();
    camera.begin_rotate();
    let before = camera.yaw();
    camera.advance(5.0);
    assert_eq!(camera.yaw(), before, "auto-rotate must freeze while dragging");
    camera.end_rotate();
    camera.advance(5.0);
    assert!(camera.yaw() > before, "auto-rotate should resume after the drag");
}

#[test]
fn auto_rotate_can_be_disabled() {
    let mut camera = OrbitCamera::new();
    camera.auto_rotate = false;
    let before = camera.yaw();
    camera.advance(10.0);
    assert_eq!(camera.yaw(), before);
}

#[test]
fn pan_translates_the_look_at_target() {
    let mut camera = OrbitCamera::new();
    assert_eq!(camera.target(), Vec3::ZERO);
    camera.pan(40.0, 0.0);
    assert!(
        camera.target().length() > 0.0,
        "pan should move the target off the origin"
    );
    // Panning must not change the orbit distance.
    let d = (camera.eye() - camera.target()).length();
    assert!((d - camera.distance()).abs() < 1e-3);
}

#[test]
fn screen_center_ray_points_at_the_target() {
    let mut camera = OrbitCamera::new();
    camera.rotate(123.0, -45.0);
    let (origin, dir) = camera.screen_to_world_ray(400.0, 300.0, 800.0, 600.0);
    assert!((origin - camera.eye()).length() < 1e-3);
    let to_target = (camera.target() - origin).normalize();
    assert!(
        dir.dot(to_target) > 0.999,
        "center ray should aim at the look-at target, got dot {}",
        dir.dot(to_target)
    );
}

#[test]
fn corner_rays_diverge_from_the_center_ray() {
    let camera = OrbitCamera::new();
    let (_, center) = camera.screen_to_world_ray(400.0, 300.0, 800.0, 600.0);
    let (_, corner) = camera.screen_to_world_ray(0.0, 0.0, 800.0, 600.0);
    assert!(center.dot(corner) < 0.999, "corner ray should differ");
    assert!((corner.length() - 1.0).abs() < 1e-4, "rays are normalized");
}
