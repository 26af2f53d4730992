//! Orbit camera controller with damping
//!
//! Controls:
//! - Left mouse drag: Orbit around target
//! - Right mouse drag: Pan
//! - Scroll wheel: Dolly (zoom)
//!
//! Orbit and pan input accumulate into pending deltas that are applied a
//! fraction per frame, so the camera glides to rest after a drag.

use bevy::input::mouse::{MouseButton, MouseMotion, MouseWheel};
use bevy::prelude::*;

/// Camera starting position
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 5.0, 10.0);

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Blocks camera input while set (e.g. pointer over an overlay)
#[derive(Resource, Default)]
pub struct CameraInputLock {
    pub locked: bool,
}

/// Camera orbit controller state
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera orbits around
    pub target: Vec3,
    /// Distance from target
    pub distance: f32,
    /// Horizontal angle (yaw) in radians
    pub yaw: f32,
    /// Vertical angle (pitch) in radians
    pub pitch: f32,
    /// Orbit sensitivity (radians per pixel)
    pub orbit_sensitivity: f32,
    /// Pan sensitivity (units per pixel, scaled by distance)
    pub pan_sensitivity: f32,
    /// Zoom sensitivity (distance units per scroll line)
    pub zoom_sensitivity: f32,
    /// Minimum distance from target
    pub min_distance: f32,
    /// Maximum distance from target
    pub max_distance: f32,
    /// Fraction of pending motion applied per frame
    pub damping_factor: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_pan: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_position(CAMERA_START, Vec3::ZERO)
    }
}

impl OrbitCamera {
    /// Orbit state reproducing a camera at `position` looking at `target`
    pub fn from_position(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length();
        let horizontal = Vec2::new(offset.x, offset.z).length();
        Self {
            target,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: offset.y.atan2(horizontal),
            orbit_sensitivity: 0.005,
            pan_sensitivity: 0.002,
            zoom_sensitivity: 1.0,
            min_distance: 0.5,
            max_distance: 200.0,
            damping_factor: 0.05,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_pan: Vec3::ZERO,
        }
    }

    /// Calculate camera position from orbit parameters
    pub fn calculate_position(&self) -> Vec3 {
        // Pitch is the angle from horizontal, yaw the angle around Y
        let horizontal_distance = self.distance * self.pitch.cos();
        let y = self.distance * self.pitch.sin();
        let x = horizontal_distance * self.yaw.sin();
        let z = horizontal_distance * self.yaw.cos();

        self.target + Vec3::new(x, y, z)
    }

    /// Queue an orbit by a mouse delta in pixels
    pub fn orbit(&mut self, delta: Vec2) {
        self.pending_yaw -= delta.x * self.orbit_sensitivity;
        self.pending_pitch += delta.y * self.orbit_sensitivity;
    }

    /// Queue a pan by a mouse delta in pixels along the camera's axes
    pub fn pan(&mut self, delta: Vec2, right: Vec3, up: Vec3) {
        let pan_scale = self.pan_sensitivity * self.distance;
        // Negative to feel like dragging the scene
        self.pending_pan += (-right * delta.x + up * delta.y) * pan_scale;
    }

    /// Dolly by scroll lines (positive = closer), applied immediately
    pub fn zoom(&mut self, lines: f32) {
        // Scale zoom speed by current distance for consistent feel
        let zoom_amount = lines * self.zoom_sensitivity * (self.distance * 0.1);
        self.distance = (self.distance - zoom_amount).clamp(self.min_distance, self.max_distance);
    }

    /// Apply one frame of damped motion
    pub fn step(&mut self) {
        let f = self.damping_factor;

        self.yaw += self.pending_yaw * f;
        // Clamp pitch to prevent flipping (just below straight up/down)
        self.pitch = (self.pitch + self.pending_pitch * f).clamp(-1.5, 1.5);
        self.target += self.pending_pan * f;

        self.pending_yaw *= 1.0 - f;
        self.pending_pitch *= 1.0 - f;
        self.pending_pan *= 1.0 - f;

        let at_rest = self.pending_yaw.abs() < 1e-6
            && self.pending_pitch.abs() < 1e-6
            && self.pending_pan.length_squared() < 1e-12;
        if at_rest {
            self.pending_yaw = 0.0;
            self.pending_pitch = 0.0;
            self.pending_pan = Vec3::ZERO;
        }
    }

    /// Whether damped motion is still pending
    pub fn is_settling(&self) -> bool {
        self.pending_yaw != 0.0 || self.pending_pitch != 0.0 || self.pending_pan != Vec3::ZERO
    }

    /// Reset to default view
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Plugin for orbit camera controls
pub struct CameraControllerPlugin;

impl Plugin for CameraControllerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraInputLock>().add_systems(
            Update,
            (
                camera_drag_system,
                camera_zoom_system,
                update_camera_transform
                    .after(camera_drag_system)
                    .after(camera_zoom_system),
            ),
        );
    }
}

/// Handle orbit (left drag) and pan (right drag)
fn camera_drag_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut motion_events: MessageReader<MouseMotion>,
    mut camera_query: Query<(&mut OrbitCamera, &Transform)>,
    lock: Res<CameraInputLock>,
) {
    if lock.locked {
        motion_events.clear();
        return;
    }

    let orbiting = mouse_button.pressed(MouseButton::Left);
    let panning = mouse_button.pressed(MouseButton::Right);
    if !orbiting && !panning {
        motion_events.clear();
        return;
    }

    let mut delta = Vec2::ZERO;
    for event in motion_events.read() {
        delta += event.delta;
    }

    if delta == Vec2::ZERO {
        return;
    }

    for (mut orbit, transform) in camera_query.iter_mut() {
        if orbiting {
            orbit.orbit(delta);
        } else {
            orbit.pan(delta, transform.rotation * Vec3::X, transform.rotation * Vec3::Y);
        }
    }
}

/// Handle zoom (scroll wheel)
fn camera_zoom_system(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut OrbitCamera>,
    lock: Res<CameraInputLock>,
) {
    if lock.locked {
        scroll_events.clear();
        return;
    }

    let mut scroll_delta = 0.0;
    for event in scroll_events.read() {
        scroll_delta += event.y;
    }

    if scroll_delta == 0.0 {
        return;
    }

    for mut orbit in camera_query.iter_mut() {
        orbit.zoom(scroll_delta);
    }
}

/// Advance damping and update camera transform from orbit state
fn update_camera_transform(
    mut camera_query: Query<(&mut OrbitCamera, &mut Transform), With<MainCamera>>,
) {
    for (mut orbit, mut transform) in camera_query.iter_mut() {
        if orbit.is_settling() {
            orbit.step();
        }
        let position = orbit.calculate_position();
        let target = orbit.target;
        let desired = Transform::from_translation(position).looking_at(target, Vec3::Y);
        if *transform != desired {
            *transform = desired;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_default_reproduces_start_position() {
        let orbit = OrbitCamera::default();
        assert!((orbit.calculate_position() - CAMERA_START).length() < EPSILON);
        assert!((orbit.distance - 125f32.sqrt()).abs() < EPSILON);
        assert!(orbit.yaw.abs() < EPSILON);
    }

    #[test]
    fn test_from_position_off_axis() {
        let position = Vec3::new(3.0, 2.0, -4.0);
        let target = Vec3::new(1.0, 0.0, 1.0);
        let orbit = OrbitCamera::from_position(position, target);
        assert!((orbit.calculate_position() - position).length() < EPSILON);
    }

    #[test]
    fn test_damped_orbit_converges_to_full_delta() {
        let mut orbit = OrbitCamera::default();
        let start_yaw = orbit.yaw;
        orbit.orbit(Vec2::new(-100.0, 0.0));

        orbit.step();
        let after_one = orbit.yaw - start_yaw;
        // First frame applies only the damping fraction
        assert!((after_one - 0.5 * 0.05).abs() < EPSILON);

        for _ in 0..2000 {
            orbit.step();
        }
        assert!((orbit.yaw - start_yaw - 0.5).abs() < 1e-3);
        assert!(!orbit.is_settling());
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut orbit = OrbitCamera::default();
        orbit.orbit(Vec2::new(0.0, 100_000.0));
        for _ in 0..500 {
            orbit.step();
        }
        assert!(orbit.pitch <= 1.5);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..200 {
            orbit.zoom(5.0);
        }
        assert_eq!(orbit.distance, orbit.min_distance);
        for _ in 0..200 {
            orbit.zoom(-5.0);
        }
        assert_eq!(orbit.distance, orbit.max_distance);
    }

    #[test]
    fn test_pan_moves_target() {
        let mut orbit = OrbitCamera::default();
        orbit.pan(Vec2::new(10.0, 0.0), Vec3::X, Vec3::Y);
        for _ in 0..2000 {
            orbit.step();
        }
        assert!(orbit.target.x < 0.0);
        assert!(orbit.target.y.abs() < EPSILON);
    }

    #[test]
    fn test_reset() {
        let mut orbit = OrbitCamera::default();
        orbit.zoom(3.0);
        orbit.orbit(Vec2::ONE);
        orbit.reset();
        assert_eq!(orbit, OrbitCamera::default());
    }
}
