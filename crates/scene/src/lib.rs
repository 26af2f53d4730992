//! Themeable bathroom scene
//!
//! This crate provides the 3D scene shared by the native app and the WASM
//! build: the fixture layout, the light rig, the orbit camera and the
//! viewport state driving theme changes.

use bathroom_ipc::SceneToUi;
use bathroom_theme::ThemeId;
use bevy::camera::PerspectiveProjection;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;

mod camera;
pub mod fixture;
mod fixtures;
pub mod layout;
mod lighting;
pub mod material;
pub mod mesh;
mod viewport;

pub use camera::{
    CAMERA_FOV_DEGREES, CAMERA_START, CameraControllerPlugin, CameraInputLock, MainCamera,
    OrbitCamera,
};
pub use fixture::{ResolvedFixture, ResolvedScene};
pub use fixtures::{FixtureIndex, FixturePlugin, LayoutRng};
pub use layout::{FIXTURE_COUNT, bathroom_layout, build_scene};
pub use lighting::{LightKind, LightRig, LightingPlugin, RigLight};
pub use viewport::{ThemeSelected, ViewportPlugin, ViewportState};

/// Resource for queuing messages to send to the UI
/// The shell (app crate) should drain this and forward to its UI
#[derive(Resource, Default)]
pub struct OutboundUiMessages {
    pub messages: Vec<SceneToUi>,
}

impl OutboundUiMessages {
    /// Queue a message to be sent to the UI
    pub fn send(&mut self, msg: SceneToUi) {
        self.messages.push(msg);
    }

    /// Take all queued messages, leaving the queue empty
    pub fn drain(&mut self) -> Vec<SceneToUi> {
        std::mem::take(&mut self.messages)
    }
}

/// Camera clip planes
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;

pub struct ScenePlugin {
    /// Theme shown before the first selection
    pub initial_theme: ThemeId,
    /// Seed for the jittered fixture rings
    pub jitter_seed: u64,
}

impl Default for ScenePlugin {
    fn default() -> Self {
        Self {
            initial_theme: ThemeId::default(),
            jitter_seed: 0,
        }
    }
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OutboundUiMessages>()
            .insert_resource(ViewportState::new(self.initial_theme))
            .insert_resource(LayoutRng::from_seed(self.jitter_seed));

        app.add_plugins(CameraControllerPlugin);
        app.add_plugins(LightingPlugin);
        app.add_plugins(ViewportPlugin);
        app.add_plugins(FixturePlugin);

        app.add_systems(Startup, setup_camera);
    }
}

/// Spawn the perspective camera with orbit controls
fn setup_camera(mut commands: Commands) {
    // Reinhard: TonyMcMapFace requires tonemapping_luts which needs zstd (not available in WASM)
    let orbit_camera = OrbitCamera::default();
    let camera_position = orbit_camera.calculate_position();
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(camera_position).looking_at(orbit_camera.target, Vec3::Y),
        Tonemapping::Reinhard,
        MainCamera,
        orbit_camera,
        Name::new("Main Camera"),
    ));

    info!("Camera initialized at {}", camera_position);
}
