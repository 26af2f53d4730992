//! Static light rig
//!
//! Intensities are authored as unitless values (1.0 lights a white surface
//! to roughly full brightness) and converted to Bevy's photometric units
//! against the default camera exposure.

use std::f32::consts::{FRAC_PI_6, PI};

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

/// Kind of a rig light
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Point,
    Directional,
    /// Cone half-angle in radians
    Spot { angle: f32 },
}

/// One positioned light aimed at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigLight {
    pub name: &'static str,
    pub kind: LightKind,
    pub position: Vec3,
    pub intensity: f32,
    pub casts_shadow: bool,
}

/// Ambient level plus positioned lights
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LightRig {
    pub ambient: f32,
    pub lights: Vec<RigLight>,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: 0.7,
            lights: vec![
                RigLight {
                    name: "fill_point",
                    kind: LightKind::Point,
                    position: Vec3::new(10.0, 10.0, 10.0),
                    intensity: 0.5,
                    casts_shadow: false,
                },
                RigLight {
                    name: "key_directional",
                    kind: LightKind::Directional,
                    position: Vec3::new(5.0, 10.0, 5.0),
                    intensity: 0.8,
                    casts_shadow: false,
                },
                RigLight {
                    name: "side_spot",
                    kind: LightKind::Spot { angle: FRAC_PI_6 },
                    position: Vec3::new(-5.0, 5.0, 5.0),
                    intensity: 0.5,
                    casts_shadow: true,
                },
                RigLight {
                    name: "overhead_spot",
                    kind: LightKind::Spot { angle: FRAC_PI_6 },
                    position: Vec3::new(0.0, 5.0, 0.0),
                    intensity: 1.0,
                    casts_shadow: false,
                },
            ],
        }
    }
}

/// Conversion from unitless rig intensities to Bevy light units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightUnits {
    /// Lux that map to 1.0 on screen at the default exposure
    pub lux_per_unit: f32,
    /// Range of point and spot lights in meters
    pub range: f32,
}

impl Default for LightUnits {
    fn default() -> Self {
        Self {
            // 1 / exposure at EV100 9.7: 1.2 * 2^9.7
            lux_per_unit: 1000.0,
            range: 50.0,
        }
    }
}

impl LightUnits {
    /// Ambient brightness (cd/m²)
    pub fn ambient_brightness(&self, intensity: f32) -> f32 {
        intensity * self.lux_per_unit / PI
    }

    /// Directional illuminance (lux)
    pub fn illuminance(&self, intensity: f32) -> f32 {
        intensity * self.lux_per_unit
    }

    /// Point and spot luminous power (lumens) for an intensity in candela
    pub fn luminous_power(&self, intensity: f32) -> f32 {
        intensity * 4.0 * PI * self.lux_per_unit
    }
}

/// Marker for entities spawned from the rig
#[derive(Component)]
pub struct RigLightMarker;

/// Plugin spawning the static light rig
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LightRig>()
            .add_systems(Startup, setup_lighting);
    }
}

/// Transform at `position` aimed at the origin
pub fn aimed_at_origin(position: Vec3) -> Transform {
    let direction = -position.normalize_or_zero();
    // Lights straight above or below need a different up vector
    let up = if direction.cross(Vec3::Y).length_squared() < 1e-6 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    Transform::from_translation(position).looking_at(Vec3::ZERO, up)
}

fn setup_lighting(mut commands: Commands, rig: Res<LightRig>) {
    let units = LightUnits::default();

    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: units.ambient_brightness(rig.ambient),
        ..default()
    });

    for light in &rig.lights {
        let transform = aimed_at_origin(light.position);
        let name = Name::new(light.name);
        match light.kind {
            LightKind::Point => {
                commands.spawn((
                    PointLight {
                        intensity: units.luminous_power(light.intensity),
                        range: units.range,
                        shadows_enabled: light.casts_shadow,
                        ..default()
                    },
                    transform,
                    name,
                    RigLightMarker,
                ));
            }
            LightKind::Directional => {
                commands.spawn((
                    DirectionalLight {
                        illuminance: units.illuminance(light.intensity),
                        shadows_enabled: light.casts_shadow,
                        ..default()
                    },
                    transform,
                    name,
                    RigLightMarker,
                ));
            }
            LightKind::Spot { angle } => {
                commands.spawn((
                    SpotLight {
                        intensity: units.luminous_power(light.intensity),
                        range: units.range,
                        shadows_enabled: light.casts_shadow,
                        // Hard-edged cone
                        inner_angle: angle,
                        outer_angle: angle,
                        ..default()
                    },
                    transform,
                    name,
                    RigLightMarker,
                ));
            }
        }
    }

    info!(
        "Light rig initialized: ambient {} + {} lights",
        rig.ambient,
        rig.lights.len()
    );
}
