//! Fixture entities
//!
//! Spawns one mesh entity per resolved fixture at startup and keeps them in
//! step with [`ViewportState`]: whenever it changes, the scene is rebuilt
//! from the current palette and applied to the existing entities.

use std::collections::HashSet;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::fixture::ResolvedScene;
use crate::layout::build_scene;
use crate::material::{css_color, fixture_material, update_material};
use crate::mesh::fixture_mesh;
use crate::viewport::{ViewportState, init_viewport};

/// Position of a fixture entity in the resolved scene
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureIndex(pub usize);

/// Random source for jittered fixture rings
#[derive(Resource)]
pub struct LayoutRng(pub SmallRng);

impl LayoutRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for LayoutRng {
    fn default() -> Self {
        Self::from_seed(0)
    }
}

/// Colors already reported as unparseable
#[derive(Resource, Default)]
pub struct ReportedColors(HashSet<&'static str>);

impl ReportedColors {
    /// Warn once per color string that cannot be parsed
    fn check(&mut self, scene: &ResolvedScene) {
        for fixture in scene.iter() {
            if css_color(fixture.color).is_none() && self.0.insert(fixture.color) {
                warn!(
                    "Unrecognized color '{}' on {}, rendering white",
                    fixture.color, fixture.label
                );
            }
        }
    }
}

/// Viewport state the fixture entities currently reflect
#[derive(Resource, Default)]
pub struct AppliedViewport(Option<ViewportState>);

/// Plugin spawning and refreshing the fixtures
pub struct FixturePlugin;

impl Plugin for FixturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LayoutRng>()
            .init_resource::<ReportedColors>()
            .init_resource::<AppliedViewport>()
            .add_systems(Startup, spawn_fixtures.after(init_viewport))
            .add_systems(PostUpdate, refresh_fixtures);
    }
}

fn spawn_fixtures(
    mut commands: Commands,
    state: Res<ViewportState>,
    mut rng: ResMut<LayoutRng>,
    mut reported: ResMut<ReportedColors>,
    mut applied: ResMut<AppliedViewport>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let scene = build_scene(state.palette(), &mut rng.0);
    reported.check(&scene);

    for (index, fixture) in scene.iter().enumerate() {
        commands.spawn((
            Mesh3d(meshes.add(fixture_mesh(&fixture.shape, fixture.material.wireframe))),
            MeshMaterial3d(materials.add(fixture_material(fixture.color, &fixture.material))),
            fixture.placement.to_transform(),
            Name::new(fixture.label.clone()),
            FixtureIndex(index),
        ));
    }

    applied.0 = Some(state.clone());
    info!("Spawned {} fixtures with theme {}", scene.len(), state.theme);
}

/// Rebuild the scene when the viewport state differs from the one last
/// applied, and update entities in place
fn refresh_fixtures(
    state: Res<ViewportState>,
    mut rng: ResMut<LayoutRng>,
    mut reported: ResMut<ReportedColors>,
    mut applied: ResMut<AppliedViewport>,
    mut fixtures: Query<(
        &FixtureIndex,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if applied.0.as_ref() == Some(&*state) {
        return;
    }

    let scene = build_scene(state.palette(), &mut rng.0);
    reported.check(&scene);

    for (index, mut transform, material_handle) in fixtures.iter_mut() {
        let Some(fixture) = scene.fixtures.get(index.0) else {
            continue;
        };

        let desired = fixture.placement.to_transform();
        if *transform != desired {
            *transform = desired;
        }

        if let Some(mut material) = materials.get_mut(&material_handle.0) {
            update_material(&mut material, fixture.color, &fixture.material);
        }
    }

    applied.0 = Some(state.clone());
    debug!("Refreshed fixtures for theme {}", state.theme);
}
