//! Fixture descriptors
//!
//! A fixture is one static primitive: a shape, a placement, a color reference
//! and material properties. Fixtures are authored as constants in
//! [`crate::layout`] and resolved against a theme palette at build time.

use bathroom_theme::{PaletteSlot, ThemePalette};
use bevy::math::EulerRot;
use bevy::prelude::*;
use rand::Rng;

/// Primitive shape with its dimensional parameters
///
/// Dimensions follow the conventions of the authored layout: cylinders run
/// along Y, planes lie in XY facing +Z, tori ring the Z axis, and grids lie
/// in XZ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    /// Square grid of lines, `divisions` cells per side
    Grid { size: f32, divisions: u32 },
}

/// Position and XYZ Euler rotation (radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Placement {
    pub const fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            rotation: Vec3::ZERO,
        }
    }

    /// Placement shifted by `offset`, rotation unchanged
    pub fn offset_by(self, offset: Vec3) -> Self {
        Self {
            position: self.position + offset,
            rotation: self.rotation,
        }
    }

    pub fn to_transform(self) -> Transform {
        Transform::from_translation(self.position).with_rotation(Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        ))
    }
}

/// Where a fixture's color comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRef {
    /// Follows the active theme
    Slot(PaletteSlot),
    /// Same color in every theme
    Fixed(&'static str),
}

impl ColorRef {
    pub fn resolve(self, palette: &ThemePalette) -> &'static str {
        match self {
            ColorRef::Slot(slot) => palette.slot(slot),
            ColorRef::Fixed(color) => color,
        }
    }
}

/// Surface properties; defaults match an untouched standard material
/// (non-metallic, fully rough, opaque, solid)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProps {
    pub metalness: f32,
    pub roughness: f32,
    /// Blended transparency when set
    pub opacity: Option<f32>,
    /// Render edges only
    pub wireframe: bool,
}

impl MaterialProps {
    pub const DEFAULT: MaterialProps = MaterialProps {
        metalness: 0.0,
        roughness: 1.0,
        opacity: None,
        wireframe: false,
    };

    pub const fn metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    pub const fn roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub const fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }
}

impl Default for MaterialProps {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One authored primitive, positioned relative to its cluster origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixture {
    pub label: &'static str,
    pub shape: Shape,
    pub placement: Placement,
    pub color: ColorRef,
    pub material: MaterialProps,
}

impl Fixture {
    pub const fn new(
        label: &'static str,
        shape: Shape,
        placement: Placement,
        color: ColorRef,
    ) -> Self {
        Self {
            label,
            shape,
            placement,
            color,
            material: MaterialProps::DEFAULT,
        }
    }

    pub const fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.placement.rotation = Vec3::new(x, y, z);
        self
    }

    pub const fn with_material(mut self, material: MaterialProps) -> Self {
        self.material = material;
        self
    }
}

/// Offset rule for the copies of a ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingPattern {
    /// `(sin(i·stride)·radius, U[0, jitter_height), cos(i·stride)·radius)`.
    /// The height is re-rolled on every build.
    Jittered {
        stride: f32,
        radius: f32,
        jitter_height: f32,
    },
    /// `(sin(i·stride)·radius, cos(i·stride)·radius − drop, sin(i·depth_stride)·radius)`
    Tilted {
        stride: f32,
        depth_stride: f32,
        radius: f32,
        drop: f32,
    },
}

impl RingPattern {
    /// Offset of copy `index` from the ring center
    pub fn offset<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Vec3 {
        let i = index as f32;
        match *self {
            RingPattern::Jittered {
                stride,
                radius,
                jitter_height,
            } => Vec3::new(
                (i * stride).sin() * radius,
                rng.random_range(0.0..jitter_height),
                (i * stride).cos() * radius,
            ),
            RingPattern::Tilted {
                stride,
                depth_stride,
                radius,
                drop,
            } => Vec3::new(
                (i * stride).sin() * radius,
                (i * stride).cos() * radius - drop,
                (i * depth_stride).sin() * radius,
            ),
        }
    }

    /// Whether offsets depend on the random source
    pub fn is_random(&self) -> bool {
        matches!(self, RingPattern::Jittered { .. })
    }
}

/// Entry of a cluster
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Member {
    Single(Fixture),
    /// `count` copies of `template`, each offset from `template`'s placement
    /// by the ring pattern
    Ring {
        count: usize,
        pattern: RingPattern,
        template: Fixture,
    },
}

/// Named group of fixtures sharing an origin
#[derive(Debug, Clone, Copy)]
pub struct Cluster {
    pub name: &'static str,
    pub origin: Vec3,
    pub members: &'static [Member],
}

/// Fixture with its world placement and concrete color
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFixture {
    pub label: String,
    pub cluster: &'static str,
    pub shape: Shape,
    pub placement: Placement,
    pub color: &'static str,
    pub material: MaterialProps,
}

/// Fully resolved scene for one palette, in authoring order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedScene {
    pub fixtures: Vec<ResolvedFixture>,
}

impl ResolvedScene {
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedFixture> {
        self.fixtures.iter()
    }

    /// Look up a fixture by label
    pub fn get(&self, label: &str) -> Option<&ResolvedFixture> {
        self.fixtures.iter().find(|f| f.label == label)
    }

    /// Fixtures of one cluster
    pub fn cluster<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ResolvedFixture> {
        self.fixtures.iter().filter(move |f| f.cluster == name)
    }
}
