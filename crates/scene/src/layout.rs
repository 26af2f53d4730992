//! The bathroom layout
//!
//! Every fixture's dimensions, placement and material are authored constants.
//! [`build_scene`] resolves them against a palette; only the plant leaves
//! draw from the random source.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI};

use bathroom_theme::{PaletteSlot, ThemePalette};
use bevy::math::Vec3;
use rand::Rng;

use crate::fixture::{
    Cluster, ColorRef, Fixture, MaterialProps, Member, Placement, ResolvedFixture,
    ResolvedScene, RingPattern, Shape,
};

/// Number of fixtures a build produces
pub const FIXTURE_COUNT: usize = 53;

const fn cuboid(width: f32, height: f32, depth: f32) -> Shape {
    Shape::Box {
        width,
        height,
        depth,
    }
}

const fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Shape {
    Shape::Cylinder {
        radius_top,
        radius_bottom,
        height,
        radial_segments,
    }
}

const fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Shape {
    Shape::Sphere {
        radius,
        width_segments,
        height_segments,
    }
}

const fn plane(width: f32, height: f32) -> Shape {
    Shape::Plane { width, height }
}

const fn slot(slot: PaletteSlot) -> ColorRef {
    ColorRef::Slot(slot)
}

const fn fixed(color: &'static str) -> ColorRef {
    ColorRef::Fixed(color)
}

const fn at(x: f32, y: f32, z: f32) -> Placement {
    Placement::at(x, y, z)
}

const fn single(fixture: Fixture) -> Member {
    Member::Single(fixture)
}

const PLAIN: MaterialProps = MaterialProps::DEFAULT;
const CHROME: MaterialProps = PLAIN.metalness(0.8).roughness(0.2);

#[rustfmt::skip]
static WALLS: &[Member] = &[
    single(Fixture::new("walls.back", cuboid(10.0, 3.0, 0.1), at(0.0, 1.5, -5.0), slot(PaletteSlot::Wall))),
    single(
        Fixture::new("walls.right", cuboid(10.0, 3.0, 0.1), at(5.0, 1.5, 0.0), slot(PaletteSlot::Wall))
            .rotated(0.0, -FRAC_PI_2, 0.0),
    ),
    single(
        Fixture::new("walls.left", cuboid(10.0, 3.0, 0.1), at(-5.0, 1.5, 0.0), slot(PaletteSlot::Wall))
            .rotated(0.0, FRAC_PI_2, 0.0),
    ),
    single(
        Fixture::new("walls.front", cuboid(10.0, 3.0, 0.1), at(0.0, 1.5, 5.0), slot(PaletteSlot::Wall))
            .rotated(0.0, PI, 0.0),
    ),
];

#[rustfmt::skip]
static FLOOR: &[Member] = &[
    single(
        Fixture::new("floor.surface", plane(10.0, 10.0), at(0.0, 0.0, 0.0), slot(PaletteSlot::Floor))
            .rotated(-FRAC_PI_2, 0.0, 0.0),
    ),
    single(Fixture::new(
        "floor.tile_lines",
        Shape::Grid {
            size: 10.0,
            divisions: 20,
        },
        at(0.0, 0.01, 0.0),
        slot(PaletteSlot::TileLine),
    )),
];

#[rustfmt::skip]
static SINK: &[Member] = &[
    single(Fixture::new("sink.basin", cuboid(1.0, 0.5, 0.5), at(0.0, 1.2, -4.0), slot(PaletteSlot::Sink))),
    single(Fixture::new("sink.pedestal", cylinder(0.25, 0.25, 0.6, 32), at(0.0, 0.7, -4.0), fixed("silver"))),
];

#[rustfmt::skip]
static TOILET: &[Member] = &[
    single(Fixture::new("toilet.bowl", cylinder(0.5, 0.5, 0.6, 32), at(3.0, 0.6, -4.0), slot(PaletteSlot::Sink))),
    single(Fixture::new("toilet.tank", cuboid(0.6, 0.4, 0.6), at(3.0, 1.2, -4.0), slot(PaletteSlot::Sink))),
];

#[rustfmt::skip]
static MIRROR: &[Member] = &[single(
    Fixture::new("mirror.glass", plane(1.0, 1.5), at(0.0, 2.0, -4.05), slot(PaletteSlot::Mirror))
        .with_material(PLAIN.metalness(1.0).roughness(0.05)),
)];

#[rustfmt::skip]
static WINDOW: &[Member] = &[
    single(
        Fixture::new("window.pane", plane(2.0, 1.0), at(-4.0, 2.0, 0.0), fixed("#eee"))
            .rotated(0.0, FRAC_PI_2, 0.0)
            .with_material(PLAIN.opacity(0.5).metalness(0.5).roughness(0.1)),
    ),
    single(
        Fixture::new("window.frame", plane(2.0, 1.0), at(-4.01, 2.0, 0.0), fixed("black"))
            .rotated(0.0, FRAC_PI_2, 0.0)
            .with_material(PLAIN.wireframe()),
    ),
];

#[rustfmt::skip]
static TOWEL_RACK: &[Member] = &[
    single(
        Fixture::new("towel_rack.bar", cuboid(0.05, 0.05, 1.0), at(4.0, 1.8, -4.8), fixed("silver"))
            .with_material(CHROME),
    ),
    single(
        Fixture::new("towel_rack.towel", cuboid(0.1, 0.8, 0.3), at(4.0, 1.6, -4.4), slot(PaletteSlot::Wall))
            .with_material(PLAIN.roughness(0.8)),
    ),
];

#[rustfmt::skip]
static PLANT: &[Member] = &[
    single(Fixture::new("plant.pot", cylinder(0.3, 0.2, 0.4, 16), at(0.0, 0.4, 0.0), fixed("#8B4513"))),
    Member::Ring {
        count: 5,
        pattern: RingPattern::Jittered {
            stride: PI * 0.4,
            radius: 0.2,
            jitter_height: 0.3,
        },
        template: Fixture::new("plant.leaf", sphere(0.2, 8, 8), at(0.0, 0.7, 0.0), fixed("#228B22")),
    },
];

#[rustfmt::skip]
static SHELF: &[Member] = &[
    single(
        Fixture::new("shelf.board", cuboid(2.0, 0.05, 0.4), at(-3.0, 2.0, -4.8), slot(PaletteSlot::TileLine))
            .with_material(PLAIN.metalness(0.5)),
    ),
    single(Fixture::new("shelf.jar", cylinder(0.1, 0.1, 0.3, 16), at(-3.5, 2.15, -4.6), fixed("#FFD700"))),
    single(Fixture::new("shelf.box", cuboid(0.2, 0.3, 0.2), at(-3.0, 2.15, -4.6), fixed("#4682B4"))),
    single(Fixture::new("shelf.ball", sphere(0.15, 16, 16), at(-2.5, 2.15, -4.6), fixed("#FF69B4"))),
];

#[rustfmt::skip]
static BATHTUB: &[Member] = &[
    single(Fixture::new("bathtub.base", cuboid(2.5, 0.8, 1.8), at(0.0, 0.0, 0.0), slot(PaletteSlot::Sink))),
    single(
        Fixture::new("bathtub.interior", cuboid(2.3, 0.7, 1.6), at(0.0, 0.1, 0.0), slot(PaletteSlot::Sink))
            .with_material(PLAIN.metalness(0.2).roughness(0.3)),
    ),
    single(
        Fixture::new("bathtub.faucet", cylinder(0.05, 0.05, 0.3, 8), at(-1.0, 0.8, -0.7), fixed("silver"))
            .with_material(CHROME),
    ),
    single(
        Fixture::new("bathtub.spout", cylinder(0.03, 0.03, 0.2, 8), at(-1.0, 0.9, -0.6), fixed("silver"))
            .rotated(FRAC_PI_4, 0.0, 0.0)
            .with_material(CHROME),
    ),
];

#[rustfmt::skip]
static MAT: &[Member] = &[single(
    Fixture::new("mat.rug", plane(2.0, 1.0), at(0.0, 0.02, -3.0), slot(PaletteSlot::Mat))
        .rotated(-FRAC_PI_2, 0.0, 0.0)
        .with_material(PLAIN.roughness(0.8)),
)];

#[rustfmt::skip]
static TOILET_PAPER: &[Member] = &[
    single(
        Fixture::new("toilet_paper.holder", cylinder(0.03, 0.03, 0.3, 8), at(0.0, 0.0, 0.0), fixed("silver"))
            .with_material(PLAIN.metalness(0.8)),
    ),
    single(
        Fixture::new("toilet_paper.roll", cylinder(0.1, 0.1, 0.25, 16), at(0.0, 0.0, 0.0), fixed("white"))
            .rotated(0.0, 0.0, FRAC_PI_2)
            .with_material(PLAIN.roughness(0.5)),
    ),
];

#[rustfmt::skip]
static SOAP_DISPENSER: &[Member] = &[
    single(
        Fixture::new("soap_dispenser.body", cuboid(0.15, 0.25, 0.15), at(0.0, 0.0, 0.0), fixed("#B8B8B8"))
            .with_material(PLAIN.metalness(0.5).roughness(0.2)),
    ),
    single(
        Fixture::new("soap_dispenser.pump", cylinder(0.02, 0.02, 0.1, 8), at(0.0, 0.15, 0.0), fixed("silver"))
            .with_material(PLAIN.metalness(0.8)),
    ),
];

#[rustfmt::skip]
static SHOWER_CADDY: &[Member] = &[
    single(
        Fixture::new("shower_caddy.frame", cuboid(0.5, 0.05, 0.3), at(0.0, 0.0, 0.0), fixed("silver"))
            .with_material(PLAIN.metalness(0.6)),
    ),
    single(Fixture::new("shower_caddy.shampoo", cylinder(0.04, 0.04, 0.3, 8), at(-0.15, 0.2, 0.0), fixed("#FF69B4"))),
    single(Fixture::new("shower_caddy.conditioner", cylinder(0.04, 0.04, 0.25, 8), at(0.0, 0.2, 0.0), fixed("#4682B4"))),
    single(Fixture::new("shower_caddy.body_wash", cylinder(0.04, 0.04, 0.28, 8), at(0.15, 0.2, 0.0), fixed("#90EE90"))),
];

#[rustfmt::skip]
static WALL_CLOCK: &[Member] = &[
    single(Fixture::new("wall_clock.face", cylinder(0.3, 0.3, 0.05, 32), at(0.0, 0.0, 0.0), fixed("white"))),
    single(
        Fixture::new("wall_clock.minute_hand", cuboid(0.2, 0.02, 0.01), at(0.0, 0.0, 0.03), fixed("black"))
            .rotated(0.0, 0.0, FRAC_PI_3),
    ),
    single(
        Fixture::new("wall_clock.hour_hand", cuboid(0.15, 0.02, 0.01), at(0.0, 0.0, 0.03), fixed("black"))
            .rotated(0.0, 0.0, PI / 1.5),
    ),
];

#[rustfmt::skip]
static TRASH_BIN: &[Member] = &[
    single(
        Fixture::new("trash_bin.body", cylinder(0.2, 0.15, 0.8, 16), at(0.0, 0.0, 0.0), fixed("#A9A9A9"))
            .with_material(PLAIN.metalness(0.3)),
    ),
    single(
        Fixture::new(
            "trash_bin.rim",
            Shape::Torus {
                radius: 0.2,
                tube: 0.02,
                radial_segments: 16,
                tubular_segments: 32,
            },
            at(0.0, 0.41, 0.0),
            fixed("#808080"),
        )
        .with_material(PLAIN.metalness(0.5)),
    ),
];

#[rustfmt::skip]
static TERRARIUM: &[Member] = &[
    single(
        Fixture::new("terrarium.globe", sphere(0.15, 16, 16), at(0.0, 0.0, 0.0), fixed("white"))
            .with_material(PLAIN.opacity(0.6)),
    ),
    Member::Ring {
        count: 8,
        pattern: RingPattern::Tilted {
            stride: PI * 0.5,
            depth_stride: PI * 0.25,
            radius: 0.08,
            drop: 0.02,
        },
        template: Fixture::new("terrarium.frond", cylinder(0.01, 0.005, 0.1, 8), at(0.0, 0.0, 0.0), fixed("#556B2F")),
    },
    single(Fixture::new("terrarium.wire", cylinder(0.01, 0.01, 0.4, 8), at(0.0, 0.2, 0.0), fixed("silver"))),
];

#[rustfmt::skip]
static BATHROOM: &[Cluster] = &[
    Cluster { name: "walls", origin: Vec3::ZERO, members: WALLS },
    Cluster { name: "floor", origin: Vec3::ZERO, members: FLOOR },
    Cluster { name: "sink", origin: Vec3::ZERO, members: SINK },
    Cluster { name: "toilet", origin: Vec3::ZERO, members: TOILET },
    Cluster { name: "mirror", origin: Vec3::ZERO, members: MIRROR },
    Cluster { name: "window", origin: Vec3::ZERO, members: WINDOW },
    Cluster { name: "towel_rack", origin: Vec3::ZERO, members: TOWEL_RACK },
    Cluster { name: "plant", origin: Vec3::new(-4.5, 0.0, -4.5), members: PLANT },
    Cluster { name: "shelf", origin: Vec3::ZERO, members: SHELF },
    Cluster { name: "bathtub", origin: Vec3::new(-3.5, 0.4, 3.0), members: BATHTUB },
    Cluster { name: "mat", origin: Vec3::ZERO, members: MAT },
    Cluster { name: "toilet_paper", origin: Vec3::new(3.5, 1.2, -3.8), members: TOILET_PAPER },
    Cluster { name: "soap_dispenser", origin: Vec3::new(0.5, 1.45, -4.0), members: SOAP_DISPENSER },
    Cluster { name: "shower_caddy", origin: Vec3::new(-2.2, 1.5, 3.8), members: SHOWER_CADDY },
    Cluster { name: "wall_clock", origin: Vec3::new(3.0, 2.3, -4.05), members: WALL_CLOCK },
    Cluster { name: "trash_bin", origin: Vec3::new(1.0, 0.4, -4.0), members: TRASH_BIN },
    Cluster { name: "terrarium", origin: Vec3::new(-4.0, 2.5, -4.0), members: TERRARIUM },
];

/// The authored clusters, in scene order
pub fn bathroom_layout() -> &'static [Cluster] {
    BATHROOM
}

/// Resolve every fixture against `palette`.
///
/// Shapes, placements and materials are fixed; colors follow the palette.
/// Jittered rings draw fresh offsets from `rng` on every call.
pub fn build_scene<R: Rng + ?Sized>(palette: &ThemePalette, rng: &mut R) -> ResolvedScene {
    let mut fixtures = Vec::with_capacity(FIXTURE_COUNT);

    for cluster in BATHROOM {
        for member in cluster.members {
            match member {
                Member::Single(fixture) => {
                    fixtures.push(resolve(
                        cluster,
                        fixture,
                        fixture.label.to_string(),
                        Vec3::ZERO,
                        palette,
                    ));
                }
                Member::Ring {
                    count,
                    pattern,
                    template,
                } => {
                    for index in 0..*count {
                        let offset = pattern.offset(index, rng);
                        let label = format!("{}.{}", template.label, index);
                        fixtures.push(resolve(cluster, template, label, offset, palette));
                    }
                }
            }
        }
    }

    ResolvedScene { fixtures }
}

fn resolve(
    cluster: &Cluster,
    fixture: &Fixture,
    label: String,
    offset: Vec3,
    palette: &ThemePalette,
) -> ResolvedFixture {
    ResolvedFixture {
        label,
        cluster: cluster.name,
        shape: fixture.shape,
        placement: fixture.placement.offset_by(cluster.origin + offset),
        color: fixture.color.resolve(palette),
        material: fixture.material,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bathroom_theme::{ThemeId, resolve_palette};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const EPSILON: f32 = 1e-5;

    fn build(theme: &str, seed: u64) -> ResolvedScene {
        build_scene(resolve_palette(theme), &mut SmallRng::seed_from_u64(seed))
    }

    fn is_jittered(fixture: &ResolvedFixture) -> bool {
        fixture.label.starts_with("plant.leaf.")
    }

    #[test]
    fn test_fixture_count() {
        let scene = build("light", 0);
        assert_eq!(scene.len(), FIXTURE_COUNT);
        assert_eq!(scene.cluster("plant").count(), 6);
        assert_eq!(scene.cluster("terrarium").count(), 10);
        assert_eq!(bathroom_layout().len(), 17);
    }

    #[test]
    fn test_labels_are_unique() {
        let scene = build("light", 0);
        let mut labels: Vec<_> = scene.iter().map(|f| f.label.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), FIXTURE_COUNT);
    }

    #[test]
    fn test_vintage_mirror_and_mat_colors() {
        let scene = build("vintage", 0);
        assert_eq!(scene.get("mirror.glass").unwrap().color, "#B78C56");
        assert_eq!(scene.get("mat.rug").unwrap().color, "#DEB887");
    }

    #[test]
    fn test_theme_linked_fixtures_follow_palette() {
        let scene = build("beach", 0);
        for label in [
            "sink.basin",
            "toilet.bowl",
            "toilet.tank",
            "bathtub.base",
            "bathtub.interior",
        ] {
            assert_eq!(scene.get(label).unwrap().color, "lightgreen", "{label}");
        }
        for label in ["walls.back", "walls.front", "towel_rack.towel"] {
            assert_eq!(scene.get(label).unwrap().color, "skyblue", "{label}");
        }
        assert_eq!(scene.get("floor.surface").unwrap().color, "sand");
        assert_eq!(scene.get("floor.tile_lines").unwrap().color, "gold");
        assert_eq!(scene.get("shelf.board").unwrap().color, "gold");
    }

    #[test]
    fn test_fixed_colors_ignore_theme() {
        let light = build("light", 0);
        let sunset = build("sunset", 0);
        for label in [
            "sink.pedestal",
            "window.pane",
            "plant.pot",
            "trash_bin.rim",
            "terrarium.wire",
        ] {
            assert_eq!(
                light.get(label).unwrap().color,
                sunset.get(label).unwrap().color
            );
        }
    }

    #[test]
    fn test_unknown_theme_builds_light_scene() {
        assert_eq!(build("unknown-theme", 3), build("light", 3));
    }

    #[test]
    fn test_deterministic_apart_from_jitter() {
        let palette = ThemeId::Modern.palette();
        let mut rng = SmallRng::seed_from_u64(11);
        let first = build_scene(palette, &mut rng);
        let second = build_scene(palette, &mut rng);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.label, b.label);
            assert_eq!(a.shape, b.shape);
            assert_eq!(a.material, b.material);
            assert_eq!(a.color, b.color);
            if !is_jittered(a) {
                assert_eq!(a.placement, b.placement, "{}", a.label);
            }
        }
    }

    #[test]
    fn test_theme_round_trip_colors() {
        let mut rng = SmallRng::seed_from_u64(5);
        let colors = |scene: &ResolvedScene| -> Vec<&'static str> {
            scene.iter().map(|f| f.color).collect()
        };

        let initial = build_scene(resolve_palette("light"), &mut rng);
        let dark = build_scene(resolve_palette("dark"), &mut rng);
        let back = build_scene(resolve_palette("light"), &mut rng);

        assert_ne!(colors(&initial), colors(&dark));
        assert_eq!(colors(&initial), colors(&back));
    }

    #[test]
    fn test_plant_leaves_follow_ring_formula() {
        let scene = build("light", 42);
        let leaves: Vec<_> = scene.iter().filter(|f| is_jittered(f)).collect();
        assert_eq!(leaves.len(), 5);

        for (i, leaf) in leaves.iter().enumerate() {
            let angle = i as f32 * PI * 0.4;
            let p = leaf.placement.position;
            assert!((p.x - (-4.5 + angle.sin() * 0.2)).abs() < EPSILON);
            assert!((p.z - (-4.5 + angle.cos() * 0.2)).abs() < EPSILON);
            assert!(p.y >= 0.7 - EPSILON && p.y < 1.0 + EPSILON, "leaf height {}", p.y);
        }
    }

    #[test]
    fn test_terrarium_fronds_follow_ring_formula() {
        let scene = build("light", 0);
        let fronds: Vec<_> = scene
            .iter()
            .filter(|f| f.label.starts_with("terrarium.frond."))
            .collect();
        assert_eq!(fronds.len(), 8);

        for (i, frond) in fronds.iter().enumerate() {
            let i = i as f32;
            let expected = Vec3::new(
                -4.0 + (i * PI * 0.5).sin() * 0.08,
                2.5 + (i * PI * 0.5).cos() * 0.08 - 0.02,
                -4.0 + (i * PI * 0.25).sin() * 0.08,
            );
            assert!((frond.placement.position - expected).length() < EPSILON);
        }
    }

    #[test]
    fn test_cluster_origins_are_applied() {
        let scene = build("light", 0);
        let spout = scene.get("bathtub.spout").unwrap();
        assert!((spout.placement.position - Vec3::new(-4.5, 1.3, 2.4)).length() < EPSILON);
        assert!((spout.placement.rotation.x - FRAC_PI_4).abs() < EPSILON);

        let rim = scene.get("trash_bin.rim").unwrap();
        assert!((rim.placement.position - Vec3::new(1.0, 0.81, -4.0)).length() < EPSILON);
    }

    #[test]
    fn test_material_properties() {
        let scene = build("light", 0);
        let mirror = scene.get("mirror.glass").unwrap();
        assert_eq!(mirror.material.metalness, 1.0);
        assert_eq!(mirror.material.roughness, 0.05);

        let pane = scene.get("window.pane").unwrap();
        assert_eq!(pane.material.opacity, Some(0.5));
        assert!(scene.get("window.frame").unwrap().material.wireframe);

        let globe = scene.get("terrarium.globe").unwrap();
        assert_eq!(globe.material.opacity, Some(0.6));
        assert_eq!(globe.material.roughness, 1.0);
    }
}
