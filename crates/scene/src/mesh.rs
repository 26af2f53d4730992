//! Mesh construction for fixture shapes
//!
//! Solid shapes use Bevy's primitive mesh builders. Grids and wireframe
//! fixtures become `LineList` meshes so they render on WebGL2, which lacks
//! the `POLYGON_MODE_LINE` feature Bevy's wireframe plugin needs.

use std::collections::BTreeSet;
use std::f32::consts::FRAC_PI_2;

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology, VertexAttributeValues};
use bevy::prelude::*;

use crate::fixture::Shape;

/// Build the mesh for a fixture
pub fn fixture_mesh(shape: &Shape, wireframe: bool) -> Mesh {
    let mesh = shape_mesh(shape);
    if wireframe && !matches!(shape, Shape::Grid { .. }) {
        edge_mesh(&mesh).unwrap_or(mesh)
    } else {
        mesh
    }
}

/// Solid (or, for grids, line) mesh for a shape
pub fn shape_mesh(shape: &Shape) -> Mesh {
    match *shape {
        Shape::Box {
            width,
            height,
            depth,
        } => Cuboid::new(width, height, depth).into(),
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        } => {
            if radius_top == radius_bottom {
                Mesh::from(
                    Cylinder::new(radius_top, height)
                        .mesh()
                        .resolution(radial_segments),
                )
            } else {
                Mesh::from(
                    ConicalFrustum {
                        radius_top,
                        radius_bottom,
                        height,
                    }
                    .mesh()
                    .resolution(radial_segments),
                )
            }
        }
        Shape::Sphere {
            radius,
            width_segments,
            height_segments,
        } => Sphere::new(radius).mesh().uv(width_segments, height_segments),
        // Bevy planes default to XZ; the layout authors planes in XY facing +Z
        Shape::Plane { width, height } => Mesh::from(
            Plane3d::new(Vec3::Z, Vec2::new(width / 2.0, height / 2.0)).mesh(),
        ),
        // Bevy tori ring the Y axis; the layout authors them around Z
        Shape::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        } => Mesh::from(
            Torus {
                minor_radius: tube,
                major_radius: radius,
            }
            .mesh()
            .minor_resolution(radial_segments as usize)
            .major_resolution(tubular_segments as usize),
        )
        .rotated_by(Quat::from_rotation_x(FRAC_PI_2)),
        Shape::Grid { size, divisions } => grid_mesh(size, divisions),
    }
}

/// Square line grid in the XZ plane centered on the origin
pub fn grid_mesh(size: f32, divisions: u32) -> Mesh {
    let half = size / 2.0;
    let step = size / divisions.max(1) as f32;

    let mut positions = Vec::new();
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        positions.push([-half, 0.0, k]);
        positions.push([half, 0.0, k]);
        positions.push([k, 0.0, -half]);
        positions.push([k, 0.0, half]);
    }

    line_mesh(positions, None)
}

/// Unique triangle edges of `mesh` as a line list.
///
/// Returns `None` for meshes without positions or with a non-triangle
/// topology.
pub fn edge_mesh(mesh: &Mesh) -> Option<Mesh> {
    if mesh.primitive_topology() != PrimitiveTopology::TriangleList {
        return None;
    }
    let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute(Mesh::ATTRIBUTE_POSITION)
    else {
        return None;
    };

    let triangle_indices: Vec<u32> = match mesh.indices() {
        Some(indices) => indices.iter().map(|i| i as u32).collect(),
        None => (0..positions.len() as u32).collect(),
    };

    let mut edges = BTreeSet::new();
    for tri in triangle_indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            edges.insert((a.min(b), a.max(b)));
        }
    }

    let indices = edges.into_iter().flat_map(|(a, b)| [a, b]).collect();
    Some(line_mesh(positions.clone(), Some(indices)))
}

fn line_mesh(positions: Vec<[f32; 3]>, indices: Option<Vec<u32>>) -> Mesh {
    let normals = vec![[0.0, 1.0, 0.0]; positions.len()];
    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    if let Some(indices) = indices {
        mesh.insert_indices(Indices::U32(indices));
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(mesh: &Mesh) -> &[[f32; 3]] {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(p)) => p,
            _ => panic!("mesh has no Float32x3 positions"),
        }
    }

    #[test]
    fn test_grid_line_count() {
        let mesh = grid_mesh(10.0, 20);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineList);
        // 21 lines per axis, two vertices each
        assert_eq!(positions(&mesh).len(), 21 * 2 * 2);
    }

    #[test]
    fn test_grid_spans_size() {
        let mesh = grid_mesh(10.0, 20);
        for p in positions(&mesh) {
            assert!(p[0].abs() <= 5.0 + 1e-5);
            assert!(p[2].abs() <= 5.0 + 1e-5);
            assert_eq!(p[1], 0.0);
        }
    }

    #[test]
    fn test_plane_edges() {
        let plane = shape_mesh(&Shape::Plane {
            width: 2.0,
            height: 1.0,
        });
        let edges = edge_mesh(&plane).unwrap();
        assert_eq!(edges.primitive_topology(), PrimitiveTopology::LineList);
        // Two triangles share the diagonal: four sides plus one diagonal
        assert_eq!(edges.indices().unwrap().len(), 5 * 2);
    }

    #[test]
    fn test_plane_faces_positive_z() {
        let plane = shape_mesh(&Shape::Plane {
            width: 2.0,
            height: 1.0,
        });
        for p in positions(&plane) {
            assert!(p[2].abs() < 1e-5);
            assert!((p[0].abs() - 1.0).abs() < 1e-5);
            assert!((p[1].abs() - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_torus_rings_z_axis() {
        let torus = shape_mesh(&Shape::Torus {
            radius: 0.2,
            tube: 0.02,
            radial_segments: 16,
            tubular_segments: 32,
        });
        for p in positions(&torus) {
            assert!(p[2].abs() <= 0.02 + 1e-4, "z extent {}", p[2]);
        }
    }

    #[test]
    fn test_wireframe_only_changes_topology_of_solids() {
        let plane = Shape::Plane {
            width: 2.0,
            height: 1.0,
        };
        assert_eq!(
            fixture_mesh(&plane, true).primitive_topology(),
            PrimitiveTopology::LineList
        );
        assert_eq!(
            fixture_mesh(&plane, false).primitive_topology(),
            PrimitiveTopology::TriangleList
        );
    }

    #[test]
    fn test_edge_mesh_rejects_lines() {
        assert!(edge_mesh(&grid_mesh(1.0, 1)).is_none());
    }
}
