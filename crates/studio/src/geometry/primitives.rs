//! Local-space vertex lattices for the exportable primitives.
//!
//! Every primitive fits the unit box centred on the origin. Faces hold
//! 0-based indices into the mesh's own vertex list and are wound
//! counter-clockwise seen from outside.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

pub const RADIUS: f64 = 0.5;
pub const HALF_HEIGHT: f64 = 0.5;

/// Vertices and faces of one primitive before the object transform
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalMesh {
    pub vertices: Vec<DVec3>,
    pub faces: Vec<Vec<u32>>,
}

impl LocalMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// 8 corners at ±0.5, 6 quads (front, back, left, right, top, bottom)
pub fn cube() -> LocalMesh {
    let vertices = vec![
        // Front (+Z)
        DVec3::new(-0.5, -0.5, 0.5),
        DVec3::new(0.5, -0.5, 0.5),
        DVec3::new(0.5, 0.5, 0.5),
        DVec3::new(-0.5, 0.5, 0.5),
        // Back (-Z)
        DVec3::new(-0.5, -0.5, -0.5),
        DVec3::new(0.5, -0.5, -0.5),
        DVec3::new(0.5, 0.5, -0.5),
        DVec3::new(-0.5, 0.5, -0.5),
    ];

    let faces = vec![
        vec![0, 1, 2, 3],
        vec![4, 7, 6, 5],
        vec![4, 0, 3, 7],
        vec![1, 5, 6, 2],
        vec![3, 2, 6, 7],
        vec![4, 5, 1, 0],
    ];

    LocalMesh { vertices, faces }
}

/// UV sphere: `(segments + 1)²` vertices, rows from the top pole (theta = 0)
/// to the bottom pole (theta = π), azimuth 0..2π with a repeated seam column.
///
/// Faces are only emitted when `closed` is set; rows touching a pole become
/// triangles.
pub fn sphere(segments: u32, closed: bool) -> LocalMesh {
    let mut vertices = Vec::with_capacity(((segments + 1) * (segments + 1)) as usize);

    for i in 0..=segments {
        let theta = PI * i as f64 / segments as f64;
        let (st, ct) = theta.sin_cos();
        for j in 0..=segments {
            let phi = TAU * j as f64 / segments as f64;
            let (sp, cp) = phi.sin_cos();
            vertices.push(DVec3::new(st * cp, ct, st * sp) * RADIUS);
        }
    }

    let mut faces = Vec::new();
    if closed {
        let row = segments + 1;
        for r in 0..segments {
            for c in 0..segments {
                let i0 = r * row + c;
                let i1 = i0 + 1;
                let i2 = i0 + row;
                let i3 = i2 + 1;
                if r == 0 {
                    faces.push(vec![i0, i3, i2]);
                } else if r == segments - 1 {
                    faces.push(vec![i0, i1, i3]);
                } else {
                    faces.push(vec![i0, i1, i3, i2]);
                }
            }
        }
    }

    LocalMesh { vertices, faces }
}

/// Open tube of height 1: for each of `segments + 1` angles a top vertex
/// (index `2i`) followed by a bottom vertex (index `2i + 1`).
///
/// With `closed`, side quads and both caps are emitted.
pub fn cylinder(segments: u32, closed: bool) -> LocalMesh {
    let mut vertices = Vec::with_capacity(((segments + 1) * 2) as usize);

    for i in 0..=segments {
        let angle = TAU * i as f64 / segments as f64;
        let (s, c) = angle.sin_cos();
        let (x, z) = (c * RADIUS, s * RADIUS);
        vertices.push(DVec3::new(x, HALF_HEIGHT, z));
        vertices.push(DVec3::new(x, -HALF_HEIGHT, z));
    }

    let mut faces = Vec::new();
    if closed {
        for i in 0..segments {
            let top = 2 * i;
            faces.push(vec![top, top + 2, top + 3, top + 1]);
        }
        faces.push((0..segments).rev().map(|i| 2 * i).collect());
        faces.push((0..segments).map(|i| 2 * i + 1).collect());
    }

    LocalMesh { vertices, faces }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unnormalised polygon normal (sum of edge cross products)
    fn face_normal(mesh: &LocalMesh, face: &[u32]) -> DVec3 {
        let mut n = DVec3::ZERO;
        for k in 0..face.len() {
            let a = mesh.vertices[face[k] as usize];
            let b = mesh.vertices[face[(k + 1) % face.len()] as usize];
            n += a.cross(b);
        }
        n
    }

    fn face_centroid(mesh: &LocalMesh, face: &[u32]) -> DVec3 {
        let sum: DVec3 = face.iter().map(|&i| mesh.vertices[i as usize]).sum();
        sum / face.len() as f64
    }

    fn assert_outward(mesh: &LocalMesh) {
        for face in &mesh.faces {
            let n = face_normal(mesh, face);
            let c = face_centroid(mesh, face);
            assert!(n.dot(c) > 0.0, "face {face:?} points inward");
        }
    }

    #[test]
    fn test_cube_counts() {
        let m = cube();
        assert_eq!(m.vertex_count(), 8);
        assert_eq!(m.face_count(), 6);
        assert!(m.faces.iter().all(|f| f.len() == 4));
    }

    #[test]
    fn test_cube_corners() {
        for v in cube().vertices {
            assert_eq!(v.abs(), DVec3::splat(0.5));
        }
    }

    #[test]
    fn test_cube_winding_outward() {
        assert_outward(&cube());
    }

    #[test]
    fn test_cube_faces_use_every_vertex_three_times() {
        let mut uses = [0; 8];
        for face in cube().faces {
            for i in face {
                uses[i as usize] += 1;
            }
        }
        assert_eq!(uses, [3; 8]);
    }

    #[test]
    fn test_sphere_lattice() {
        let m = sphere(16, false);
        assert_eq!(m.vertex_count(), 17 * 17);
        assert!(m.faces.is_empty());
        for v in &m.vertices {
            assert!((v.length() - RADIUS).abs() < 1e-12);
        }
        // First row collapses onto the top pole
        assert!((m.vertices[0] - DVec3::new(0.0, 0.5, 0.0)).length() < 1e-12);
        assert!((m.vertices[16] - DVec3::new(0.0, 0.5, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_sphere_closed_faces() {
        let m = sphere(8, true);
        assert_eq!(m.face_count(), 8 * 8);
        let triangles = m.faces.iter().filter(|f| f.len() == 3).count();
        assert_eq!(triangles, 16);
        assert!(m.faces.iter().flatten().all(|&i| (i as usize) < m.vertex_count()));
        assert_outward(&m);
    }

    #[test]
    fn test_cylinder_rings() {
        let m = cylinder(16, false);
        assert_eq!(m.vertex_count(), 34);
        assert!(m.faces.is_empty());
        for pair in m.vertices.chunks(2) {
            assert_eq!(pair[0].y, HALF_HEIGHT);
            assert_eq!(pair[1].y, -HALF_HEIGHT);
            assert_eq!((pair[0].x, pair[0].z), (pair[1].x, pair[1].z));
            assert!((pair[0].x.hypot(pair[0].z) - RADIUS).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cylinder_closed_faces() {
        let m = cylinder(6, true);
        assert_eq!(m.vertex_count(), 14);
        // 6 sides + 2 caps
        assert_eq!(m.face_count(), 8);
        assert_eq!(m.faces[6].len(), 6);
        assert_eq!(m.faces[7].len(), 6);
        assert!(m.faces.iter().flatten().all(|&i| (i as usize) < m.vertex_count()));
        assert_outward(&m);
    }
}
