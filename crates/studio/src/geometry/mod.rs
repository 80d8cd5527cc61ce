//! Per-object export geometry.
//!
//! Which primitive types produce what is stated by [`capability`]:
//!
//! | type     | vertices | faces                      |
//! |----------|----------|----------------------------|
//! | cube     | 8        | 6 quads                    |
//! | sphere   | lattice  | only with `close_surfaces` |
//! | cylinder | rings    | only with `close_surfaces` |
//! | plane    | none     | none                       |
//! | cone     | none     | none                       |
//! | torus    | none     | none                       |
//!
//! Vertices are mapped object-local → world as scale, then rotate, then
//! translate. With the default [`RotationMode::Ignore`] the rotate step is a
//! pass-through and exported coordinates carry no rotation.

pub mod primitives;

use clap::ValueEnum;
use glam::{DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};
use shared::{PrimitiveType, SceneObject, Transform, Vector3};

use crate::math::{from_dvec3, to_dvec3};
pub use primitives::LocalMesh;

pub const DEFAULT_SEGMENTS: u32 = 16;
pub const MIN_SEGMENTS: u32 = 3;
pub const MAX_SEGMENTS: u32 = 256;

/// How object rotation reaches exported vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    /// Rotation stays on the object only; exported vertices are unrotated
    #[default]
    Ignore,
    /// Intrinsic X, then Y, then Z rotation in radians
    EulerXyz,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryOptions {
    pub segments: u32,
    pub rotation: RotationMode,
    /// Emit faces for sphere and cylinder instead of vertices only
    pub close_surfaces: bool,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            rotation: RotationMode::Ignore,
            close_surfaces: false,
        }
    }
}

impl GeometryOptions {
    fn effective_segments(&self) -> u32 {
        self.segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS)
    }
}

/// What a primitive type contributes to an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub has_vertices: bool,
    pub has_faces: bool,
}

pub fn capability(kind: PrimitiveType, options: &GeometryOptions) -> Capability {
    match kind {
        PrimitiveType::Cube => Capability {
            has_vertices: true,
            has_faces: true,
        },
        PrimitiveType::Sphere | PrimitiveType::Cylinder => Capability {
            has_vertices: true,
            has_faces: options.close_surfaces,
        },
        PrimitiveType::Plane | PrimitiveType::Cone | PrimitiveType::Torus => Capability {
            has_vertices: false,
            has_faces: false,
        },
    }
}

/// Object-local mesh for a primitive type
pub fn local_mesh(kind: PrimitiveType, options: &GeometryOptions) -> LocalMesh {
    let segments = options.effective_segments();
    match kind {
        PrimitiveType::Cube => primitives::cube(),
        PrimitiveType::Sphere => primitives::sphere(segments, options.close_surfaces),
        PrimitiveType::Cylinder => primitives::cylinder(segments, options.close_surfaces),
        // No generator: exported as an empty group
        PrimitiveType::Plane | PrimitiveType::Cone | PrimitiveType::Torus => LocalMesh::default(),
    }
}

/// World-space vertices plus faces indexed into them (0-based)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectGeometry {
    pub vertices: Vec<Vector3>,
    pub faces: Vec<Vec<u32>>,
}

/// Generate the transformed geometry of one object
pub fn generate(object: &SceneObject, options: &GeometryOptions) -> ObjectGeometry {
    let mesh = local_mesh(object.kind, options);
    let transform = object.transform();
    let vertices = mesh
        .vertices
        .into_iter()
        .map(|v| from_dvec3(apply_transform(v, &transform, options.rotation)))
        .collect();

    ObjectGeometry {
        vertices,
        faces: mesh.faces,
    }
}

/// Map a local vertex into world space: scale → rotate → translate
pub fn apply_transform(vertex: DVec3, transform: &Transform, rotation: RotationMode) -> DVec3 {
    let scaled = vertex * to_dvec3(transform.scale);
    let rotated = rotate(scaled, transform.rotation, rotation);
    rotated + to_dvec3(transform.position)
}

fn rotate(v: DVec3, euler: Vector3, mode: RotationMode) -> DVec3 {
    match mode {
        RotationMode::Ignore => v,
        RotationMode::EulerXyz => DQuat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z) * v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn closed() -> GeometryOptions {
        GeometryOptions {
            close_surfaces: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_capability_table_default() {
        let opts = GeometryOptions::default();
        let table: Vec<(bool, bool)> = PrimitiveType::all()
            .iter()
            .map(|&k| {
                let c = capability(k, &opts);
                (c.has_vertices, c.has_faces)
            })
            .collect();
        assert_eq!(
            table,
            [
                (true, true),
                (true, false),
                (true, false),
                (false, false),
                (false, false),
                (false, false),
            ]
        );
    }

    #[test]
    fn test_capability_matches_generated_mesh() {
        for opts in [GeometryOptions::default(), closed()] {
            for &kind in PrimitiveType::all() {
                let cap = capability(kind, &opts);
                let mesh = local_mesh(kind, &opts);
                assert_eq!(cap.has_vertices, mesh.vertex_count() > 0, "{kind:?}");
                assert_eq!(cap.has_faces, mesh.face_count() > 0, "{kind:?}");
            }
        }
    }

    #[test]
    fn test_default_vertex_counts() {
        let opts = GeometryOptions::default();
        assert_eq!(local_mesh(PrimitiveType::Cube, &opts).vertex_count(), 8);
        assert_eq!(local_mesh(PrimitiveType::Sphere, &opts).vertex_count(), 289);
        assert_eq!(local_mesh(PrimitiveType::Cylinder, &opts).vertex_count(), 34);
        assert_eq!(local_mesh(PrimitiveType::Torus, &opts).vertex_count(), 0);
    }

    #[test]
    fn test_segments_floor() {
        let opts = GeometryOptions {
            segments: 0,
            ..Default::default()
        };
        assert_eq!(local_mesh(PrimitiveType::Cylinder, &opts).vertex_count(), 8);
    }

    #[test]
    fn test_rotation_mode_names() {
        assert_eq!(RotationMode::from_str("euler-xyz", true), Ok(RotationMode::EulerXyz));
        assert_eq!(RotationMode::from_str("ignore", true), Ok(RotationMode::Ignore));
        assert_eq!(
            serde_json::to_string(&RotationMode::EulerXyz).unwrap(),
            r#""euler_xyz""#
        );
    }

    #[test]
    fn test_segments_ceiling() {
        let opts = GeometryOptions {
            segments: u32::MAX,
            close_surfaces: true,
            ..Default::default()
        };
        let cylinder = local_mesh(PrimitiveType::Cylinder, &opts);
        assert_eq!(cylinder.vertex_count(), 2 * (MAX_SEGMENTS as usize + 1));
        assert_eq!(cylinder.face_count(), MAX_SEGMENTS as usize + 2);

        let sphere = local_mesh(PrimitiveType::Sphere, &opts);
        assert_eq!(sphere.vertex_count(), 257 * 257);
    }

    #[test]
    fn test_scale_then_translate() {
        let obj = SceneObject::primitive(PrimitiveType::Cube)
            .with_position(Vector3::new(1.0, 0.0, 0.0))
            .with_scale(Vector3::new(2.0, 1.0, 1.0));
        let geo = generate(&obj, &GeometryOptions::default());
        // (0.5, -0.5, 0.5) * (2, 1, 1) + (1, 0, 0)
        assert_eq!(geo.vertices[1], Vector3::new(2.0, -0.5, 0.5));
        assert_eq!(geo.faces.len(), 6);
    }

    #[test]
    fn test_rotation_ignored_by_default() {
        let obj = SceneObject::primitive(PrimitiveType::Cube)
            .with_rotation(Vector3::new(0.3, FRAC_PI_2, 1.0));
        let geo = generate(&obj, &GeometryOptions::default());
        assert_eq!(geo.vertices[1], Vector3::new(0.5, -0.5, 0.5));
    }

    #[test]
    fn test_euler_rotation_applied_between_scale_and_translate() {
        let obj = SceneObject::primitive(PrimitiveType::Cube)
            .with_rotation(Vector3::new(0.0, FRAC_PI_2, 0.0))
            .with_scale(Vector3::new(2.0, 1.0, 1.0))
            .with_position(Vector3::new(0.0, 0.0, 10.0));
        let opts = GeometryOptions {
            rotation: RotationMode::EulerXyz,
            ..Default::default()
        };
        let v = to_dvec3(generate(&obj, &opts).vertices[1]);
        // scaled (1, -0.5, 0.5); +90° about Y maps x → -z and z → x
        assert!((v - DVec3::new(0.5, -0.5, 9.0)).length() < 1e-9, "{v:?}");
    }

    #[test]
    fn test_missing_generators_are_empty() {
        for kind in [PrimitiveType::Plane, PrimitiveType::Cone, PrimitiveType::Torus] {
            let geo = generate(&SceneObject::primitive(kind), &closed());
            assert!(geo.vertices.is_empty());
            assert!(geo.faces.is_empty());
        }
    }
}
