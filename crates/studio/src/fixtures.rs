//! Factory functions for creating test data.
//!
//! Provides helpers to construct `SceneObject`, `Scene` and populated
//! `SceneState` values used in tests and by scripted command runs.

use shared::*;

use crate::state::SceneState;

// ── Object factories ──────────────────────────────────────────────

/// Defaulted object of `kind` with id 0.
pub fn object(kind: PrimitiveType) -> SceneObject {
    SceneObject::primitive(kind)
}

/// Named object with an explicit id.
pub fn object_with_id(id: ObjectId, kind: PrimitiveType, name: &str) -> SceneObject {
    SceneObject {
        id,
        ..SceneObject::primitive(kind).with_name(name)
    }
}

/// Unit cube at the origin.
pub fn unit_cube() -> SceneObject {
    object(PrimitiveType::Cube)
}

/// Unit cube at a specific position.
pub fn cube_at(name: &str, pos: [f64; 3]) -> SceneObject {
    unit_cube().with_name(name).with_position(pos.into())
}

/// Cube with position and scale.
pub fn scaled_cube(name: &str, pos: [f64; 3], scale: [f64; 3]) -> SceneObject {
    cube_at(name, pos).with_scale(scale.into())
}

pub fn sphere_at(name: &str, pos: [f64; 3]) -> SceneObject {
    object(PrimitiveType::Sphere)
        .with_name(name)
        .with_position(pos.into())
}

pub fn cylinder_at(name: &str, pos: [f64; 3]) -> SceneObject {
    object(PrimitiveType::Cylinder)
        .with_name(name)
        .with_position(pos.into())
}

// ── Scene factories ───────────────────────────────────────────────

/// Scene document with the given objects, ids assigned 1..=n.
pub fn scene_with(name: &str, objects: Vec<SceneObject>) -> Scene {
    let mut scene = Scene::new(1, name);
    scene.objects = objects
        .into_iter()
        .zip(1..)
        .map(|(object, id)| SceneObject { id, ..object })
        .collect();
    scene
}

/// One of every primitive type, spaced along X.
pub fn all_primitives_scene() -> Scene {
    let objects = PrimitiveType::all()
        .iter()
        .zip(0..)
        .map(|(kind, i)| object(*kind).with_position(Vector3::new(f64::from(i) * 3.0, 0.0, 0.0)))
        .collect();
    scene_with("All Primitives", objects)
}

/// Collection populated through `add`, so ids and selection follow the usual rules.
pub fn state_with(objects: Vec<SceneObject>) -> SceneState {
    let mut state = SceneState::default();
    for object in objects {
        state.add(object);
    }
    state
}

/// Two unit cubes at x = 0 and x = 4.
pub fn two_cubes() -> SceneState {
    state_with(vec![cube_at("Cube A", [0.0, 0.0, 0.0]), cube_at("Cube B", [4.0, 0.0, 0.0])])
}
