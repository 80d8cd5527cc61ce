//! Integration tests for the scene collection, keyboard dispatch and
//! scene/settings files.

use sculpt_studio_lib::bounds::frame_all;
use sculpt_studio_lib::fixtures::*;
use sculpt_studio_lib::keyboard::{handle_key, Key, KeyEvent, ShortcutOutcome};
use sculpt_studio_lib::state::{AppState, SceneState, StudioSettings};
use sculpt_studio_lib::StudioError;
use shared::{ObjectPatch, PrimitiveType, Vector3};

#[test]
fn test_sequential_ids_never_reuse_lower_gaps() {
    let mut scene = SceneState::default();
    let ids: Vec<_> = (0..3).map(|_| scene.add_primitive(PrimitiveType::Cube)).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    scene.delete(2).unwrap();
    assert_eq!(scene.add_primitive(PrimitiveType::Sphere), 4);

    let order: Vec<_> = scene.objects().iter().map(|o| o.id).collect();
    assert_eq!(order, vec![1, 3, 4]);
}

#[test]
fn test_duplicate_cube_copy() {
    let mut scene = state_with(vec![cube_at("Cube", [1.0, 0.0, 0.0])]);
    let copy = scene.duplicate(1).unwrap();
    let obj = scene.get(copy).unwrap();
    assert_eq!(obj.name, "Cube Copy");
    assert_eq!(obj.position, Vector3::new(3.0, 0.0, 0.0));
    assert_eq!(scene.selected().unwrap().id, copy);
}

#[test]
fn test_selection_state_machine() {
    let mut scene = two_cubes();
    assert_eq!(scene.selected().unwrap().name, "Cube B");

    // update keeps the selection and shows fresh content
    scene
        .update(
            2,
            ObjectPatch {
                name: Some("Renamed".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(scene.selected().unwrap().name, "Renamed");

    assert_eq!(
        handle_key(&mut scene, &KeyEvent::new(Key::Escape)),
        Some(ShortcutOutcome::SelectionCleared { id: 2 })
    );
    assert!(scene.selected().is_none());

    scene.select(1).unwrap();
    assert_eq!(
        handle_key(&mut scene, &KeyEvent::new(Key::Backspace)),
        Some(ShortcutOutcome::Deleted { id: 1 })
    );
    assert!(scene.selected().is_none());
    assert_eq!(scene.len(), 1);
}

#[test]
fn test_not_found_policy_is_uniform() {
    let mut scene = two_cubes();
    let before = scene.objects().to_vec();
    let version = scene.version();

    assert!(matches!(scene.update(7, ObjectPatch::default()), Err(StudioError::NotFound(7))));
    assert!(matches!(scene.delete(7), Err(StudioError::NotFound(7))));
    assert!(matches!(scene.duplicate(7), Err(StudioError::NotFound(7))));
    assert!(matches!(scene.select(7), Err(StudioError::NotFound(7))));
    assert!(matches!(scene.reset_transform(7), Err(StudioError::NotFound(7))));
    assert!(matches!(
        scene.translate(7, Vector3::ONE, None),
        Err(StudioError::NotFound(7))
    ));

    assert_eq!(scene.objects(), before.as_slice());
    assert_eq!(scene.version(), version);
}

#[test]
fn test_bounds_and_framing() {
    let scene = state_with(vec![
        scaled_cube("A", [0.0, 0.0, 0.0], [2.0, 2.0, 2.0]),
        cube_at("B", [4.0, 0.0, 0.0]),
    ]);
    let bounds = scene.bounding_box();
    assert_eq!(bounds.min, Vector3::new(-1.0, -1.0, -1.0));
    assert_eq!(bounds.max, Vector3::new(4.5, 1.0, 1.0));
    assert_eq!(bounds.size, Vector3::new(5.5, 2.0, 2.0));
    assert_eq!(bounds.center, Vector3::new(1.75, 0.0, 0.0));

    let framing = frame_all(scene.objects()).unwrap();
    assert_eq!(framing.target, bounds.center);
    assert_eq!(framing.eye, Vector3::new(12.75, 11.0, 11.0));
    assert!(frame_all(SceneState::default().objects()).is_none());
}

#[test]
fn test_scene_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenes").join("demo.json");

    let mut scene = two_cubes();
    scene.duplicate(1).unwrap();
    scene.save_scene_to_file(&path, 9, "My Demo").unwrap();

    let (loaded, doc) = SceneState::load_scene_from_file(&path).unwrap();
    assert_eq!(doc.id, 9);
    assert_eq!(doc.name, "My Demo");
    assert_eq!(loaded.objects(), scene.objects());
    assert!(loaded.selected().is_none());

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"layerId\": \"default\""));
    assert!(text.contains("\"createdAt\""));
    assert!(text.contains("\"type\": \"cube\""));
}

#[test]
fn test_load_scene_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = SceneState::load_scene_from_file(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(StudioError::Io(_))));
}

#[test]
fn test_load_scene_from_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        SceneState::load_scene_from_file(&path),
        Err(StudioError::Json(_))
    ));
}

#[test]
fn test_settings_drive_app_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut settings = StudioSettings::default();
    settings.grid.size = 0.5;
    settings.transform.min_scale = 0.25;
    settings.save_to(&path).unwrap();

    let mut state = AppState::new(StudioSettings::load_from(&path).unwrap());
    state.scene.add_primitive(PrimitiveType::Cube);
    let pos = state
        .move_selected(Vector3::new(0.8, 0.0, 0.0))
        .unwrap()
        .unwrap();
    assert_eq!(pos, Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(state.scene.limits().min_scale, 0.25);
}
