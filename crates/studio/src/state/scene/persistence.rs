//! Scene document save/load

use std::collections::HashSet;
use std::path::Path;

use shared::{Scene, SceneId};

use super::SceneState;
use crate::error::Result;

impl SceneState {
    /// Snapshot the collection as a scene document
    pub fn to_scene(&self, id: SceneId, name: &str) -> Scene {
        let mut scene = Scene::new(id, name);
        scene.objects = self.objects.clone();
        scene
    }

    /// Replace the collection with the scene's objects and clear the selection.
    ///
    /// Objects keep their stored ids; a zero or repeated id is replaced by the
    /// next free sequential id so the collection stays uniquely keyed.
    pub fn load_scene(&mut self, scene: Scene) {
        self.objects.clear();
        self.selection.clear();

        let mut seen = HashSet::new();
        let mut pending = Vec::new();
        for (index, object) in scene.objects.into_iter().enumerate() {
            if object.id != 0 && seen.insert(object.id) {
                self.objects.push(object);
            } else {
                pending.push((index, object));
            }
        }
        for (index, mut object) in pending {
            let id = self.next_id();
            tracing::warn!("Reassigning id {} of {:?} to {}", object.id, object.name, id);
            object.id = id;
            self.objects.insert(index, object);
        }

        self.version += 1;
        tracing::info!("Loaded scene {:?} with {} objects", scene.name, self.objects.len());
    }

    /// Write the collection as a pretty-printed scene document
    pub fn save_scene_to_file(&self, path: &Path, id: SceneId, name: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.to_scene(id, name))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a scene document into a fresh collection
    pub fn load_scene_from_file(path: &Path) -> Result<(Self, Scene)> {
        let json = std::fs::read_to_string(path)?;
        let scene: Scene = serde_json::from_str(&json)?;
        let mut state = Self::default();
        state.load_scene(scene.clone());
        Ok((state, scene))
    }
}
