//! Object CRUD operations

use shared::{ObjectId, ObjectPatch, PrimitiveType, SceneObject};

use super::SceneState;
use crate::error::{Result, StudioError};

/// Offset applied to a duplicate along X
pub const DUPLICATE_OFFSET_X: f64 = 2.0;

impl SceneState {
    /// Append an object under the next sequential id and select it.
    /// Any id already set on `object` is replaced.
    pub fn add(&mut self, mut object: SceneObject) -> ObjectId {
        let id = self.next_id();
        object.id = id;
        self.objects.push(object);
        self.selection.select(id);
        self.version += 1;
        id
    }

    /// Add a defaulted primitive and select it
    pub fn add_primitive(&mut self, kind: PrimitiveType) -> ObjectId {
        let id = self.add(SceneObject::primitive(kind));
        tracing::info!("Added {} to scene", kind.default_name().to_lowercase());
        id
    }

    /// Merge `patch` into the object. Selection is unchanged.
    pub fn update(&mut self, id: ObjectId, patch: ObjectPatch) -> Result<()> {
        patch.apply_to(self.require_mut(id)?);
        self.version += 1;
        Ok(())
    }

    /// Remove the object, clearing the selection if it pointed at it
    pub fn delete(&mut self, id: ObjectId) -> Result<SceneObject> {
        let index = self.index_of(id).ok_or(StudioError::NotFound(id))?;
        let removed = self.objects.remove(index);
        self.selection.forget(id);
        self.version += 1;
        tracing::info!("Object deleted: {} ({})", removed.name, id);
        Ok(removed)
    }

    /// Clone the object as "<name> Copy", nudged along X, and select the clone
    pub fn duplicate(&mut self, id: ObjectId) -> Result<ObjectId> {
        let source = self.get(id).ok_or(StudioError::NotFound(id))?;
        let mut copy = source.clone();
        copy.name = format!("{} Copy", source.name);
        copy.position.x += DUPLICATE_OFFSET_X;

        let copy_id = self.add(copy);
        tracing::info!("Object duplicated: {} -> {}", id, copy_id);
        Ok(copy_id)
    }

    pub fn select(&mut self, id: ObjectId) -> Result<()> {
        if !self.contains(id) {
            return Err(StudioError::NotFound(id));
        }
        self.selection.select(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Remove every object
    pub fn clear(&mut self) {
        self.objects.clear();
        self.selection.clear();
        self.version += 1;
        tracing::info!("Scene cleared");
    }
}
