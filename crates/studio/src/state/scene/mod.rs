//! Scene state management
//!
//! The ordered object collection plus the selection cursor into it.

mod object_ops;
mod persistence;
mod transform_ops;

pub use transform_ops::{Axis, TransformProperty};

use shared::{ObjectId, SceneObject};

use crate::bounds::BoundingBox;
use crate::error::{Result, StudioError};
use crate::state::selection::SelectionState;
use crate::state::settings::TransformSettings;

/// Scene objects in insertion order and the current selection
#[derive(Debug, Clone)]
pub struct SceneState {
    pub(crate) objects: Vec<SceneObject>,
    pub(crate) selection: SelectionState,
    /// Limits for interactive transform edits
    pub(crate) limits: TransformSettings,
    /// Monotonically increasing version counter for cache invalidation
    pub(crate) version: u64,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(TransformSettings::default())
    }
}

impl SceneState {
    pub fn new(limits: TransformSettings) -> Self {
        Self {
            objects: Vec::new(),
            selection: SelectionState::default(),
            limits,
            version: 0,
        }
    }

    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Get an object by ID
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Get mutable object by ID. Handing out the borrow counts as a mutation.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        let object = self.objects.iter_mut().find(|o| o.id == id)?;
        self.version += 1;
        Some(object)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The selected object, looked up in the live collection
    pub fn selected(&self) -> Option<&SceneObject> {
        self.get(self.selection.primary()?)
    }

    pub fn limits(&self) -> &TransformSettings {
        &self.limits
    }

    /// Bounds of every object in the scene
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_objects(&self.objects)
    }

    /// Bounds of the selection; empty box when nothing is selected
    pub fn selection_bounds(&self) -> BoundingBox {
        BoundingBox::from_objects(self.selected())
    }

    /// `max(existing) + 1`, or 1 for an empty scene. Ids are never reused
    /// while a higher id is still present.
    pub(crate) fn next_id(&self) -> ObjectId {
        self.objects.iter().map(|o| o.id).max().map_or(1, |max| max + 1)
    }

    /// Mutable lookup for id-targeted edits; the caller bumps the version
    pub(crate) fn require_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject> {
        self.objects
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(StudioError::NotFound(id))
    }

    pub(crate) fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }
}
