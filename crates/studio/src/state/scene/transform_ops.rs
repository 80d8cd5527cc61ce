//! Transform edit operations

use serde::{Deserialize, Serialize};
use shared::{ObjectId, Transform, Vector3};

use super::SceneState;
use crate::error::{Result, StudioError};
use crate::math::{add, snap_vector};

/// Which transform vector a properties-panel edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformProperty {
    Position,
    Rotation,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn component_mut(self, v: &mut Vector3) -> &mut f64 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
            Axis::Z => &mut v.z,
        }
    }
}

impl SceneState {
    /// Position and rotation to zero, scale to one
    pub fn reset_transform(&mut self, id: ObjectId) -> Result<()> {
        let object = self.require_mut(id)?;
        object.set_transform(Transform::identity());
        self.version += 1;
        Ok(())
    }

    /// Set one component of position, rotation or scale.
    /// Scale components are raised to `min_scale`; returns the stored value.
    pub fn set_transform_axis(
        &mut self,
        id: ObjectId,
        property: TransformProperty,
        axis: Axis,
        value: f64,
    ) -> Result<f64> {
        let min_scale = self.limits.min_scale;
        let object = self.require_mut(id)?;

        let (target, value) = match property {
            TransformProperty::Position => (&mut object.position, value),
            TransformProperty::Rotation => (&mut object.rotation, value),
            TransformProperty::Scale => (&mut object.scale, value.max(min_scale)),
        };
        *axis.component_mut(target) = value;
        self.version += 1;
        Ok(value)
    }

    /// Move an object by `delta`, snapping the result to `snap` when given.
    /// Locked objects are refused.
    pub fn translate(&mut self, id: ObjectId, delta: Vector3, snap: Option<f64>) -> Result<Vector3> {
        let object = self.require_mut(id)?;
        if object.locked {
            tracing::warn!("Refusing to move locked object {}", id);
            return Err(StudioError::Locked(id));
        }

        let moved = add(object.position, delta);
        let position = match snap {
            Some(grid) => snap_vector(moved, grid),
            None => moved,
        };
        object.position = position;
        self.version += 1;
        Ok(position)
    }
}
