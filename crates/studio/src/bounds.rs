//! Axis-aligned bounds of scene objects and camera framing built on them.
//!
//! Each object occupies `position ± scale / 2` on every axis, i.e. the box of
//! a unit primitive centred on its origin after scaling. Rotation is ignored.

use glam::DVec3;
use shared::{SceneObject, Vector3};

use crate::math::{from_dvec3, to_dvec3};

/// Axis-aligned bounding box with derived centre and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
    pub center: Vector3,
    pub size: Vector3,
}

impl BoundingBox {
    /// All-zero box, returned when there is nothing to bound
    pub const EMPTY: Self = Self {
        min: Vector3::ZERO,
        max: Vector3::ZERO,
        center: Vector3::ZERO,
        size: Vector3::ZERO,
    };

    fn from_extent(min: DVec3, max: DVec3) -> Self {
        Self {
            min: from_dvec3(min),
            max: from_dvec3(max),
            center: from_dvec3((min + max) * 0.5),
            size: from_dvec3(max - min),
        }
    }

    /// Bounds of `objects` in iteration order; [`BoundingBox::EMPTY`] when there are none
    pub fn from_objects<'a, I>(objects: I) -> Self
    where
        I: IntoIterator<Item = &'a SceneObject>,
    {
        let (min, max, count) = objects.into_iter().fold(
            (DVec3::INFINITY, DVec3::NEG_INFINITY, 0usize),
            |(min, max, count), obj| {
                let (lo, hi) = object_extent(obj);
                (min.min(lo), max.max(hi), count + 1)
            },
        );

        if count == 0 {
            return Self::EMPTY;
        }
        Self::from_extent(min, max)
    }

    /// Largest edge of the box
    pub fn max_dimension(&self) -> f64 {
        self.size.x.max(self.size.y).max(self.size.z)
    }
}

/// `(min, max)` corners of one object's box
fn object_extent(obj: &SceneObject) -> (DVec3, DVec3) {
    let position = to_dvec3(obj.position);
    let half = to_dvec3(obj.scale) * 0.5;
    let (a, b) = (position - half, position + half);
    // Negative scale flips the corners
    (a.min(b), a.max(b))
}

/// Where a camera should sit and what it should look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFraming {
    pub eye: Vector3,
    pub target: Vector3,
}

/// Eye offset used when focusing a single object
pub const FOCUS_OFFSET: f64 = 5.0;

/// Frame every object: look at the bounds centre from `2 × largest edge` away
/// along each axis. `None` for an empty scene.
pub fn frame_all<'a, I>(objects: I) -> Option<CameraFraming>
where
    I: IntoIterator<Item = &'a SceneObject>,
{
    let mut iter = objects.into_iter().peekable();
    iter.peek()?;

    let bounds = BoundingBox::from_objects(iter);
    let distance = bounds.max_dimension() * 2.0;
    let target = to_dvec3(bounds.center);
    Some(CameraFraming {
        eye: from_dvec3(target + DVec3::splat(distance)),
        target: bounds.center,
    })
}

/// Look at one object from a fixed diagonal offset
pub fn focus_object(object: &SceneObject) -> CameraFraming {
    let target = to_dvec3(object.position);
    CameraFraming {
        eye: from_dvec3(target + DVec3::splat(FOCUS_OFFSET)),
        target: object.position,
    }
}
