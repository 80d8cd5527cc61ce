//! Data model shared by the editor, the exporter and scene documents.

mod material;
mod vector;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use material::{Material, MaterialPreset};
pub use vector::Vector3;

/// Identifier of an object within one scene collection
pub type ObjectId = u64;

/// Identifier of a stored scene
pub type SceneId = u64;

/// Primitive solid an object is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    Cube,
    Sphere,
    Cylinder,
    Plane,
    Cone,
    Torus,
}

impl PrimitiveType {
    pub fn all() -> &'static [PrimitiveType] {
        &[
            PrimitiveType::Cube,
            PrimitiveType::Sphere,
            PrimitiveType::Cylinder,
            PrimitiveType::Plane,
            PrimitiveType::Cone,
            PrimitiveType::Torus,
        ]
    }

    /// Display name given to freshly created objects
    pub fn default_name(&self) -> &'static str {
        match self {
            PrimitiveType::Cube => "Cube",
            PrimitiveType::Sphere => "Sphere",
            PrimitiveType::Cylinder => "Cylinder",
            PrimitiveType::Plane => "Plane",
            PrimitiveType::Cone => "Cone",
            PrimitiveType::Torus => "Torus",
        }
    }

    pub fn default_scale(&self) -> Vector3 {
        match self {
            PrimitiveType::Plane => Vector3::new(2.0, 2.0, 1.0),
            _ => Vector3::ONE,
        }
    }
}

/// Object placement: scale, then rotate (Euler, radians), then translate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vector3,
    pub rotation: Vector3,
    pub scale: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            scale: Vector3::ONE,
        }
    }
}

fn default_layer() -> String {
    "default".to_string()
}

fn default_true() -> bool {
    true
}

/// One placed primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObject {
    /// Assigned by the scene collection on insertion
    #[serde(default)]
    pub id: ObjectId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PrimitiveType,
    pub position: Vector3,
    pub rotation: Vector3,
    pub scale: Vector3,
    #[serde(default)]
    pub material: Material,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    /// Reserved for layer grouping; always "default" for now
    #[serde(default = "default_layer")]
    pub layer_id: String,
}

impl SceneObject {
    /// Defaulted object for a primitive type (id 0 until added to a scene)
    pub fn primitive(kind: PrimitiveType) -> Self {
        Self {
            id: 0,
            name: kind.default_name().to_string(),
            kind,
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            scale: kind.default_scale(),
            material: Material::default(),
            visible: true,
            locked: false,
            layer_id: default_layer(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    pub fn with_scale(mut self, scale: Vector3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: Vector3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.position = transform.position;
        self.rotation = transform.rotation;
        self.scale = transform.scale;
    }
}

/// Partial update of a scene object. Identity and primitive type are fixed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vector3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vector3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vector3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

impl ObjectPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the set fields into `object`
    pub fn apply_to(self, object: &mut SceneObject) {
        if let Some(name) = self.name {
            object.name = name;
        }
        if let Some(position) = self.position {
            object.position = position;
        }
        if let Some(rotation) = self.rotation {
            object.rotation = rotation;
        }
        if let Some(scale) = self.scale {
            object.scale = scale;
        }
        if let Some(material) = self.material {
            object.material = material.clamped();
        }
        if let Some(visible) = self.visible {
            object.visible = visible;
        }
        if let Some(locked) = self.locked {
            object.locked = locked;
        }
    }
}

/// Stored scene document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: SceneId,
    pub name: String,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Scene {
    pub fn new(id: SceneId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            objects: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the document as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
