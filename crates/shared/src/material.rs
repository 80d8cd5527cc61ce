use serde::{Deserialize, Serialize};

/// Surface parameters owned by a single scene object.
///
/// Values are copied per object: editing one object's material never
/// affects another, and duplicating an object copies its material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    /// `#RRGGBB`
    pub color: String,
    pub metalness: f64,
    pub roughness: f64,
    pub opacity: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            color: "#808080".to_string(),
            metalness: 0.0,
            roughness: 0.5,
            opacity: 1.0,
        }
    }
}

impl Material {
    /// Build a material from a library preset (colour only, other values default)
    pub fn from_preset(preset: MaterialPreset) -> Self {
        Self {
            id: preset.id().to_string(),
            color: preset.color().to_string(),
            ..Self::default()
        }
    }

    /// Renderers must blend anything below full opacity
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }

    /// Copy with metalness, roughness and opacity forced into [0, 1]
    pub fn clamped(mut self) -> Self {
        self.metalness = self.metalness.clamp(0.0, 1.0);
        self.roughness = self.roughness.clamp(0.0, 1.0);
        self.opacity = self.opacity.clamp(0.0, 1.0);
        self
    }
}

/// Entries of the sidebar material library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialPreset {
    Default,
    Metal,
    Plastic,
    Glass,
    Wood,
    Rubber,
}

impl MaterialPreset {
    pub fn all() -> &'static [MaterialPreset] {
        &[
            MaterialPreset::Default,
            MaterialPreset::Metal,
            MaterialPreset::Plastic,
            MaterialPreset::Glass,
            MaterialPreset::Wood,
            MaterialPreset::Rubber,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            MaterialPreset::Default => "default",
            MaterialPreset::Metal => "metal",
            MaterialPreset::Plastic => "plastic",
            MaterialPreset::Glass => "glass",
            MaterialPreset::Wood => "wood",
            MaterialPreset::Rubber => "rubber",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaterialPreset::Default => "Default",
            MaterialPreset::Metal => "Metal",
            MaterialPreset::Plastic => "Plastic",
            MaterialPreset::Glass => "Glass",
            MaterialPreset::Wood => "Wood",
            MaterialPreset::Rubber => "Rubber",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MaterialPreset::Default => "#808080",
            MaterialPreset::Metal => "#B8B8B8",
            MaterialPreset::Plastic => "#FF6B6B",
            MaterialPreset::Glass => "#4ECDC4",
            MaterialPreset::Wood => "#8B4513",
            MaterialPreset::Rubber => "#2C3E50",
        }
    }
}
