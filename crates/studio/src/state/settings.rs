//! Editor settings

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::export::ExportOptions;
use crate::geometry::{GeometryOptions, RotationMode, DEFAULT_SEGMENTS};

/// Grid used when snapping transforms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Grid cell size in scene units
    pub size: f64,
    /// Snap moved objects to the grid
    pub snap: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: 1.0,
            snap: true,
        }
    }
}

/// OBJ export behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Tessellation of sphere and cylinder
    pub segments: u32,
    pub rotation: RotationMode,
    /// Emit sphere/cylinder faces
    pub close_surfaces: bool,
    /// Write a `# Generated on` line
    pub timestamp: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            rotation: RotationMode::Ignore,
            close_surfaces: false,
            timestamp: true,
        }
    }
}

impl ExportSettings {
    pub fn geometry_options(&self) -> GeometryOptions {
        GeometryOptions {
            segments: self.segments,
            rotation: self.rotation,
            close_surfaces: self.close_surfaces,
        }
    }

    /// Options for an export happening now
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            geometry: self.geometry_options(),
            generated_at: self.timestamp.then(chrono::Utc::now),
        }
    }
}

/// Limits applied to interactive transform edits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformSettings {
    /// Smallest scale component an edit may set
    pub min_scale: f64,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self { min_scale: 0.1 }
    }
}

/// All editor settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioSettings {
    pub grid: GridSettings,
    pub export: ExportSettings,
    pub transform: TransformSettings,
}

impl StudioSettings {
    fn config_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "sculpt", "sculpt-studio")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the user config dir, or return default if not found
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable settings at {}: {e}", path.display());
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Save settings to the user config dir
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = StudioSettings::default();
        assert_eq!(s.grid.size, 1.0);
        assert!(s.grid.snap);
        assert_eq!(s.export.segments, 16);
        assert_eq!(s.export.rotation, RotationMode::Ignore);
        assert!(!s.export.close_surfaces);
        assert_eq!(s.transform.min_scale, 0.1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: StudioSettings =
            serde_json::from_str(r#"{"export": {"segments": 8, "rotation": "euler_xyz"}}"#)
                .unwrap();
        assert_eq!(s.export.segments, 8);
        assert_eq!(s.export.rotation, RotationMode::EulerXyz);
        assert!(s.export.timestamp);
        assert_eq!(s.grid, GridSettings::default());
    }

    #[test]
    fn test_export_options_timestamp_toggle() {
        let mut s = ExportSettings::default();
        assert!(s.export_options().generated_at.is_some());
        s.timestamp = false;
        assert!(s.export_options().generated_at.is_none());
        assert_eq!(s.geometry_options(), GeometryOptions::default());
    }

    #[test]
    fn test_save_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut s = StudioSettings::default();
        s.grid.size = 0.25;
        s.save_to(&path).unwrap();
        assert_eq!(StudioSettings::load_from(&path).unwrap(), s);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(StudioSettings::load_from(&dir.path().join("none.json")).is_err());
    }
}
