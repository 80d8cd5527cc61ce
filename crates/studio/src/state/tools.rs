use serde::{Deserialize, Serialize};

use crate::math::snap_to_grid;
use crate::state::settings::GridSettings;

/// Sidebar tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    #[default]
    Select,
    Move,
    Rotate,
    Scale,
}

/// Gizmo mode driven by the active tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

impl Tool {
    pub fn transform_mode(&self) -> TransformMode {
        match self {
            Tool::Select | Tool::Move => TransformMode::Translate,
            Tool::Rotate => TransformMode::Rotate,
            Tool::Scale => TransformMode::Scale,
        }
    }

    /// Single-key shortcut shown next to the tool
    pub fn shortcut(&self) -> char {
        match self {
            Tool::Select => 'V',
            Tool::Move => 'G',
            Tool::Rotate => 'R',
            Tool::Scale => 'S',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    tool: Tool,
    mode: TransformMode,
    pub snap_to_grid: bool,
    pub grid_size: f64,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::from_grid(&GridSettings::default())
    }
}

impl ToolState {
    pub fn from_grid(grid: &GridSettings) -> Self {
        Self {
            tool: Tool::Select,
            mode: TransformMode::Translate,
            snap_to_grid: grid.snap,
            grid_size: grid.size,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    /// Switch tool; the transform mode follows
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.mode = tool.transform_mode();
    }

    /// Grid size to snap with, if snapping is on
    pub fn snap(&self) -> Option<f64> {
        self.snap_to_grid.then_some(self.grid_size)
    }

    /// Snap a coordinate when snapping is enabled
    pub fn snap_value(&self, value: f64) -> f64 {
        match self.snap() {
            Some(grid) => snap_to_grid(value, grid),
            None => value,
        }
    }
}
