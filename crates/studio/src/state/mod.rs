pub mod scene;
pub mod selection;
pub mod settings;
pub mod tools;

pub use scene::{Axis, SceneState, TransformProperty};
pub use selection::SelectionState;
pub use settings::{ExportSettings, GridSettings, StudioSettings, TransformSettings};
pub use tools::{Tool, ToolState, TransformMode};

use shared::{ObjectId, Vector3};

use crate::error::Result;
use crate::export::{export_obj, ExportOptions};

/// Combined editor state
#[derive(Debug, Clone)]
pub struct AppState {
    pub scene: SceneState,
    pub tools: ToolState,
    pub settings: StudioSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StudioSettings::default())
    }
}

impl AppState {
    pub fn new(settings: StudioSettings) -> Self {
        Self {
            scene: SceneState::new(settings.transform.clone()),
            tools: ToolState::from_grid(&settings.grid),
            settings,
        }
    }

    /// State built from the user's saved settings
    pub fn load() -> Self {
        Self::new(StudioSettings::load())
    }

    /// Move the selected object with the active tool's grid snapping.
    /// Returns `None` when nothing is selected.
    pub fn move_selected(&mut self, delta: Vector3) -> Option<Result<Vector3>> {
        let id = self.scene.selection().primary()?;
        Some(self.scene.translate(id, delta, self.tools.snap()))
    }

    /// Selected object id, if any
    pub fn selected_id(&self) -> Option<ObjectId> {
        self.scene.selected().map(|o| o.id)
    }

    pub fn export_options(&self) -> ExportOptions {
        self.settings.export.export_options()
    }

    /// Export every object with the current settings
    pub fn export_obj(&self) -> String {
        export_obj(self.scene.objects(), &self.export_options())
    }
}
