//! JSON command protocol for driving the editor from scripts and tests.

use serde::{Deserialize, Serialize};
use shared::{ObjectId, ObjectPatch, PrimitiveType, SceneId, SceneObject, Vector3};

use crate::error::{Result, StudioError};
use crate::export::format_file_size;
use crate::keyboard::{handle_key, Key, KeyEvent};
use crate::state::AppState;
use crate::validation::ObjDocument;

/// A command the editor can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Add a primitive, optionally renamed and placed
    AddPrimitive {
        primitive: PrimitiveType,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        position: Option<Vector3>,
    },
    /// Merge a partial update into an object
    Update {
        id: ObjectId,
        #[serde(default)]
        patch: ObjectPatch,
    },
    Delete {
        id: ObjectId,
    },
    Duplicate {
        id: ObjectId,
    },
    Select {
        id: ObjectId,
    },
    ClearSelection,
    /// Replay a key press through the shortcut table
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        input_focused: bool,
    },
    /// Remove every object.
    Clear,
    /// List all objects.
    Inspect,
    /// Bounds of the whole scene, or of the selection
    BoundingBox {
        #[serde(default)]
        selection: bool,
    },
    /// Export the scene as OBJ text using the current settings.
    ExportObj,
    /// Export the scene document as JSON.
    ExportScene {
        #[serde(default = "default_scene_id")]
        id: SceneId,
        #[serde(default = "default_scene_name")]
        name: String,
    },
}

fn default_scene_id() -> SceneId {
    1
}

fn default_scene_name() -> String {
    "Untitled Scene".to_string()
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

impl From<Result<CommandResponse>> for CommandResponse {
    fn from(result: Result<CommandResponse>) -> Self {
        result.unwrap_or_else(|e| {
            tracing::warn!("Command failed: {e}");
            CommandResponse::err(e.to_string())
        })
    }
}

fn object_summary(object: &SceneObject) -> serde_json::Value {
    serde_json::json!({
        "id": object.id,
        "name": object.name,
        "type": object.kind,
        "position": object.position,
        "visible": object.visible,
        "locked": object.locked,
    })
}

/// Execute a single command on the editor state.
pub fn execute_command(state: &mut AppState, cmd: EditorCommand) -> CommandResponse {
    run(state, cmd).into()
}

fn run(state: &mut AppState, cmd: EditorCommand) -> Result<CommandResponse> {
    let scene = &mut state.scene;
    let response = match cmd {
        EditorCommand::AddPrimitive {
            primitive,
            name,
            position,
        } => {
            let mut object = SceneObject::primitive(primitive);
            if let Some(name) = name {
                object.name = name;
            }
            if let Some(position) = position {
                object.position = position;
            }
            let id = scene.add(object);
            tracing::info!("Added {} to scene", primitive.default_name().to_lowercase());
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        EditorCommand::Update { id, patch } => {
            scene.update(id, patch)?;
            let object = scene.get(id).ok_or(StudioError::NotFound(id))?;
            CommandResponse::ok_with_data(object_summary(object))
        }

        EditorCommand::Delete { id } => {
            let removed = scene.delete(id)?;
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed.id }))
        }

        EditorCommand::Duplicate { id } => {
            let copy = scene.duplicate(id)?;
            CommandResponse::ok_with_data(serde_json::json!({ "id": copy }))
        }

        EditorCommand::Select { id } => {
            scene.select(id)?;
            CommandResponse::ok_with_data(serde_json::json!({ "selected": id }))
        }

        EditorCommand::ClearSelection => {
            scene.clear_selection();
            CommandResponse::ok()
        }

        EditorCommand::Key {
            key,
            ctrl,
            input_focused,
        } => {
            let event = KeyEvent {
                key: Key::from_name(&key),
                ctrl,
                input_focused,
            };
            let outcome = handle_key(scene, &event);
            CommandResponse::ok_with_data(serde_json::json!({ "outcome": outcome }))
        }

        EditorCommand::Clear => {
            scene.clear();
            CommandResponse::ok()
        }

        EditorCommand::Inspect => {
            let objects: Vec<serde_json::Value> =
                scene.objects().iter().map(object_summary).collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "object_count": objects.len(),
                "selected": scene.selection().primary(),
                "objects": objects,
            }))
        }

        EditorCommand::BoundingBox { selection } => {
            let bounds = if selection {
                scene.selection_bounds()
            } else {
                scene.bounding_box()
            };
            CommandResponse::ok_with_data(serde_json::json!({
                "min": bounds.min,
                "max": bounds.max,
                "center": bounds.center,
                "size": bounds.size,
            }))
        }

        EditorCommand::ExportObj => {
            let obj = state.export_obj();
            let doc = ObjDocument::parse(&obj)?;
            CommandResponse::ok_with_data(serde_json::json!({
                "vertex_count": doc.vertex_count(),
                "face_count": doc.face_count(),
                "size": format_file_size(obj.len() as u64),
                "obj": obj,
            }))
        }

        EditorCommand::ExportScene { id, name } => {
            let json = serde_json::to_string_pretty(&scene.to_scene(id, &name))?;
            CommandResponse::ok_with_data(serde_json::json!({ "scene_json": json }))
        }
    };
    Ok(response)
}

/// Parse and execute a single JSON command string.
pub fn execute_json(state: &mut AppState, json: &str) -> Result<CommandResponse> {
    let cmd: EditorCommand = serde_json::from_str(json)?;
    Ok(execute_command(state, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(state: &mut AppState, json: &str) -> Result<Vec<CommandResponse>> {
    let cmds: Vec<EditorCommand> = serde_json::from_str(json)?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(state, cmd))
        .collect())
}
