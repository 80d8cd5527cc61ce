//! OBJ text export.
//!
//! Layout:
//! ```text
//! # Exported from Sculpt Studio
//! # Generated on 2024-05-01T12:00:00.000Z
//!
//! # Object 1: My Cube
//! o My_Cube
//! v -0.500000 -0.500000 0.500000
//! ...
//! f 1 2 3 4
//! ```
//! Face indices are 1-based and global: every object's faces point into the
//! vertex list accumulated over all objects written before it.

use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use shared::{SceneObject, Vector3};

use crate::geometry::{self, GeometryOptions};

pub const GENERATOR: &str = "Sculpt Studio";

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub geometry: GeometryOptions,
    /// Written as a `# Generated on` header line when set
    pub generated_at: Option<DateTime<Utc>>,
}

/// Target file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Obj,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Obj => "obj",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Obj => "text/plain",
        }
    }
}

/// Serialize `objects` in order into one OBJ document
pub fn export_obj(objects: &[SceneObject], options: &ExportOptions) -> String {
    let mut out = String::new();
    writeln!(out, "# Exported from {GENERATOR}").ok();
    if let Some(ts) = options.generated_at {
        writeln!(out, "# Generated on {}", ts.to_rfc3339_opts(SecondsFormat::Millis, true)).ok();
    }
    out.push('\n');

    // First vertex of the next object, 1-based
    let mut vertex_offset: usize = 1;

    for (index, object) in objects.iter().enumerate() {
        let geo = geometry::generate(object, &options.geometry);

        writeln!(out, "# Object {}: {}", index + 1, comment_text(&object.name)).ok();
        writeln!(out, "o {}", group_name(&object.name)).ok();

        for v in &geo.vertices {
            write_vertex(&mut out, *v);
        }
        for face in &geo.faces {
            out.push('f');
            for &i in face {
                write!(out, " {}", vertex_offset + i as usize).ok();
            }
            out.push('\n');
        }

        tracing::debug!(
            object = object.id,
            vertices = geo.vertices.len(),
            faces = geo.faces.len(),
            "exported object"
        );
        vertex_offset += geo.vertices.len();
        out.push('\n');
    }

    out
}

fn write_vertex(out: &mut String, v: Vector3) {
    // Adding 0.0 turns -0.0 into 0.0
    writeln!(out, "v {:.6} {:.6} {:.6}", v.x + 0.0, v.y + 0.0, v.z + 0.0).ok();
}

/// Object name as single-line comment text: control characters become spaces
fn comment_text(name: &str) -> String {
    name.chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}

/// Object name usable as an `o` group: each whitespace run becomes `_`
pub fn group_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Download name for an exported scene, e.g. `My Scene` → `my_scene.obj`
pub fn export_filename(scene_name: &str, format: ExportFormat) -> String {
    format!("{}.{}", group_name(&scene_name.to_lowercase()), format.extension())
}

/// Human-readable byte count (base 1024, up to GB)
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let text = format!("{:.2}", crate::math::round_to_places(value, 2));
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text} {}", UNITS[unit])
}
