//! OBJ document validation.
//!
//! [`ObjDocument`] reads back the subset of OBJ the exporter writes (comments,
//! `o`, `v`, `f`) and checks index integrity. Every face index must be a
//! 1-based vertex of the face's own group.

use crate::error::{Result, StudioError};

/// One `o` group
#[derive(Debug, Clone, PartialEq)]
pub struct ObjGroup {
    pub name: String,
    /// 0-based index of the group's first vertex in the document
    pub first_vertex: usize,
    pub vertex_count: usize,
    /// 1-based global indices, as written
    pub faces: Vec<Vec<u32>>,
}

impl ObjGroup {
    fn new(name: String, first_vertex: usize) -> Self {
        Self {
            name,
            first_vertex,
            vertex_count: 0,
            faces: Vec::new(),
        }
    }

    /// 1-based index range owned by this group
    pub fn index_range(&self) -> std::ops::RangeInclusive<u32> {
        let start = self.first_vertex as u32 + 1;
        start..=(start + self.vertex_count as u32).saturating_sub(1)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjDocument {
    pub vertices: Vec<[f64; 3]>,
    pub groups: Vec<ObjGroup>,
    pub comments: Vec<String>,
}

fn parse_error(line: usize, message: impl Into<String>) -> StudioError {
    StudioError::ObjParse {
        line,
        message: message.into(),
    }
}

impl ObjDocument {
    pub fn parse(text: &str) -> Result<Self> {
        let mut doc = ObjDocument::default();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(comment) = line.strip_prefix('#') {
                doc.comments.push(comment.trim().to_string());
                continue;
            }

            let mut tokens = line.split_whitespace();
            let Some(record) = tokens.next() else {
                continue;
            };
            match record {
                "o" => {
                    let name = tokens.collect::<Vec<_>>().join(" ");
                    doc.groups.push(ObjGroup::new(name, doc.vertices.len()));
                }
                "v" => {
                    let coords = tokens
                        .map(|t| t.parse::<f64>())
                        .collect::<std::result::Result<Vec<_>, _>>()
                        .map_err(|e| parse_error(line_no, format!("bad coordinate: {e}")))?;
                    let &[x, y, z] = coords.as_slice() else {
                        return Err(parse_error(
                            line_no,
                            format!("expected 3 coordinates, got {}", coords.len()),
                        ));
                    };
                    doc.vertices.push([x, y, z]);
                    doc.current_group().vertex_count += 1;
                }
                "f" => {
                    let indices = tokens
                        .map(|t| t.split('/').next().unwrap_or(t).parse::<u32>())
                        .collect::<std::result::Result<Vec<_>, _>>()
                        .map_err(|e| parse_error(line_no, format!("bad index: {e}")))?;
                    if indices.len() < 3 {
                        return Err(parse_error(
                            line_no,
                            format!("face needs at least 3 indices, got {}", indices.len()),
                        ));
                    }
                    doc.current_group().faces.push(indices);
                }
                other => return Err(parse_error(line_no, format!("unsupported record '{other}'"))),
            }
        }

        Ok(doc)
    }

    /// Group receiving records that appear before any `o` line
    fn current_group(&mut self) -> &mut ObjGroup {
        if self.groups.is_empty() {
            self.groups.push(ObjGroup::new(String::new(), 0));
        }
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.groups.iter().map(|g| g.faces.len()).sum()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn group(&self, name: &str) -> Option<&ObjGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Every face index lies in `1..=vertex_count`
    pub fn are_indices_in_range(&self) -> bool {
        let max = self.vertex_count() as u32;
        self.groups
            .iter()
            .flat_map(|g| g.faces.iter().flatten())
            .all(|&i| i >= 1 && i <= max)
    }

    /// Run all checks, returning one message per problem
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let max = self.vertex_count() as u32;

        for group in &self.groups {
            let own = group.index_range();
            for (n, face) in group.faces.iter().enumerate() {
                for &i in face {
                    if i == 0 || i > max {
                        errors.push(format!(
                            "group '{}' face {n}: index {i} outside 1..={max}",
                            group.name
                        ));
                    } else if !own.contains(&i) {
                        errors.push(format!(
                            "group '{}' face {n}: index {i} belongs to another group",
                            group.name
                        ));
                    }
                }
            }
        }

        errors
    }
}
