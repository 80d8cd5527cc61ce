// Library crate: scene model operations, geometry and OBJ export.
// The binary only wires these to the command line.

pub mod bounds;
pub mod command;
pub mod error;
pub mod export;
pub mod fixtures;
pub mod geometry;
pub mod keyboard;
pub mod math;
pub mod state;
pub mod validation;

pub use error::{Result, StudioError};
