//! Error types with diagnostic codes using miette
//!
//! Every error here is a local, recoverable condition handed back to the
//! caller. Malformed picture records are not errors at all; they are skipped.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Registry Errors
// ============================================================================

/// Errors raised when looking up shape types by name
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown shape type: {name}")]
    #[diagnostic(code(sketchr::registry::unknown_shape_type))]
    UnknownShapeType {
        name: String,
        #[help]
        known: Option<String>,
    },
}

// ============================================================================
// Shape Errors
// ============================================================================

/// Errors raised by shape parameter assignment
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("{shape} requires parameter `{parameter}`")]
    #[diagnostic(
        code(sketchr::shape::missing_parameter),
        help("ask the registry for the shape's metadata to list its parameters")
    )]
    MissingParameter {
        shape: &'static str,
        parameter: &'static str,
    },
}

// ============================================================================
// Scene Errors
// ============================================================================

/// Errors raised by scene mutations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("a shape named `{name}` is already in the scene")]
    #[diagnostic(
        code(sketchr::scene::duplicate_name),
        help("remove the existing shape first or give the new one another name")
    )]
    DuplicateName { name: String },
}

// ============================================================================
// Picture Errors
// ============================================================================

/// Errors from the picture-format bridge. Only disk access can fail.
#[derive(Error, Diagnostic, Debug)]
pub enum PictureError {
    #[error("cannot access picture file {}", path.display())]
    #[diagnostic(code(sketchr::picture::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
