//! Document subsystem: YAML file I/O and the loaded-document state.
//!
//! The document collaborator is an opaque bidirectional mapping between
//! YAML text and the generic tree model; the engine core only sees trees.

mod io;
mod source;

pub use io::{load_file, save_file, to_yaml_string};
pub use source::DocumentSource;
