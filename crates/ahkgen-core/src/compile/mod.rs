// Ahkgen Script Compilation
// Deterministic macro-list to AutoHotkey-script transformation

pub mod engine;
pub mod fragments;

pub use engine::{compile, CompiledScript, COLLECTION_FILE_NAME, SCRIPT_EXTENSION};
