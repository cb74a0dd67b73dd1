// Ahkgen Core Library
// Macro model, key-chord encoding, and AutoHotkey script generation

pub mod action;
pub mod capture;
pub mod compile;
pub mod config;
pub mod encode;
pub mod hotkey;
pub mod key;
pub mod modifier;

pub use action::{ActionError, ActionKind};
pub use capture::{accumulate, normalize, RawKeyEvent};
pub use compile::{compile, CompiledScript, COLLECTION_FILE_NAME, SCRIPT_EXTENSION};
pub use config::{Config, ConfigError};
pub use encode::encode_for_target;
pub use hotkey::{Macro, MacroError};
pub use key::KeyToken;
pub use modifier::Modifier;
