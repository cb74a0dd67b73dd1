// Ahkgen Config Parser - TOML with Serde
// Parses macro definitions from TOML files

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::action::ActionKind;
use crate::hotkey::{Macro, MacroError};
use crate::key::KeyToken;

/// Configuration parser errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("action '{kind}' is missing required field '{field}'")]
    MissingField { kind: String, field: String },

    #[error("invalid macro '{name}': {source}")]
    InvalidMacro { name: String, source: MacroError },
}

/// Main configuration structure (root TOML table)
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    #[serde(default)]
    macros: Vec<MacroTomlEntry>,
}

/// One `[[macros]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct MacroTomlEntry {
    /// Display name, also the suggested file stem for single downloads
    name: String,

    /// Captured key tokens in display form, e.g. ["Ctrl", "T (KeyT)"].
    /// Optional for text replacements.
    #[serde(default)]
    keys: Vec<String>,

    action: ActionToml,
}

/// Action payload as written in TOML. The `type` string is matched openly
/// and extra fields are tolerated: kinds outside the known set still load,
/// payload and all, so one unrecognized record never sinks the rest of the
/// file.
#[derive(Debug, Clone, Deserialize)]
struct ActionToml {
    #[serde(rename = "type")]
    kind: String,

    /// Path or URL for openApp / openWebsite
    target: Option<String>,

    /// Typed trigger for replaceText
    trigger: Option<String>,

    /// Replacement text for replaceText
    replacement: Option<String>,

    /// Target list for workspace / openMultipleWebsites
    targets: Option<Vec<String>>,
}

impl ActionToml {
    fn into_action(self, macro_name: &str) -> Result<ActionKind, ConfigError> {
        let kind = self.kind;
        let missing = |field: &str| ConfigError::MissingField {
            kind: kind.clone(),
            field: field.to_string(),
        };
        let invalid = |source: crate::action::ActionError| ConfigError::InvalidMacro {
            name: macro_name.to_string(),
            source: source.into(),
        };
        match kind.as_str() {
            "openApp" => Ok(ActionKind::OpenApp {
                target: self.target.ok_or_else(|| missing("target"))?,
            }),
            "openWebsite" => Ok(ActionKind::OpenWebsite {
                target: self.target.ok_or_else(|| missing("target"))?,
            }),
            "replaceText" => {
                let trigger = self.trigger.ok_or_else(|| missing("trigger"))?;
                let replacement = self.replacement.ok_or_else(|| missing("replacement"))?;
                ActionKind::replace_text(&trigger, &replacement).map_err(invalid)
            }
            "volumeUp" => Ok(ActionKind::VolumeUp),
            "volumeDown" => Ok(ActionKind::VolumeDown),
            "workspace" => {
                let targets = self.targets.ok_or_else(|| missing("targets"))?;
                ActionKind::workspace(targets).map_err(invalid)
            }
            "openMultipleWebsites" => {
                let targets = self.targets.ok_or_else(|| missing("targets"))?;
                ActionKind::open_multiple_websites(targets).map_err(invalid)
            }
            "quickNote" => Ok(ActionKind::QuickNote),
            "startTimer" => Ok(ActionKind::StartTimer),
            "clipboardHistory" => Ok(ActionKind::ClipboardHistory),
            "aiMenu" => Ok(ActionKind::AiMenu),
            _ => {
                log::warn!("unknown action type '{kind}', will compile as a no-op block");
                Ok(ActionKind::Unknown { kind })
            }
        }
    }
}

/// A parsed, validated macro file
#[derive(Debug, Clone, Default)]
pub struct Config {
    macros: Vec<Macro>,
}

impl Config {
    /// Load and validate a macro file from disk
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate macro definitions from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: ConfigToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;
        let mut macros = Vec::with_capacity(parsed.macros.len());
        for entry in parsed.macros {
            let name = entry.name.clone();
            let keys = entry.keys.iter().map(|s| KeyToken::parse(s));
            let action = entry.action.into_action(&entry.name)?;
            let m = Macro::new(&entry.name, keys, action)
                .map_err(|source| ConfigError::InvalidMacro { name, source })?;
            macros.push(m);
        }
        log::debug!("loaded {} macro(s) from config", macros.len());
        Ok(Self { macros })
    }

    pub fn macros(&self) -> &[Macro] {
        &self.macros
    }

    pub fn into_macros(self) -> Vec<Macro> {
        self.macros
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    pub fn len(&self) -> usize {
        self.macros.len()
    }
}
